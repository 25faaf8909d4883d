//! Sum a file of frequency changes, one signed delta per line.

#[macro_use]
extern crate failure;
extern crate itertools;
#[macro_use]
extern crate log;
#[cfg(test)]
extern crate tempfile;

use failure::{Error, ResultExt};
use itertools::Itertools;
use std::convert::TryFrom;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::num::ParseIntError;
use std::path::Path;
use std::str::FromStr;

pub mod logging;
pub mod repeat;

/// The input is always read from this file, relative to the current directory.
pub const INPUT_PATH: &str = "input";

/// A single line that isn't a usable delta.
#[derive(Debug, Fail)]
pub enum DeltaError {
    #[fail(display = "bad delta {:?}: {}", text, cause)]
    Malformed {
        text: String,
        #[cause]
        cause: ParseIntError,
    },

    #[fail(display = "delta {:?} doesn't fit in an i64", text)]
    Overflow { text: String },
}

#[derive(Debug, Fail)]
pub enum InputError {
    #[fail(display = "input line {}: {}", line, cause)]
    Line {
        line: usize,
        #[cause]
        cause: DeltaError,
    },

    #[fail(display = "total doesn't fit in an i64")]
    Overflow,
}

/// Parse one delta line.
///
/// Surrounding whitespace is ignored. A leading `+` makes the delta positive;
/// any other first character makes it negative. Everything after the first
/// character must be a base-10 integer.
///
///     # extern crate chronal_calibration;
///     # use chronal_calibration::parse_delta;
///     assert_eq!(parse_delta("+3").unwrap(), 3);
///     assert_eq!(parse_delta("-7\n").unwrap(), -7);
///     assert!(parse_delta("+ 3").is_err());
pub fn parse_delta(text: &str) -> Result<i64, DeltaError> {
    let text = text.trim();
    let mut chars = text.chars();
    let positive = chars.next() == Some('+');

    // Wide enough that negating anything that fits in an i64 can't overflow.
    let magnitude = i128::from_str(chars.as_str()).map_err(|cause| DeltaError::Malformed {
        text: text.to_string(),
        cause,
    })?;
    let delta = if positive { Some(magnitude) } else { magnitude.checked_neg() };

    delta
        .and_then(|delta| i64::try_from(delta).ok())
        .ok_or_else(|| DeltaError::Overflow {
            text: text.to_string(),
        })
}

/// Return an iterator over the deltas in `input`, in file order. Errors carry
/// the 1-based line number of the offending line.
pub fn deltas<R: BufRead>(input: R) -> impl Iterator<Item = Result<i64, Error>> {
    input
        .lines()
        .enumerate()
        .map(|(i, text)| -> Result<i64, Error> {
            let text = text?;
            let delta = parse_delta(&text).map_err(|cause| InputError::Line { line: i + 1, cause })?;
            debug!("line {}: {:+}", i + 1, delta);
            Ok(delta)
        })
}

pub fn parse_deltas<R: BufRead>(input: R) -> Result<Vec<i64>, Error> {
    let list = deltas(input).collect::<Result<Vec<_>, _>>()?;
    info!("read {} deltas", list.len());
    Ok(list)
}

/// Sum every delta in `input`. An empty input sums to zero.
pub fn total<R: BufRead>(input: R) -> Result<i64, Error> {
    let sum = deltas(input).fold_results(Some(0_i64), |sum, delta| {
        sum.and_then(|sum| sum.checked_add(delta))
    })?;
    Ok(sum.ok_or(InputError::Overflow)?)
}

pub fn open_input<P: AsRef<Path>>(path: P) -> Result<BufReader<File>, Error> {
    let path = path.as_ref();
    let file = File::open(path)
        .with_context(|_| format!("can't open input file {}", path.display()))?;
    Ok(BufReader::new(file))
}

#[cfg(test)]
fn line_error(err: &Error) -> (usize, &DeltaError) {
    match err.downcast_ref::<InputError>() {
        Some(InputError::Line { line, cause }) => (*line, cause),
        other => panic!("expected a line error, got {:?}", other),
    }
}

#[test]
fn test_parse_delta() {
    assert_eq!(parse_delta("+1").unwrap(), 1);
    assert_eq!(parse_delta("-2").unwrap(), -2);
    assert_eq!(parse_delta("+0").unwrap(), 0);
    assert_eq!(parse_delta("-0").unwrap(), 0);
    assert_eq!(parse_delta("+3  \r\n").unwrap(), 3);

    // Only `+` is special; any other leading character negates.
    assert_eq!(parse_delta("x5").unwrap(), -5);
    assert_eq!(parse_delta("--3").unwrap(), 3);
}

#[test]
fn test_parse_delta_malformed() {
    for bad in &["", "+", "-", "+ 3", "+3x", "+three", "5"] {
        match parse_delta(bad) {
            Err(DeltaError::Malformed { .. }) => (),
            other => panic!("{:?} parsed as {:?}", bad, other),
        }
    }
}

#[test]
fn test_parse_delta_extremes() {
    assert_eq!(parse_delta("-9223372036854775808").unwrap(), std::i64::MIN);
    assert_eq!(parse_delta("+9223372036854775807").unwrap(), std::i64::MAX);
    assert_eq!(parse_delta("--9223372036854775807").unwrap(), std::i64::MAX);
    assert_eq!(total(&b"-9223372036854775808
"[..]).unwrap(), std::i64::MIN);

    for big in &["--9223372036854775808", "+9223372036854775808", "-9223372036854775809"] {
        match parse_delta(big) {
            Err(DeltaError::Overflow { ref text }) if text == big => (),
            other => panic!("{:?} parsed as {:?}", big, other),
        }
    }
}

#[test]
fn test_total() {
    assert_eq!(total(&b"+1\n-2\n+3\n"[..]).unwrap(), 2);
    assert_eq!(total(&b"-2\n+3\n+1\n"[..]).unwrap(), 2);
    assert_eq!(total(&b"+0\n"[..]).unwrap(), 0);
    assert_eq!(total(&b""[..]).unwrap(), 0);
    assert_eq!(total(&b"+1\r\n+1\r\n-2\r\n"[..]).unwrap(), 0);
    assert_eq!(total(&b"-1\n-2\n-3"[..]).unwrap(), -6);
}

#[test]
fn test_total_bad_line() {
    let err = total(&b"+1\n+ 2\n+3\n"[..]).unwrap_err();
    let (line, cause) = line_error(&err);
    assert_eq!(line, 2);
    match cause {
        DeltaError::Malformed { text, .. } => assert_eq!(text, "+ 2"),
        other => panic!("unexpected cause {:?}", other),
    }

    // A blank line is not skipped.
    let err = total(&b"+1\n\n+3\n"[..]).unwrap_err();
    assert_eq!(line_error(&err).0, 2);
}

#[test]
fn test_total_overflow() {
    let err = total(&b"+9223372036854775807\n+1\n"[..]).unwrap_err();
    match err.downcast_ref::<InputError>() {
        Some(InputError::Overflow) => (),
        other => panic!("expected overflow, got {:?}", other),
    }
}

#[test]
fn test_total_any_order() {
    fn lines(deltas: &[i64]) -> String {
        deltas.iter().map(|d| format!("{:+}\n", d)).collect()
    }

    let deltas = [7, -3, 12, -9, 1];
    for order in deltas.iter().cloned().permutations(deltas.len()) {
        assert_eq!(total(lines(&order).as_bytes()).unwrap(), 8);
    }

    // Every partial sum stays in range, whatever the order.
    let deltas = [std::i64::MAX - 10, -7, 4, std::i64::MIN + 10];
    for order in deltas.iter().cloned().permutations(deltas.len()) {
        assert_eq!(total(lines(&order).as_bytes()).unwrap(), -4);
    }
}

#[test]
fn test_error_messages() {
    let err = total(&b"+1\n+ 2\n"[..]).unwrap_err();
    assert_eq!(
        err.to_string(),
        "input line 2: bad delta \"+ 2\": invalid digit found in string"
    );

    let err = total(&b"+9223372036854775807\n+1\n"[..]).unwrap_err();
    assert_eq!(err.to_string(), "total doesn't fit in an i64");
}

#[test]
fn test_parse_deltas() {
    assert_eq!(parse_deltas(&b"+7\n+7\n-2\n-7\n-4\n"[..]).unwrap(), vec![7, 7, -2, -7, -4]);
    assert!(parse_deltas(&b"+7\n7\n"[..]).is_err());
}

#[test]
fn test_open_input() {
    use std::io::Write;

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(INPUT_PATH);
    std::fs::File::create(&path)
        .unwrap()
        .write_all(b"+10\n-4\n")
        .unwrap();
    assert_eq!(total(open_input(&path).unwrap()).unwrap(), 6);

    let missing = dir.path().join("missing");
    let err = open_input(&missing).unwrap_err();
    assert!(err.to_string().contains("missing"));
}
