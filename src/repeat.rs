//! Find the first running total that comes up twice when the list of deltas
//! is applied over and over.

use std::collections::HashSet;
use std::iter::once;

/// How many deltas to apply before giving up.
pub const MAX_STEPS: usize = 1_000_000;

/// Return the first running total, starting from zero, that is reached a
/// second time while cycling through `deltas`.
///
/// Returns `None` if `deltas` is empty, if no total repeats within
/// `MAX_STEPS` deltas, or if a running total overflows.
pub fn first_repeat(deltas: &[i64]) -> Option<i64> {
    first_repeat_within(deltas, MAX_STEPS)
}

pub fn first_repeat_within(deltas: &[i64], max_steps: usize) -> Option<i64> {
    if deltas.is_empty() {
        return None;
    }

    let totals = deltas.iter().cycle().take(max_steps).scan(0_i64, |total, &delta| {
        *total = total.checked_add(delta)?;
        Some(*total)
    });

    let mut seen = HashSet::new();
    for total in once(0).chain(totals) {
        if !seen.insert(total) {
            return Some(total);
        }
    }

    warn!("no running total repeated within {} steps", max_steps);
    None
}

#[test]
fn test_first_repeat() {
    assert_eq!(first_repeat(&[1, -1]), Some(0));
    assert_eq!(first_repeat(&[3, 3, 4, -2, -4]), Some(10));
    assert_eq!(first_repeat(&[-6, 3, 8, 5, -6]), Some(5));
    assert_eq!(first_repeat(&[7, 7, -2, -7, -4]), Some(14));
    assert_eq!(first_repeat(&[1, -2, 3, 1]), Some(2));
}

#[test]
fn test_first_repeat_none() {
    assert_eq!(first_repeat(&[]), None);
    assert_eq!(first_repeat_within(&[1], 1000), None);
    assert_eq!(first_repeat_within(&[std::i64::MAX, 1], 1000), None);
}
