//! A minimal `log` backend that writes to standard error, leaving standard
//! output for the answer.

use failure::{err_msg, Error};
use log::{self, Level, Metadata, Record};
use std::io::{self, Write};
use std::time::Instant;

/// Records more verbose than this are dropped.
pub const LEVEL: Level = Level::Warn;

pub fn init() -> Result<(), Error> {
    log::set_boxed_logger(Box::new(StderrLogger::new()))
        .map_err(|_| err_msg("failed to set logger"))?;
    log::set_max_level(LEVEL.to_level_filter());
    Ok(())
}

pub struct StderrLogger {
    start: Instant,
}

impl StderrLogger {
    pub fn new() -> StderrLogger {
        StderrLogger {
            start: Instant::now(),
        }
    }
}

impl Default for StderrLogger {
    fn default() -> StderrLogger {
        StderrLogger::new()
    }
}

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= LEVEL
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            // Nowhere to report a failed write to stderr.
            let elapsed = self.start.elapsed();
            let _ = writeln!(
                io::stderr(),
                "{}.{:03}: {} - {}",
                elapsed.as_secs(),
                elapsed.subsec_millis(),
                record.level(),
                record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = io::stderr().flush();
    }
}

#[test]
fn test_enabled() {
    use log::{Log, MetadataBuilder};

    let logger = StderrLogger::new();
    let at = |level| MetadataBuilder::new().level(level).build();
    assert!(logger.enabled(&at(Level::Error)));
    assert!(logger.enabled(&at(Level::Warn)));
    assert!(!logger.enabled(&at(Level::Info)));
    assert!(!logger.enabled(&at(Level::Debug)));

    let logger = StderrLogger::default();
    assert!(logger.enabled(&at(Level::Warn)));
    assert!(!logger.enabled(&at(Level::Info)));
    assert!(LEVEL.to_level_filter() >= Level::Warn);
    assert!(LEVEL.to_level_filter() < Level::Info);
}
