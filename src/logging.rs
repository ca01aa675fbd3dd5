#![cfg(feature = "std")]

use log::{LevelFilter, Log, Metadata, Record};
use std::env;

/// Environment variable holding the log level (`off`, `error` ... `trace`).
pub const LOG_ENV: &str = "WATER_SORT_LOG";

/// Writes `LEVEL [module] message` lines to stderr, keeping stdout for the board.
struct StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let module = record
            .module_path()
            .and_then(|path| path.rsplit("::").next())
            .unwrap_or("water_sort");
        eprintln!("{:<5} [{}] {}", record.level(), module, record.args());
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

/// Install the logger at `level`. Later calls keep the first logger.
pub fn init_logging_with(level: LevelFilter) {
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}

/// Install the logger at the level named by [`LOG_ENV`], defaulting to `warn`.
pub fn init_logging() {
    let level = env::var(LOG_ENV)
        .ok()
        .and_then(|lvl| lvl.parse().ok())
        .unwrap_or(LevelFilter::Warn);
    init_logging_with(level);
}
