use std::{
    io::Write as _,
    sync::{OnceLock, RwLock},
};

use log::{Log, Metadata, Record};

static LOGGER: OnceLock<StderrLogger> = OnceLock::new();

pub fn get_logger() -> &'static StderrLogger {
    LOGGER.get_or_init(|| StderrLogger::new(log::Level::Warn))
}

/// Installs the logger, letting through records up to `level`.
pub fn init(level: log::Level) {
    let logger = get_logger();
    logger.set_min_level(level);

    if log::set_logger(logger).is_ok() {
        log::set_max_level(log::LevelFilter::Trace);
    }
}

/// Maps the number of `-v` flags to a level.
pub fn level_from_verbosity(verbose: u8) -> log::Level {
    match verbose {
        0 => log::Level::Warn,
        1 => log::Level::Info,
        2 => log::Level::Debug,
        _ => log::Level::Trace,
    }
}

pub struct StderrLogger {
    min_level: RwLock<log::Level>,
}

impl StderrLogger {
    fn new(min_level: log::Level) -> Self {
        Self {
            min_level: RwLock::new(min_level),
        }
    }

    pub fn min_level(&self) -> log::Level {
        match self.min_level.read() {
            Ok(level) => *level,
            Err(poisoned) => *poisoned.into_inner(),
        }
    }

    pub fn set_min_level(&self, level: log::Level) {
        match self.min_level.write() {
            Ok(mut min_level) => *min_level = level,
            Err(poisoned) => *poisoned.into_inner() = level,
        }
    }
}

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.min_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let source = record.module_path().unwrap_or("unknown");
            // nowhere left to report a failing stderr
            let _ = writeln!(
                std::io::stderr().lock(),
                "[{:<5}] {} -> {}",
                record.level(),
                source,
                record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}
