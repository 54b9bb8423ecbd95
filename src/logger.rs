//! Custom logging module.
//!
//! This module provides a custom logger implementation that writes formatted
//! log entries to stderr and can forward them to a capture callback.

use crate::error::AppError;
use log::{Level, LevelFilter, Log, Metadata, Record};
use std::io::Write;
use std::sync::{Arc, Mutex};

type Callback = Box<dyn Fn(String) + Send + Sync>;

/// Format a log record into a string for display
///
pub fn format_log(record: &Record) -> String {
    let timestamp = chrono::Utc::now().format("%Y-%m-%d %H:%M:%S%.3f");
    let level_str = match record.level() {
        Level::Error => "ERROR",
        Level::Warn => "WARN",
        Level::Info => "INFO",
        Level::Debug => "DEBUG",
        Level::Trace => "TRACE",
    };
    format!("{} {} {}", timestamp, level_str, record.args())
}

/// Map the number of `-v` flags to a level filter.
///
pub fn level_for_verbosity(occurrences: u64) -> LevelFilter {
    match occurrences {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Logger writing to stderr and optionally capturing each line
///
pub struct ConsoleLogger {
    level: LevelFilter,
    stderr: bool,
    log_callback: Arc<Mutex<Option<Callback>>>,
}

impl ConsoleLogger {
    pub fn new(level: LevelFilter) -> Self {
        ConsoleLogger {
            level,
            stderr: true,
            log_callback: Arc::new(Mutex::new(None)),
        }
    }

    /// Stop writing to stderr; only the capture callback receives lines.
    ///
    pub fn quiet(mut self) -> Self {
        self.stderr = false;
        self
    }

    pub fn set_log_callback(&self, callback: Callback) {
        if let Ok(mut guard) = self.log_callback.lock() {
            *guard = Some(callback);
        }
    }

    /// Install as the global logger.
    ///
    pub fn init(self) -> Result<(), AppError> {
        let level = self.level;
        log::set_boxed_logger(Box::new(self)).map_err(|e| AppError::Logger(e.to_string()))?;
        log::set_max_level(level);
        Ok(())
    }
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let formatted = format_log(record);
        if self.stderr {
            let _ = writeln!(std::io::stderr(), "{}", formatted);
        }
        if let Ok(callback) = self.log_callback.lock() {
            if let Some(ref cb) = *callback {
                cb(formatted);
            }
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}
