// Copyright 2021 Twitter, Inc.
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! A small stdout logger on top of the `log` facade.
//!
//! ```no_run
//! use logger::*;
//!
//! Logger::new()
//!     .label("setplot")
//!     .level(Level::Debug)
//!     .init()
//!     .expect("Failed to initialize logger");
//! info!("ready");
//! ```

pub use log::{debug, error, info, trace, warn, Level, LevelFilter, SetLoggerError};

use chrono::Local;
use log::{Log, Metadata, Record};

/// Log at error level and terminate the process with a non-zero status.
#[macro_export]
macro_rules! fatal {
    () => (
        $crate::fatal!("fatal error")
    );
    ($fmt:expr) => ({
        $crate::error!($fmt);
        ::std::process::exit(1);
    });
    ($fmt:expr, $($arg:tt)*) => ({
        $crate::error!($fmt, $($arg)*);
        ::std::process::exit(1);
    });
}

pub struct Logger {
    label: Option<&'static str>,
    level: Level,
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger {
    pub fn new() -> Self {
        Self {
            label: None,
            level: Level::Info,
        }
    }

    /// Prefix every line with `label`
    pub fn label(mut self, label: &'static str) -> Self {
        self.label = Some(label);
        self
    }

    pub fn level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    /// Install as the global logger. Fails if a logger is already installed.
    pub fn init(self) -> Result<(), SetLoggerError> {
        let filter = self.level.to_level_filter();
        log::set_boxed_logger(Box::new(self)).map(|()| log::set_max_level(filter))
    }

    fn format(&self, record: &Record) -> String {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S%.3f");
        match self.label {
            Some(label) => format!(
                "{} {:<5} [{}] {}",
                timestamp,
                record.level(),
                label,
                record.args()
            ),
            None => format!("{} {:<5} {}", timestamp, record.level(), record.args()),
        }
    }
}

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            println!("{}", self.format(record));
        }
    }

    fn flush(&self) {}
}
