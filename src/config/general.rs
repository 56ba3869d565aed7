// Copyright 2021 Twitter, Inc.
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use logger::Level;
use serde_derive::*;

#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct General {
    #[serde(default = "default_data")]
    data: String,
    #[serde(default = "default_output")]
    output: String,
    #[serde(default)]
    logging: LogLevel,
    #[serde(default = "default_width")]
    width: u32,
    #[serde(default = "default_height")]
    height: u32,
}

impl Default for General {
    fn default() -> General {
        General {
            data: default_data(),
            output: default_output(),
            logging: LogLevel::default(),
            width: default_width(),
            height: default_height(),
        }
    }
}

impl General {
    /// directory holding the raw series files
    pub fn data(&self) -> &str {
        &self.data
    }

    pub fn set_data(&mut self, data: String) {
        self.data = data;
    }

    /// directory receiving the rendered charts
    pub fn output(&self) -> &str {
        &self.output
    }

    pub fn set_output(&mut self, output: String) {
        self.output = output;
    }

    pub fn logging(&self) -> LogLevel {
        self.logging
    }

    pub fn set_logging(&mut self, level: LogLevel) {
        self.logging = level;
    }

    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}

fn default_data() -> String {
    "data".to_string()
}

fn default_output() -> String {
    "plots".to_string()
}

fn default_width() -> u32 {
    1024
}

fn default_height() -> u32 {
    768
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl Default for LogLevel {
    fn default() -> LogLevel {
        LogLevel::Info
    }
}

impl From<LogLevel> for Level {
    fn from(level: LogLevel) -> Level {
        match level {
            LogLevel::Error => Level::Error,
            LogLevel::Warn => Level::Warn,
            LogLevel::Info => Level::Info,
            LogLevel::Debug => Level::Debug,
            LogLevel::Trace => Level::Trace,
        }
    }
}
