// Copyright 2021 Twitter, Inc.
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

mod comparison;
mod general;

pub use self::comparison::{Comparison, Implementation};
pub use self::general::{General, LogLevel};

use crate::Error;

use clap::{App, Arg, ArgMatches};
use logger::info;
use serde_derive::*;

use std::collections::HashSet;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");

#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    general: General,
    #[serde(default = "default_comparisons")]
    comparison: Vec<Comparison>,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            general: Default::default(),
            comparison: default_comparisons(),
        }
    }
}

/// The insertion and lookup sweeps
fn default_comparisons() -> Vec<Comparison> {
    vec![
        Comparison::new(
            "insert",
            "Insertion: average cost per element",
            Implementation::new("a", "insert_a"),
            Implementation::new("b", "insert_b"),
        ),
        Comparison::new(
            "lookup",
            "Lookup: average cost per element",
            Implementation::new("a", "lookup_a"),
            Implementation::new("b", "lookup_b"),
        ),
    ]
}

fn app() -> App<'static, 'static> {
    App::new(NAME)
        .version(VERSION)
        .about("Normalized comparison charts for set benchmark sweeps")
        .arg(
            Arg::with_name("config")
                .long("config")
                .value_name("FILE")
                .help("TOML config file")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("data")
                .long("data")
                .value_name("DIR")
                .help("Directory holding the raw series files")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("output")
                .long("output")
                .value_name("DIR")
                .help("Directory the charts are written to")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("comparison")
                .long("comparison")
                .value_name("NAME")
                .help("Only render the named comparison")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .long("verbose")
                .help("Increase verbosity by one level. Can be used more than once")
                .multiple(true),
        )
}

impl Config {
    /// parse command line options and return `Config`
    pub fn new() -> Result<Config, Error> {
        let matches = app().get_matches();
        Self::from_matches(&matches)
    }

    /// parse the given argument list, where the first item is the program
    /// name
    pub fn from_args<I, T>(args: I) -> Result<Config, Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = app()
            .get_matches_from_safe(args)
            .map_err(|e| Error::Config(e.to_string()))?;
        Self::from_matches(&matches)
    }

    fn from_matches(matches: &ArgMatches) -> Result<Config, Error> {
        let mut config = if let Some(file) = matches.value_of("config") {
            Config::load_from_file(file)?
        } else {
            Default::default()
        };

        if let Some(data) = matches.value_of("data") {
            config.general.set_data(data.to_string());
        }

        if let Some(output) = matches.value_of("output") {
            config.general.set_output(output.to_string());
        }

        match matches.occurrences_of("verbose") {
            0 => {}
            1 => config.general.set_logging(LogLevel::Debug),
            _ => config.general.set_logging(LogLevel::Trace),
        }

        if let Some(name) = matches.value_of("comparison") {
            config.select(name)?;
        }

        Ok(config)
    }

    pub fn load_from_file(file: impl AsRef<Path>) -> Result<Config, Error> {
        let file = file.as_ref();
        let content = std::fs::read_to_string(file).map_err(|e| Error::io(file, e))?;
        content.parse::<Config>().map_err(|e| match e {
            Error::Config(msg) => Error::Config(format!("{}: {}", file.display(), msg)),
            other => other,
        })
    }

    /// Drop every comparison except `name`.
    pub fn select(&mut self, name: &str) -> Result<(), Error> {
        if !self.comparison.iter().any(|c| c.name() == name) {
            return Err(Error::Config(format!("no comparison named `{}`", name)));
        }
        self.comparison.retain(|c| c.name() == name);
        Ok(())
    }

    fn validate(&self) -> Result<(), Error> {
        let (width, height) = self.size();
        if width == 0 || height == 0 {
            return Err(Error::Config(format!(
                "chart size must be non-zero, got {}x{}",
                width, height
            )));
        }

        let mut names = HashSet::new();
        for comparison in &self.comparison {
            if comparison.name().is_empty() {
                return Err(Error::Config("comparison name is empty".to_string()));
            }
            if !names.insert(comparison.name()) {
                return Err(Error::Config(format!(
                    "duplicate comparison name `{}`",
                    comparison.name()
                )));
            }
        }
        Ok(())
    }

    pub fn data(&self) -> &str {
        self.general.data()
    }

    pub fn output(&self) -> &str {
        self.general.output()
    }

    pub fn logging(&self) -> LogLevel {
        self.general.logging()
    }

    /// chart size in pixels
    pub fn size(&self) -> (u32, u32) {
        self.general.size()
    }

    pub fn comparisons(&self) -> &[Comparison] {
        &self.comparison
    }

    /// where the chart for `comparison` is written
    pub fn output_path(&self, comparison: &Comparison) -> PathBuf {
        Path::new(self.output()).join(format!("{}_plot.svg", comparison.name()))
    }

    pub fn print(&self) {
        info!("-----");
        info!("Config: Data: {} Output: {}", self.data(), self.output());
        let (width, height) = self.size();
        info!("Config: Size: {}x{}", width, height);
        for comparison in &self.comparison {
            info!(
                "Config: Comparison: {} A: {} ({}) B: {} ({}) Output: {}",
                comparison.name(),
                comparison.a().label(),
                comparison.a().series(),
                comparison.b().label(),
                comparison.b().series(),
                self.output_path(comparison).display(),
            );
        }
    }
}

impl std::str::FromStr for Config {
    type Err = Error;

    fn from_str(content: &str) -> Result<Config, Error> {
        let config: Config = toml::from_str(content).map_err(|e| Error::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }
}
