// Copyright 2021 Twitter, Inc.
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Turns raw set benchmark sweeps into per-element cost charts.
//!
//! Each comparison loads two `(size, total time)` series, divides total time
//! by element count, takes the pointwise `b - a` gap and plots all three
//! curves to an SVG file.

mod config;
mod error;
mod pipeline;
mod plot;
mod provider;
mod series;

pub use crate::config::{Comparison, Config, General, Implementation, LogLevel};
pub use crate::error::{Error, Stage};
pub use crate::pipeline::{Curves, Pipeline};
pub use crate::plot::{Chart, LegendPosition, Trace};
pub use crate::provider::{JsonProvider, MemoryProvider, SeriesProvider};
pub use crate::series::{difference, Series, Summary};

use std::path::PathBuf;

/// Render every comparison in `config` from the JSON series under its data
/// directory. Stops at the first failure and returns the written paths.
pub fn run(config: &Config) -> Result<Vec<PathBuf>, Error> {
    let provider = JsonProvider::new(config.data());
    let pipeline = Pipeline::new(&provider).size(config.size());

    let mut written = Vec::new();
    for comparison in config.comparisons() {
        let path = config.output_path(comparison);
        pipeline.run(comparison, &path)?;
        written.push(path);
    }
    Ok(written)
}
