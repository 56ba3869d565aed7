// Copyright 2021 Twitter, Inc.
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::{Error, Series};

use logger::debug;
use serde_derive::*;

use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

/// A source of raw `(size, total time)` series, looked up by key.
pub trait SeriesProvider {
    fn series(&self, key: &str) -> Result<Series, Error>;
}

/// Validate a raw sweep: on top of the `Series` checks, total times may not
/// be negative.
fn measured(key: &str, sizes: Vec<u64>, times: Vec<f64>) -> Result<Series, Error> {
    if let Some(i) = times.iter().position(|&t| t < 0.0) {
        return Err(Error::invalid(
            key,
            format!("negative total time at index {}: {}", i, times[i]),
        ));
    }
    Series::new(key, sizes, times)
}

/// On-disk layout of a raw series file
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawSeries {
    sizes: Vec<u64>,
    times: Vec<f64>,
}

/// Reads `<root>/<key>.json` files of the form
/// `{"sizes": [10, 20], "times": [100.0, 180.0]}`.
pub struct JsonProvider {
    root: PathBuf,
}

impl JsonProvider {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}.json", key))
    }

    fn read(path: &Path) -> Result<RawSeries, Error> {
        let file = File::open(path).map_err(|e| Error::io(path, e))?;
        serde_json::from_reader(BufReader::new(file)).map_err(|source| Error::Parse {
            path: path.to_owned(),
            source,
        })
    }
}

impl SeriesProvider for JsonProvider {
    fn series(&self, key: &str) -> Result<Series, Error> {
        let path = self.path(key);
        debug!("loading series `{}` from {}", key, path.display());
        let raw = Self::read(&path)?;
        measured(key, raw.sizes, raw.times)
    }
}

/// Series held in memory, for embedding and tests
#[derive(Default)]
pub struct MemoryProvider {
    series: HashMap<String, Series>,
}

impl MemoryProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and store a raw series under `key`.
    pub fn insert(&mut self, key: &str, sizes: Vec<u64>, times: Vec<f64>) -> Result<(), Error> {
        let series = measured(key, sizes, times)?;
        self.series.insert(key.to_owned(), series);
        Ok(())
    }
}

impl SeriesProvider for MemoryProvider {
    fn series(&self, key: &str) -> Result<Series, Error> {
        self.series
            .get(key)
            .cloned()
            .ok_or_else(|| Error::invalid(key, "no such series"))
    }
}
