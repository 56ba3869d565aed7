// Copyright 2021 Twitter, Inc.
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// The step of a comparison run that produced an error
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Stage {
    Load,
    Normalize,
    Difference,
    Render,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Load => "load",
            Stage::Normalize => "normalize",
            Stage::Difference => "difference",
            Stage::Render => "render",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid series `{series}`: {reason}")]
    InvalidSeries { series: String, reason: String },

    #[error(
        "cannot compare series `{a}` ({a_len} samples) with `{b}` ({b_len} samples): lengths differ"
    )]
    MismatchedSeriesLength {
        a: String,
        a_len: usize,
        b: String,
        b_len: usize,
    },

    #[error("series `{a}` and `{b}` disagree at index {index}: size {a_size} != {b_size}")]
    MisalignedSizes {
        a: String,
        b: String,
        index: usize,
        a_size: u64,
        b_size: u64,
    },

    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed series file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to render chart `{chart}`: {reason}")]
    Render { chart: String, reason: String },

    #[error("configuration error: {0}")]
    Config(String),

    #[error("comparison `{comparison}` failed during {stage}: {source}")]
    Stage {
        comparison: String,
        stage: Stage,
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    pub(crate) fn invalid(series: &str, reason: impl Into<String>) -> Self {
        Error::InvalidSeries {
            series: series.to_owned(),
            reason: reason.into(),
        }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn in_stage(comparison: &str, stage: Stage, source: Error) -> Self {
        Error::Stage {
            comparison: comparison.to_owned(),
            stage,
            source: Box::new(source),
        }
    }

    /// The underlying error with any stage context removed
    pub fn root(&self) -> &Error {
        match self {
            Error::Stage { source, .. } => source.root(),
            other => other,
        }
    }
}
