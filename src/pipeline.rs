// Copyright 2021 Twitter, Inc.
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::config::Comparison;
use crate::error::Stage;
use crate::plot::Chart;
use crate::provider::SeriesProvider;
use crate::series::{difference, Series, Summary};
use crate::Error;

use logger::{debug, info};

use std::path::Path;

/// The three curves drawn for a comparison
#[derive(Clone, Debug)]
pub struct Curves {
    /// per-element cost of implementation `a`
    pub a: Series,
    /// per-element cost of implementation `b`
    pub b: Series,
    /// `b - a`
    pub difference: Series,
}

/// Runs comparisons against series from a provider: load, normalize both,
/// difference, render, persist.
pub struct Pipeline<'a, P> {
    provider: &'a P,
    size: (u32, u32),
}

impl<'a, P: SeriesProvider> Pipeline<'a, P> {
    pub fn new(provider: &'a P) -> Self {
        Self {
            provider,
            size: (1024, 768),
        }
    }

    /// chart size in pixels
    pub fn size(mut self, size: (u32, u32)) -> Self {
        self.size = size;
        self
    }

    /// Load both series of `comparison` and derive the normalized and
    /// difference curves.
    pub fn curves(&self, comparison: &Comparison) -> Result<Curves, Error> {
        let name = comparison.name();
        let stage = |stage: Stage| move |e: Error| Error::in_stage(name, stage, e);

        let raw_a = self
            .provider
            .series(comparison.a().series())
            .map_err(stage(Stage::Load))?;
        let raw_b = self
            .provider
            .series(comparison.b().series())
            .map_err(stage(Stage::Load))?;
        debug!(
            "{}: loaded {} ({} samples) and {} ({} samples)",
            name,
            raw_a.name(),
            raw_a.len(),
            raw_b.name(),
            raw_b.len()
        );

        let a = raw_a.normalize().map_err(stage(Stage::Normalize))?;
        let b = raw_b.normalize().map_err(stage(Stage::Normalize))?;

        let difference =
            difference(&a, &b, comparison.difference()).map_err(stage(Stage::Difference))?;

        Ok(Curves { a, b, difference })
    }

    /// Lay out the chart for `comparison`; traces are `a`, `b` and the
    /// difference, in that order.
    pub fn chart(&self, comparison: &Comparison, curves: &Curves) -> Chart {
        let mut chart = Chart::new(comparison.title());
        chart
            .x_desc(comparison.x_desc())
            .y_desc(comparison.y_desc())
            .legend(comparison.legend())
            .size(self.size)
            .trace(comparison.a().label(), &curves.a)
            .trace(comparison.b().label(), &curves.b)
            .trace(comparison.difference(), &curves.difference);
        chart
    }

    /// Render `comparison` to `path`.
    pub fn run(&self, comparison: &Comparison, path: &Path) -> Result<Summary, Error> {
        let curves = self.curves(comparison)?;
        let summary = Summary::from_difference(&curves.difference);

        self.chart(comparison, &curves)
            .save(path)
            .map_err(|e| Error::in_stage(comparison.name(), Stage::Render, e))?;

        info!(
            "{}: wrote {} ({} cheaper at {} sizes, {} cheaper at {}, {} ties)",
            comparison.name(),
            path.display(),
            comparison.a().label(),
            summary.a_cheaper,
            comparison.b().label(),
            summary.b_cheaper,
            summary.ties,
        );

        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Implementation;
    use crate::provider::MemoryProvider;

    fn comparison() -> Comparison {
        Comparison::new(
            "insert",
            "Insertion",
            Implementation::new("hash set", "insert_a"),
            Implementation::new("tree set", "insert_b"),
        )
    }

    fn provider(sizes_b: Vec<u64>, times_b: Vec<f64>) -> MemoryProvider {
        let mut provider = MemoryProvider::new();
        provider
            .insert("insert_a", vec![10, 20], vec![100.0, 180.0])
            .unwrap();
        provider.insert("insert_b", sizes_b, times_b).unwrap();
        provider
    }

    #[test]
    fn curves_normalize_then_difference() {
        let provider = provider(vec![10, 20], vec![150.0, 260.0]);
        let curves = Pipeline::new(&provider).curves(&comparison()).unwrap();

        assert_eq!(curves.a.values(), &[10.0, 9.0]);
        assert_eq!(curves.b.values(), &[15.0, 13.0]);
        assert_eq!(curves.difference.values(), &[5.0, 4.0]);
        assert_eq!(curves.difference.sizes(), &[10, 20]);
    }

    #[test]
    fn chart_has_three_traces_in_order() {
        let provider = provider(vec![10, 20], vec![150.0, 260.0]);
        let pipeline = Pipeline::new(&provider);
        let comparison = comparison();
        let chart = pipeline.chart(&comparison, &pipeline.curves(&comparison).unwrap());

        let labels: Vec<&str> = chart.traces().iter().map(|t| t.label()).collect();
        assert_eq!(labels, vec!["hash set", "tree set", "b - a"]);
        assert_eq!(chart.caption(), "Insertion");
    }

    #[test]
    fn mismatched_lengths_fail_in_difference_stage() {
        let provider = provider(vec![10, 20, 30], vec![1.0, 2.0, 3.0]);
        let err = Pipeline::new(&provider).curves(&comparison()).unwrap_err();

        match &err {
            Error::Stage {
                comparison, stage, ..
            } => {
                assert_eq!(comparison, "insert");
                assert_eq!(*stage, Stage::Difference);
            }
            other => panic!("expected stage error, got {:?}", other),
        }
        assert!(matches!(
            err.root(),
            Error::MismatchedSeriesLength {
                a_len: 2,
                b_len: 3,
                ..
            }
        ));
    }

    #[test]
    fn zero_size_fails_in_normalize_stage() {
        let provider = provider(vec![0, 20], vec![1.0, 2.0]);
        let err = Pipeline::new(&provider).curves(&comparison()).unwrap_err();

        assert!(matches!(
            err,
            Error::Stage {
                stage: Stage::Normalize,
                ..
            }
        ));
        assert!(matches!(err.root(), Error::InvalidSeries { .. }));
    }

    #[test]
    fn missing_series_fails_in_load_stage() {
        let mut provider = MemoryProvider::new();
        provider.insert("insert_a", vec![1], vec![1.0]).unwrap();
        let err = Pipeline::new(&provider).curves(&comparison()).unwrap_err();

        assert!(matches!(
            err,
            Error::Stage {
                stage: Stage::Load,
                ..
            }
        ));
    }

    #[test]
    fn run_writes_nothing_on_failure() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("insert_plot.svg");
        let provider = provider(vec![10, 30], vec![150.0, 260.0]);

        let err = Pipeline::new(&provider)
            .run(&comparison(), &path)
            .unwrap_err();
        assert!(matches!(err.root(), Error::MisalignedSizes { index: 1, .. }));
        assert!(!path.exists());
    }

    #[test]
    fn run_reports_render_stage_for_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope").join("insert_plot.svg");
        let provider = provider(vec![10, 20], vec![150.0, 260.0]);

        let err = Pipeline::new(&provider)
            .run(&comparison(), &path)
            .unwrap_err();
        assert!(matches!(
            err,
            Error::Stage {
                stage: Stage::Render,
                ..
            }
        ));
        assert!(matches!(err.root(), Error::Io { .. }));
    }
}
