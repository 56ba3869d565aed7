// Copyright 2021 Twitter, Inc.
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Rendering of comparison charts to SVG.
//!
//! A [`Chart`] is plain data: a caption, axis descriptions and a list of
//! traces. Rendering happens entirely in memory and the file is written once
//! the whole document exists, so a failed render never leaves a partial image
//! behind.

mod palette;

use palette::colour;

use crate::{Error, Series};

use plotters::prelude::*;
use serde_derive::*;

use std::io;
use std::ops::Range;
use std::path::Path;

/// Where the legend box is drawn inside the plotting area
#[derive(Copy, Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LegendPosition {
    UpperLeft,
    UpperRight,
    MiddleLeft,
    MiddleRight,
    LowerLeft,
    LowerRight,
}

impl Default for LegendPosition {
    fn default() -> Self {
        LegendPosition::UpperRight
    }
}

impl From<LegendPosition> for SeriesLabelPosition {
    fn from(position: LegendPosition) -> Self {
        match position {
            LegendPosition::UpperLeft => SeriesLabelPosition::UpperLeft,
            LegendPosition::UpperRight => SeriesLabelPosition::UpperRight,
            LegendPosition::MiddleLeft => SeriesLabelPosition::MiddleLeft,
            LegendPosition::MiddleRight => SeriesLabelPosition::MiddleRight,
            LegendPosition::LowerLeft => SeriesLabelPosition::LowerLeft,
            LegendPosition::LowerRight => SeriesLabelPosition::LowerRight,
        }
    }
}

/// One labelled line-with-markers curve
#[derive(Clone, Debug, PartialEq)]
pub struct Trace {
    label: String,
    points: Vec<(f64, f64)>,
}

impl Trace {
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn points(&self) -> &[(f64, f64)] {
        &self.points
    }

    pub fn xs(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.0).collect()
    }

    pub fn ys(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.1).collect()
    }
}

#[derive(Clone, Debug)]
pub struct Chart {
    caption: String,
    x_desc: String,
    y_desc: String,
    legend: LegendPosition,
    size: (u32, u32),
    traces: Vec<Trace>,
}

impl Chart {
    pub fn new(caption: impl AsRef<str>) -> Self {
        Self {
            caption: caption.as_ref().to_owned(),
            x_desc: "Number of elements".to_owned(),
            y_desc: "Duration [ns]".to_owned(),
            legend: LegendPosition::default(),
            size: (1024, 768),
            traces: Vec::new(),
        }
    }

    pub fn x_desc(&mut self, x_desc: impl AsRef<str>) -> &mut Self {
        self.x_desc = x_desc.as_ref().to_owned();
        self
    }

    pub fn y_desc(&mut self, y_desc: impl AsRef<str>) -> &mut Self {
        self.y_desc = y_desc.as_ref().to_owned();
        self
    }

    pub fn legend(&mut self, position: LegendPosition) -> &mut Self {
        self.legend = position;
        self
    }

    pub fn size(&mut self, size: (u32, u32)) -> &mut Self {
        self.size = size;
        self
    }

    /// Append `series` as a trace labelled `label`.
    pub fn trace(&mut self, label: impl AsRef<str>, series: &Series) -> &mut Self {
        self.traces.push(Trace {
            label: label.as_ref().to_owned(),
            points: series.points().collect(),
        });
        self
    }

    pub fn caption(&self) -> &str {
        &self.caption
    }

    pub fn traces(&self) -> &[Trace] {
        &self.traces
    }

    /// Render the chart as an SVG document.
    pub fn render(&self) -> Result<String, Error> {
        let mut svg = String::new();
        self.draw(&mut svg).map_err(|e| Error::Render {
            chart: self.caption.clone(),
            reason: e.to_string(),
        })?;
        Ok(svg)
    }

    /// Render and write the chart to `path`, replacing any existing file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), Error> {
        let path = path.as_ref();

        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            if !dir.is_dir() {
                return Err(Error::io(
                    path,
                    io::Error::new(
                        io::ErrorKind::NotFound,
                        format!("output directory {} does not exist", dir.display()),
                    ),
                ));
            }
        }

        let svg = self.render()?;
        std::fs::write(path, svg).map_err(|e| Error::io(path, e))
    }

    fn draw(&self, buf: &mut String) -> Result<(), Box<dyn std::error::Error>> {
        let root = SVGBackend::with_string(buf, self.size).into_drawing_area();
        root.fill(&WHITE)?;

        let x_range = axis_range(self.traces.iter().flat_map(|t| t.points.iter().map(|p| p.0)))?;
        let y_range = axis_range(self.traces.iter().flat_map(|t| t.points.iter().map(|p| p.1)))?;

        let mut chart = ChartBuilder::on(&root)
            .caption(&self.caption, ("sans-serif", 30))
            .margin(20)
            .set_label_area_size(LabelAreaPosition::Left, 80)
            .set_label_area_size(LabelAreaPosition::Bottom, 50)
            .build_cartesian_2d(x_range, y_range)?;

        chart
            .configure_mesh()
            .x_desc(self.x_desc.as_str())
            .y_desc(self.y_desc.as_str())
            .draw()?;

        for (i, trace) in self.traces.iter().enumerate() {
            let colour = colour(i);

            chart
                .draw_series(LineSeries::new(
                    trace.points.iter().copied(),
                    colour.stroke_width(2),
                ))?
                .label(trace.label.as_str())
                .legend(move |(x, y)| {
                    PathElement::new(vec![(x, y), (x + 20, y)], colour.stroke_width(2))
                });

            chart.draw_series(
                trace
                    .points
                    .iter()
                    .map(|&point| Circle::new(point, 4, colour.filled())),
            )?;
        }

        chart
            .configure_series_labels()
            .position(self.legend.into())
            .background_style(WHITE.filled())
            .border_style(BLACK)
            .draw()?;

        root.present()?;

        Ok(())
    }
}

/// Smallest range holding every value, padded by 5% on each side. Degenerate
/// inputs get a unit-wide range so the axis can still be drawn. A range whose
/// bounds are not finite is an error.
fn axis_range(values: impl Iterator<Item = f64>) -> Result<Range<f64>, String> {
    let (min, max) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    });

    let range = if min > max {
        0.0..1.0
    } else if min == max {
        (min - 1.0)..(max + 1.0)
    } else {
        let pad = (max - min) * 0.05;
        (min - pad)..(max + pad)
    };

    if range.start.is_finite() && range.end.is_finite() {
        Ok(range)
    } else {
        Err(format!("axis span {} to {} is not finite", min, max))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chart() -> Chart {
        let a = Series::new("a", vec![10, 20], vec![10.0, 9.0]).unwrap();
        let b = Series::new("b", vec![10, 20], vec![15.0, 13.0]).unwrap();
        let mut chart = Chart::new("Insertion");
        chart
            .y_desc("Duration [us]")
            .legend(LegendPosition::UpperLeft)
            .trace("hash set", &a)
            .trace("tree set", &b);
        chart
    }

    #[test]
    fn axis_range_pads() {
        let range = axis_range(vec![0.0, 100.0].into_iter());
        assert_eq!(range, Ok(-5.0..105.0));
    }

    #[test]
    fn axis_range_degenerate() {
        assert_eq!(axis_range(vec![3.0, 3.0].into_iter()), Ok(2.0..4.0));
        assert_eq!(axis_range(std::iter::empty()), Ok(0.0..1.0));
    }

    #[test]
    fn axis_range_rejects_infinite_span() {
        assert!(axis_range(vec![-1.7e308, 1.7e308].into_iter()).is_err());
        assert!(axis_range(vec![-f64::MAX * 0.99, 0.0].into_iter()).is_err());
    }

    #[test]
    fn render_fails_on_unplottable_span() {
        let wide = Series::new("d", vec![1, 2], vec![-1.7e308, 1.7e308]).unwrap();
        let mut chart = Chart::new("Lookup");
        chart.trace("b - a", &wide);

        match chart.render() {
            Err(Error::Render { chart, reason }) => {
                assert_eq!(chart, "Lookup");
                assert!(reason.contains("not finite"), "{}", reason);
            }
            other => panic!("expected render error, got {:?}", other),
        }
    }

    #[test]
    fn traces_keep_points() {
        let chart = chart();
        assert_eq!(chart.traces().len(), 2);
        assert_eq!(chart.traces()[1].label(), "tree set");
        assert_eq!(chart.traces()[1].xs(), vec![10.0, 20.0]);
        assert_eq!(chart.traces()[1].ys(), vec![15.0, 13.0]);
    }

    #[test]
    fn render_contains_labels() {
        let svg = chart().render().unwrap();
        assert!(svg.contains("<svg"));
        assert!(svg.contains("Insertion"));
        assert!(svg.contains("Number of elements"));
        assert!(svg.contains("Duration [us]"));
        assert!(svg.contains("hash set"));
        assert!(svg.contains("tree set"));
    }

    #[test]
    fn save_overwrites_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("insert_plot.svg");
        std::fs::write(&path, "stale").unwrap();

        chart().save(&path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("<svg"));
        assert!(!content.contains("stale"));
    }

    #[test]
    fn save_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("insert_plot.svg");

        match chart().save(&path) {
            Err(Error::Io { path: failed, source }) => {
                assert_eq!(failed, path);
                assert_eq!(source.kind(), io::ErrorKind::NotFound);
            }
            other => panic!("expected io error, got {:?}", other),
        }
        assert!(!path.exists());
    }
}
