// Copyright 2021 Twitter, Inc.
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::plot::LegendPosition;

use serde_derive::*;

/// One chart: two implementations measured under the same workload.
#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Comparison {
    name: String,
    title: String,
    #[serde(default = "default_x_desc")]
    x_desc: String,
    #[serde(default = "default_y_desc")]
    y_desc: String,
    #[serde(default)]
    legend: LegendPosition,
    #[serde(default = "default_difference")]
    difference: String,
    a: Implementation,
    b: Implementation,
}

impl Comparison {
    pub fn new(name: &str, title: &str, a: Implementation, b: Implementation) -> Self {
        Self {
            name: name.to_owned(),
            title: title.to_owned(),
            x_desc: default_x_desc(),
            y_desc: default_y_desc(),
            legend: LegendPosition::default(),
            difference: default_difference(),
            a,
            b,
        }
    }

    /// used for log messages and the output file name
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn x_desc(&self) -> &str {
        &self.x_desc
    }

    pub fn y_desc(&self) -> &str {
        &self.y_desc
    }

    pub fn legend(&self) -> LegendPosition {
        self.legend
    }

    /// legend label of the `b - a` trace
    pub fn difference(&self) -> &str {
        &self.difference
    }

    pub fn a(&self) -> &Implementation {
        &self.a
    }

    pub fn b(&self) -> &Implementation {
        &self.b
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Implementation {
    label: String,
    series: String,
}

impl Implementation {
    pub fn new(label: &str, series: &str) -> Self {
        Self {
            label: label.to_owned(),
            series: series.to_owned(),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// key passed to the series provider
    pub fn series(&self) -> &str {
        &self.series
    }
}

fn default_x_desc() -> String {
    "Number of elements".to_string()
}

fn default_y_desc() -> String {
    "Duration [ns]".to_string()
}

fn default_difference() -> String {
    "b - a".to_string()
}
