// Copyright 2021 Twitter, Inc.
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Benchmark sweep series and the transformations applied to them before
//! plotting.

use crate::Error;

/// A named sweep: `values[i]` was measured with `sizes[i]` elements.
#[derive(Clone, Debug, PartialEq)]
pub struct Series {
    name: String,
    sizes: Vec<u64>,
    values: Vec<f64>,
}

impl Series {
    /// Build a series, checking that it is non-empty, that both sequences
    /// have the same length, that sizes strictly increase and that every value
    /// is finite.
    pub fn new(name: impl Into<String>, sizes: Vec<u64>, values: Vec<f64>) -> Result<Self, Error> {
        let name = name.into();

        if sizes.len() != values.len() {
            return Err(Error::invalid(
                &name,
                format!(
                    "{} sizes but {} values",
                    sizes.len(),
                    values.len()
                ),
            ));
        }
        if sizes.is_empty() {
            return Err(Error::invalid(&name, "no samples"));
        }
        if let Some(i) = sizes.windows(2).position(|w| w[0] >= w[1]) {
            return Err(Error::invalid(
                &name,
                format!(
                    "sizes must strictly increase, found {} followed by {} at index {}",
                    sizes[i],
                    sizes[i + 1],
                    i + 1
                ),
            ));
        }
        if let Some(i) = values.iter().position(|v| !v.is_finite()) {
            return Err(Error::invalid(
                &name,
                format!("value at index {} is not finite: {}", i, values[i]),
            ));
        }

        Ok(Self {
            name,
            sizes,
            values,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn sizes(&self) -> &[u64] {
        &self.sizes
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }

    /// `(size, value)` pairs as plot coordinates
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.sizes
            .iter()
            .zip(self.values.iter())
            .map(|(&size, &value)| (size as f64, value))
    }

    /// Convert total cost into average cost per element.
    ///
    /// Returns a new series whose `values[i]` is `values[i] / sizes[i]`. A zero
    /// element count is rejected rather than producing an infinite average.
    pub fn normalize(&self) -> Result<Series, Error> {
        if let Some(i) = self.sizes.iter().position(|&size| size == 0) {
            return Err(Error::invalid(
                &self.name,
                format!("element count is zero at index {}", i),
            ));
        }

        let values = self
            .sizes
            .iter()
            .zip(self.values.iter())
            .map(|(&size, &value)| value / size as f64)
            .collect();

        Ok(Series {
            name: self.name.clone(),
            sizes: self.sizes.clone(),
            values,
        })
    }
}

/// Pointwise `b - a` over two series sharing a size axis.
///
/// Positive values mean `b` is more expensive than `a` at that size. The
/// result reuses the sizes of `a` and is named `name`.
pub fn difference(a: &Series, b: &Series, name: impl Into<String>) -> Result<Series, Error> {
    if a.len() != b.len() {
        return Err(Error::MismatchedSeriesLength {
            a: a.name.clone(),
            a_len: a.len(),
            b: b.name.clone(),
            b_len: b.len(),
        });
    }

    if let Some(index) = a
        .sizes
        .iter()
        .zip(b.sizes.iter())
        .position(|(x, y)| x != y)
    {
        return Err(Error::MisalignedSizes {
            a: a.name.clone(),
            b: b.name.clone(),
            index,
            a_size: a.sizes[index],
            b_size: b.sizes[index],
        });
    }

    let name = name.into();
    let values: Vec<f64> = a
        .values
        .iter()
        .zip(b.values.iter())
        .map(|(x, y)| y - x)
        .collect();

    if let Some(i) = values.iter().position(|v| !v.is_finite()) {
        return Err(Error::invalid(
            &name,
            format!(
                "difference at index {} overflows: {} - {}",
                i, b.values[i], a.values[i]
            ),
        ));
    }

    Ok(Series {
        name,
        sizes: a.sizes.clone(),
        values,
    })
}

/// How two normalized series compare across a sweep
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Summary {
    /// sizes where `a` was cheaper
    pub a_cheaper: usize,
    /// sizes where `b` was cheaper
    pub b_cheaper: usize,
    pub ties: usize,
}

impl Summary {
    /// Tally a `b - a` difference series.
    pub fn from_difference(diff: &Series) -> Self {
        let mut summary = Summary {
            a_cheaper: 0,
            b_cheaper: 0,
            ties: 0,
        };
        for &value in diff.values() {
            if value > 0.0 {
                summary.a_cheaper += 1;
            } else if value < 0.0 {
                summary.b_cheaper += 1;
            } else {
                summary.ties += 1;
            }
        }
        summary
    }
}
