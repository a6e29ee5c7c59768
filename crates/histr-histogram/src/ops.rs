//! Operations on histograms

use crate::types::H1;
use histr_core::{Error, Result};
use std::ops::Add;

/// Operations that can be performed on histograms
pub trait HistogramOps: Sized {
    /// Add the contents of two histograms with identical edges
    fn merge(&self, other: &Self) -> Result<Self>;

    /// Multiply every bin content by `factor`
    fn scale(&self, factor: f64) -> Self;

    /// Content / (total * bin width); integrates to one
    fn densities(&self) -> Vec<f64>;

    /// Content / total; sums to one
    fn frequencies(&self) -> Vec<f64>;

    /// Running sum of contents
    fn cumulative(&self) -> Vec<f64>;
}

impl HistogramOps for H1 {
    fn merge(&self, other: &Self) -> Result<Self> {
        if !self.axis().equal_bins(other.axis()) {
            return Err(Error::InvalidInput(
                "Cannot add histograms with different axes".to_string(),
            ));
        }
        let mut others = other.bin_contents().iter();
        Ok(self.map_contents(|a| a + others.next().copied().unwrap_or(0.0)))
    }

    fn scale(&self, factor: f64) -> Self {
        self.map_contents(|c| c * factor)
    }

    fn densities(&self) -> Vec<f64> {
        let total = self.total();
        if total == 0.0 {
            return vec![0.0; self.len()];
        }
        self.bins().map(|bin| bin.value / (total * bin.width())).collect()
    }

    fn frequencies(&self) -> Vec<f64> {
        let total = self.total();
        if total == 0.0 {
            return vec![0.0; self.len()];
        }
        self.bin_contents().iter().map(|c| c / total).collect()
    }

    fn cumulative(&self) -> Vec<f64> {
        self.bin_contents()
            .iter()
            .scan(0.0, |acc, c| {
                *acc += c;
                Some(*acc)
            })
            .collect()
    }
}

impl Add<&H1> for &H1 {
    type Output = Result<H1>;

    fn add(self, other: &H1) -> Result<H1> {
        self.merge(other)
    }
}
