//! Core types for histogram representation

use crate::axis::Axis;
use histr_core::{Error, Result};
use std::fmt;

/// A single bin of a histogram
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bin {
    /// Bin content (count, or sum of weights)
    pub value: f64,
    /// Left edge of the bin (inclusive)
    pub lower: f64,
    /// Right edge of the bin (exclusive unless `closed`)
    pub upper: f64,
    /// Whether `upper` belongs to the bin; only the last bin of a histogram is closed
    pub closed: bool,
}

impl Bin {
    /// Get the width of the bin
    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }

    /// Get the center point of the bin
    pub fn center(&self) -> f64 {
        (self.lower + self.upper) / 2.0
    }

    /// Check if a value falls within this bin
    pub fn contains(&self, value: f64) -> bool {
        value >= self.lower && (value < self.upper || (self.closed && value == self.upper))
    }
}

impl fmt::Display for Bin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let close = if self.closed { ']' } else { ')' };
        write!(f, "[{:.3}, {:.3}{close}: {}", self.lower, self.upper, self.value)
    }
}

/// A one-dimensional histogram
///
/// Immutable once built: holds the axis and one content per bin, so
/// `bin_contents().len() == bin_edges().len() - 1` always holds.
#[derive(Debug, Clone, PartialEq)]
pub struct H1 {
    axis: Axis,
    bin_contents: Vec<f64>,
}

impl H1 {
    /// Create a histogram from an axis and matching contents
    pub fn new(axis: Axis, bin_contents: Vec<f64>) -> Result<Self> {
        if axis.len() != bin_contents.len() {
            return Err(Error::size_mismatch(axis.len(), bin_contents.len(), "bin contents"));
        }
        Ok(Self { axis, bin_contents })
    }

    /// Create a histogram from raw edges and contents
    pub fn from_parts(bin_edges: Vec<f64>, bin_contents: Vec<f64>) -> Result<Self> {
        Self::new(Axis::new(bin_edges)?, bin_contents)
    }

    pub fn axis(&self) -> &Axis {
        &self.axis
    }

    pub fn bin_edges(&self) -> &[f64] {
        self.axis.bin_edges()
    }

    pub fn bin_contents(&self) -> &[f64] {
        &self.bin_contents
    }

    /// Number of bins
    pub fn len(&self) -> usize {
        self.bin_contents.len()
    }

    /// A histogram always has at least one bin
    pub fn is_empty(&self) -> bool {
        self.bin_contents.is_empty()
    }

    /// Bin `n` with its edges and content
    pub fn get_bin(&self, n: usize) -> Option<Bin> {
        let (lower, upper) = self.axis.get_bin(n)?;
        Some(Bin {
            value: self.bin_contents[n],
            lower,
            upper,
            closed: n + 1 == self.len(),
        })
    }

    /// Iterate over all bins in order
    pub fn bins(&self) -> impl Iterator<Item = Bin> + '_ {
        let last = self.len() - 1;
        self.bin_edges()
            .windows(2)
            .zip(&self.bin_contents)
            .enumerate()
            .map(move |(n, (edges, &value))| Bin {
                value,
                lower: edges[0],
                upper: edges[1],
                closed: n == last,
            })
    }

    /// Sum of all bin contents
    pub fn total(&self) -> f64 {
        self.bin_contents.iter().sum()
    }

    /// Index of the bin that `value` would be counted in
    pub fn find_bin(&self, value: f64) -> Option<usize> {
        self.axis.find_bin(value)
    }

    /// Same axis with contents transformed bin by bin
    pub(crate) fn map_contents(&self, f: impl FnMut(&f64) -> f64) -> Self {
        Self {
            axis: self.axis.clone(),
            bin_contents: self.bin_contents.iter().map(f).collect(),
        }
    }

    /// Decompose into edges and contents
    pub fn into_parts(self) -> (Vec<f64>, Vec<f64>) {
        (self.axis.into_edges(), self.bin_contents)
    }
}

impl fmt::Display for H1 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "H1({} bins, total={}, range=[{:.3}, {:.3}])",
            self.len(),
            self.total(),
            self.axis.lower(),
            self.axis.upper()
        )
    }
}
