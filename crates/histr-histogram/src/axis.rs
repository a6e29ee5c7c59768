//! Bin edges and sample-to-bin lookup

use histr_core::utils::is_strictly_increasing;
use histr_core::{Error, Result};

/// A validated sequence of bin edges
///
/// `N + 1` strictly increasing, finite edges define `N` bins. Every bin is
/// half-open `[left, right)` except the last, which also includes its right
/// edge.
#[derive(Debug, Clone, PartialEq)]
pub struct Axis {
    bin_edges: Vec<f64>,
}

impl Axis {
    /// Create an axis from explicit edges
    pub fn new(bin_edges: Vec<f64>) -> Result<Self> {
        if bin_edges.len() < 2 {
            return Err(Error::InvalidParameter(format!(
                "bin_edges needs at least 2 values, got {}",
                bin_edges.len()
            )));
        }
        if bin_edges.iter().any(|e| !e.is_finite()) {
            return Err(Error::InvalidParameter(
                "bin_edges must be finite".to_string(),
            ));
        }
        if !is_strictly_increasing(&bin_edges) {
            return Err(Error::InvalidParameter(
                "bin_edges must be strictly increasing".to_string(),
            ));
        }
        Ok(Self { bin_edges })
    }

    /// Total number of bins
    pub fn len(&self) -> usize {
        self.bin_edges.len() - 1
    }

    /// An axis always has at least one bin
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn bin_edges(&self) -> &[f64] {
        &self.bin_edges
    }

    pub fn into_edges(self) -> Vec<f64> {
        self.bin_edges
    }

    /// Lower and upper edge of bin `n`
    pub fn get_bin(&self, n: usize) -> Option<(f64, f64)> {
        if n < self.len() {
            Some((self.bin_edges[n], self.bin_edges[n + 1]))
        } else {
            None
        }
    }

    /// Lowest edge
    pub fn lower(&self) -> f64 {
        self.bin_edges[0]
    }

    /// Highest edge
    pub fn upper(&self) -> f64 {
        self.bin_edges[self.bin_edges.len() - 1]
    }

    /// Index of the bin containing `value`, or `None` when it lies outside
    pub fn find_bin(&self, value: f64) -> Option<usize> {
        if value.is_nan() || value < self.lower() || value > self.upper() {
            return None;
        }
        if value == self.upper() {
            return Some(self.len() - 1);
        }
        // First edge strictly greater than value, minus one
        let idx = self.bin_edges.partition_point(|&edge| edge <= value);
        Some(idx - 1)
    }

    /// Count samples per bin; samples outside the axis are dropped
    pub fn apply(&self, data: &[f64]) -> Vec<f64> {
        let mut contents = vec![0.0; self.len()];
        for &value in data {
            if let Some(bin) = self.find_bin(value) {
                contents[bin] += 1.0;
            }
        }
        contents
    }

    /// Sum weights per bin
    pub fn apply_weighted(&self, data: &[f64], weights: &[f64]) -> Result<Vec<f64>> {
        if data.len() != weights.len() {
            return Err(Error::size_mismatch(data.len(), weights.len(), "weights"));
        }
        let mut contents = vec![0.0; self.len()];
        for (&value, &weight) in data.iter().zip(weights) {
            if let Some(bin) = self.find_bin(value) {
                contents[bin] += weight;
            }
        }
        Ok(contents)
    }

    /// Whether both axes have exactly the same edges
    pub fn equal_bins(&self, other: &Axis) -> bool {
        self.bin_edges == other.bin_edges
    }
}

impl TryFrom<&[f64]> for Axis {
    type Error = Error;

    fn try_from(edges: &[f64]) -> Result<Self> {
        Axis::new(edges.to_vec())
    }
}
