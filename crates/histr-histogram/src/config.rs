//! Binning configuration

use crate::axis::Axis;
use crate::binnings::{
    validate_width, ExplicitEdges, FixedWidthBins, NiceBins, StandardBins, DEFAULT_TARGET_BINS,
};
use crate::traits::BinningAlgorithm;
use histr_core::{Error, Result};
use serde::Deserialize;

/// User-facing binning options
///
/// At most one of `bin_width`, `bin_edges` and `bins` may be set. With
/// none of them, round-number bins are derived aiming for `target_bins`
/// bins.
///
/// ```rust
/// use histr_histogram::BinningConfig;
///
/// let config: BinningConfig = serde_json::from_str(r#"{ "bin_width": 0.4 }"#).unwrap();
/// assert_eq!(config.bin_width, Some(0.4));
/// assert_eq!(config.target_bins, 10);
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BinningConfig {
    /// Fixed bin width
    pub bin_width: Option<f64>,
    /// Explicit bin edges
    pub bin_edges: Option<Vec<f64>>,
    /// Number of equal bins spanning the data range
    pub bins: Option<usize>,
    /// Bin count aimed for when nothing else is set
    pub target_bins: usize,
}

impl Default for BinningConfig {
    fn default() -> Self {
        Self {
            bin_width: None,
            bin_edges: None,
            bins: None,
            target_bins: DEFAULT_TARGET_BINS,
        }
    }
}

impl BinningConfig {
    /// Validate the options and pick the binning they describe
    pub fn resolve(&self) -> Result<Binning> {
        let given: Vec<&str> = [
            ("bin_width", self.bin_width.is_some()),
            ("bin_edges", self.bin_edges.is_some()),
            ("bins", self.bins.is_some()),
        ]
        .into_iter()
        .filter_map(|(name, set)| set.then_some(name))
        .collect();
        if given.len() > 1 {
            return Err(Error::conflicting(given[0], given[1]));
        }

        if let Some(bin_width) = self.bin_width {
            validate_width(bin_width)?;
            return Ok(Binning::FixedWidth(FixedWidthBins { bin_width }));
        }
        if let Some(bin_edges) = &self.bin_edges {
            return Ok(Binning::Explicit(ExplicitEdges::new(bin_edges.clone())?));
        }
        if let Some(n_bins) = self.bins {
            if n_bins == 0 {
                return Err(Error::InvalidParameter("bins must be at least 1".to_string()));
            }
            return Ok(Binning::Standard(StandardBins::new(n_bins)));
        }
        if self.target_bins == 0 {
            return Err(Error::InvalidParameter(
                "target_bins must be at least 1".to_string(),
            ));
        }
        Ok(Binning::Nice(NiceBins::new(self.target_bins)))
    }
}

/// A resolved binning strategy
#[derive(Debug, Clone, PartialEq)]
pub enum Binning {
    Nice(NiceBins),
    FixedWidth(FixedWidthBins),
    Standard(StandardBins),
    Explicit(ExplicitEdges),
}

impl Default for Binning {
    fn default() -> Self {
        Self::Nice(NiceBins::default())
    }
}

impl BinningAlgorithm for Binning {
    fn find_axis(&self, data: &[f64]) -> Result<Axis> {
        match self {
            Self::Nice(b) => b.find_axis(data),
            Self::FixedWidth(b) => b.find_axis(data),
            Self::Standard(b) => b.find_axis(data),
            Self::Explicit(b) => b.find_axis(data),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Self::Nice(b) => b.name(),
            Self::FixedWidth(b) => b.name(),
            Self::Standard(b) => b.name(),
            Self::Explicit(b) => b.name(),
        }
    }

    fn target_bins(&self) -> Option<usize> {
        match self {
            Self::Nice(b) => b.target_bins(),
            Self::FixedWidth(b) => b.target_bins(),
            Self::Standard(b) => b.target_bins(),
            Self::Explicit(b) => b.target_bins(),
        }
    }
}
