use crate::config::BinningConfig;
use crate::traits::BinningAlgorithm;
use crate::types::H1;
use histr_core::{Error, Result};
use tracing::{debug, instrument};

/// Builder for configuring and creating one-dimensional histograms.
///
/// Without any option set the bins are derived from the data. Setting
/// more than one of `bin_width`, `bin_edges` and `bins` makes
/// [`build`](H1Builder::build) fail with an invalid-parameter error.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct H1Builder {
    config: BinningConfig,
    weights: Option<Vec<f64>>,
}

impl H1Builder {
    /// Creates a builder with default binning.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a builder from a (possibly deserialized) configuration.
    pub fn with_config(config: BinningConfig) -> Self {
        Self {
            config,
            weights: None,
        }
    }

    /// Sets a fixed bin width; edges are aligned to multiples of it.
    pub fn bin_width(mut self, bin_width: f64) -> Self {
        self.config.bin_width = Some(bin_width);
        self
    }

    /// Sets explicit bin edges, used verbatim.
    pub fn bin_edges(mut self, bin_edges: impl Into<Vec<f64>>) -> Self {
        self.config.bin_edges = Some(bin_edges.into());
        self
    }

    /// Sets a number of equal bins spanning exactly the data range.
    pub fn bins(mut self, n_bins: usize) -> Self {
        self.config.bins = Some(n_bins);
        self
    }

    /// Sets the bin count aimed for by the default binning.
    pub fn target_bins(mut self, target_bins: usize) -> Self {
        self.config.target_bins = target_bins;
        self
    }

    /// Weighs each sample; must be as long as the samples passed to `build`.
    pub fn weights(mut self, weights: impl Into<Vec<f64>>) -> Self {
        self.weights = Some(weights.into());
        self
    }

    pub fn config(&self) -> &BinningConfig {
        &self.config
    }

    /// Builds the histogram of `samples`.
    #[instrument(skip_all, fields(samples = samples.len()))]
    pub fn build(&self, samples: &[f64]) -> Result<H1> {
        let binning = self.config.resolve()?;
        fill(samples, &binning, self.weights.as_deref())
    }
}

/// Bin `samples` with the given algorithm, optionally weighted
pub(crate) fn fill<B: BinningAlgorithm>(
    samples: &[f64],
    binning: &B,
    weights: Option<&[f64]>,
) -> Result<H1> {
    if let Some(weights) = weights {
        if weights.len() != samples.len() {
            return Err(Error::size_mismatch(samples.len(), weights.len(), "weights"));
        }
    }

    let axis = binning.find_axis(samples)?;
    debug!(
        binning = binning.name(),
        bins = axis.len(),
        lower = axis.lower(),
        upper = axis.upper(),
        "resolved histogram axis"
    );

    let contents = match weights {
        Some(weights) => axis.apply_weighted(samples, weights)?,
        None => axis.apply(samples),
    };
    H1::new(axis, contents)
}
