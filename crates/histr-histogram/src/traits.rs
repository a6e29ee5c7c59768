//! Core traits for histogram binning

use crate::axis::Axis;
use histr_core::Result;

/// Strategy that decides where the bin edges go for a given sample
pub trait BinningAlgorithm {
    /// Find the axis to bin `data` into
    fn find_axis(&self, data: &[f64]) -> Result<Axis>;

    /// Short name used in log output
    fn name(&self) -> &'static str;

    /// Get the target number of bins (if known before seeing data)
    fn target_bins(&self) -> Option<usize> {
        None
    }
}

impl<B: BinningAlgorithm + ?Sized> BinningAlgorithm for &B {
    fn find_axis(&self, data: &[f64]) -> Result<Axis> {
        (**self).find_axis(data)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn target_bins(&self) -> Option<usize> {
        (**self).target_bins()
    }
}
