//! Various binning strategies

use crate::axis::Axis;
use crate::traits::BinningAlgorithm;
use histr_core::utils::{ensure_no_nan, finite_min_max};
use histr_core::{Error, Result};
use tracing::trace;

/// Upper limit on the number of bins a derived binning may produce
pub const MAX_BINS: usize = 1_000_000;

/// Default number of bins aimed for by [`NiceBins`]
pub const DEFAULT_TARGET_BINS: usize = 10;

/// Largest integer an `f64` holds exactly
const MAX_EXACT_INDEX: f64 = 9_007_199_254_740_992.0;

/// Round-number bins covering the data
///
/// Picks a width of 1, 2 or 5 times a power of ten so that roughly
/// `target_bins` bins span the sample range, then lays the bins out
/// like [`FixedWidthBins`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NiceBins {
    pub target_bins: usize,
}

impl Default for NiceBins {
    fn default() -> Self {
        Self {
            target_bins: DEFAULT_TARGET_BINS,
        }
    }
}

impl NiceBins {
    pub fn new(target_bins: usize) -> Self {
        Self { target_bins }
    }
}

/// Round `range / target_bins` to a 1-2-5 step
///
/// With `raw = range / target_bins` and `raw = f * 10^e`, `1 <= f < 10`,
/// the step is `f'` times `10^e` where `f'` is 1 for `f < 1.5`, 2 for
/// `f < 3`, 5 for `f < 7` and 10 otherwise. Negative exponents divide by
/// `10^-e` so that e.g. a tenth comes out as the literal `0.1`.
///
/// Returns `None` when `raw` is zero, subnormal or not finite, or when
/// the rounded step does not fit in an `f64`.
pub fn nice_width(range: f64, target_bins: usize) -> Option<f64> {
    let raw = range / target_bins as f64;
    if !(raw.is_normal() && raw > 0.0) {
        return None;
    }
    let exponent = raw.log10().floor() as i32;
    let magnitude = 10f64.powi(exponent.abs());
    let fraction = if exponent < 0 {
        raw * magnitude
    } else {
        raw / magnitude
    };

    let nice = if fraction < 1.5 {
        1.0
    } else if fraction < 3.0 {
        2.0
    } else if fraction < 7.0 {
        5.0
    } else {
        10.0
    };

    let width = if exponent < 0 {
        nice / magnitude
    } else {
        nice * magnitude
    };
    (width.is_finite() && width > 0.0).then_some(width)
}

impl BinningAlgorithm for NiceBins {
    fn find_axis(&self, data: &[f64]) -> Result<Axis> {
        if self.target_bins == 0 {
            return Err(Error::InvalidParameter(
                "target_bins must be at least 1".to_string(),
            ));
        }
        let (min, max) = finite_min_max(data)?;

        // A single distinct value still gets a unit-wide range
        let range = if min == max { 1.0 } else { max - min };
        if !range.is_finite() {
            return Err(Error::non_finite("sample range"));
        }

        let bin_width = nice_width(range, self.target_bins).ok_or_else(|| {
            Error::Computation(format!("cannot derive a bin width for range {range}"))
        })?;
        trace!(range, bin_width, "derived default bin width");

        fixed_width_edges(min, max, bin_width)
    }

    fn name(&self) -> &'static str {
        "nice"
    }

    fn target_bins(&self) -> Option<usize> {
        Some(self.target_bins)
    }
}

/// Bins of a fixed width aligned to multiples of that width
///
/// The first edge is the largest multiple of `bin_width` not above the
/// smallest sample; edges continue until one lies strictly above the
/// largest sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedWidthBins {
    pub bin_width: f64,
}

impl FixedWidthBins {
    /// Create a fixed-width binning, rejecting non-positive widths
    pub fn new(bin_width: f64) -> Result<Self> {
        validate_width(bin_width)?;
        Ok(Self { bin_width })
    }
}

impl BinningAlgorithm for FixedWidthBins {
    fn find_axis(&self, data: &[f64]) -> Result<Axis> {
        validate_width(self.bin_width)?;
        let (min, max) = finite_min_max(data)?;
        fixed_width_edges(min, max, self.bin_width)
    }

    fn name(&self) -> &'static str {
        "fixed-width"
    }
}

pub(crate) fn validate_width(bin_width: f64) -> Result<()> {
    if bin_width.is_finite() && bin_width > 0.0 {
        Ok(())
    } else {
        Err(Error::invalid_width(bin_width))
    }
}

/// Edges `k * bin_width` for consecutive integers `k` covering `[min, max]`
fn fixed_width_edges(min: f64, max: f64, bin_width: f64) -> Result<Axis> {
    // The quotient may round across an integer either way
    let mut start = (min / bin_width).floor();
    if start * bin_width > min {
        start -= 1.0;
    } else if (start + 1.0) * bin_width <= min {
        start += 1.0;
    }
    let stop = (max / bin_width).floor() + 1.0;

    if !(start.abs() < MAX_EXACT_INDEX && stop.abs() < MAX_EXACT_INDEX) {
        return Err(Error::Computation(format!(
            "bin width {bin_width} is too small for samples in [{min}, {max}]"
        )));
    }
    if stop - start > MAX_BINS as f64 {
        return Err(Error::InvalidParameter(format!(
            "bin width {bin_width} would produce more than {MAX_BINS} bins"
        )));
    }

    let mut edges = Vec::with_capacity((stop - start) as usize + 2);
    let mut k = start;
    loop {
        let edge = k * bin_width;
        edges.push(edge);
        if edge > max {
            break;
        }
        k += 1.0;
    }

    Axis::new(edges).map_err(|_| {
        Error::Computation(format!(
            "bin width {bin_width} cannot be resolved for samples in [{min}, {max}]"
        ))
    })
}

/// StandardBins splits the data range into `n_bins` equal bins
///
/// This mimics numpy.histogram with a number of bins: the first edge is
/// the minimum and the last edge is exactly the maximum, which the closed
/// last bin then counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StandardBins {
    pub n_bins: usize,
}

impl StandardBins {
    pub fn new(n_bins: usize) -> Self {
        Self { n_bins }
    }

    fn split_interval(&self, min: f64, max: f64) -> Result<Axis> {
        // numpy widens a degenerate interval by half a unit each side
        let (min, max) = if min == max {
            (min - 0.5, max + 0.5)
        } else {
            (min, max)
        };
        let bin_width = (max - min) / self.n_bins as f64;

        // Compute all edges but the last to avoid rounding errors
        let mut edges: Vec<f64> = (0..self.n_bins)
            .map(|i| i as f64 * bin_width + min)
            .collect();
        edges.push(max);

        Axis::new(edges).map_err(|_| {
            Error::Computation(format!(
                "cannot split [{min}, {max}] into {} bins",
                self.n_bins
            ))
        })
    }
}

impl BinningAlgorithm for StandardBins {
    fn find_axis(&self, data: &[f64]) -> Result<Axis> {
        if self.n_bins == 0 || self.n_bins > MAX_BINS {
            return Err(Error::InvalidParameter(format!(
                "bins must be between 1 and {MAX_BINS}, got {}",
                self.n_bins
            )));
        }
        let (min, max) = finite_min_max(data)?;
        self.split_interval(min, max)
    }

    fn name(&self) -> &'static str {
        "standard"
    }

    fn target_bins(&self) -> Option<usize> {
        Some(self.n_bins)
    }
}

/// Caller-supplied edges, used verbatim
#[derive(Debug, Clone, PartialEq)]
pub struct ExplicitEdges {
    axis: Axis,
}

impl ExplicitEdges {
    pub fn new(bin_edges: Vec<f64>) -> Result<Self> {
        Ok(Self {
            axis: Axis::new(bin_edges)?,
        })
    }
}

impl From<Axis> for ExplicitEdges {
    fn from(axis: Axis) -> Self {
        Self { axis }
    }
}

impl BinningAlgorithm for ExplicitEdges {
    fn find_axis(&self, data: &[f64]) -> Result<Axis> {
        ensure_no_nan(data, "data")?;
        Ok(self.axis.clone())
    }

    fn name(&self) -> &'static str {
        "explicit"
    }

    fn target_bins(&self) -> Option<usize> {
        Some(self.axis.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn assert_edges(axis: &Axis, expected: &[f64]) {
        assert_eq!(axis.bin_edges().len(), expected.len(), "{:?}", axis.bin_edges());
        for (a, b) in axis.bin_edges().iter().zip(expected) {
            assert_abs_diff_eq!(a, b, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_nice_width() {
        assert_eq!(nice_width(1.04, 10), Some(0.1));
        assert_eq!(nice_width(1.0, 10), Some(0.1));
        assert_eq!(nice_width(2.0, 10), Some(0.2));
        assert_eq!(nice_width(4.0, 10), Some(0.5));
        assert_eq!(nice_width(8.0, 10), Some(1.0));
        assert_eq!(nice_width(250.0, 10), Some(20.0));
        assert_eq!(nice_width(0.05, 10), Some(0.005));
    }

    #[test]
    fn test_nice_width_degenerate_ranges() {
        assert_eq!(nice_width(5e-324, 10), None);
        assert_eq!(nice_width(1e-310, 10), None);
        assert_eq!(nice_width(0.0, 10), None);
        assert_eq!(nice_width(f64::INFINITY, 10), None);
        // Rounds up past f64::MAX
        assert_eq!(nice_width(f64::MAX, 1), None);
    }

    #[test]
    fn test_nice_bins_subnormal_range_is_an_error() {
        for data in [[0.0, 5e-324], [0.0, 1e-310]] {
            assert!(matches!(
                NiceBins::default().find_axis(&data),
                Err(Error::Computation(_))
            ));
            assert!(matches!(crate::h1(&data), Err(Error::Computation(_))));
        }
    }

    #[test]
    fn test_nice_bins_default() {
        let axis = NiceBins::default().find_axis(&[1.0, 2.0, 2.04]).unwrap();
        assert_edges(
            &axis,
            &[1.0, 1.1, 1.2, 1.3, 1.4, 1.5, 1.6, 1.7, 1.8, 1.9, 2.0, 2.1],
        );
    }

    #[test]
    fn test_nice_bins_single_value() {
        let axis = NiceBins::default().find_axis(&[3.0, 3.0]).unwrap();
        assert_edges(&axis, &[3.0, 3.1]);
        assert_eq!(axis.find_bin(3.0), Some(0));
    }

    #[test]
    fn test_nice_bins_rejects_zero_target() {
        assert!(matches!(
            NiceBins::new(0).find_axis(&[1.0]),
            Err(Error::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_fixed_width_alignment() {
        let axis = FixedWidthBins::new(0.4).unwrap().find_axis(&[1.0, 2.0, 2.04]).unwrap();
        assert_edges(&axis, &[0.8, 1.2, 1.6, 2.0, 2.4]);
        assert!(axis.lower() <= 1.0);
    }

    #[test]
    fn test_fixed_width_negative_samples() {
        let axis = FixedWidthBins::new(1.0).unwrap().find_axis(&[-2.5, 0.0]).unwrap();
        assert_edges(&axis, &[-3.0, -2.0, -1.0, 0.0, 1.0]);
    }

    #[test]
    fn test_fixed_width_max_on_edge_gets_own_bin() {
        let axis = FixedWidthBins::new(1.0).unwrap().find_axis(&[0.0, 2.0]).unwrap();
        assert_edges(&axis, &[0.0, 1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_fixed_width_invalid() {
        for width in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(FixedWidthBins::new(width), Err(Error::InvalidParameter(_))));
            let bins = FixedWidthBins { bin_width: width };
            assert!(matches!(bins.find_axis(&[1.0]), Err(Error::InvalidParameter(_))));
        }
    }

    #[test]
    fn test_fixed_width_too_many_bins() {
        let bins = FixedWidthBins::new(1e-9).unwrap();
        assert!(matches!(bins.find_axis(&[0.0, 1.0]), Err(Error::InvalidParameter(_))));
    }

    #[test]
    fn test_derived_binnings_reject_bad_data() {
        let bins = FixedWidthBins::new(0.5).unwrap();
        assert!(matches!(bins.find_axis(&[]), Err(Error::InsufficientData { .. })));
        assert!(matches!(bins.find_axis(&[f64::NAN]), Err(Error::InvalidInput(_))));
        assert!(matches!(
            NiceBins::default().find_axis(&[1.0, f64::INFINITY]),
            Err(Error::InvalidInput(_))
        ));
    }

    #[test]
    fn test_standard_bins() {
        let axis = StandardBins::new(4).find_axis(&[0.0, 0.1, 1.0]).unwrap();
        assert_eq!(axis.bin_edges(), &[0.0, 0.25, 0.5, 0.75, 1.0]);

        let axis = StandardBins::new(2).find_axis(&[5.0]).unwrap();
        assert_eq!(axis.bin_edges(), &[4.5, 5.0, 5.5]);

        assert!(matches!(
            StandardBins::new(0).find_axis(&[1.0]),
            Err(Error::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_explicit_edges() {
        let edges = vec![1.0, 1.2, 1.4, 1.6, 1.8, 2.0, 2.2];
        let binning = ExplicitEdges::new(edges.clone()).unwrap();
        assert_eq!(binning.find_axis(&[1.0, 2.0]).unwrap().bin_edges(), &edges[..]);
        assert_eq!(binning.find_axis(&[]).unwrap().len(), 6);
        assert!(matches!(binning.find_axis(&[f64::NAN]), Err(Error::InvalidInput(_))));
        assert_eq!(binning.target_bins(), Some(6));
        assert!(ExplicitEdges::new(vec![1.0]).is_err());
    }
}
