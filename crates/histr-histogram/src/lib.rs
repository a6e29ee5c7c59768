//! One-dimensional histograms over in-memory samples
//!
//! A histogram is built in one call from a slice of samples and an
//! optional binning choice, and is immutable afterwards. The binning is
//! one of:
//!
//! - **Default**: round-number bins (1, 2 or 5 times a power of ten)
//!   derived from the sample range, aiming for ten bins
//! - **Fixed width**: edges on multiples of a given width covering the data
//! - **Bin count**: numpy-style equal bins spanning exactly the data range
//! - **Explicit edges**: used verbatim
//!
//! Every bin is half-open `[lower, upper)` except the last, which is closed.
//! Samples outside the edges are dropped.
//!
//! # Examples
//!
//! ## Default Binning
//!
//! ```rust
//! use histr_histogram::h1;
//!
//! let h = h1(&[1.0, 2.0, 2.04]).unwrap();
//! assert_eq!(h.len(), 11);
//! assert_eq!(h.bin_contents()[0], 1.0);
//! assert_eq!(h.bin_contents()[10], 2.0);
//! ```
//!
//! ## Fixed Width or Explicit Edges
//!
//! ```rust
//! use histr_histogram::{h1_with_edges, H1Builder};
//!
//! let h = H1Builder::new().bin_width(0.4).build(&[1.0, 2.0, 2.04]).unwrap();
//! assert_eq!(h.bin_contents(), &[1.0, 0.0, 0.0, 2.0]);
//!
//! let edges = [1.0, 1.2, 1.4, 1.6, 1.8, 2.0, 2.2];
//! let h = h1_with_edges(&[1.0, 2.0, 2.04], &edges).unwrap();
//! assert_eq!(h.bin_edges(), &edges);
//! ```
//!
//! ## Histogram Operations
//!
//! ```rust
//! use histr_histogram::{h1_with_edges, HistogramOps};
//!
//! let edges = [0.0, 1.0, 2.0];
//! let a = h1_with_edges(&[0.5, 1.5], &edges).unwrap();
//! let b = h1_with_edges(&[1.5], &edges).unwrap();
//!
//! let sum = (&a + &b).unwrap();
//! assert_eq!(sum.bin_contents(), &[1.0, 2.0]);
//! assert_eq!(sum.frequencies(), vec![1.0 / 3.0, 2.0 / 3.0]);
//! ```

pub mod axis;
pub mod binnings;
pub mod builder;
pub mod config;
pub mod ops;
pub mod traits;
pub mod types;

// Re-export main types and traits
pub use axis::Axis;
pub use binnings::{ExplicitEdges, FixedWidthBins, NiceBins, StandardBins};
pub use builder::H1Builder;
pub use config::{Binning, BinningConfig};
pub use ops::HistogramOps;
pub use traits::BinningAlgorithm;
pub use types::{Bin, H1};

pub use histr_core::{Error, Result};

use histr_core::utils::to_f64_samples;
use num_traits::ToPrimitive;

// Convenience functions
/// Histogram with default round-number bins
pub fn h1(data: &[f64]) -> Result<H1> {
    builder::fill(data, &NiceBins::default(), None)
}

/// Histogram with a fixed bin width
pub fn h1_with_width(data: &[f64], bin_width: f64) -> Result<H1> {
    builder::fill(data, &FixedWidthBins::new(bin_width)?, None)
}

/// Histogram with explicit bin edges
pub fn h1_with_edges(data: &[f64], bin_edges: &[f64]) -> Result<H1> {
    builder::fill(data, &ExplicitEdges::new(bin_edges.to_vec())?, None)
}

/// Histogram with any binning algorithm
pub fn h1_with_binning(data: &[f64], binning: &impl BinningAlgorithm) -> Result<H1> {
    builder::fill(data, binning, None)
}

/// Histogram configured by a [`BinningConfig`]
pub fn h1_from_config(data: &[f64], config: &BinningConfig) -> Result<H1> {
    builder::fill(data, &config.resolve()?, None)
}

/// Histogram with default bins over samples of any primitive numeric type
pub fn h1_from<T: ToPrimitive>(data: &[T]) -> Result<H1> {
    h1(&to_f64_samples(data)?)
}

/// Build a histogram with default bins, explicit edges or a bin width
///
/// ```rust
/// use histr_histogram::h1;
///
/// let data = [0.0, 1.0];
/// let _h = h1!(&data).unwrap();
/// let _h = h1!(&data, &[0.0, 0.5, 1.0]).unwrap();
/// let _h = h1!(&data, bin_width: 0.1).unwrap();
/// ```
#[macro_export]
macro_rules! h1 {
    ($data:expr) => {
        $crate::h1($data)
    };
    ($data:expr, bin_width: $bin_width:expr) => {
        $crate::h1_with_width($data, $bin_width)
    };
    ($data:expr, $bins:expr) => {
        $crate::h1_with_edges($data, $bins)
    };
}
