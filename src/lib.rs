//! histr: one-dimensional histograms with automatic, fixed-width or explicit binning
//!
//! This crate re-exports the workspace crates under one roof:
//!
//! - [`histr_core`]: the shared [`Error`] type and slice helpers
//! - [`histr_histogram`]: binning strategies, the [`H1`] histogram and its builder
//!
//! ```rust
//! use histr::prelude::*;
//!
//! let h = h1(&[1.0, 2.0, 2.04])?;
//! assert_eq!(h.bin_contents().iter().sum::<f64>(), 3.0);
//!
//! let h = H1Builder::new().bin_width(0.4).build(&[1.0, 2.0, 2.04])?;
//! assert_eq!(h.bin_contents(), &[1.0, 0.0, 0.0, 2.0]);
//! # Ok::<(), histr::Error>(())
//! ```

pub use histr_core;
pub use histr_histogram;

pub use histr_core::{Error, Result};
pub use histr_histogram::{
    h1, h1_from, h1_from_config, h1_with_binning, h1_with_edges, h1_with_width, Axis, Bin,
    Binning, BinningAlgorithm, BinningConfig, H1Builder, HistogramOps, H1,
};

/// Everything needed to build and inspect histograms
pub mod prelude {
    pub use histr_core::{Error, Result};
    pub use histr_histogram::{
        h1, h1_with_edges, h1_with_width, BinningAlgorithm, BinningConfig, H1Builder,
        HistogramOps, H1,
    };
}
