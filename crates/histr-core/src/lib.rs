//! Core types shared across the histr crates
//!
//! This crate holds the pieces every histogram crate needs but that carry
//! no binning logic of their own: the unified [`Error`] type and a handful
//! of slice helpers for validating and converting samples.

pub mod error;
pub mod utils;

pub use error::{Error, Result};
