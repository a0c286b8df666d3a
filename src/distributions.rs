//! # Distributions
//!
//! Log-density, distribution-function and sampling routines for the
//! distributions in this crate.

pub mod unit_johnson;
