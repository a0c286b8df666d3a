//! # probdens-rs
//!
//! Probability distribution and copula log-density functions for Bayesian
//! modeling, written for the log scale throughout so likelihood code keeps
//! its precision deep in the tails.
//!
pub mod copulas;
pub mod distributions;
pub mod special;
