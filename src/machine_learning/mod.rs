// src/machine_learning/mod.rs
//! Classical readout side of the reservoir computer
//!
//! The reservoir hands its feature matrix to a plain linear model; this
//! module provides that model plus synthetic data helpers for the
//! end-to-end classification scenario.

pub mod dataset;
pub mod readout;

pub use readout::{accuracy, LinearReadout};
