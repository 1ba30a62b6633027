// src/reservoir/mod.rs
//! Reservoir construction, encoding, and batch feature extraction
//!
//! The reservoir is a fixed random circuit shared by every sample in a
//! batch; only the appended encoding rotations vary per sample.

pub mod builder;
pub mod encoder;
pub mod pipeline;

pub use builder::GateSequenceBuilder;
pub use encoder::InputEncoder;
pub use pipeline::{FeatureExtractionPipeline, ReservoirConfig};
