//! Quantum Reservoir Computing Feature Extractor
//!
//! This crate projects low-dimensional classical inputs through a
//! fixed, randomly-parameterized quantum circuit (the reservoir) and
//! measures the result, turning each input into a probability
//! distribution over computational basis states. A linear readout
//! trained on those feature vectors performs binary classification.
//!
//! The pipeline per sample: [`reservoir::GateSequenceBuilder`]
//! reconstructs the seeded reservoir layers, [`reservoir::InputEncoder`]
//! appends the sample's Y rotations, and
//! [`simulators::ReservoirSimulator`] samples the measurement
//! distribution under a finite shot budget.

pub mod error;
pub mod machine_learning;
pub mod quantum;
pub mod reservoir;
pub mod simulators;

/// Re-exports of the commonly used types.
pub mod prelude {
    pub use crate::error::{ReservoirError, Result};
    pub use crate::machine_learning::{accuracy, LinearReadout};
    pub use crate::quantum::{Circuit, GateOp, StateVector};
    pub use crate::reservoir::{
        FeatureExtractionPipeline, GateSequenceBuilder, InputEncoder, ReservoirConfig,
    };
    pub use crate::simulators::ReservoirSimulator;
}

// Version and crate information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const CRATE_NAME: &str = env!("CARGO_PKG_NAME");
