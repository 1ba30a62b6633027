//! Error types for reservoir construction, simulation, and readout.

use thiserror::Error;

/// Errors produced by the feature-extraction pipeline and its collaborators.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ReservoirError {
    /// A structural parameter (qubit count, depth, shot count) is out of range.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// The simulation backend could not execute the circuit.
    #[error("simulation failure: {0}")]
    SimulationFailure(String),

    /// Feature matrix and label/weight dimensions do not line up.
    #[error("dimension mismatch: {0}")]
    DimensionMismatch(String),

    /// The readout's normal equations could not be solved.
    #[error("readout fit failed: {0}")]
    FitFailure(String),
}

/// Result type used throughout the crate.
pub type Result<T> = std::result::Result<T, ReservoirError>;
