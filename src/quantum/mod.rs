// src/quantum/mod.rs
//! Quantum circuit primitives for the reservoir
//!
//! This module defines the gate vocabulary, circuits as ordered gate
//! sequences, and the state-vector representation the simulator runs on.

pub mod circuit;
pub mod gate;
pub mod state;

pub use circuit::Circuit;
pub use gate::GateOp;
pub use state::{StateVector, MAX_QUBITS};
