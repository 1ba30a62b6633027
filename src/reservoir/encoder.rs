// src/reservoir/encoder.rs
//! Data-dependent input encoding
//!
//! Each sample element becomes one Y rotation appended after the
//! reservoir layers. Values are used as angles unmodified: the encoding
//! deliberately performs no range reduction, so callers wanting angles
//! bounded to `[0, 2π)` must pre-scale. An optional scale factor is
//! available for that, defaulting to pass-through.

use crate::error::Result;
use crate::quantum::{Circuit, GateOp};

/// Appends per-sample encoding rotations to a reservoir circuit.
#[derive(Debug, Clone)]
pub struct InputEncoder {
    scale: f64,
}

impl Default for InputEncoder {
    fn default() -> Self {
        InputEncoder { scale: 1.0 }
    }
}

impl InputEncoder {
    /// Pass-through encoder: raw sample values are rotation angles.
    pub fn new() -> Self {
        Self::default()
    }

    /// Encoder that multiplies every value by `scale` before encoding.
    pub fn with_scale(scale: f64) -> Self {
        InputEncoder { scale }
    }

    /// Append `RotateY(i mod num_qubits, value)` for each sample
    /// element, in input order. Qubit targets wrap when the sample has
    /// more elements than the circuit has qubits. No randomness.
    pub fn encode(&self, circuit: &mut Circuit, sample: &[f64]) -> Result<()> {
        let num_qubits = circuit.num_qubits();
        for (i, &value) in sample.iter().enumerate() {
            circuit.push(GateOp::RotateY(i % num_qubits, value * self.scale))?;
        }
        Ok(())
    }
}
