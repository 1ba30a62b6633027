// src/quantum/circuit.rs
//! Reservoir circuits as ordered gate sequences
//!
//! A [`Circuit`] owns a fixed qubit count and an ordered list of
//! [`GateOp`]s. Execution order equals list order; that ordering is an
//! invariant of the design, not an implementation detail.

use serde::{Deserialize, Serialize};

use crate::error::{ReservoirError, Result};
use crate::quantum::gate::GateOp;

/// An ordered sequence of gate operations on a fixed number of qubits.
///
/// Circuits are built once per input sample: the reservoir layers are
/// reconstructed identically from a fixed seed, then the sample's
/// encoding rotations are appended, and the circuit is consumed by a
/// single simulator run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Circuit {
    num_qubits: usize,
    gates: Vec<GateOp>,
}

impl Circuit {
    /// Create an empty circuit on `num_qubits` qubits.
    pub fn new(num_qubits: usize) -> Result<Self> {
        if num_qubits == 0 {
            return Err(ReservoirError::InvalidParameter(
                "circuit requires at least one qubit".into(),
            ));
        }
        Ok(Circuit {
            num_qubits,
            gates: Vec::new(),
        })
    }

    /// Append a gate, validating its qubit indices against this circuit.
    pub fn push(&mut self, gate: GateOp) -> Result<()> {
        for q in gate.qubits() {
            if q >= self.num_qubits {
                return Err(ReservoirError::InvalidParameter(format!(
                    "gate {} references qubit {} but circuit has {} qubits",
                    gate.name(),
                    q,
                    self.num_qubits
                )));
            }
        }
        if let GateOp::Entangle(c, t) = gate {
            if c == t {
                return Err(ReservoirError::InvalidParameter(format!(
                    "entangler control and target must differ, got qubit {}",
                    c
                )));
            }
        }
        self.gates.push(gate);
        Ok(())
    }

    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// Dimension of the underlying Hilbert space, `2^num_qubits`.
    pub fn dimension(&self) -> usize {
        1 << self.num_qubits
    }

    pub fn gate_count(&self) -> usize {
        self.gates.len()
    }

    /// The gates in execution order.
    pub fn gates(&self) -> &[GateOp] {
        &self.gates
    }
}
