// src/quantum/state.rs
//! State vector representation of the reservoir's quantum state
//!
//! Basis states are indexed big-endian: qubit 0's measurement outcome is
//! the most significant bit of the basis index. The simulator and the
//! feature-vector layout both rely on this convention.

use ndarray::Array1;
use num_complex::Complex64;

use crate::error::{ReservoirError, Result};
use crate::quantum::gate::GateOp;

/// Largest register this backend will allocate a statevector for.
/// 2^24 amplitudes is already a 256 MiB allocation.
pub const MAX_QUBITS: usize = 24;

/// A pure quantum state over `2^num_qubits` complex amplitudes.
#[derive(Debug, Clone)]
pub struct StateVector {
    num_qubits: usize,
    amplitudes: Array1<Complex64>,
}

impl StateVector {
    /// Create the all-zero computational basis state |00...0⟩.
    pub fn zero_state(num_qubits: usize) -> Result<Self> {
        if num_qubits == 0 {
            return Err(ReservoirError::InvalidParameter(
                "state requires at least one qubit".into(),
            ));
        }
        if num_qubits > MAX_QUBITS {
            return Err(ReservoirError::SimulationFailure(format!(
                "cannot allocate a statevector for {} qubits (limit {})",
                num_qubits, MAX_QUBITS
            )));
        }
        let mut amplitudes = Array1::zeros(1 << num_qubits);
        amplitudes[0] = Complex64::new(1.0, 0.0);
        Ok(StateVector {
            num_qubits,
            amplitudes,
        })
    }

    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    pub fn dimension(&self) -> usize {
        1 << self.num_qubits
    }

    pub fn amplitudes(&self) -> &Array1<Complex64> {
        &self.amplitudes
    }

    /// Probability of measuring the basis state with index `basis`.
    pub fn probability(&self, basis: usize) -> f64 {
        if basis >= self.dimension() {
            return 0.0;
        }
        self.amplitudes[basis].norm_sqr()
    }

    /// Measurement probabilities over all basis states, index order.
    pub fn probabilities(&self) -> Array1<f64> {
        self.amplitudes.mapv(|amp| amp.norm_sqr())
    }

    /// Apply one gate operation in place.
    pub fn apply(&mut self, gate: &GateOp) -> Result<()> {
        for q in gate.qubits() {
            if q >= self.num_qubits {
                return Err(ReservoirError::SimulationFailure(format!(
                    "gate {} references qubit {} but state has {} qubits",
                    gate.name(),
                    q,
                    self.num_qubits
                )));
            }
        }
        match *gate {
            GateOp::RotateX(q, _) | GateOp::RotateY(q, _) | GateOp::RotateZ(q, _) => {
                // rotation_matrix is Some for every rotation variant
                let matrix = gate.rotation_matrix().ok_or_else(|| {
                    ReservoirError::SimulationFailure(format!(
                        "no unitary available for gate {}",
                        gate.name()
                    ))
                })?;
                self.apply_single_qubit(q, &matrix);
            }
            GateOp::Entangle(control, target) => {
                if control == target {
                    return Err(ReservoirError::SimulationFailure(
                        "entangler control and target coincide".into(),
                    ));
                }
                self.apply_cnot(control, target);
            }
        }
        Ok(())
    }

    fn bit_mask(&self, qubit: usize) -> usize {
        // Big-endian: qubit 0 occupies the most significant bit.
        1 << (self.num_qubits - 1 - qubit)
    }

    fn apply_single_qubit(&mut self, qubit: usize, matrix: &ndarray::Array2<Complex64>) {
        let mask = self.bit_mask(qubit);
        let dim = self.dimension();
        for i in 0..dim {
            if i & mask == 0 {
                let j = i | mask;
                let a0 = self.amplitudes[i];
                let a1 = self.amplitudes[j];
                self.amplitudes[i] = matrix[[0, 0]] * a0 + matrix[[0, 1]] * a1;
                self.amplitudes[j] = matrix[[1, 0]] * a0 + matrix[[1, 1]] * a1;
            }
        }
    }

    fn apply_cnot(&mut self, control: usize, target: usize) {
        let cmask = self.bit_mask(control);
        let tmask = self.bit_mask(target);
        let dim = self.dimension();
        for i in 0..dim {
            if i & cmask != 0 && i & tmask == 0 {
                let j = i | tmask;
                self.amplitudes.swap(i, j);
            }
        }
    }
}
