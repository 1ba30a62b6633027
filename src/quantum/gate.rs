// src/quantum/gate.rs
//! Gate operations for reservoir circuits
//!
//! The reservoir only ever needs single-qubit rotations and a
//! nearest-neighbor entangler, so gates are a plain tagged enum rather
//! than trait objects. Circuit order is significant: gates are applied
//! in list order.

use ndarray::{array, Array2};
use num_complex::Complex64;
use serde::{Deserialize, Serialize};

/// A single operation in a reservoir circuit.
///
/// Rotation angles are in radians. Qubit indices must lie in
/// `[0, num_qubits)` of the owning [`Circuit`](crate::quantum::Circuit);
/// the circuit validates them on append.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GateOp {
    /// Rotation around the X axis: `RotateX(qubit, angle)`.
    RotateX(usize, f64),
    /// Rotation around the Y axis: `RotateY(qubit, angle)`.
    RotateY(usize, f64),
    /// Rotation around the Z axis: `RotateZ(qubit, angle)`.
    RotateZ(usize, f64),
    /// CNOT entangler: `Entangle(control, target)`.
    Entangle(usize, usize),
}

impl GateOp {
    /// The qubits this operation touches, control first for `Entangle`.
    pub fn qubits(&self) -> Vec<usize> {
        match *self {
            GateOp::RotateX(q, _) | GateOp::RotateY(q, _) | GateOp::RotateZ(q, _) => vec![q],
            GateOp::Entangle(c, t) => vec![c, t],
        }
    }

    /// The 2x2 unitary for a rotation, or `None` for the entangler
    /// (which is applied by amplitude permutation, not by matrix).
    pub fn rotation_matrix(&self) -> Option<Array2<Complex64>> {
        match *self {
            GateOp::RotateX(_, theta) => {
                let cos = (theta / 2.0).cos();
                let sin = (theta / 2.0).sin();
                Some(array![
                    [Complex64::new(cos, 0.0), Complex64::new(0.0, -sin)],
                    [Complex64::new(0.0, -sin), Complex64::new(cos, 0.0)]
                ])
            }
            GateOp::RotateY(_, theta) => {
                let cos = (theta / 2.0).cos();
                let sin = (theta / 2.0).sin();
                Some(array![
                    [Complex64::new(cos, 0.0), Complex64::new(-sin, 0.0)],
                    [Complex64::new(sin, 0.0), Complex64::new(cos, 0.0)]
                ])
            }
            GateOp::RotateZ(_, theta) => {
                let phase_pos = Complex64::new(0.0, theta / 2.0).exp();
                let phase_neg = Complex64::new(0.0, -theta / 2.0).exp();
                Some(array![
                    [phase_neg, Complex64::new(0.0, 0.0)],
                    [Complex64::new(0.0, 0.0), phase_pos]
                ])
            }
            GateOp::Entangle(_, _) => None,
        }
    }

    /// Display name, angle included for rotations.
    pub fn name(&self) -> String {
        match *self {
            GateOp::RotateX(q, theta) => format!("Rx[{}]({:.2})", q, theta),
            GateOp::RotateY(q, theta) => format!("Ry[{}]({:.2})", q, theta),
            GateOp::RotateZ(q, theta) => format!("Rz[{}]({:.2})", q, theta),
            GateOp::Entangle(c, t) => format!("CNOT[{},{}]", c, t),
        }
    }
}
