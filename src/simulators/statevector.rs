// src/simulators/statevector.rs
//! Statevector backend for reservoir measurement
//!
//! Executes a circuit against |0...0⟩, computes the exact Z-basis
//! outcome distribution, then draws a finite number of measurement
//! shots from it. The normalized shot tallies are the reservoir's
//! feature vector: a noisy empirical estimate of the true distribution,
//! not the distribution itself.

use ndarray::Array1;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::error::{ReservoirError, Result};
use crate::quantum::{Circuit, StateVector};

/// Measurement simulator producing normalized basis-state frequencies.
///
/// Shot sampling is stochastic by default; construct the simulator with
/// [`with_sampling_seed`](ReservoirSimulator::with_sampling_seed) to pin
/// the measurement noise for reproducible runs. Feature vectors are
/// indexed by basis state with qubit 0 as the most significant bit.
#[derive(Debug, Clone, Default)]
pub struct ReservoirSimulator {
    sampling_seed: Option<u64>,
}

impl ReservoirSimulator {
    pub fn new() -> Self {
        ReservoirSimulator {
            sampling_seed: None,
        }
    }

    /// A simulator whose measurement sampling is deterministic.
    pub fn with_sampling_seed(seed: u64) -> Self {
        ReservoirSimulator {
            sampling_seed: Some(seed),
        }
    }

    /// Execute `circuit` and return the exact outcome distribution,
    /// bypassing shot noise.
    pub fn exact_distribution(&self, circuit: &Circuit) -> Result<Array1<f64>> {
        let mut state = StateVector::zero_state(circuit.num_qubits())?;
        for gate in circuit.gates() {
            state.apply(gate)?;
        }
        Ok(state.probabilities())
    }

    /// Execute `circuit`, draw `shots` measurement samples from its
    /// outcome distribution, and normalize the tallies into a feature
    /// vector of length `2^num_qubits`.
    ///
    /// Basis states never observed among the `shots` draws contribute
    /// `0.0`. Fails with `InvalidParameter` when `shots` is zero and
    /// does not mutate the circuit.
    pub fn run(&self, circuit: &Circuit, shots: usize) -> Result<Array1<f64>> {
        if shots == 0 {
            return Err(ReservoirError::InvalidParameter(
                "shot count must be at least 1".into(),
            ));
        }

        let distribution = self.exact_distribution(circuit)?;
        debug!(
            qubits = circuit.num_qubits(),
            gates = circuit.gate_count(),
            shots,
            "sampling reservoir measurement outcomes"
        );

        let mut rng = match self.sampling_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let dim = distribution.len();
        // Rounding can leave the cumulative sum fractionally below a
        // draw; such shots must still land on a reachable outcome, not
        // on a zero-probability tail state.
        let last_reachable = distribution
            .iter()
            .rposition(|&p| p > 0.0)
            .unwrap_or(0);
        let mut counts = vec![0usize; dim];
        for _ in 0..shots {
            let draw: f64 = rng.gen();
            let mut cumulative = 0.0;
            let mut outcome = last_reachable;
            for (basis, &p) in distribution.iter().enumerate() {
                cumulative += p;
                if draw < cumulative {
                    outcome = basis;
                    break;
                }
            }
            counts[outcome] += 1;
        }

        let features = counts
            .into_iter()
            .map(|c| c as f64 / shots as f64)
            .collect::<Array1<f64>>();
        Ok(features)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quantum::GateOp;
    use std::f64::consts::PI;

    #[test]
    fn empty_circuit_measures_all_zeros() {
        let circuit = Circuit::new(2).unwrap();
        let features = ReservoirSimulator::new().run(&circuit, 50).unwrap();
        assert_eq!(features.len(), 4);
        assert_eq!(features[0], 1.0);
        assert_eq!(features[1], 0.0);
    }

    #[test]
    fn zero_shots_is_invalid() {
        let circuit = Circuit::new(1).unwrap();
        let err = ReservoirSimulator::new().run(&circuit, 0).unwrap_err();
        assert!(matches!(err, ReservoirError::InvalidParameter(_)));
    }

    #[test]
    fn seeded_sampling_is_reproducible() {
        let mut circuit = Circuit::new(2).unwrap();
        circuit.push(GateOp::RotateY(0, PI / 3.0)).unwrap();
        circuit.push(GateOp::Entangle(0, 1)).unwrap();

        let sim = ReservoirSimulator::with_sampling_seed(7);
        let a = sim.run(&circuit, 200).unwrap();
        let b = sim.run(&circuit, 200).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn feature_vector_is_a_distribution() {
        let mut circuit = Circuit::new(3).unwrap();
        circuit.push(GateOp::RotateX(0, 1.0)).unwrap();
        circuit.push(GateOp::RotateY(1, 2.2)).unwrap();
        circuit.push(GateOp::Entangle(1, 2)).unwrap();

        let features = ReservoirSimulator::with_sampling_seed(1)
            .run(&circuit, 100)
            .unwrap();
        assert_eq!(features.len(), 8);
        assert!((features.sum() - 1.0).abs() < 1e-12);
        assert!(features.iter().all(|&f| (0.0..=1.0).contains(&f)));
    }

    #[test]
    fn zero_probability_states_never_receive_counts() {
        // Ry on qubit 0 alone leaves qubit 1 untouched: only basis
        // indices 0 and 2 are reachable. No shot may be tallied to the
        // unreachable tail states, whatever the draw rounds to.
        let mut circuit = Circuit::new(2).unwrap();
        circuit.push(GateOp::RotateY(0, PI / 2.0)).unwrap();

        let features = ReservoirSimulator::with_sampling_seed(11)
            .run(&circuit, 10_000)
            .unwrap();
        assert_eq!(features[1], 0.0);
        assert_eq!(features[3], 0.0);
        assert!((features[0] + features[2] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn exact_distribution_matches_analytic_result() {
        let mut circuit = Circuit::new(1).unwrap();
        circuit.push(GateOp::RotateY(0, PI / 2.0)).unwrap();
        let dist = ReservoirSimulator::new().exact_distribution(&circuit).unwrap();
        assert!((dist[0] - 0.5).abs() < 1e-12);
        assert!((dist[1] - 0.5).abs() < 1e-12);
    }
}
