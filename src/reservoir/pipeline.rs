// src/reservoir/pipeline.rs
//! Batch feature extraction
//!
//! Runs build → encode → simulate for every input sample and stacks the
//! resulting probability vectors into a feature matrix, one row per
//! sample in input order. Samples are independent of one another, so a
//! parallel extraction path is provided; it preserves row order and
//! gives each row its own sampling generator.

use ndarray::{Array1, Array2};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{ReservoirError, Result};
use crate::reservoir::builder::GateSequenceBuilder;
use crate::reservoir::encoder::InputEncoder;
use crate::simulators::ReservoirSimulator;

/// Parameters fixing one reservoir run.
///
/// `seed` fixes the reservoir topology shared by every sample in the
/// batch. `sampling_seed` optionally pins the measurement noise: when
/// set, row `i` samples with seed `sampling_seed + i`, making the whole
/// batch reproducible; when unset, measurement sampling is stochastic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReservoirConfig {
    pub num_qubits: usize,
    pub depth: usize,
    pub seed: u64,
    pub shots: usize,
    pub sampling_seed: Option<u64>,
}

/// Orchestrates builder, encoder, and simulator over a batch of samples.
pub struct FeatureExtractionPipeline {
    config: ReservoirConfig,
    encoder: InputEncoder,
}

impl FeatureExtractionPipeline {
    /// Validate the configuration and create a pipeline with the
    /// default pass-through encoder.
    pub fn new(config: ReservoirConfig) -> Result<Self> {
        if config.num_qubits == 0 {
            return Err(ReservoirError::InvalidParameter(
                "num_qubits must be at least 1".into(),
            ));
        }
        if config.depth == 0 {
            return Err(ReservoirError::InvalidParameter(
                "depth must be at least 1".into(),
            ));
        }
        if config.shots == 0 {
            return Err(ReservoirError::InvalidParameter(
                "shots must be at least 1".into(),
            ));
        }
        Ok(FeatureExtractionPipeline {
            config,
            encoder: InputEncoder::new(),
        })
    }

    /// Replace the encoder, e.g. to pre-scale sample values.
    pub fn with_encoder(mut self, encoder: InputEncoder) -> Self {
        self.encoder = encoder;
        self
    }

    pub fn config(&self) -> &ReservoirConfig {
        &self.config
    }

    /// Width of each feature row, `2^num_qubits`.
    pub fn feature_dimension(&self) -> usize {
        1 << self.config.num_qubits
    }

    fn extract_row(&self, row: usize, sample: &[f64]) -> Result<Array1<f64>> {
        let mut circuit = GateSequenceBuilder::build(
            self.config.num_qubits,
            self.config.depth,
            self.config.seed,
        )?;
        self.encoder.encode(&mut circuit, sample)?;

        let simulator = match self.config.sampling_seed {
            Some(seed) => {
                ReservoirSimulator::with_sampling_seed(seed.wrapping_add(row as u64))
            }
            None => ReservoirSimulator::new(),
        };
        simulator.run(&circuit, self.config.shots)
    }

    /// Extract features for every sample, sequentially, stopping at the
    /// first failure. Row order equals sample order.
    pub fn extract(&self, samples: &[Vec<f64>]) -> Result<Array2<f64>> {
        info!(
            samples = samples.len(),
            qubits = self.config.num_qubits,
            depth = self.config.depth,
            shots = self.config.shots,
            "extracting reservoir features"
        );
        let rows = samples
            .iter()
            .enumerate()
            .map(|(i, sample)| self.extract_row(i, sample))
            .collect::<Result<Vec<_>>>()?;
        self.stack(rows, samples.len())
    }

    /// Parallel extraction across samples. Produces the same matrix as
    /// [`extract`](Self::extract) when a sampling seed is configured,
    /// since each row's generator is derived from its index.
    pub fn extract_parallel(&self, samples: &[Vec<f64>]) -> Result<Array2<f64>> {
        info!(
            samples = samples.len(),
            qubits = self.config.num_qubits,
            "extracting reservoir features in parallel"
        );
        let rows = samples
            .par_iter()
            .enumerate()
            .map(|(i, sample)| self.extract_row(i, sample))
            .collect::<Result<Vec<_>>>()?;
        self.stack(rows, samples.len())
    }

    fn stack(&self, rows: Vec<Array1<f64>>, sample_count: usize) -> Result<Array2<f64>> {
        let dim = self.feature_dimension();
        let mut matrix = Array2::zeros((sample_count, dim));
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != dim {
                return Err(ReservoirError::SimulationFailure(format!(
                    "feature row {} has length {}, expected {}",
                    i,
                    row.len(),
                    dim
                )));
            }
            matrix.row_mut(i).assign(&row);
        }
        Ok(matrix)
    }
}
