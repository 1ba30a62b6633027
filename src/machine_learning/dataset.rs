// src/machine_learning/dataset.rs
//! Synthetic datasets for exercising the reservoir
//!
//! Inputs are uniform draws from the unit cube; the classification task
//! labels a sample positive when its coordinate sum clears a threshold.
//! Generation is seeded so experiments are repeatable.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::{ReservoirError, Result};

/// Draw `count` samples uniformly from `[0, 1)^dim`.
pub fn uniform_samples(count: usize, dim: usize, seed: u64) -> Vec<Vec<f64>> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| (0..dim).map(|_| rng.gen::<f64>()).collect())
        .collect()
}

/// Label each sample 1 when its coordinate sum exceeds `threshold`.
pub fn sum_threshold_labels(samples: &[Vec<f64>], threshold: f64) -> Vec<u8> {
    samples
        .iter()
        .map(|sample| u8::from(sample.iter().sum::<f64>() > threshold))
        .collect()
}

/// Split samples and labels at `train_fraction`, preserving order.
///
/// Returns `(train_samples, train_labels, test_samples, test_labels)`.
/// Both partitions must be non-empty.
#[allow(clippy::type_complexity)]
pub fn train_test_split(
    samples: &[Vec<f64>],
    labels: &[u8],
    train_fraction: f64,
) -> Result<(Vec<Vec<f64>>, Vec<u8>, Vec<Vec<f64>>, Vec<u8>)> {
    if samples.len() != labels.len() {
        return Err(ReservoirError::DimensionMismatch(format!(
            "{} samples but {} labels",
            samples.len(),
            labels.len()
        )));
    }
    if !(0.0..=1.0).contains(&train_fraction) {
        return Err(ReservoirError::InvalidParameter(format!(
            "train fraction must lie in [0, 1], got {}",
            train_fraction
        )));
    }
    let cut = (samples.len() as f64 * train_fraction).round() as usize;
    if cut == 0 || cut == samples.len() {
        return Err(ReservoirError::InvalidParameter(
            "train/test split leaves one partition empty".into(),
        ));
    }
    Ok((
        samples[..cut].to_vec(),
        labels[..cut].to_vec(),
        samples[cut..].to_vec(),
        labels[cut..].to_vec(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn samples_are_seeded_and_in_range() {
        let a = uniform_samples(10, 3, 42);
        let b = uniform_samples(10, 3, 42);
        assert_eq!(a, b);
        assert!(a.iter().flatten().all(|&v| (0.0..1.0).contains(&v)));
    }

    #[test]
    fn labels_follow_the_threshold() {
        let samples = vec![vec![0.9, 0.9], vec![0.1, 0.2]];
        assert_eq!(sum_threshold_labels(&samples, 1.5), vec![1, 0]);
    }

    #[test]
    fn split_preserves_order_and_sizes() {
        let samples = uniform_samples(10, 2, 0);
        let labels = sum_threshold_labels(&samples, 1.0);
        let (train_x, train_y, test_x, test_y) =
            train_test_split(&samples, &labels, 0.7).unwrap();
        assert_eq!(train_x.len(), 7);
        assert_eq!(test_x.len(), 3);
        assert_eq!(train_y.len(), 7);
        assert_eq!(test_y.len(), 3);
        assert_eq!(train_x[0], samples[0]);
        assert_eq!(test_x[0], samples[7]);
    }

    #[test]
    fn degenerate_splits_are_rejected() {
        let samples = uniform_samples(4, 2, 1);
        let labels = sum_threshold_labels(&samples, 1.0);
        assert!(train_test_split(&samples, &labels, 0.0).is_err());
        assert!(train_test_split(&samples, &labels, 1.0).is_err());
        assert!(train_test_split(&samples, &labels[..2], 0.5).is_err());
    }
}
