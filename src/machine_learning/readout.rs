// src/machine_learning/readout.rs
//! Linear readout over reservoir features
//!
//! A ridge-regularized least-squares model: fit solves the normal
//! equations on the feature matrix (with a bias column), predict is a
//! dot product, and classification thresholds predictions at 0.5. This
//! is deliberately plain linear regression used as a classifier; all of
//! the nonlinearity lives in the reservoir.

use ndarray::{s, Array1, Array2};

use crate::error::{ReservoirError, Result};

/// Linear regression readout with a bias term.
#[derive(Debug, Clone)]
pub struct LinearReadout {
    ridge: f64,
    weights: Option<Array1<f64>>,
}

impl Default for LinearReadout {
    fn default() -> Self {
        LinearReadout {
            ridge: 1e-6,
            weights: None,
        }
    }
}

impl LinearReadout {
    pub fn new() -> Self {
        Self::default()
    }

    /// Readout with an explicit ridge coefficient. A small positive
    /// value keeps the normal equations solvable when feature columns
    /// are collinear, which happens whenever some basis states are
    /// never observed.
    pub fn with_ridge(ridge: f64) -> Self {
        LinearReadout {
            ridge,
            weights: None,
        }
    }

    /// Fit weights to binary labels by solving
    /// `(XᵀX + λI) w = Xᵀy` over the bias-augmented feature matrix.
    pub fn fit(&mut self, features: &Array2<f64>, labels: &[u8]) -> Result<()> {
        if features.nrows() != labels.len() {
            return Err(ReservoirError::DimensionMismatch(format!(
                "{} feature rows but {} labels",
                features.nrows(),
                labels.len()
            )));
        }
        if features.nrows() == 0 {
            return Err(ReservoirError::DimensionMismatch(
                "cannot fit readout on an empty feature matrix".into(),
            ));
        }

        let x = augment_with_bias(features);
        let y = Array1::from_iter(labels.iter().map(|&l| f64::from(l)));

        let mut gram = x.t().dot(&x);
        for i in 0..gram.nrows() {
            gram[[i, i]] += self.ridge;
        }
        let moment = x.t().dot(&y);

        self.weights = Some(solve_linear_system(gram, moment)?);
        Ok(())
    }

    /// Raw real-valued predictions, one per feature row.
    pub fn predict(&self, features: &Array2<f64>) -> Result<Array1<f64>> {
        let weights = self.weights.as_ref().ok_or_else(|| {
            ReservoirError::FitFailure("readout has not been fitted".into())
        })?;
        let x = augment_with_bias(features);
        if x.ncols() != weights.len() {
            return Err(ReservoirError::DimensionMismatch(format!(
                "feature width {} does not match fitted width {}",
                x.ncols() - 1,
                weights.len() - 1
            )));
        }
        Ok(x.dot(weights))
    }

    /// Predictions thresholded at 0.5 into binary labels.
    pub fn classify(&self, features: &Array2<f64>) -> Result<Vec<u8>> {
        let predictions = self.predict(features)?;
        Ok(predictions
            .iter()
            .map(|&p| u8::from(p > 0.5))
            .collect())
    }
}

/// Fraction of positions where predicted and expected labels agree.
pub fn accuracy(predicted: &[u8], expected: &[u8]) -> f64 {
    if predicted.is_empty() || predicted.len() != expected.len() {
        return 0.0;
    }
    let matches = predicted
        .iter()
        .zip(expected)
        .filter(|(p, e)| p == e)
        .count();
    matches as f64 / predicted.len() as f64
}

fn augment_with_bias(features: &Array2<f64>) -> Array2<f64> {
    let mut x = Array2::ones((features.nrows(), features.ncols() + 1));
    x.slice_mut(s![.., ..features.ncols()]).assign(features);
    x
}

/// Gaussian elimination with partial pivoting.
fn solve_linear_system(mut a: Array2<f64>, mut b: Array1<f64>) -> Result<Array1<f64>> {
    let n = a.nrows();
    if a.ncols() != n || b.len() != n {
        return Err(ReservoirError::DimensionMismatch(
            "normal equations are not square".into(),
        ));
    }

    for col in 0..n {
        let mut pivot_row = col;
        let mut pivot_mag = a[[col, col]].abs();
        for row in (col + 1)..n {
            let mag = a[[row, col]].abs();
            if mag > pivot_mag {
                pivot_row = row;
                pivot_mag = mag;
            }
        }
        if pivot_mag < 1e-12 {
            return Err(ReservoirError::FitFailure(
                "normal equations are singular".into(),
            ));
        }
        if pivot_row != col {
            for k in 0..n {
                let tmp = a[[col, k]];
                a[[col, k]] = a[[pivot_row, k]];
                a[[pivot_row, k]] = tmp;
            }
            b.swap(col, pivot_row);
        }

        for row in (col + 1)..n {
            let factor = a[[row, col]] / a[[col, col]];
            for k in col..n {
                a[[row, k]] -= factor * a[[col, k]];
            }
            b[row] -= factor * b[col];
        }
    }

    let mut x = Array1::zeros(n);
    for row in (0..n).rev() {
        let mut sum = b[row];
        for k in (row + 1)..n {
            sum -= a[[row, k]] * x[k];
        }
        x[row] = sum / a[[row, row]];
    }
    Ok(x)
}
