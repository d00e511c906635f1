use log::{debug, trace};
use serde::{Serialize, Deserialize};

use crate::error::SoftmaxError;
use crate::math::matrix::Matrix;

/// How the exponentials are computed and normalized.  Both methods satisfy
/// the same contract and agree to within floating-point rounding.
///
/// - `Vectorized` — the whole vector is held as a `1 × n` `Matrix`,
///   exponentiated with a single `map`, then divided by the row sum.
/// - `Explicit`   — each element is exponentiated into a fresh buffer, the
///   denominator is accumulated in a loop, and each element is divided.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SoftmaxMethod {
    #[default]
    Vectorized,
    Explicit,
}

/// Whether the maximum is subtracted before exponentiating.
///
/// The shift cancels out in the ratio, so both modes compute the same
/// distribution.  `Naive` overflows once any input exceeds ~709.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stability {
    #[default]
    Shifted,
    Naive,
}

/// A configured softmax transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Softmax {
    pub method: SoftmaxMethod,
    pub stability: Stability,
}

impl Softmax {
    pub fn new(method: SoftmaxMethod) -> Self {
        Softmax { method, stability: Stability::default() }
    }

    pub fn with_stability(mut self, stability: Stability) -> Self {
        self.stability = stability;
        self
    }

    /// Maps `scores` to a probability distribution of the same length and
    /// order:  `y[i] = exp(x[i]) / sum_j exp(x[j])`.
    ///
    /// The input is left untouched.  Non-finite scores are not rejected; NaN
    /// and `+inf` produce NaN entries, while a `-inf` score simply gets
    /// probability 0.
    pub fn apply(&self, scores: &[f64]) -> Result<Vec<f64>, SoftmaxError> {
        if scores.is_empty() {
            return Err(SoftmaxError::EmptyInput);
        }

        let shift = match self.stability {
            Stability::Shifted => Matrix::from_row(scores).max().unwrap_or(0.0),
            Stability::Naive => 0.0,
        };
        trace!("softmax shift = {shift}");

        let out = match self.method {
            SoftmaxMethod::Vectorized => vectorized(scores, shift),
            SoftmaxMethod::Explicit => explicit(scores, shift),
        };
        debug!(
            "softmax ({:?}, {:?}) over {} scores sums to {}",
            self.method,
            self.stability,
            scores.len(),
            out.iter().sum::<f64>()
        );
        Ok(out)
    }
}

fn vectorized(scores: &[f64], shift: f64) -> Vec<f64> {
    let exps = Matrix::from_row(scores).map(|x| (x - shift).exp());
    let denom = exps.sum();
    exps.map(|e| e / denom).into_row()
}

fn explicit(scores: &[f64], shift: f64) -> Vec<f64> {
    let mut positives = Vec::with_capacity(scores.len());
    for &x in scores {
        positives.push((x - shift).exp());
    }

    let mut denom = 0.0;
    for p in &positives {
        denom += p;
    }

    for p in positives.iter_mut() {
        *p /= denom;
    }
    positives
}

/// Softmax using the vectorized method and max-shifted exponentials.
pub fn softmax(scores: &[f64]) -> Result<Vec<f64>, SoftmaxError> {
    Softmax::new(SoftmaxMethod::Vectorized).apply(scores)
}

/// Softmax using the explicit per-element method.  Same result as `softmax`.
pub fn softmax_v2(scores: &[f64]) -> Result<Vec<f64>, SoftmaxError> {
    Softmax::new(SoftmaxMethod::Explicit).apply(scores)
}
