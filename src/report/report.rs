use serde::Serialize;

use crate::activation::softmax::{Softmax, SoftmaxMethod, Stability};
use crate::error::SoftmaxError;

/// Scores the driver rescales when none are given on the command line.
pub const FIXTURE: [f64; 3] = [3.0, 1.2, 0.55];

/// Output of one driver run: the input, the result of both methods, and the
/// sum of the vectorized result as a sanity check.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub input: Vec<f64>,
    pub stability: Stability,
    pub rescaled: Vec<f64>,
    pub sum: f64,
    pub rescaled_v2: Vec<f64>,
}

impl Report {
    pub fn compute(input: &[f64], stability: Stability) -> Result<Report, SoftmaxError> {
        let rescaled = Softmax::new(SoftmaxMethod::Vectorized)
            .with_stability(stability)
            .apply(input)?;
        let rescaled_v2 = Softmax::new(SoftmaxMethod::Explicit)
            .with_stability(stability)
            .apply(input)?;
        let sum = rescaled.iter().sum();

        Ok(Report {
            input: input.to_vec(),
            stability,
            rescaled,
            sum,
            rescaled_v2,
        })
    }

    /// The five console lines: vectorized result, sum label, sum,
    /// "Version 2" label, explicit result.
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        out.push_str(&format_vector(&self.rescaled));
        out.push('\n');
        out.push_str("which should sum to:\n");
        out.push_str(&format!("{:?}\n", self.sum));
        out.push_str("Version 2\n");
        out.push_str(&format_vector(&self.rescaled_v2));
        out.push('\n');
        out
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// `[a, b, c]` with each element in shortest round-trip form.  Whole
/// numbers keep their decimal point (`1.0`, not `1`).
pub fn format_vector(values: &[f64]) -> String {
    let items: Vec<String> = values.iter().map(|v| format!("{v:?}")).collect();
    format!("[{}]", items.join(", "))
}
