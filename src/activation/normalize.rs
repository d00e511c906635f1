use crate::error::SoftmaxError;

/// Plain frequency normalization:  `y[i] = x[i] / sum(x)`.
///
/// Works for non-negative counts (`[4, 2, 1]` becomes `[4/7, 2/7, 1/7]`)
/// but cannot turn arbitrary scores into probabilities: a negative score
/// yields a negative "probability", and a non-positive total is rejected.
/// Use `softmax` for signed scores.
pub fn normalize(counts: &[f64]) -> Result<Vec<f64>, SoftmaxError> {
    if counts.is_empty() {
        return Err(SoftmaxError::EmptyInput);
    }

    let sum: f64 = counts.iter().sum();
    if !(sum.is_finite() && sum > 0.0) {
        return Err(SoftmaxError::NonPositiveSum { sum });
    }

    Ok(counts.iter().map(|c| c / sum).collect())
}

#[cfg(test)]
mod tests {
    use super::normalize;
    use crate::error::SoftmaxError;
    use approx::assert_relative_eq;

    #[test]
    fn lost_phone_counts() {
        let p = normalize(&[4.0, 2.0, 1.0]).unwrap();
        assert_relative_eq!(p[0], 4.0 / 7.0);
        assert_relative_eq!(p[1], 2.0 / 7.0);
        assert_relative_eq!(p[2], 1.0 / 7.0);
    }

    #[test]
    fn rejects_sums_that_are_not_positive() {
        assert_eq!(normalize(&[1.0, -1.0]), Err(SoftmaxError::NonPositiveSum { sum: 0.0 }));
        assert_eq!(normalize(&[0.0, -3.0]), Err(SoftmaxError::NonPositiveSum { sum: -3.0 }));
        assert_eq!(normalize(&[]), Err(SoftmaxError::EmptyInput));
    }

    #[test]
    fn negative_score_survives_when_total_is_positive() {
        // 4 + 0 - 1 = 3, so the bathroom gets a "probability" of -1/3.
        let p = normalize(&[4.0, 0.0, -1.0]).unwrap();
        assert!(p[2] < 0.0);
    }
}
