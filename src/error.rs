use thiserror::Error;

/// Failures of the normalization transforms.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SoftmaxError {
    /// The input had no elements, so there is no denominator to divide by.
    #[error("cannot normalize an empty vector")]
    EmptyInput,
    /// Linear normalization needs a strictly positive, finite total.
    #[error("cannot normalize scores whose sum is {sum}; the sum must be positive")]
    NonPositiveSum { sum: f64 },
}
