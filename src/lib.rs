pub mod math;
pub mod activation;
pub mod error;
pub mod report;

// Convenience re-exports
pub use math::matrix::Matrix;
pub use activation::softmax::{softmax, softmax_v2, Softmax, SoftmaxMethod, Stability};
pub use activation::normalize::normalize;
pub use error::SoftmaxError;
pub use report::report::{Report, FIXTURE};
