pub mod softmax;
pub mod normalize;

pub use softmax::{softmax, softmax_v2, Softmax, SoftmaxMethod, Stability};
pub use normalize::normalize;
