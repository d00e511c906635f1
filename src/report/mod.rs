pub mod report;

pub use report::{format_vector, Report, FIXTURE};
