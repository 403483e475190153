pub mod mock;
pub mod operations;
pub mod validated;

pub use operations::Operations;
pub use validated::{greet, sum, ValidatedOperations};
