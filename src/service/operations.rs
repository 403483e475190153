use crate::error::Result;

/// The two operations the runner drives.
///
/// Implementations must validate their inputs and return an error instead of
/// producing a value for inputs they do not accept.
pub trait Operations {
    fn sum(&self, a: f64, b: f64) -> Result<f64>;
    fn greet(&self, name: &str) -> Result<String>;
}
