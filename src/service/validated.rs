use log::debug;

use crate::error::{DemoError, Result};
use crate::service::operations::Operations;

pub const NAN_INPUT_MESSAGE: &str = "Input numbers cannot be NaN.";
pub const INFINITE_INPUT_MESSAGE: &str = "Input numbers cannot be infinite.";
pub const EMPTY_NAME_MESSAGE: &str = "Name cannot be empty.";

/// Add two numbers, rejecting non-finite operands.
///
/// NaN is checked before infinity, so `sum(NaN, inf)` is an invalid argument
/// rather than an overflow.
pub fn sum(a: f64, b: f64) -> Result<f64> {
    if a.is_nan() || b.is_nan() {
        debug!("Rejected NaN operand: a={a}, b={b}");
        return Err(DemoError::invalid_argument(NAN_INPUT_MESSAGE));
    }
    if a.is_infinite() || b.is_infinite() {
        debug!("Rejected infinite operand: a={a}, b={b}");
        return Err(DemoError::overflow(INFINITE_INPUT_MESSAGE));
    }

    Ok(a + b)
}

/// Build `"Hello, <name>!"`. Only the empty string is rejected; whitespace is kept as-is.
pub fn greet(name: &str) -> Result<String> {
    if name.is_empty() {
        debug!("Rejected empty name");
        return Err(DemoError::invalid_argument(EMPTY_NAME_MESSAGE));
    }

    Ok(format!("Hello, {name}!"))
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedOperations;

impl ValidatedOperations {
    pub fn new() -> Self {
        Self
    }
}

impl Operations for ValidatedOperations {
    fn sum(&self, a: f64, b: f64) -> Result<f64> {
        sum(a, b)
    }

    fn greet(&self, name: &str) -> Result<String> {
        greet(name)
    }
}
