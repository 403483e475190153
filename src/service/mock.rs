use std::cell::RefCell;

use crate::error::{DemoError, ErrorKind, Result};
use crate::service::operations::Operations;
use crate::service::validated;

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Sum(f64, f64),
    Greet(String),
}

#[derive(Debug, Clone)]
struct Failure {
    kind: ErrorKind,
    message: String,
}

/// Mock operations for testing purposes.
/// Records every call and delegates to the validated rules unless told to fail.
#[derive(Debug, Default)]
pub struct MockOperations {
    calls: RefCell<Vec<Call>>,
    sum_failure: Option<Failure>,
    greet_failure: Option<Failure>,
}

impl MockOperations {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_sum<S: Into<String>>(mut self, kind: ErrorKind, message: S) -> Self {
        self.sum_failure = Some(Failure {
            kind,
            message: message.into(),
        });
        self
    }

    pub fn failing_greet<S: Into<String>>(mut self, kind: ErrorKind, message: S) -> Self {
        self.greet_failure = Some(Failure {
            kind,
            message: message.into(),
        });
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn greet_calls(&self) -> usize {
        self.calls
            .borrow()
            .iter()
            .filter(|call| matches!(call, Call::Greet(_)))
            .count()
    }
}

impl Operations for MockOperations {
    fn sum(&self, a: f64, b: f64) -> Result<f64> {
        self.calls.borrow_mut().push(Call::Sum(a, b));
        match &self.sum_failure {
            Some(failure) => Err(DemoError::from_kind(failure.kind, failure.message.clone())),
            None => validated::sum(a, b),
        }
    }

    fn greet(&self, name: &str) -> Result<String> {
        self.calls.borrow_mut().push(Call::Greet(name.to_string()));
        match &self.greet_failure {
            Some(failure) => Err(DemoError::from_kind(failure.kind, failure.message.clone())),
            None => validated::greet(name),
        }
    }
}
