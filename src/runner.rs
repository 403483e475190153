use log::{debug, info};
use std::io::Write;

use crate::config::Config;
use crate::error::{DemoError, Result};
use crate::service::Operations;
use crate::utils::format_general;

pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_FAILURE: u8 = 1;

pub const RUN_ERROR_LABEL: &str = "Error";

/// Write `<label>: <error>` as a single line to `err` and return the failure status.
pub fn report_failure<E: Write>(err: &mut E, label: &str, error: &DemoError) -> u8 {
    debug!("Reporting failure ({}): {error}", error.kind().as_str());
    if let Err(write_err) = writeln!(err, "{label}: {error}").and_then(|()| err.flush()) {
        debug!("Could not write failure report: {write_err}");
    }
    EXIT_FAILURE
}

/// Inputs for a single run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunInputs {
    pub a: f64,
    pub b: f64,
    pub name: String,
}

impl Default for RunInputs {
    fn default() -> Self {
        Self::from(&Config::default())
    }
}

impl From<&Config> for RunInputs {
    fn from(config: &Config) -> Self {
        Self {
            a: config.sum.a,
            b: config.sum.b,
            name: config.greeting.name.clone(),
        }
    }
}

/// Results of a run where every operation succeeded.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub sum: f64,
    pub greeting: String,
}

impl Report {
    pub fn write_to<W: Write>(&self, out: &mut W) -> Result<()> {
        writeln!(out, "The sum is: {}", format_general(self.sum))?;
        writeln!(out, "{}", self.greeting)?;
        out.flush()?;
        Ok(())
    }
}

/// Runs `sum` then `greet`, stopping at the first failure.
pub struct Runner<O: Operations> {
    operations: O,
    inputs: RunInputs,
}

impl<O: Operations> Runner<O> {
    pub fn new(operations: O, inputs: RunInputs) -> Self {
        Self { operations, inputs }
    }

    pub fn operations(&self) -> &O {
        &self.operations
    }

    pub fn inputs(&self) -> &RunInputs {
        &self.inputs
    }

    /// Compute both results without printing anything.
    pub fn execute(&self) -> Result<Report> {
        let RunInputs { a, b, name } = &self.inputs;

        let sum = self.operations.sum(*a, *b)?;
        debug!("sum({a}, {b}) = {sum}");

        let greeting = self.operations.greet(name)?;
        debug!("greet({name:?}) = {greeting:?}");

        Ok(Report { sum, greeting })
    }

    /// Execute and print. The report goes to `out` only when every operation
    /// succeeded; otherwise a single `Error: ...` line goes to `err`.
    pub fn run<W: Write, E: Write>(&self, out: &mut W, err: &mut E) -> u8 {
        info!("Running with inputs: {:?}", self.inputs);

        match self.execute().and_then(|report| report.write_to(out)) {
            Ok(()) => EXIT_SUCCESS,
            Err(e) => report_failure(err, RUN_ERROR_LABEL, &e),
        }
    }
}
