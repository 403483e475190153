use log::{debug, info};
use std::io::{self, Write};
use std::path::Path;

use crate::hello::write_hello_world;
use crate::runner::{report_failure, RunInputs, Runner, EXIT_SUCCESS, RUN_ERROR_LABEL};
use crate::service::ValidatedOperations;
use crate::Config;

pub const HELLO_ERROR_LABEL: &str = "An error occurred";

/// Load configuration and run the fixed sequence against stdout/stderr.
pub fn run(config_path: Option<String>) -> u8 {
    let stdout = io::stdout();
    let stderr = io::stderr();
    run_internal(config_path, &mut stdout.lock(), &mut stderr.lock())
}

pub fn run_internal<W: Write, E: Write>(
    config_path: Option<String>,
    out: &mut W,
    err: &mut E,
) -> u8 {
    info!("Loading configuration from {config_path:?}");

    let config = match Config::load_from(config_path.as_deref().map(Path::new)) {
        Ok(config) => config,
        Err(e) => {
            debug!("Configuration failed: {e}");
            return report_failure(err, RUN_ERROR_LABEL, &e);
        }
    };

    let runner = Runner::new(ValidatedOperations::new(), RunInputs::from(&config));
    runner.run(out, err)
}

/// Print the hello-world lines to stdout; failures go to stderr.
pub fn hello_world() -> u8 {
    let stdout = io::stdout();
    let stderr = io::stderr();
    hello_world_internal(&mut stdout.lock(), &mut stderr.lock())
}

pub fn hello_world_internal<W: Write, E: Write>(out: &mut W, err: &mut E) -> u8 {
    match write_hello_world(out) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => report_failure(err, HELLO_ERROR_LABEL, &e),
    }
}
