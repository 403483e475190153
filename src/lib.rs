pub mod cli;
pub mod config;
pub mod error;
pub mod hello;
pub mod runner;
pub mod service;
pub mod utils;

pub use config::Config;
pub use error::{DemoError, ErrorKind, Result};
pub use runner::{Report, RunInputs, Runner};
