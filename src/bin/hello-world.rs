use clap::Parser;
use std::process::ExitCode;

use dshpc_demo::cli::args::CommonArgs;
use dshpc_demo::cli::{commands, logging};

#[derive(Parser)]
#[command(name = "hello-world")]
#[command(about = "Print a greeting and a fixed sum")]
#[command(version)]
struct Cli {
    #[command(flatten)]
    common: CommonArgs,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::setup_logging(cli.common.verbose);

    ExitCode::from(commands::hello_world())
}
