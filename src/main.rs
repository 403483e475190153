use clap::Parser;
use log::info;
use std::process::ExitCode;

use dshpc_demo::cli::args::{CommonArgs, RunArgs};
use dshpc_demo::cli::{commands, logging};

#[derive(Parser)]
#[command(name = "dshpc-demo")]
#[command(about = "Validated sum and greeting demo")]
#[command(version)]
struct Cli {
    #[command(flatten)]
    common: CommonArgs,

    #[command(flatten)]
    run: RunArgs,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    logging::setup_logging(cli.common.verbose);
    info!("Starting dshpc-demo");

    ExitCode::from(commands::run(cli.run.config))
}
