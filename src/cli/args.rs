// CLI argument parsing structures shared by both binaries

use clap::Args;

#[derive(Args, Debug, Clone, Default)]
pub struct CommonArgs {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Args, Debug, Clone, Default)]
pub struct RunArgs {
    /// Path to a configuration file overriding the run inputs
    #[arg(short, long)]
    pub config: Option<String>,
}
