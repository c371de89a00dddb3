//! `contam` binary: thin wrapper around [`contam_rs::cli`]

use clap::Parser;
use contam_rs::cli::{self, Cli};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    cli::init_logging(&cli.log_level);
    cli::run(cli)
}
