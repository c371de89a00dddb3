//! Command-line front end
//!
//! Stands in for the interactive page: each invocation reads the widget
//! state from its flags, recomputes the curves and redraws the chart.
//!
//! ```text
//! contam plot --c0 120 -D 25 --depth 10 --depth 50 --days 150 -o conc.svg
//! contam evaluate --depth 10 --time 100
//! contam equation
//! ```

pub mod commands;
pub mod widgets;

use anyhow::Result;
use clap::{Parser, Subcommand};
use log::LevelFilter;

/// Contaminant concentration dynamics in subsurface layers
#[derive(Parser, Debug)]
#[command(name = "contam")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Analytical erfc solution for contaminant dispersion in porous media", long_about = None)]
pub struct Cli {
    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info", global = true)]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Draw concentration vs time at the selected depths
    Plot(commands::plot::PlotArgs),
    /// Print the concentration at one depth and time
    Evaluate(commands::evaluate::EvaluateArgs),
    /// Print the governing equation and input ranges
    Equation,
}

/// Initialize `env_logger` at the requested level
///
/// Unknown level names fall back to `info`. `RUST_LOG` still refines the
/// filter per module.
pub fn init_logging(level: &str) {
    let filter = level.parse::<LevelFilter>().unwrap_or(LevelFilter::Info);

    // A second initialization (e.g. from tests) is not an error worth reporting
    let _ = env_logger::Builder::new()
        .filter_level(filter)
        .parse_default_env()
        .format_target(false)
        .try_init();
}

/// Dispatch the parsed command line
pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Plot(args) => {
            let outcome = commands::plot::execute(args)?;
            println!("{}", outcome.chart.display());
            if let Some(profile) = outcome.profile {
                println!("{}", profile.display());
            }
        }
        Commands::Evaluate(args) => println!("{}", commands::evaluate::execute(args)?),
        Commands::Equation => print!("{}", commands::equation::equation_text()),
    }
    Ok(())
}
