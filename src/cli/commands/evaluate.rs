//! `evaluate` command: one concentration value at one (depth, time) point

use anyhow::{Context, Result};
use clap::Args;
use log::debug;

use crate::cli::widgets::{slider, C0_DEFAULT, C0_RANGE, DISPERSION_DEFAULT, DISPERSION_RANGE};
use crate::models::ErfcDispersion;
use crate::physics::ConcentrationModel;

/// Evaluate command arguments
#[derive(Args, Debug, Clone)]
pub struct EvaluateArgs {
    /// Initial concentration C₀ (mg/L)
    #[arg(long = "c0", default_value_t = C0_DEFAULT, value_parser = slider(C0_RANGE))]
    pub initial_concentration: u32,

    /// Dispersion coefficient D (cm²/day)
    #[arg(short = 'D', long, default_value_t = DISPERSION_DEFAULT, value_parser = slider(DISPERSION_RANGE))]
    pub dispersion: u32,

    /// Depth z (cm)
    #[arg(short = 'z', long, allow_negative_numbers = true)]
    pub depth: f64,

    /// Time t (days)
    #[arg(short = 't', long, allow_negative_numbers = true)]
    pub time: f64,
}

/// Execute the evaluate command and return the line to print
pub fn execute(args: EvaluateArgs) -> Result<String> {
    let model = ErfcDispersion::new(f64::from(args.initial_concentration), f64::from(args.dispersion))?;
    let units = model.units();

    let c = model
        .concentration(args.depth, args.time)
        .with_context(|| format!("cannot evaluate C(z = {}, t = {})", args.depth, args.time))?;
    debug!("{} at z={} t={} -> {c:e}", model.name(), args.depth, args.time);

    Ok(format!(
        "C(z = {} {}, t = {} {}) = {} {}",
        args.depth, units.length, args.time, units.time, c, units.concentration
    ))
}
