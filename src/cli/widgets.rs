//! Input widget bounds
//!
//! The command line stands in for the sliders and multi-select of an
//! interactive page. Bounds are enforced here, at the presentation layer;
//! the model only checks positivity.

use std::ops::RangeInclusive;

/// Initial concentration slider \[mg/L\]
pub const C0_RANGE: RangeInclusive<u32> = 10..=200;
pub const C0_DEFAULT: u32 = 100;

/// Dispersion coefficient slider \[cm²/day\]
pub const DISPERSION_RANGE: RangeInclusive<u32> = 1..=100;
pub const DISPERSION_DEFAULT: u32 = 10;

/// Simulation time slider \[days\]
pub const DAYS_RANGE: RangeInclusive<u32> = 10..=200;
pub const DAYS_DEFAULT: u32 = 100;

/// Depths offered by the multi-select \[cm\]
pub const CANDIDATE_DEPTHS: [u32; 5] = [10, 30, 50, 70, 90];

/// Initial multi-select state \[cm\]
pub const DEFAULT_DEPTH_SELECTION: [u32; 3] = [10, 50, 90];

/// Accept only depths from [`CANDIDATE_DEPTHS`]
pub fn parse_depth(value: &str) -> Result<u32, String> {
    let depth: u32 = value
        .trim()
        .parse()
        .map_err(|_| format!("`{value}` is not a whole number of centimetres"))?;

    if CANDIDATE_DEPTHS.contains(&depth) {
        Ok(depth)
    } else {
        Err(format!("depth must be one of {CANDIDATE_DEPTHS:?} cm, got {depth}"))
    }
}

/// Clap value parser for a bounded integer slider
pub(crate) fn slider(range: RangeInclusive<u32>) -> clap::builder::RangedI64ValueParser<u32> {
    clap::value_parser!(u32).range(i64::from(*range.start())..=i64::from(*range.end()))
}
