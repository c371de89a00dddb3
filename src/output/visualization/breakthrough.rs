//! Breakthrough-curve plotting
//!
//! One line per depth, concentration against time, legend keyed by depth.
//!
//! # Usage
//!
//! ```rust,ignore
//! use contam_rs::simulation::{compute_curves, SimulationParameters};
//! use contam_rs::output::visualization::plot_breakthrough_curves;
//!
//! let curves = compute_curves(&SimulationParameters::default())?;
//! plot_breakthrough_curves(&curves, "concentration.png", None)?;
//! ```

use std::error::Error;

use crate::simulation::ConcentrationCurve;
use super::config::{PlotConfig, NO_TITLE};
use super::render::{render_to_file, LineData};

/// Plot concentration vs time, one labelled line per curve
///
/// Curves are drawn in slice order, so legend entries and colors follow the
/// user's depth selection. An empty slice draws titled, empty axes.
///
/// # Arguments
///
/// * `curves`      - Curves from [`compute_curves`](crate::simulation::compute_curves)
/// * `output_path` - Output file path (`.png` → bitmap, `.svg` → vector)
/// * `config`      - Optional plot configuration; `None` uses
///                   [`PlotConfig::breakthrough`] defaults
///
/// # Errors
///
/// Returns `Err` if the backend cannot write to `output_path`.
pub fn plot_breakthrough_curves(
    curves: &[ConcentrationCurve],
    output_path: &str,
    config: Option<&PlotConfig>,
) -> Result<(), Box<dyn Error>> {
    let default_config = PlotConfig::breakthrough(NO_TITLE);
    let config = config.unwrap_or(&default_config);

    let lines: Vec<LineData> = curves
        .iter()
        .map(|curve| LineData {
            label: curve.label(),
            points: curve.points().collect(),
        })
        .collect();

    render_to_file(output_path, &lines, config)
}

// =================================================================================================
// Tests
// =================================================================================================
