//! `plot` command
//!
//! One invocation is one interaction: parameters are rebuilt from the flags
//! (or a JSON file), curves are recomputed, and the chart is redrawn.

use anyhow::{anyhow, Context, Result};
use clap::Args;
use log::info;
use std::path::{Path, PathBuf};

use crate::cli::widgets::{
    parse_depth, slider, C0_DEFAULT, C0_RANGE, DAYS_DEFAULT, DAYS_RANGE, DEFAULT_DEPTH_SELECTION,
    DISPERSION_DEFAULT, DISPERSION_RANGE,
};
use crate::output::visualization::{plot_breakthrough_curves, plot_depth_profiles, PlotConfig};
use crate::simulation::{compute_curves, compute_depth_profile, depth_grid, SimulationParameters};

/// Number of depth samples in a profile chart
const PROFILE_SAMPLES: usize = 200;

/// Plot command arguments
#[derive(Args, Debug, Clone)]
pub struct PlotArgs {
    /// Initial concentration C₀ (mg/L)
    #[arg(long = "c0", default_value_t = C0_DEFAULT, value_parser = slider(C0_RANGE))]
    pub initial_concentration: u32,

    /// Dispersion coefficient D (cm²/day)
    #[arg(short = 'D', long, default_value_t = DISPERSION_DEFAULT, value_parser = slider(DISPERSION_RANGE))]
    pub dispersion: u32,

    /// Depth z (cm), repeat to select several; one of 10, 30, 50, 70, 90
    #[arg(long = "depth", value_parser = parse_depth, default_values_t = DEFAULT_DEPTH_SELECTION)]
    pub depths: Vec<u32>,

    /// Deselect every depth (draws empty axes)
    #[arg(long, conflicts_with = "depths")]
    pub no_depths: bool,

    /// Simulation time (days)
    #[arg(short = 't', long, default_value_t = DAYS_DEFAULT, value_parser = slider(DAYS_RANGE))]
    pub days: u32,

    /// Load parameters from a JSON file instead of the flags above
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output image (.png or .svg)
    #[arg(short, long, default_value = "concentration.png")]
    pub output: PathBuf,

    /// Chart title
    #[arg(long)]
    pub title: Option<String>,

    /// Also draw a concentration-vs-depth profile at this day
    #[arg(long)]
    pub profile_at: Option<f64>,
}

/// Files written by one `plot` run
#[derive(Debug, Clone, PartialEq)]
pub struct PlotOutcome {
    pub chart: PathBuf,
    pub profile: Option<PathBuf>,
    pub curves: usize,
}

impl PlotArgs {
    /// Build the parameter set for this interaction
    pub fn parameters(&self) -> Result<SimulationParameters> {
        if let Some(path) = &self.config {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read parameter file {}", path.display()))?;
            let params: SimulationParameters = serde_json::from_str(&text)
                .with_context(|| format!("failed to parse parameter file {}", path.display()))?;
            info!("parameters loaded from {}", path.display());
            return Ok(params);
        }

        let depths = if self.no_depths {
            Vec::new()
        } else {
            self.depths.iter().map(|&d| f64::from(d)).collect()
        };

        Ok(SimulationParameters::new(
            f64::from(self.initial_concentration),
            f64::from(self.dispersion),
            depths,
            f64::from(self.days),
        ))
    }
}

/// `<stem>_profile.<ext>` next to the main chart
fn profile_path(chart: &Path) -> PathBuf {
    let stem = chart
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("concentration");
    let ext = chart.extension().and_then(|s| s.to_str()).unwrap_or("png");
    chart.with_file_name(format!("{stem}_profile.{ext}"))
}

/// Breakthrough chart settings for one interaction
///
/// The x axis spans the whole simulated period even with no depth selected.
fn breakthrough_config(title: Option<String>, params: &SimulationParameters) -> PlotConfig {
    PlotConfig::breakthrough(title).with_x_max(params.time_horizon)
}

/// UTF-8 path for the plotters backends
fn path_str(path: &Path) -> Result<&str> {
    path.to_str()
        .ok_or_else(|| anyhow!("output path is not valid UTF-8: {}", path.display()))
}

/// Execute the plot command
///
/// Every curve and the optional profile are evaluated before anything is
/// drawn, so a failing invocation leaves no chart behind.
pub fn execute(args: PlotArgs) -> Result<PlotOutcome> {
    let params = args.parameters()?;
    info!(
        "C0={} mg/L, D={} cm²/day, depths={:?} cm, horizon={} days",
        params.initial_concentration, params.dispersion_coefficient, params.depths, params.time_horizon
    );

    let curves = compute_curves(&params).context("cannot evaluate concentration curves")?;

    let profile = match args.profile_at {
        Some(day) => {
            let max_depth = params.depths.iter().copied().fold(0.0, f64::max).max(100.0);
            let grid = depth_grid(max_depth, PROFILE_SAMPLES)?;
            let profile = compute_depth_profile(&params, day, &grid)
                .with_context(|| format!("cannot evaluate depth profile at day {day}"))?;
            Some((profile_path(&args.output), profile))
        }
        None => None,
    };

    let chart = args.output.clone();
    let chart_str = path_str(&chart)?;
    if let Some((path, _)) = &profile {
        path_str(path)?;
    }

    let config = breakthrough_config(args.title.clone(), &params);
    plot_breakthrough_curves(&curves, chart_str, Some(&config))
        .map_err(|e| anyhow!("failed to render {}: {e}", chart.display()))?;
    info!("{} curve(s) written to {}", curves.len(), chart.display());

    let profile = match profile {
        Some((path, profile)) => {
            plot_depth_profiles(&[profile], path_str(&path)?, None)
                .map_err(|e| anyhow!("failed to render {}: {e}", path.display()))?;
            info!("depth profile written to {}", path.display());
            Some(path)
        }
        None => None,
    };

    Ok(PlotOutcome {
        chart,
        profile,
        curves: curves.len(),
    })
}
