//! Visualization of evaluated curves
//!
//! This module draws simulation results using the `plotters` library.
//!
//! # Organization
//!
//! - **config**: Shared plot configuration (`PlotConfig`)
//! - **breakthrough**: Concentration vs time, one line per depth
//! - **profile**: Concentration vs depth, one line per time
//! - **render**: Backend selection and the shared line-chart renderer
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use contam_rs::output::visualization::{plot_breakthrough_curves, PlotConfig};
//!
//! let curves = compute_curves(&params)?;
//!
//! // Default look: "Time (days)" / "Concentration (mg/L)", grid, legend by depth
//! plot_breakthrough_curves(&curves, "concentration.png", None)?;
//!
//! // Custom title, SVG output
//! let config = PlotConfig::breakthrough("Gravel layer");
//! plot_breakthrough_curves(&curves, "concentration.svg", Some(&config))?;
//! ```
//!
//! | Use Case | Function |
//! |----------|----------|
//! | Breakthrough curves at selected depths | `plot_breakthrough_curves` |
//! | Penetration profile at selected times | `plot_depth_profiles` |

pub mod config;
pub mod breakthrough;
pub mod profile;
mod render;

pub use config::{PlotConfig, NO_TITLE};
pub use breakthrough::plot_breakthrough_curves;
pub use profile::plot_depth_profiles;
