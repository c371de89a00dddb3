//! Output module for simulation results
//!
//! Results are drawn, never stored: curves are rendered to PNG or SVG charts
//! and discarded.
//!
//! ```text
//! output/
//! ├── mod.rs              ← This file
//! └── visualization/      ← Plots and graphics
//!     ├── config.rs
//!     ├── breakthrough.rs
//!     ├── profile.rs
//!     └── render.rs
//! ```
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use contam_rs::output::{plot_breakthrough_curves, PlotConfig};
//!
//! plot_breakthrough_curves(&curves, "output.png", None)?;
//! ```

pub mod visualization;

pub use visualization::{plot_breakthrough_curves, plot_depth_profiles, PlotConfig};
