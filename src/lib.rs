//! contam-rs: Contaminant Dispersion in Porous Media
//!
//! Evaluates and plots the closed-form solution for one-dimensional,
//! advection-free dispersion of a contaminant from a constant surface source:
//!
//! ```text
//! C(z, t) = C₀ · erfc( z / (2·√(D·t)) )
//! ```
//!
//! # Architecture
//!
//! 1. **Physics and sampling are separate**
//!    - Models define the formula (what to evaluate)
//!    - The simulation layer defines the time axis and depth selection
//!      (where to evaluate)
//!
//! 2. **Pure evaluation, explicit failures**
//!    - `compute_curves(params)` is stateless and rebuilt on every interaction
//!    - Out-of-domain inputs fail with `ModelError::InvalidArgument`, never
//!      with a NaN or an infinity
//!
//! # Quick Start
//!
//! ```rust
//! use contam_rs::simulation::{compute_curves, SimulationParameters};
//!
//! # fn main() -> Result<(), contam_rs::error::ModelError> {
//! // 1. Describe the interaction: C₀ = 100 mg/L, D = 10 cm²/day, 100 days
//! let params = SimulationParameters::new(100.0, 10.0, vec![10.0, 50.0, 90.0], 100.0);
//!
//! // 2. Evaluate one breakthrough curve per depth
//! let curves = compute_curves(&params)?;
//!
//! // 3. Read the results
//! for curve in &curves {
//!     let (t, c) = curve.points().last().unwrap();
//!     println!("{}: {c:.3} mg/L at day {t}", curve.label());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Modules
//!
//! - [`physics`]: Model trait
//! - [`models`]: Closed-form solutions
//! - [`simulation`]: Time axis, parameters and batch evaluation
//! - [`output`]: Chart rendering
//! - [`cli`]: Command-line front end
//! - [`error`]: Error types

pub mod error;
pub mod physics;
pub mod models;
pub mod simulation;
pub mod output;
pub mod cli;

pub mod prelude {
    //! Convenient imports for common usage
    //!
    //! ```rust
    //! use contam_rs::prelude::*;
    //! ```
    pub use crate::error::{ModelError, ModelResult};
    pub use crate::physics::ConcentrationModel;
    pub use crate::models::{compute_concentration, ErfcDispersion};
    pub use crate::simulation::{
        compute_curve,
        compute_curves,
        compute_depth_profile,
        ConcentrationCurve,
        DepthProfile,
        SimulationParameters,
        TimeAxis,
    };
}
