//! Transport physics
//!
//! This module provides the trait implemented by closed-form transport
//! solutions. A model encapsulates one formula C(z, t) and nothing else.
//!
//! # Architecture
//!
//! Models are **separate from the sampling**:
//! - The model provides the **formula** (physics)
//! - The simulation layer provides the **time axis and depth selection**
//!
//! # Example
//!
//! ```rust
//! use approx::assert_relative_eq;
//! use contam_rs::physics::ConcentrationModel;
//! use contam_rs::models::ErfcDispersion;
//!
//! let model = ErfcDispersion::new(100.0, 10.0).unwrap();
//! let c = model.concentration(10.0, 100.0).unwrap();
//! assert_relative_eq!(c, 82.306_327_375_812, epsilon = 1e-6);
//! ```
//!
//! # Implementing a New Model
//!
//! ```rust
//! use contam_rs::error::ModelResult;
//! use contam_rs::physics::ConcentrationModel;
//!
//! struct Uniform(f64);
//!
//! impl ConcentrationModel for Uniform {
//!     fn concentration(&self, _depth: f64, _time: f64) -> ModelResult<f64> {
//!         Ok(self.0)
//!     }
//!
//!     fn initial_concentration(&self) -> f64 {
//!         self.0
//!     }
//!
//!     fn name(&self) -> &str {
//!         "Uniform"
//!     }
//! }
//! ```

pub mod traits;

pub use traits::{ConcentrationModel, Units};
