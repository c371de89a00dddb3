//! Closed-form transport models
//!
//! All models implement the [`ConcentrationModel`](crate::physics::ConcentrationModel)
//! trait. The simulation layer calls `concentration` once per (depth, time)
//! sample; models are responsible for the formula, the simulation layer for
//! the sampling.
//!
//! # Available Models
//!
//! ## [`ErfcDispersion`]: dispersion from a constant surface source
//!
//! Semi-infinite column, no advection, source held at C₀ from t = 0:
//! `C(z, t) = C₀ · erfc(z / (2·√(D·t)))`.

pub mod erfc_dispersion;

pub use erfc_dispersion::{compute_concentration, ErfcDispersion};
