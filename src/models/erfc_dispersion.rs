//! Complementary error function solution for dispersion into a semi-infinite medium
//!
//! A constant source C₀ is held at the surface (z = 0) of an initially clean,
//! semi-infinite porous column. With no advection, the concentration at depth
//! z after time t is
//!
//! ```text
//! C(z, t) = C₀ · erfc( z / (2·√(D·t)) )
//! ```
//!
//! where D is the dispersion coefficient.
//!
//! # Properties
//!
//! - `C(0, t) = C₀` for every t > 0 (erfc(0) = 1)
//! - `0 ≤ C ≤ C₀` (erfc maps [0, ∞) onto (0, 1])
//! - C decreases with depth and increases with time
//!
//! # Numerics
//!
//! `erfc` is taken from `libm`, which evaluates it directly rather than as
//! `1 - erf(x)`. The far tail (e.g. erfc(4.5) ≈ 1.97e-10) keeps full relative
//! precision instead of collapsing to 0 through cancellation.
//!
//! # Example
//!
//! ```rust
//! use contam_rs::models::ErfcDispersion;
//! use contam_rs::physics::ConcentrationModel;
//!
//! // C₀ = 100 mg/L, D = 10 cm²/day
//! let model = ErfcDispersion::new(100.0, 10.0).unwrap();
//!
//! assert_eq!(model.concentration(0.0, 50.0).unwrap(), 100.0);   // surface
//! assert!(model.concentration(90.0, 10.0).unwrap() < 1e-7);    // front not arrived
//! assert!(model.concentration(-1.0, 10.0).is_err());           // above the surface
//! ```

use crate::error::{ensure_non_negative, ensure_positive, ModelResult};
use crate::physics::ConcentrationModel;

/// Evaluate `C₀ · erfc(z / (2·√(D·t)))` at a single point
///
/// # Arguments
///
/// * `initial_concentration` - Source concentration C₀ \[mg/L\], > 0
/// * `dispersion_coefficient` - Dispersion coefficient D \[cm²/day\], > 0
/// * `depth` - Depth z below the source \[cm\], ≥ 0
/// * `time` - Elapsed time t \[days\], > 0
///
/// # Errors
///
/// `InvalidArgument` when any argument is outside its domain or not finite.
/// `time = 0` is rejected explicitly: the argument of erfc would be `z/0`.
pub fn compute_concentration(
    initial_concentration: f64,
    dispersion_coefficient: f64,
    depth: f64,
    time: f64,
) -> ModelResult<f64> {
    ensure_positive("initial_concentration", initial_concentration)?;
    ensure_positive("dispersion_coefficient", dispersion_coefficient)?;
    ensure_non_negative("depth", depth)?;
    ensure_positive("time", time)?;

    Ok(initial_concentration * libm::erfc(similarity_variable(dispersion_coefficient, depth, time)))
}

/// Boltzmann similarity variable `η = z / (2·√(D·t))`
///
/// Inputs are assumed valid.
#[inline]
fn similarity_variable(dispersion_coefficient: f64, depth: f64, time: f64) -> f64 {
    depth / (2.0 * (dispersion_coefficient * time).sqrt())
}

/// Dispersion-only transport from a constant surface source
///
/// Holds the two scalar parameters of the closed-form solution. Both are
/// validated once at construction so that every later evaluation only has to
/// check the (depth, time) point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ErfcDispersion {
    /// Source concentration C₀ \[mg/L\]
    initial_concentration: f64,

    /// Dispersion coefficient D \[cm²/day\]
    dispersion_coefficient: f64,
}

impl ErfcDispersion {
    /// Create a new model
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if either parameter is not finite and strictly positive.
    pub fn new(initial_concentration: f64, dispersion_coefficient: f64) -> ModelResult<Self> {
        Ok(Self {
            initial_concentration: ensure_positive("initial_concentration", initial_concentration)?,
            dispersion_coefficient: ensure_positive("dispersion_coefficient", dispersion_coefficient)?,
        })
    }

    /// Dispersion coefficient D \[cm²/day\]
    pub fn dispersion_coefficient(&self) -> f64 {
        self.dispersion_coefficient
    }

    /// Characteristic spreading length `2·√(D·t)` \[cm\] at `time`
    ///
    /// At this depth the concentration is `C₀ · erfc(1) ≈ 0.157 · C₀`.
    pub fn spreading_length(&self, time: f64) -> ModelResult<f64> {
        ensure_positive("time", time)?;
        Ok(2.0 * (self.dispersion_coefficient * time).sqrt())
    }
}

impl ConcentrationModel for ErfcDispersion {
    fn concentration(&self, depth: f64, time: f64) -> ModelResult<f64> {
        ensure_non_negative("depth", depth)?;
        ensure_positive("time", time)?;

        let eta = similarity_variable(self.dispersion_coefficient, depth, time);
        Ok(self.initial_concentration * libm::erfc(eta))
    }

    fn initial_concentration(&self) -> f64 {
        self.initial_concentration
    }

    fn name(&self) -> &str {
        "ErfcDispersion"
    }

    fn description(&self) -> Option<&str> {
        Some("C(z, t) = C0 * erfc(z / (2 * sqrt(D * t)))")
    }
}

// =================================================================================================
// Tests
// =================================================================================================
