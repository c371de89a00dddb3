//! Mock concentration models for testing
//!
//! `QuadratureErfc` evaluates the same solution as `ErfcDispersion` but gets
//! erfc from its integral definition, so it is an independent reference.
//! `LinearFront` has a trivially known answer and exercises the trait seam.

#![allow(dead_code)]

use contam_rs::error::{ModelError, ModelResult};
use contam_rs::physics::ConcentrationModel;

// =================================================================================================
// erfc by quadrature
// =================================================================================================

/// `erfc(x) = 2/√π · ∫ₓ^∞ exp(-u²) du`, composite Simpson on [x, x + 12]
///
/// The truncated tail is below exp(-144) relative to the integrand at x.
pub fn erfc_quadrature(x: f64) -> f64 {
    const WIDTH: f64 = 12.0;
    const INTERVALS: usize = 24_000; // even

    let h = WIDTH / INTERVALS as f64;
    let f = |u: f64| (-u * u).exp();

    let mut sum = f(x) + f(x + WIDTH);
    for i in 1..INTERVALS {
        let weight = if i % 2 == 1 { 4.0 } else { 2.0 };
        sum += weight * f(x + h * i as f64);
    }

    2.0 / std::f64::consts::PI.sqrt() * sum * h / 3.0
}

/// Same physics as `ErfcDispersion`, erfc by quadrature
pub struct QuadratureErfc {
    pub c0: f64,
    pub dispersion: f64,
}

impl QuadratureErfc {
    pub fn new(c0: f64, dispersion: f64) -> Self {
        Self { c0, dispersion }
    }
}

impl ConcentrationModel for QuadratureErfc {
    fn concentration(&self, depth: f64, time: f64) -> ModelResult<f64> {
        if !(time > 0.0) {
            return Err(ModelError::invalid("time", time, "must be strictly positive"));
        }
        if !(depth >= 0.0) {
            return Err(ModelError::invalid("depth", depth, "must not be negative"));
        }
        let eta = depth / (2.0 * (self.dispersion * time).sqrt());
        Ok(self.c0 * erfc_quadrature(eta))
    }

    fn initial_concentration(&self) -> f64 {
        self.c0
    }

    fn name(&self) -> &str {
        "Quadrature erfc"
    }
}

// =================================================================================================
// Linear front: C = C₀ above z = v·t, 0 below
// =================================================================================================

/// Sharp front moving down at constant speed
pub struct LinearFront {
    pub c0: f64,
    pub speed: f64,
}

impl ConcentrationModel for LinearFront {
    fn concentration(&self, depth: f64, time: f64) -> ModelResult<f64> {
        if !(time > 0.0) {
            return Err(ModelError::invalid("time", time, "must be strictly positive"));
        }
        Ok(if depth <= self.speed * time { self.c0 } else { 0.0 })
    }

    fn initial_concentration(&self) -> f64 {
        self.c0
    }

    fn name(&self) -> &str {
        "Linear Front"
    }
}
