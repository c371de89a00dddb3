//! Simulation parameters
//!
//! A `SimulationParameters` value is rebuilt from the user's current choices
//! on every interaction and handed to [`compute_curves`](super::compute_curves).
//! It is never mutated during evaluation.

use serde::{Deserialize, Serialize};

use crate::error::{ensure_non_negative, ensure_positive, ModelError, ModelResult};
use crate::models::ErfcDispersion;
use super::time_axis::{TimeAxis, DEFAULT_SAMPLES};

/// Default source concentration C₀ \[mg/L\]
pub const DEFAULT_INITIAL_CONCENTRATION: f64 = 100.0;

/// Default dispersion coefficient D \[cm²/day\]
pub const DEFAULT_DISPERSION_COEFFICIENT: f64 = 10.0;

/// Default depth selection \[cm\]
pub const DEFAULT_DEPTHS: [f64; 3] = [10.0, 50.0, 90.0];

/// Default simulation time \[days\]
pub const DEFAULT_TIME_HORIZON: f64 = 100.0;

/// Inputs of one evaluation
///
/// # Fields
///
/// - `initial_concentration`: C₀ \[mg/L\], > 0
/// - `dispersion_coefficient`: D \[cm²/day\], > 0
/// - `depths`: one curve per entry, in this order \[cm\], ≥ 0 (may be empty)
/// - `time_horizon`: last sample of the time axis \[days\], > 0
/// - `samples`: time-axis resolution, > 0
///
/// # Example
///
/// ```rust
/// use contam_rs::simulation::SimulationParameters;
///
/// let params = SimulationParameters::default()
///     .with_depths(vec![30.0, 70.0])
///     .with_time_horizon(150.0);
///
/// assert!(params.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationParameters {
    pub initial_concentration: f64,
    pub dispersion_coefficient: f64,
    pub depths: Vec<f64>,
    pub time_horizon: f64,
    pub samples: usize,
}

impl Default for SimulationParameters {
    fn default() -> Self {
        Self {
            initial_concentration: DEFAULT_INITIAL_CONCENTRATION,
            dispersion_coefficient: DEFAULT_DISPERSION_COEFFICIENT,
            depths: DEFAULT_DEPTHS.to_vec(),
            time_horizon: DEFAULT_TIME_HORIZON,
            samples: DEFAULT_SAMPLES,
        }
    }
}

impl SimulationParameters {
    /// Create parameters with the default time-axis resolution
    pub fn new(
        initial_concentration: f64,
        dispersion_coefficient: f64,
        depths: Vec<f64>,
        time_horizon: f64,
    ) -> Self {
        Self {
            initial_concentration,
            dispersion_coefficient,
            depths,
            time_horizon,
            samples: DEFAULT_SAMPLES,
        }
    }

    /// Builder pattern: set C₀
    pub fn with_initial_concentration(mut self, initial_concentration: f64) -> Self {
        self.initial_concentration = initial_concentration;
        self
    }

    /// Builder pattern: set D
    pub fn with_dispersion_coefficient(mut self, dispersion_coefficient: f64) -> Self {
        self.dispersion_coefficient = dispersion_coefficient;
        self
    }

    /// Builder pattern: set the depth selection
    pub fn with_depths(mut self, depths: Vec<f64>) -> Self {
        self.depths = depths;
        self
    }

    /// Builder pattern: set the simulation time
    pub fn with_time_horizon(mut self, time_horizon: f64) -> Self {
        self.time_horizon = time_horizon;
        self
    }

    /// Builder pattern: set the time-axis resolution
    pub fn with_samples(mut self, samples: usize) -> Self {
        self.samples = samples;
        self
    }

    /// Check every field
    ///
    /// # Errors
    ///
    /// The first `InvalidArgument` found, in field order.
    pub fn validate(&self) -> ModelResult<()> {
        ensure_positive("initial_concentration", self.initial_concentration)?;
        ensure_positive("dispersion_coefficient", self.dispersion_coefficient)?;
        for &depth in &self.depths {
            ensure_non_negative("depth", depth)?;
        }
        ensure_positive("time_horizon", self.time_horizon)?;
        if self.samples == 0 {
            return Err(ModelError::invalid("samples", 0.0, "at least one sample is required"));
        }
        Ok(())
    }

    /// The model described by C₀ and D
    pub fn model(&self) -> ModelResult<ErfcDispersion> {
        ErfcDispersion::new(self.initial_concentration, self.dispersion_coefficient)
    }

    /// The time axis described by the horizon and resolution
    pub fn time_axis(&self) -> ModelResult<TimeAxis> {
        TimeAxis::for_horizon(self.time_horizon, self.samples)
    }
}
