//! Concentration model trait
//!
//! This module defines the core API for transport models:
//! - `ConcentrationModel`: trait for every closed-form C(z, t) solution
//! - `Units`: unit labels carried alongside the model for display

use crate::error::ModelResult;

// =================================================================================================
// Units
// =================================================================================================

/// Unit labels used by a model
///
/// Only used for labelling (legends, axis titles, CLI output). The model
/// itself is unit-agnostic as long as the inputs are consistent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Units {
    /// Concentration unit (default: "mg/L")
    pub concentration: &'static str,

    /// Length unit used for depth (default: "cm")
    pub length: &'static str,

    /// Time unit (default: "days")
    pub time: &'static str,
}

impl Default for Units {
    fn default() -> Self {
        Self {
            concentration: "mg/L",
            length: "cm",
            time: "days",
        }
    }
}

// =================================================================================================
// Concentration Model Trait
// =================================================================================================

/// Trait for closed-form concentration models
///
/// # Responsibility
/// Evaluates C(z, t) at a single (depth, time) point.
/// Does NOT build time axes or curves (that's the simulation layer's job).
///
/// The model provides the "physics" (the formula), the simulation layer
/// provides the sampling (time axis, depth selection).
///
/// # Contract
///
/// - `concentration` never returns NaN or an infinite value. Inputs outside
///   the model's domain are rejected with
///   [`ModelError::InvalidArgument`](crate::error::ModelError::InvalidArgument).
/// - The result lies in `[0, initial_concentration()]`.
pub trait ConcentrationModel: Send + Sync {
    /// Concentration at `depth` and `time`
    ///
    /// # Errors
    ///
    /// `InvalidArgument` when `depth < 0`, `time <= 0` or either is not finite.
    fn concentration(&self, depth: f64, time: f64) -> ModelResult<f64>;

    /// Source concentration C₀ (upper bound of every result)
    fn initial_concentration(&self) -> f64;

    /// Name of the model (used to display and logging)
    fn name(&self) -> &str;

    /// Units used when labelling results
    fn units(&self) -> Units {
        Units::default()
    }

    /// Description of the model (option)
    fn description(&self) -> Option<&str> {
        None
    }
}

// =================================================================================================
// Tests
// =================================================================================================
