//! Batch evaluation of the concentration model
//!
//! # Core Concepts
//!
//! 1. **Parameters** (`SimulationParameters`) - WHAT to evaluate
//!    - C₀ and D (the model)
//!    - Depth selection
//!    - Time horizon and resolution
//!
//! 2. **Time axis** (`TimeAxis`) - WHERE to sample
//!    - Strictly positive, strictly increasing samples over `(0, horizon]`
//!
//! 3. **Curves** (`ConcentrationCurve`, `DepthProfile`) - the result
//!    - One breakthrough curve per requested depth
//!    - Optional spatial profile at a fixed time
//!
//! Evaluation is a pure function of its inputs: rebuild the parameters, call
//! [`compute_curves`], draw, discard.
//!
//! # Failure semantics
//!
//! The whole batch is validated before any curve is computed. One invalid
//! parameter aborts the batch; there are no partial results.
//!
//! # Example
//!
//! ```rust
//! use contam_rs::simulation::{compute_curves, SimulationParameters};
//!
//! let params = SimulationParameters::default().with_depths(vec![90.0, 10.0]);
//! let curves = compute_curves(&params).unwrap();
//!
//! assert_eq!(curves.len(), 2);
//! assert_eq!(curves[0].depth(), 90.0);      // user order is kept
//! assert_eq!(curves[0].len(), params.samples);
//! ```

mod curve;
mod parameters;
mod time_axis;

pub use curve::{ConcentrationCurve, DepthProfile};
pub use parameters::{
    SimulationParameters,
    DEFAULT_DEPTHS,
    DEFAULT_DISPERSION_COEFFICIENT,
    DEFAULT_INITIAL_CONCENTRATION,
    DEFAULT_TIME_HORIZON,
};
pub use time_axis::{TimeAxis, DEFAULT_SAMPLES, FIRST_SAMPLE_TIME};

use nalgebra::DVector;

use crate::error::{ensure_non_negative, ensure_positive, ModelError, ModelResult};
use crate::physics::ConcentrationModel;

// =================================================================================================
// Model-level evaluation
// =================================================================================================

/// Evaluate `model` at `depth` for every sample of `axis`
///
/// # Errors
///
/// Propagates the first `InvalidArgument` raised by the model.
pub fn evaluate_curve(
    model: &dyn ConcentrationModel,
    axis: &TimeAxis,
    depth: f64,
) -> ModelResult<ConcentrationCurve> {
    ensure_non_negative("depth", depth)?;

    let concentrations = axis
        .iter()
        .map(|t| model.concentration(depth, t))
        .collect::<ModelResult<Vec<f64>>>()?;

    Ok(ConcentrationCurve::new(
        depth,
        axis.values().clone(),
        DVector::from_vec(concentrations),
    ))
}

/// Evaluate `model` at `time` for every entry of `depths`
pub fn evaluate_profile(
    model: &dyn ConcentrationModel,
    time: f64,
    depths: &[f64],
) -> ModelResult<DepthProfile> {
    ensure_positive("time", time)?;

    let concentrations = depths
        .iter()
        .map(|&z| model.concentration(z, time))
        .collect::<ModelResult<Vec<f64>>>()?;

    Ok(DepthProfile::new(
        time,
        DVector::from_column_slice(depths),
        DVector::from_vec(concentrations),
    ))
}

// =================================================================================================
// Parameter-level evaluation
// =================================================================================================

/// Breakthrough curve at one depth over the full time axis of `params`
///
/// `params.depths` is ignored, `depth` is used instead.
pub fn compute_curve(params: &SimulationParameters, depth: f64) -> ModelResult<ConcentrationCurve> {
    params.validate()?;
    let model = params.model()?;
    let axis = params.time_axis()?;

    evaluate_curve(&model, &axis, depth)
}

/// One breakthrough curve per entry of `params.depths`, in that order
///
/// An empty depth selection yields an empty vector.
///
/// # Errors
///
/// `InvalidArgument` if any parameter is invalid. Nothing is computed in
/// that case.
pub fn compute_curves(params: &SimulationParameters) -> ModelResult<Vec<ConcentrationCurve>> {
    params.validate()?;
    let model = params.model()?;
    let axis = params.time_axis()?;

    log::debug!(
        "evaluating {} curve(s): C0={} D={} horizon={} samples={}",
        params.depths.len(),
        params.initial_concentration,
        params.dispersion_coefficient,
        params.time_horizon,
        axis.len()
    );

    if params.depths.is_empty() {
        log::warn!("no depth selected, nothing to evaluate");
    }

    params
        .depths
        .iter()
        .map(|&depth| evaluate_curve(&model, &axis, depth))
        .collect()
}

/// Concentration vs depth at `time`, using C₀ and D from `params`
///
/// `time` is not required to lie on the time axis.
pub fn compute_depth_profile(
    params: &SimulationParameters,
    time: f64,
    depths: &[f64],
) -> ModelResult<DepthProfile> {
    params.validate()?;
    let model = params.model()?;

    evaluate_profile(&model, time, depths)
}

/// `samples` evenly spaced depths from the surface down to `max_depth`
///
/// # Errors
///
/// `InvalidArgument` when `max_depth` is not strictly positive or fewer
/// than two samples are requested.
pub fn depth_grid(max_depth: f64, samples: usize) -> ModelResult<Vec<f64>> {
    ensure_positive("max_depth", max_depth)?;
    if samples < 2 {
        return Err(ModelError::invalid(
            "samples",
            samples as f64,
            "a depth grid needs at least two samples",
        ));
    }

    let step = max_depth / (samples - 1) as f64;
    let mut grid: Vec<f64> = (0..samples).map(|i| step * i as f64).collect();
    grid[samples - 1] = max_depth;
    Ok(grid)
}

// =================================================================================================
// Tests
// =================================================================================================
