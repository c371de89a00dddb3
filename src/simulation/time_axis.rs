//! Time axis sampling
//!
//! The closed-form solution is singular at t = 0 (the erfc argument is
//! `z / 0`), so every axis built here lies strictly inside `(0, horizon]`.

use nalgebra::DVector;

use crate::error::{ensure_positive, ModelError, ModelResult};

/// Default number of samples per axis
pub const DEFAULT_SAMPLES: usize = 200;

/// First sample of an axis built with [`TimeAxis::for_horizon`] \[days\]
///
/// Only used when the horizon extends past it.
pub const FIRST_SAMPLE_TIME: f64 = 1.0;

/// Strictly increasing, strictly positive time samples
///
/// # Example
///
/// ```rust
/// use contam_rs::simulation::TimeAxis;
///
/// let axis = TimeAxis::for_horizon(100.0, 200).unwrap();
/// assert_eq!(axis.len(), 200);
/// assert_eq!(axis.first(), 1.0);
/// assert_eq!(axis.last(), 100.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TimeAxis {
    values: DVector<f64>,
}

impl TimeAxis {
    /// `samples` evenly spaced points from `start` to `end` (both included)
    ///
    /// A single sample yields `[end]`.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` when `samples == 0`, `start` or `end` is not strictly
    /// positive, `end <= start`, or two neighbouring samples round to the same
    /// value.
    pub fn linspace(start: f64, end: f64, samples: usize) -> ModelResult<Self> {
        if samples == 0 {
            return Err(ModelError::invalid("samples", 0.0, "at least one sample is required"));
        }
        ensure_positive("start", start)?;
        ensure_positive("end", end)?;

        if samples == 1 {
            return Ok(Self { values: DVector::from_element(1, end) });
        }
        if end <= start {
            return Err(ModelError::invalid("end", end, "must be greater than start"));
        }

        let step = (end - start) / (samples - 1) as f64;
        let mut values = DVector::from_fn(samples, |i, _| start + step * i as f64);
        // Pin the last sample so the horizon is hit exactly
        values[samples - 1] = end;

        // A narrow interval near `start` can round neighbours onto the same f64
        if values.as_slice().windows(2).any(|w| w[1] <= w[0]) {
            return Err(ModelError::invalid(
                "samples",
                samples as f64,
                "too many samples to be strictly increasing on this interval",
            ));
        }

        Ok(Self { values })
    }

    /// Axis covering `(0, horizon]` with `samples` points
    ///
    /// Starts at [`FIRST_SAMPLE_TIME`] when the horizon allows it, otherwise
    /// at `horizon / samples`. A horizon only a few ulps past day 1 cannot
    /// hold distinct samples from day 1 on and takes the second start.
    pub fn for_horizon(horizon: f64, samples: usize) -> ModelResult<Self> {
        ensure_positive("time_horizon", horizon)?;
        if samples == 0 {
            return Err(ModelError::invalid("samples", 0.0, "at least one sample is required"));
        }

        if horizon > FIRST_SAMPLE_TIME
            && let Ok(axis) = Self::linspace(FIRST_SAMPLE_TIME, horizon, samples)
        {
            return Ok(axis);
        }
        Self::linspace(horizon / samples as f64, horizon, samples)
    }

    /// Number of samples (never zero)
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always `false`, an axis holds at least one sample
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Earliest sample
    pub fn first(&self) -> f64 {
        self.values[0]
    }

    /// Latest sample (the horizon for axes built by `for_horizon`)
    pub fn last(&self) -> f64 {
        self.values[self.values.len() - 1]
    }

    pub fn values(&self) -> &DVector<f64> {
        &self.values
    }

    pub fn as_slice(&self) -> &[f64] {
        self.values.as_slice()
    }

    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.values.iter().copied()
    }
}
