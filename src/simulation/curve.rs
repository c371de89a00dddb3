//! Evaluated curves
//!
//! Both types are plain derived data: built once by the batch evaluation,
//! read by the presentation layer, then dropped.

use nalgebra::DVector;

/// Concentration vs time at one depth (a breakthrough curve)
///
/// `times` and `concentrations` always have the same length, one entry per
/// time-axis sample, in time order.
#[derive(Debug, Clone, PartialEq)]
pub struct ConcentrationCurve {
    depth: f64,
    times: DVector<f64>,
    concentrations: DVector<f64>,
}

impl ConcentrationCurve {
    pub(crate) fn new(depth: f64, times: DVector<f64>, concentrations: DVector<f64>) -> Self {
        debug_assert_eq!(times.len(), concentrations.len());
        Self { depth, times, concentrations }
    }

    /// Depth of this curve \[cm\]
    pub fn depth(&self) -> f64 {
        self.depth
    }

    pub fn times(&self) -> &[f64] {
        self.times.as_slice()
    }

    pub fn concentrations(&self) -> &[f64] {
        self.concentrations.as_slice()
    }

    /// Number of (time, concentration) pairs
    pub fn len(&self) -> usize {
        self.times.len()
    }

    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// (time, concentration) pairs in time order
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.times.iter().copied().zip(self.concentrations.iter().copied())
    }

    /// Legend label, e.g. `"Depth 10 cm"`
    pub fn label(&self) -> String {
        format!("Depth {} cm", self.depth)
    }

    /// Largest concentration on the curve (0 for an empty curve)
    pub fn max_concentration(&self) -> f64 {
        self.concentrations.iter().copied().fold(0.0, f64::max)
    }

    /// First sample at which the concentration reaches `threshold`
    ///
    /// Returns `None` when the front never gets there within the axis.
    pub fn arrival_time(&self, threshold: f64) -> Option<f64> {
        self.points().find(|&(_, c)| c >= threshold).map(|(t, _)| t)
    }
}

/// Concentration vs depth at one time
#[derive(Debug, Clone, PartialEq)]
pub struct DepthProfile {
    time: f64,
    depths: DVector<f64>,
    concentrations: DVector<f64>,
}

impl DepthProfile {
    pub(crate) fn new(time: f64, depths: DVector<f64>, concentrations: DVector<f64>) -> Self {
        debug_assert_eq!(depths.len(), concentrations.len());
        Self { time, depths, concentrations }
    }

    /// Time of this profile \[days\]
    pub fn time(&self) -> f64 {
        self.time
    }

    pub fn depths(&self) -> &[f64] {
        self.depths.as_slice()
    }

    pub fn concentrations(&self) -> &[f64] {
        self.concentrations.as_slice()
    }

    pub fn len(&self) -> usize {
        self.depths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.depths.is_empty()
    }

    /// (depth, concentration) pairs in the requested depth order
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.depths.iter().copied().zip(self.concentrations.iter().copied())
    }

    /// Legend label, e.g. `"Day 50"`
    pub fn label(&self) -> String {
        format!("Day {}", self.time)
    }

    pub fn max_concentration(&self) -> f64 {
        self.concentrations.iter().copied().fold(0.0, f64::max)
    }
}
