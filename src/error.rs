//! Error types for the concentration model
//!
//! The model has a single failure kind: a parameter that violates its
//! positivity (or finiteness) constraint. Nothing is corrected silently, the
//! caller is expected to keep its inputs in range.

use thiserror::Error;

/// Errors raised by the concentration model and the batch evaluation
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ModelError {
    /// A parameter is outside its valid domain
    ///
    /// `name` identifies the parameter (e.g. `"time"`), `value` is what was
    /// received. NaN and infinities are reported through this variant too.
    #[error("invalid argument: {name} = {value} ({reason})")]
    InvalidArgument {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },
}

impl ModelError {
    /// Shorthand for [`ModelError::InvalidArgument`]
    pub fn invalid(name: &'static str, value: f64, reason: &'static str) -> Self {
        Self::InvalidArgument { name, value, reason }
    }

    /// Name of the offending parameter
    pub fn parameter(&self) -> &'static str {
        match self {
            Self::InvalidArgument { name, .. } => name,
        }
    }
}

/// Result alias used throughout the crate
pub type ModelResult<T> = Result<T, ModelError>;

/// Check that `value` is finite and strictly positive
pub(crate) fn ensure_positive(name: &'static str, value: f64) -> ModelResult<f64> {
    if !value.is_finite() {
        return Err(ModelError::invalid(name, value, "must be finite"));
    }
    if value <= 0.0 {
        return Err(ModelError::invalid(name, value, "must be strictly positive"));
    }
    Ok(value)
}

/// Check that `value` is finite and non-negative
pub(crate) fn ensure_non_negative(name: &'static str, value: f64) -> ModelResult<f64> {
    if !value.is_finite() {
        return Err(ModelError::invalid(name, value, "must be finite"));
    }
    if value < 0.0 {
        return Err(ModelError::invalid(name, value, "must not be negative"));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_positive_accepts_positive() {
        assert_eq!(ensure_positive("time", 1.5), Ok(1.5));
    }

    #[test]
    fn test_ensure_positive_rejects_zero_negative_and_nan() {
        assert!(ensure_positive("time", 0.0).is_err());
        assert!(ensure_positive("time", -3.0).is_err());
        assert!(ensure_positive("time", f64::NAN).is_err());
        assert!(ensure_positive("time", f64::INFINITY).is_err());
    }

    #[test]
    fn test_ensure_non_negative_accepts_zero() {
        assert_eq!(ensure_non_negative("depth", 0.0), Ok(0.0));
        assert!(ensure_non_negative("depth", -0.1).is_err());
    }

    #[test]
    fn test_error_message_names_parameter() {
        let err = ModelError::invalid("dispersion_coefficient", -1.0, "must be strictly positive");
        assert_eq!(err.parameter(), "dispersion_coefficient");
        let msg = err.to_string();
        assert!(msg.contains("dispersion_coefficient"));
        assert!(msg.contains("-1"));
    }
}
