//! Common utilities for integration tests

pub mod mock_models;
pub mod test_helpers;

// Re-export commonly used items
pub use mock_models::{LinearFront, QuadratureErfc};
pub use test_helpers::{assert_non_decreasing, assert_non_increasing, relative_error};
