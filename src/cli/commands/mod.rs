//! Subcommands

pub mod equation;
pub mod evaluate;
pub mod plot;
