//! Utility modules: terminal output helpers.

pub mod term;
