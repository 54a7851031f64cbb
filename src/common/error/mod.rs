//! Unified error types for Longan.
//!
//! This module provides the crate-level error that wraps package-writing
//! failures, configuration problems and layout validation errors behind one
//! type, presenting a consistent API to users.

// Submodule declarations
pub mod conversions;
pub mod types;

// Re-exports
pub use types::{Error, Result};
