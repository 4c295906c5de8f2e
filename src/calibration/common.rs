//! Common utilities module
//!
//! This module contains shared error types used across the calibration pipeline.

pub mod error;

pub use error::{CalibrationError, Result};
