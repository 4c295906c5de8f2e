//! Pipeline orchestration module
//!
//! Sequences decode, fit, highlight, and save around the core components.

mod config;
mod runner;


pub use config::{CalibrationConfig, CalibrationConfigBuilder};
pub use runner::{CalibrationOutput, CalibrationPipeline};
