//! Core module - shared infrastructure for the smoke suite
//!
//! This module contains configuration, error handling, and run reports
//! used throughout the application.

pub mod config;
pub mod error;
pub mod report;

pub use config::Config;
pub use error::{Result, SmokeError};
pub use report::{RunSummary, ScenarioReport};
