//! residencia-smoke - Browser smoke tests for the Sistema de Residencias app
//!
//! Drives a fresh Chrome session per scenario against an externally hosted
//! web application, exercising its login and home-management flows through
//! simulated UI interaction, and reports per-scenario pass/fail.
//!
//! # Architecture
//!
//! - **Core**: configuration, error handling, and run reports
//! - **Driver**: browser session lifecycle and element lookup over the
//!   Chrome DevTools Protocol
//! - **Scenario**: the five smoke scenarios and their registry
//! - **Runner**: sequential execution with guaranteed session teardown
//!
//! # Usage
//!
//! ```rust,no_run
//! use residencia_smoke::{Config, ScenarioRunner};
//!
//! #[tokio::main]
//! async fn main() {
//!     let runner = ScenarioRunner::new(Config::load());
//!     let summary = runner.run(None).await.unwrap();
//!     assert!(summary.all_passed());
//! }
//! ```

pub mod core;
pub mod driver;
pub mod runner;
pub mod scenario;

// Re-export commonly used items
pub use crate::core::{Config, Result, RunSummary, ScenarioReport, SmokeError};
pub use driver::{Locator, Session};
pub use runner::ScenarioRunner;
pub use scenario::Scenario;
