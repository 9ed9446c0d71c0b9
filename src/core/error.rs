//! Custom error types for the smoke suite
//!
//! Keeps the two scenario-facing failure kinds distinct: a lookup failure
//! means the target element or condition never appeared within the wait
//! budget; an assertion failure means it was observed but mismatched.

use thiserror::Error;

/// Main error type for smoke-test operations
#[derive(Error, Debug)]
pub enum SmokeError {
    /// Element or condition never appeared within the wait budget
    #[error("Lookup failed: {0}")]
    Lookup(String),

    /// Observed value did not match the expected one
    #[error("Assertion failed: {0}")]
    Assertion(String),

    /// Browser session errors (launch, teardown, driver faults)
    #[error("Browser error: {0}")]
    Browser(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Errors surfaced by the DevTools Protocol driver
    #[error("Driver error: {0}")]
    Cdp(#[from] chromiumoxide::error::CdpError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience Result type for smoke-test operations
pub type Result<T> = std::result::Result<T, SmokeError>;

impl SmokeError {
    /// Create a lookup error
    pub fn lookup(msg: impl Into<String>) -> Self {
        Self::Lookup(msg.into())
    }

    /// Create an assertion error
    pub fn assertion(msg: impl Into<String>) -> Self {
        Self::Assertion(msg.into())
    }

    /// Create a browser error
    pub fn browser(msg: impl Into<String>) -> Self {
        Self::Browser(msg.into())
    }

    /// Create a config error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
