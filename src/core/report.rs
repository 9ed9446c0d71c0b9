//! Per-scenario pass/fail reports
//!
//! A scenario is atomic: it either passed or failed with one descriptive
//! message. The summary only aggregates for presentation.

use serde::Serialize;
use std::time::Duration;

/// Outcome of one scenario run
#[derive(Debug, Clone, Serialize)]
pub struct ScenarioReport {
    /// Name of the scenario that ran
    pub name: String,
    /// Whether the scenario passed
    pub passed: bool,
    /// Wall-clock duration of the run, session setup and teardown included
    pub duration_ms: u64,
    /// Failure message, present only for failed scenarios
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ScenarioReport {
    /// Create a passing report
    pub fn passed(name: impl Into<String>, duration: Duration) -> Self {
        Self {
            name: name.into(),
            passed: true,
            duration_ms: duration.as_millis() as u64,
            error: None,
        }
    }

    /// Create a failing report
    pub fn failed(name: impl Into<String>, duration: Duration, error: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            passed: false,
            duration_ms: duration.as_millis() as u64,
            error: Some(error.into()),
        }
    }
}

/// Aggregated outcome of a run
#[derive(Debug, Clone, Default, Serialize)]
pub struct RunSummary {
    /// Reports in execution order
    pub reports: Vec<ScenarioReport>,
}

impl RunSummary {
    /// Append a report
    pub fn push(&mut self, report: ScenarioReport) {
        self.reports.push(report);
    }

    /// Number of passing scenarios
    pub fn passed_count(&self) -> usize {
        self.reports.iter().filter(|r| r.passed).count()
    }

    /// Number of failing scenarios
    pub fn failed_count(&self) -> usize {
        self.reports.len() - self.passed_count()
    }

    /// Whether every scenario passed
    pub fn all_passed(&self) -> bool {
        self.reports.iter().all(|r| r.passed)
    }
}
