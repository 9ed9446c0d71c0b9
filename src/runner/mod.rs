//! Runner module - sequential scenario execution
//!
//! Runs scenarios one after another, each in a fresh browser session, and
//! guarantees the session is closed on every exit path, assertion failures
//! included.

use std::time::Instant;

use colored::Colorize;

use crate::core::{Config, Result, RunSummary, ScenarioReport, SmokeError};
use crate::driver::Session;
use crate::scenario::Scenario;

/// Executes scenarios and collects their reports
pub struct ScenarioRunner {
    config: Config,
}

impl ScenarioRunner {
    /// Create a runner over a loaded configuration
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// The configuration this runner was built with
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Run every scenario, or just the named one
    pub async fn run(&self, name: Option<&str>) -> Result<RunSummary> {
        let scenarios = match name {
            Some(name) => vec![Scenario::find(name).ok_or_else(|| {
                SmokeError::config(format!(
                    "unknown scenario '{}'; --list shows the known ones",
                    name
                ))
            })?],
            None => Scenario::all(),
        };

        for warning in self.config.validate() {
            eprintln!("{} {}", "warning:".yellow().bold(), warning);
        }

        println!(
            "\n{} {} scenario(s) against {}\n",
            "Running".blue().bold(),
            scenarios.len(),
            self.config.target.base_url.white().bold()
        );

        let mut summary = RunSummary::default();
        for scenario in scenarios {
            let report = self.run_scenario(&scenario).await;
            match &report.error {
                None => println!(
                    "  {} {} ({}ms)",
                    "✓".green(),
                    report.name,
                    report.duration_ms
                ),
                Some(error) => println!("  {} {}: {}", "✗".red(), report.name, error),
            }
            summary.push(report);
        }

        let verdict = format!(
            "{} passed, {} failed",
            summary.passed_count(),
            summary.failed_count()
        );
        if summary.all_passed() {
            println!("\n{}\n", verdict.green().bold());
        } else {
            println!("\n{}\n", verdict.red().bold());
        }

        Ok(summary)
    }

    /// Run one scenario in a fresh session.
    ///
    /// The session is closed whether the body succeeded or failed; a
    /// teardown error on an otherwise passing scenario fails it.
    async fn run_scenario(&self, scenario: &Scenario) -> ScenarioReport {
        let started = Instant::now();

        let session = match Session::launch(&self.config.browser).await {
            Ok(session) => session,
            Err(e) => {
                return ScenarioReport::failed(
                    scenario.name,
                    started.elapsed(),
                    format!("failed to open browser session: {}", e),
                )
            }
        };

        let outcome = scenario.run(&session, &self.config).await;
        let closed = session.close().await;
        let duration = started.elapsed();

        match (outcome, closed) {
            (Ok(()), Ok(())) => ScenarioReport::passed(scenario.name, duration),
            (Ok(()), Err(e)) => ScenarioReport::failed(
                scenario.name,
                duration,
                format!("session teardown failed: {}", e),
            ),
            (Err(e), _) => ScenarioReport::failed(scenario.name, duration, e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_unknown_scenario_is_a_config_error() {
        let runner = ScenarioRunner::new(Config::default());
        let err = runner.run(Some("does_not_exist")).await.unwrap_err();
        assert!(matches!(err, SmokeError::Config(_)));
        assert!(err.to_string().contains("does_not_exist"));
    }

    #[test]
    fn test_runner_exposes_its_config() {
        let mut config = Config::default();
        config.target.base_url = "http://staging:4000/".to_string();
        let runner = ScenarioRunner::new(config);
        assert_eq!(runner.config().target.base_url, "http://staging:4000/");
    }
}
