//! Scenario module - the smoke scenarios
//!
//! Each scenario is an independent test case: it receives a fresh browser
//! session, drives a fixed interaction sequence against the target
//! application, and returns `Ok(())` on success or the failure that ended
//! it. Scenarios never share session state.

mod homes;
mod login;

use crate::core::{Config, Result};
use crate::driver::Session;

/// Which scenario body to execute
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Body {
    LoginSuccess,
    LoginFailure,
    ListHomes,
    DashboardLoadTime,
    AddHomeRedirect,
}

/// One named smoke scenario
#[derive(Debug, Clone, Copy)]
pub struct Scenario {
    /// Identifier used for selection and reporting
    pub name: &'static str,
    /// One-line description shown by `--list`
    pub description: &'static str,
    body: Body,
}

impl Scenario {
    /// All scenarios, in the order they run
    pub fn all() -> Vec<Scenario> {
        vec![
            Scenario {
                name: "login_success",
                description: "Valid credentials land on the dashboard",
                body: Body::LoginSuccess,
            },
            Scenario {
                name: "login_failure",
                description: "Rejected credentials render the error banner",
                body: Body::LoginFailure,
            },
            Scenario {
                name: "list_homes",
                description: "The homes page lists at least one card",
                body: Body::ListHomes,
            },
            Scenario {
                name: "dashboard_load_time",
                description: "Login-to-dashboard stays under the time budget",
                body: Body::DashboardLoadTime,
            },
            Scenario {
                name: "add_home_redirect",
                description: "The add-home link leads to /homes/add",
                body: Body::AddHomeRedirect,
            },
        ]
    }

    /// Look up a scenario by name
    pub fn find(name: &str) -> Option<Scenario> {
        Self::all().into_iter().find(|s| s.name == name)
    }

    /// Execute the scenario body against an open session
    pub async fn run(&self, session: &Session, config: &Config) -> Result<()> {
        match self.body {
            Body::LoginSuccess => login::login_success(session, config).await,
            Body::LoginFailure => login::login_failure(session, config).await,
            Body::ListHomes => homes::list_homes(session, config).await,
            Body::DashboardLoadTime => homes::dashboard_load_time(session, config).await,
            Body::AddHomeRedirect => homes::add_home_redirect(session, config).await,
        }
    }
}
