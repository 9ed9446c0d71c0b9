//! Configuration for the smoke suite
//!
//! Supports environment variables, config files, and CLI overrides. The
//! target host and both credential pairs are injected here instead of being
//! hardcoded in scenario bodies.
//!
//! Config file location: ~/.config/residencia-smoke/config.toml

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;
use url::Url;

use crate::core::error::{Result, SmokeError};

/// Main configuration for the smoke suite
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Target application
    #[serde(default)]
    pub target: TargetConfig,
    /// Credential pairs used by the login scenarios
    #[serde(default)]
    pub credentials: CredentialConfig,
    /// Browser session configuration
    #[serde(default)]
    pub browser: BrowserConfig,
    /// Pauses and budgets for the timing scenario
    #[serde(default)]
    pub timing: TimingConfig,
}

/// Target application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TargetConfig {
    /// Base URL the scenarios navigate against
    pub base_url: String,
}

/// Credential pairs known to the backing user store (or known to be absent)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CredentialConfig {
    /// Valid administrator identifier
    pub admin_username: String,
    /// Valid administrator secret
    pub admin_password: String,
    /// Identifier not present in the user store
    pub invalid_username: String,
    /// Secret paired with the invalid identifier
    pub invalid_password: String,
}

/// Browser session configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrowserConfig {
    /// Whether to run with a visible window
    pub headed: bool,
    /// Element-lookup budget in ms; lookups retry until it expires
    pub implicit_wait_ms: u64,
    /// Interval between lookup retries in ms
    pub poll_interval_ms: u64,
}

/// Timing configuration for the dashboard load-time scenario
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimingConfig {
    /// Fixed post-submit pause included in the measured interval
    pub render_pause_ms: u64,
    /// Upper bound on login-to-dashboard elapsed time
    pub dashboard_budget_ms: u64,
}

impl Default for TargetConfig {
    fn default() -> Self {
        Self {
            base_url: env::var("RESIDENCIA_BASE_URL")
                .unwrap_or_else(|_| "http://localhost:3000/".to_string()),
        }
    }
}

impl Default for CredentialConfig {
    fn default() -> Self {
        Self {
            admin_username: env::var("RESIDENCIA_ADMIN_USERNAME")
                .unwrap_or_else(|_| "admin@residencia.com".to_string()),
            admin_password: env::var("RESIDENCIA_ADMIN_PASSWORD")
                .unwrap_or_else(|_| "admin123".to_string()),
            invalid_username: "usuario@falso.com".to_string(),
            invalid_password: "clave_incorrecta".to_string(),
        }
    }
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            headed: env::var("RESIDENCIA_HEADED")
                .map(|v| v == "true" || v == "1")
                .unwrap_or(false),
            implicit_wait_ms: 10_000,
            poll_interval_ms: 250,
        }
    }
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            render_pause_ms: 2_000,
            dashboard_budget_ms: 5_000,
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("residencia-smoke")
    }

    /// Get the config file path
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("config.toml")
    }

    /// Load configuration from file, environment, and defaults
    /// Priority: CLI args > env vars > config file > defaults
    pub fn load() -> Self {
        // Try to load .env file if it exists
        let _ = dotenvy::dotenv();

        // Try to load from config file
        if let Ok(config) = Self::load_from_file() {
            return config;
        }

        // Fall back to defaults (which respect env vars)
        Self::default()
    }

    /// Load configuration from file only
    pub fn load_from_file() -> Result<Self> {
        let config_path = Self::config_file();

        if !config_path.exists() {
            return Err(SmokeError::config("Config file not found"));
        }

        let content = fs::read_to_string(&config_path)
            .map_err(|e| SmokeError::config(format!("Failed to read config: {}", e)))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| SmokeError::config(format!("Failed to parse config: {}", e)))?;

        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        let config_dir = Self::config_dir();
        let config_path = Self::config_file();

        if !config_dir.exists() {
            fs::create_dir_all(&config_dir)
                .map_err(|e| SmokeError::config(format!("Failed to create config dir: {}", e)))?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| SmokeError::config(format!("Failed to serialize config: {}", e)))?;

        fs::write(&config_path, content)
            .map_err(|e| SmokeError::config(format!("Failed to write config: {}", e)))?;

        Ok(())
    }

    /// Save configuration and return the path
    pub fn save_and_get_path(&self) -> Result<PathBuf> {
        self.save()?;
        Ok(Self::config_file())
    }

    /// Resolve a page path against the target base URL
    pub fn page_url(&self, path: &str) -> Result<String> {
        let base = Url::parse(&self.target.base_url).map_err(|e| {
            SmokeError::config(format!(
                "Invalid base URL '{}': {}",
                self.target.base_url, e
            ))
        })?;
        let joined = base.join(path).map_err(|e| {
            SmokeError::config(format!("Cannot resolve '{}' against base URL: {}", path, e))
        })?;
        Ok(joined.into())
    }

    /// Sanity-check the configuration, returning human-readable warnings.
    ///
    /// The load-time scenario's budget is only meaningful while the fixed
    /// render pause stays under it; a pause at or above the budget makes
    /// the scenario unsatisfiable and must be surfaced, not corrected.
    pub fn validate(&self) -> Vec<String> {
        let mut warnings = Vec::new();

        if self.timing.render_pause_ms >= self.timing.dashboard_budget_ms {
            warnings.push(format!(
                "render pause ({}ms) meets or exceeds the dashboard budget ({}ms); \
                 dashboard_load_time can never pass",
                self.timing.render_pause_ms, self.timing.dashboard_budget_ms
            ));
        }

        if self.browser.implicit_wait_ms == 0 {
            warnings.push("implicit wait is 0ms; element lookups will not retry".to_string());
        }

        warnings
    }
}

impl BrowserConfig {
    /// Element-lookup budget as a Duration
    pub fn implicit_wait(&self) -> Duration {
        Duration::from_millis(self.implicit_wait_ms)
    }

    /// Lookup retry interval as a Duration
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }
}

impl TimingConfig {
    /// Fixed post-submit pause as a Duration
    pub fn render_pause(&self) -> Duration {
        Duration::from_millis(self.render_pause_ms)
    }

    /// Load-time budget as a Duration
    pub fn dashboard_budget(&self) -> Duration {
        Duration::from_millis(self.dashboard_budget_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.target.base_url, "http://localhost:3000/");
        assert_eq!(config.credentials.admin_username, "admin@residencia.com");
        assert_eq!(config.credentials.invalid_username, "usuario@falso.com");
        assert_eq!(config.browser.implicit_wait_ms, 10_000);
        assert!(config.timing.render_pause_ms < config.timing.dashboard_budget_ms);
    }

    #[test]
    fn test_page_url_joins_relative_paths() {
        let config = Config::default();
        assert_eq!(
            config.page_url("homes").unwrap(),
            "http://localhost:3000/homes"
        );
        assert_eq!(
            config.page_url("homes/add").unwrap(),
            "http://localhost:3000/homes/add"
        );
    }

    #[test]
    fn test_page_url_rejects_bad_base() {
        let mut config = Config::default();
        config.target.base_url = "not a url".to_string();
        assert!(matches!(
            config.page_url("homes"),
            Err(SmokeError::Config(_))
        ));
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let toml_str = toml::to_string_pretty(&config).unwrap();
        assert!(toml_str.contains("base_url"));
        assert!(toml_str.contains("admin_username"));
        assert!(toml_str.contains("implicit_wait_ms"));
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: Config = toml::from_str(
            r#"
            [target]
            base_url = "http://staging:4000/"
            "#,
        )
        .unwrap();
        assert_eq!(config.target.base_url, "http://staging:4000/");
        assert_eq!(config.credentials.admin_password, "admin123");
        assert_eq!(config.timing.dashboard_budget_ms, 5_000);
    }

    #[test]
    fn test_validate_flags_pause_over_budget() {
        let mut config = Config::default();
        assert!(config.validate().is_empty());

        config.timing.render_pause_ms = 6_000;
        let warnings = config.validate();
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("can never pass"));
    }

    #[test]
    fn test_config_dir() {
        let dir = Config::config_dir();
        assert!(dir.to_string_lossy().contains("residencia-smoke"));
    }
}
