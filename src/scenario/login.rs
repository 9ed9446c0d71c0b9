//! Login scenarios

use crate::core::{Config, Result, SmokeError};
use crate::driver::{Locator, Session};

/// Substring every post-login URL must carry
const DASHBOARD_MARKER: &str = "dashboard";

/// Message rendered when credentials are rejected
const BAD_CREDENTIALS_TEXT: &str = "Credenciales incorrectas";

/// Fill the login form on the application root and submit it
pub(super) async fn submit_login(
    session: &Session,
    config: &Config,
    username: &str,
    password: &str,
) -> Result<()> {
    session.goto(&config.target.base_url).await?;
    session.type_into(&Locator::id("username"), username).await?;
    session.type_into(&Locator::id("password"), password).await?;
    session
        .click(&Locator::css("button[type='submit']"))
        .await?;
    Ok(())
}

/// Log in with the valid pair and wait until the dashboard URL is reached
pub(super) async fn login_as_admin(session: &Session, config: &Config) -> Result<()> {
    submit_login(
        session,
        config,
        &config.credentials.admin_username,
        &config.credentials.admin_password,
    )
    .await?;
    session.wait_for_url_contains(DASHBOARD_MARKER).await?;
    Ok(())
}

/// Valid credentials must land on a URL containing the dashboard marker
pub(super) async fn login_success(session: &Session, config: &Config) -> Result<()> {
    login_as_admin(session, config).await
}

/// Credentials absent from the user store must surface the error banner
pub(super) async fn login_failure(session: &Session, config: &Config) -> Result<()> {
    submit_login(
        session,
        config,
        &config.credentials.invalid_username,
        &config.credentials.invalid_password,
    )
    .await?;

    // Missing banner is a lookup failure; wrong text is an assertion failure.
    let error_text = session
        .text_of(&Locator::class_name("text-red-600"))
        .await?;
    if !error_text.contains(BAD_CREDENTIALS_TEXT) {
        return Err(SmokeError::assertion(format!(
            "expected error text containing '{}', got '{}'",
            BAD_CREDENTIALS_TEXT,
            error_text.trim()
        )));
    }
    Ok(())
}
