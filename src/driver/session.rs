//! Browser session lifecycle and interaction primitives
//!
//! One `Session` is one isolated browsing context: a chromiumoxide browser
//! process, its CDP event loop, and a single page. A session is created
//! fresh at the start of a scenario and closed at the end.

use std::time::Duration;

use chromiumoxide::browser::{Browser, BrowserConfig as ChromeConfig};
use chromiumoxide::{Element, Page};
use futures::StreamExt;
use tokio::task::JoinHandle;

use crate::core::config::BrowserConfig;
use crate::core::{Result, SmokeError};
use crate::driver::locator::{Locator, Query};
use crate::driver::wait;

/// An exclusive browser-automation handle
pub struct Session {
    browser: Browser,
    page: Page,
    events: JoinHandle<()>,
    implicit_wait: Duration,
    poll_interval: Duration,
}

impl Session {
    /// Launch a browser and open a blank page
    pub async fn launch(config: &BrowserConfig) -> Result<Self> {
        let mut builder = ChromeConfig::builder();
        if config.headed {
            builder = builder.with_head();
        }
        let chrome_config = builder.build().map_err(SmokeError::browser)?;

        let (browser, mut handler) = Browser::launch(chrome_config).await?;

        // Drain CDP events for the lifetime of the browser process.
        let events = tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                if event.is_err() {
                    break;
                }
            }
        });

        let page = browser.new_page("about:blank").await?;

        Ok(Self {
            browser,
            page,
            events,
            implicit_wait: config.implicit_wait(),
            poll_interval: config.poll_interval(),
        })
    }

    /// Navigate the page to a URL
    pub async fn goto(&self, url: &str) -> Result<()> {
        self.page.goto(url).await?;
        Ok(())
    }

    /// Locate an element, retrying until the implicit wait budget expires
    pub async fn find(&self, locator: &Locator) -> Result<Element> {
        let query = locator.query();
        let page = &self.page;

        let found = wait::poll_until(self.implicit_wait, self.poll_interval, || {
            let query = &query;
            async move {
                match query {
                    Query::Css(selector) => page.find_element(selector.as_str()).await.ok(),
                    Query::XPath(xpath) => page.find_xpath(xpath.as_str()).await.ok(),
                }
            }
        })
        .await;

        found.ok_or_else(|| {
            SmokeError::lookup(format!(
                "element {} did not appear within {:?}",
                locator, self.implicit_wait
            ))
        })
    }

    /// Locate every element matching the locator, without retrying
    pub async fn find_all(&self, locator: &Locator) -> Result<Vec<Element>> {
        let elements = match locator.query() {
            Query::Css(selector) => self.page.find_elements(selector.as_str()).await?,
            Query::XPath(xpath) => self.page.find_xpaths(xpath.as_str()).await?,
        };
        Ok(elements)
    }

    /// Focus an input element and type text into it
    pub async fn type_into(&self, locator: &Locator, text: &str) -> Result<()> {
        let element = self.find(locator).await?;
        element.click().await?;
        element.type_str(text).await?;
        Ok(())
    }

    /// Click an element
    pub async fn click(&self, locator: &Locator) -> Result<()> {
        self.find(locator).await?.click().await?;
        Ok(())
    }

    /// Rendered text of a located element
    pub async fn text_of(&self, locator: &Locator) -> Result<String> {
        let element = self.find(locator).await?;
        Ok(element.inner_text().await?.unwrap_or_default())
    }

    /// URL of the active page
    pub async fn current_url(&self) -> Result<String> {
        self.page
            .url()
            .await?
            .ok_or_else(|| SmokeError::browser("page has no URL"))
    }

    /// Wait until the current URL satisfies `predicate`, bounded by the
    /// implicit wait budget.
    ///
    /// Timing out is an assertion failure: the page was reachable, but the
    /// observed URL never matched. The failure message carries the last
    /// observed URL; `expectation` describes what was expected.
    pub async fn wait_for_url<F>(&self, expectation: &str, predicate: F) -> Result<String>
    where
        F: Fn(&str) -> bool,
    {
        let page = &self.page;
        let predicate = &predicate;

        let matched = wait::poll_until(self.implicit_wait, self.poll_interval, || async move {
            match page.url().await {
                Ok(Some(url)) if predicate(&url) => Some(url),
                _ => None,
            }
        })
        .await;

        match matched {
            Some(url) => Ok(url),
            None => {
                let last = self
                    .current_url()
                    .await
                    .unwrap_or_else(|_| "<unknown>".to_string());
                Err(SmokeError::assertion(format!(
                    "expected URL {}, got '{}'",
                    expectation, last
                )))
            }
        }
    }

    /// Wait until the current URL contains `needle`
    pub async fn wait_for_url_contains(&self, needle: &str) -> Result<String> {
        self.wait_for_url(&format!("containing '{}'", needle), |url| {
            url.contains(needle)
        })
        .await
    }

    /// Wait until the current URL ends with `suffix` (ignoring a trailing slash)
    pub async fn wait_for_url_suffix(&self, suffix: &str) -> Result<String> {
        self.wait_for_url(&format!("ending in '{}'", suffix), |url| {
            url.trim_end_matches('/').ends_with(suffix)
        })
        .await
    }

    /// Quit the browser, consuming the session
    pub async fn close(mut self) -> Result<()> {
        self.browser.close().await?;
        let _ = self.browser.wait().await;
        self.events.abort();
        Ok(())
    }
}
