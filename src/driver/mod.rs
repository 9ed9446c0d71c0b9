//! Driver module - browser session and element lookup
//!
//! Wraps chromiumoxide (Chrome DevTools Protocol) behind the small set of
//! primitives the scenarios need: navigate, locate, act, wait.

mod locator;
mod session;
pub mod wait;

pub use locator::Locator;
pub use session::Session;
