//! Bounded condition waits
//!
//! Fixed-duration sleeps are a poor stand-in for page readiness; instead,
//! lookups and URL checks poll a predicate over the observed state, bounded
//! by a timeout.

use std::future::Future;
use std::time::Duration;
use tokio::time::{sleep, Instant};

/// Poll `probe` until it yields a value or `timeout` elapses.
///
/// The probe runs at least once, so a zero timeout still allows one check.
pub async fn poll_until<T, F, Fut>(timeout: Duration, interval: Duration, mut probe: F) -> Option<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Option<T>>,
{
    let deadline = Instant::now() + timeout;
    loop {
        if let Some(value) = probe().await {
            return Some(value);
        }
        if Instant::now() >= deadline {
            return None;
        }
        sleep(interval).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[tokio::test(start_paused = true)]
    async fn test_gives_up_after_timeout() {
        let attempts = Cell::new(0u32);
        let result: Option<()> = poll_until(
            Duration::from_secs(1),
            Duration::from_millis(100),
            || {
                attempts.set(attempts.get() + 1);
                async { None }
            },
        )
        .await;

        assert!(result.is_none());
        assert!(attempts.get() > 1, "should have retried before giving up");
    }

    #[tokio::test(start_paused = true)]
    async fn test_returns_once_probe_succeeds() {
        let attempts = Cell::new(0u32);
        let result = poll_until(
            Duration::from_secs(5),
            Duration::from_millis(100),
            || {
                attempts.set(attempts.get() + 1);
                let n = attempts.get();
                async move { (n >= 3).then_some(n) }
            },
        )
        .await;

        assert_eq!(result, Some(3));
    }

    #[tokio::test(start_paused = true)]
    async fn test_zero_timeout_still_probes_once() {
        let result = poll_until(Duration::ZERO, Duration::from_millis(100), || async {
            Some(42)
        })
        .await;

        assert_eq!(result, Some(42));
    }
}
