/// Keystroke debouncing for search boxes
///
/// Rapid calls coalesce into a single fetch: each call cancels the previous
/// pending wait, then sleeps the debounce interval. Only the waiter that
/// survives the interval issues its request.
///
/// The internships search uses a ~300ms interval.

use std::sync::Mutex;
use std::time::Duration;

use tokio_util::sync::CancellationToken;

/// Default debounce interval for search inputs
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(300);

/// Coalesces rapid calls; the latest caller wins
#[derive(Debug)]
pub struct Debouncer {
    delay: Duration,
    current: Mutex<CancellationToken>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            current: Mutex::new(CancellationToken::new()),
        }
    }

    /// Waits out the debounce interval
    ///
    /// Returns `true` if this caller survived (no newer call arrived) and
    /// should proceed; `false` if a newer call superseded it.
    pub async fn wait(&self) -> bool {
        let token = CancellationToken::new();
        let previous = {
            let mut current = self.current.lock().expect("debounce lock poisoned");
            std::mem::replace(&mut *current, token.clone())
        };
        previous.cancel();

        tokio::select! {
            _ = token.cancelled() => false,
            _ = tokio::time::sleep(self.delay) => true,
        }
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(SEARCH_DEBOUNCE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_single_call_survives() {
        let debouncer = Debouncer::new(Duration::from_millis(5));
        assert!(debouncer.wait().await);
    }

    #[tokio::test]
    async fn test_rapid_calls_coalesce_to_latest() {
        let debouncer = std::sync::Arc::new(Debouncer::new(Duration::from_millis(50)));

        let first = {
            let debouncer = debouncer.clone();
            tokio::spawn(async move { debouncer.wait().await })
        };
        // Give the first waiter time to install its token
        tokio::time::sleep(Duration::from_millis(10)).await;

        let second = debouncer.wait().await;
        assert!(second, "latest caller survives");
        assert!(!first.await.unwrap(), "superseded caller is cancelled");
    }
}
