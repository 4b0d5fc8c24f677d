/// In-process toast center
///
/// The like/collaborate/apply flows push toasts here; everything else
/// surfaces errors in its own section. Toasts auto-dismiss 4 seconds after
/// creation - `active()` prunes expired entries, so no background timer is
/// needed.

use std::sync::Mutex;
use std::time::{Duration, Instant};

/// Default toast lifetime
pub const TOAST_TTL: Duration = Duration::from_secs(4);

/// Toast severity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

/// A single toast
#[derive(Debug, Clone)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
    created_at: Instant,
}

/// Shared toast service
#[derive(Debug)]
pub struct NotificationCenter {
    toasts: Mutex<Vec<Toast>>,
    ttl: Duration,
}

impl NotificationCenter {
    pub fn new() -> Self {
        Self::with_ttl(TOAST_TTL)
    }

    /// Creates a center with a custom lifetime (tests)
    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            toasts: Mutex::new(Vec::new()),
            ttl,
        }
    }

    /// Pushes a success toast
    pub fn success(&self, message: impl Into<String>) {
        self.push(ToastKind::Success, message.into());
    }

    /// Pushes an error toast
    pub fn error(&self, message: impl Into<String>) {
        self.push(ToastKind::Error, message.into());
    }

    fn push(&self, kind: ToastKind, message: String) {
        let mut toasts = self.toasts.lock().expect("toast lock poisoned");
        toasts.push(Toast {
            kind,
            message,
            created_at: Instant::now(),
        });
    }

    /// Currently visible toasts; expired ones are pruned on read
    pub fn active(&self) -> Vec<Toast> {
        let mut toasts = self.toasts.lock().expect("toast lock poisoned");
        let ttl = self.ttl;
        toasts.retain(|t| t.created_at.elapsed() < ttl);
        toasts.clone()
    }
}

impl Default for NotificationCenter {
    fn default() -> Self {
        Self::new()
    }
}
