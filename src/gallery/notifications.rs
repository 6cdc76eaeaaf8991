use std::fmt;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio_util::sync::CancellationToken;

/// How loud a notification is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
    Info,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Success => "success",
            Self::Error => "error",
            Self::Info => "info",
        };
        f.write_str(label)
    }
}

/// One transient user-facing message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// Unique for the lifetime of the owning queue.
    pub id: u64,
    pub message: String,
    pub severity: Severity,
}

struct ActiveNotification {
    notification: Notification,
    expiry: CancellationToken,
}

struct QueueInner {
    entries: Vec<ActiveNotification>,
    next_id: u64,
}

/// Ordered set of active notifications, oldest first.
///
/// Every pushed entry schedules its own removal after the dismiss window;
/// an explicit [`dismiss`](NotificationQueue::dismiss) cancels that timer.
/// Ids come from a counter scoped to this instance, so parallel queues
/// never bleed into each other.
///
/// Cloning is shallow: clones share the same queue.
#[derive(Clone)]
pub struct NotificationQueue {
    inner: Arc<Mutex<QueueInner>>,
    dismiss_after: Duration,
}

impl NotificationQueue {
    /// Dismiss window matching the original five-second toast.
    pub const DEFAULT_DISMISS_AFTER: Duration = Duration::from_secs(5);

    #[must_use]
    pub fn new(dismiss_after: Duration) -> Self {
        Self {
            inner: Arc::new(Mutex::new(QueueInner {
                entries: Vec::new(),
                next_id: 0,
            })),
            dismiss_after,
        }
    }

    /// Append a message and schedule its auto-dismissal. Duplicates are
    /// allowed; entries self-expire.
    ///
    /// Must be called from within a tokio runtime (the expiry timer is a
    /// spawned task).
    pub fn push(&self, message: impl Into<String>, severity: Severity) -> u64 {
        let expiry = CancellationToken::new();
        let id = {
            let mut inner = self.inner.lock().expect("queue lock poisoned");
            let id = inner.next_id;
            inner.next_id += 1;
            inner.entries.push(ActiveNotification {
                notification: Notification {
                    id,
                    message: message.into(),
                    severity,
                },
                expiry: expiry.clone(),
            });
            id
        };

        let queue = Arc::clone(&self.inner);
        let dismiss_after = self.dismiss_after;
        tokio::spawn(async move {
            tokio::select! {
                () = expiry.cancelled() => {}
                () = tokio::time::sleep(dismiss_after) => {
                    let mut inner = queue.lock().expect("queue lock poisoned");
                    inner.entries.retain(|entry| entry.notification.id != id);
                }
            }
        });
        id
    }

    pub fn push_success(&self, message: impl Into<String>) -> u64 {
        self.push(message, Severity::Success)
    }

    pub fn push_error(&self, message: impl Into<String>) -> u64 {
        self.push(message, Severity::Error)
    }

    pub fn push_info(&self, message: impl Into<String>) -> u64 {
        self.push(message, Severity::Info)
    }

    /// Remove a notification and cancel its expiry timer. Unknown ids are a
    /// no-op.
    pub fn dismiss(&self, id: u64) {
        let mut inner = self.inner.lock().expect("queue lock poisoned");
        if let Some(index) = inner
            .entries
            .iter()
            .position(|entry| entry.notification.id == id)
        {
            let entry = inner.entries.remove(index);
            entry.expiry.cancel();
        }
    }

    /// Snapshot of the active notifications, oldest first.
    #[must_use]
    pub fn notifications(&self) -> Vec<Notification> {
        self.inner
            .lock()
            .expect("queue lock poisoned")
            .entries
            .iter()
            .map(|entry| entry.notification.clone())
            .collect()
    }
}

impl Default for NotificationQueue {
    fn default() -> Self {
        Self::new(Self::DEFAULT_DISMISS_AFTER)
    }
}
