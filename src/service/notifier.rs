//! Outbound, display-only notifications (the toast channel).

use std::fmt;
use std::sync::Arc;

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;
use tracing::{info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Error,
    Info,
    Neutral,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Severity::Success => "success",
            Severity::Error => "error",
            Severity::Info => "info",
            Severity::Neutral => "neutral",
        };
        f.write_str(label)
    }
}

/// A human-readable message with a severity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub severity: Severity,
    pub message: String,
}

impl Notification {
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self { severity, message: message.into() }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(Severity::Success, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Severity::Error, message)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(Severity::Info, message)
    }

    pub fn neutral(message: impl Into<String>) -> Self {
        Self::new(Severity::Neutral, message)
    }
}

/// Fire-and-forget sink. No acknowledgment, no failure path.
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: Notification);
}

/// Writes notifications to the tracing log.
#[derive(Debug, Default, Clone)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, notification: Notification) {
        match notification.severity {
            Severity::Error => warn!(severity = %notification.severity, "{}", notification.message),
            _ => info!(severity = %notification.severity, "{}", notification.message),
        }
    }
}

/// Keeps every notification in memory, oldest first.
#[derive(Debug, Default, Clone)]
pub struct MemoryNotifier {
    received: Arc<Mutex<Vec<Notification>>>,
}

impl MemoryNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notifications(&self) -> Vec<Notification> {
        self.received.lock().clone()
    }

    pub fn messages(&self) -> Vec<String> {
        self.received.lock().iter().map(|n| n.message.clone()).collect()
    }

    pub fn last(&self) -> Option<Notification> {
        self.received.lock().last().cloned()
    }

    /// Takes everything received so far, leaving the buffer empty.
    pub fn drain(&self) -> Vec<Notification> {
        std::mem::take(&mut *self.received.lock())
    }
}

impl Notifier for MemoryNotifier {
    fn notify(&self, notification: Notification) {
        self.received.lock().push(notification);
    }
}

/// Fans notifications out to any number of async subscribers and traces them.
#[derive(Debug, Clone)]
pub struct BroadcastNotifier {
    sender: broadcast::Sender<Notification>,
}

impl BroadcastNotifier {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<Notification> {
        self.sender.subscribe()
    }
}

impl Notifier for BroadcastNotifier {
    fn notify(&self, notification: Notification) {
        TracingNotifier.notify(notification.clone());
        // No subscribers is fine: the message is display-only.
        let _ = self.sender.send(notification);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_notifier_records_in_order() {
        let notifier = MemoryNotifier::new();
        notifier.notify(Notification::info("first"));
        notifier.notify(Notification::error("second"));
        assert_eq!(notifier.messages(), vec!["first", "second"]);
        assert_eq!(notifier.last().map(|n| n.severity), Some(Severity::Error));
        assert_eq!(notifier.drain().len(), 2);
        assert!(notifier.notifications().is_empty());
    }

    #[test]
    fn constructors_cover_every_severity() {
        let built = [
            Notification::success("a"),
            Notification::error("b"),
            Notification::info("c"),
            Notification::neutral("d"),
        ];
        let severities: Vec<Severity> = built.iter().map(|n| n.severity).collect();
        assert_eq!(
            severities,
            vec![Severity::Success, Severity::Error, Severity::Info, Severity::Neutral]
        );
    }

    #[test]
    fn broadcast_without_subscribers_does_not_panic() {
        let notifier = BroadcastNotifier::new(4);
        notifier.notify(Notification::success("nobody listening"));
    }

    #[test]
    fn broadcast_reaches_subscriber() {
        let notifier = BroadcastNotifier::new(4);
        let mut rx = notifier.subscribe();
        notifier.notify(Notification::success("Transaction submitted!"));
        let got = rx.try_recv().unwrap();
        assert_eq!(got.severity, Severity::Success);
        assert_eq!(got.message, "Transaction submitted!");
    }
}
