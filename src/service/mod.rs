pub mod notifier;

// Re-export the notification port so callers can use `crate::service::Notifier`
pub use notifier::{
    BroadcastNotifier, MemoryNotifier, Notification, Notifier, Severity, TracingNotifier,
};
