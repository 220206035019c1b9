//! Transient operator notifications ("toasts") emitted by the admin panels.

use std::sync::{Arc, Mutex, PoisonError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Loading,
    Success,
    Error,
}

/// A notification. A later notification with the same `key` replaces the earlier one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub key: &'static str,
    pub kind: NotificationKind,
    pub message: String,
}

pub trait Notifier: Send + Sync {
    fn notify(&self, notification: Notification);
}

/// Writes notifications to the tracing log.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, n: Notification) {
        match n.kind {
            NotificationKind::Loading => tracing::info!(key = n.key, "{}", n.message),
            NotificationKind::Success => tracing::info!(key = n.key, "{}", n.message),
            NotificationKind::Error => tracing::warn!(key = n.key, "{}", n.message),
        }
    }
}

/// Keeps every notification in order of emission.
#[derive(Debug, Default, Clone)]
pub struct NotificationLog {
    entries: Arc<Mutex<Vec<Notification>>>,
}

impl NotificationLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> Vec<Notification> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// The notification currently shown for `key`.
    pub fn current(&self, key: &str) -> Option<Notification> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .rev()
            .find(|n| n.key == key)
            .cloned()
    }

    pub fn kinds(&self) -> Vec<NotificationKind> {
        self.entries().iter().map(|n| n.kind).collect()
    }
}

impl Notifier for NotificationLog {
    fn notify(&self, notification: Notification) {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(notification);
    }
}
