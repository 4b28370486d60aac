//! Notification system for the TUI.
//!
//! Every message shown to the user goes through here. Notifications
//! expire after the configured TTL so the footer falls back to key help.

use chrono::{DateTime, Duration, Utc};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Warning,
    Error,
    Success,
}

impl NotificationLevel {
    pub fn label(&self) -> &'static str {
        match self {
            NotificationLevel::Info => "INFO",
            NotificationLevel::Warning => "WARN",
            NotificationLevel::Error => "ERROR",
            NotificationLevel::Success => "OK",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

impl Notification {
    pub fn new(level: NotificationLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            created_at: Utc::now(),
        }
    }

    pub fn is_expired(&self, now: DateTime<Utc>, ttl: Duration) -> bool {
        now - self.created_at >= ttl
    }
}

/// Drop notifications older than `ttl_ms`, keeping the newest `keep` at most.
pub fn prune(notifications: &mut Vec<Notification>, now: DateTime<Utc>, ttl_ms: u64, keep: usize) {
    let ttl = Duration::milliseconds(i64::try_from(ttl_ms).unwrap_or(i64::MAX));
    notifications.retain(|n| !n.is_expired(now, ttl));
    if notifications.len() > keep {
        let excess = notifications.len() - keep;
        notifications.drain(..excess);
    }
}
