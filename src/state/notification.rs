//! Transient status-bar notifications

use std::time::{Duration, Instant};

/// Default lifetime of a notification
pub const DEFAULT_NOTIFICATION_DURATION: Duration = Duration::from_millis(2000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Failure,
}

/// A message shown in the status bar until it expires
#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
    pub shown_at: Instant,
    pub duration: Duration,
}

impl Notification {
    pub fn success(message: impl Into<String>, duration: Duration) -> Self {
        Self::new(message.into(), NotificationKind::Success, duration)
    }

    pub fn failure(message: impl Into<String>, duration: Duration) -> Self {
        Self::new(message.into(), NotificationKind::Failure, duration)
    }

    fn new(message: String, kind: NotificationKind, duration: Duration) -> Self {
        Self {
            message,
            kind,
            shown_at: Instant::now(),
            duration,
        }
    }

    pub fn is_expired(&self) -> bool {
        self.shown_at.elapsed() >= self.duration
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_notification_is_not_expired() {
        let n = Notification::success("Copied!", DEFAULT_NOTIFICATION_DURATION);
        assert_eq!(n.kind, NotificationKind::Success);
        assert!(!n.is_expired());
    }

    #[test]
    fn test_zero_duration_expires_immediately() {
        let n = Notification::failure("denied", Duration::ZERO);
        assert_eq!(n.kind, NotificationKind::Failure);
        assert!(n.is_expired());
    }

    #[test]
    fn test_old_notification_is_expired() {
        let mut n = Notification::success("Copied!", Duration::from_millis(10));
        n.shown_at = Instant::now() - Duration::from_millis(50);
        assert!(n.is_expired());
    }
}
