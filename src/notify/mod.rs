//! Status notifications for backup-rotate
//!
//! The operator learns about every run through a single email. The runner
//! talks to a [`Notifier`]; [`SmtpNotifier`] is the production
//! implementation and [`MemoryNotifier`] records messages for tests.

mod smtp;

use std::cell::{Cell, RefCell};

pub use smtp::SmtpNotifier;

use crate::error::{RotationError, RotationResult};
use crate::models::DayOfWeek;

/// A plain-text status message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub subject: String,
    pub body: String,
}

impl Notification {
    pub fn new(subject: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            body: body.into(),
        }
    }

    /// The run stopped before or while processing the day's file
    pub fn process_failed(day: DayOfWeek, body: impl Into<String>) -> Self {
        Self::new(format!("Backup Process Failed for {}", day), body)
    }

    /// A backup inside the retention window could not be deleted
    pub fn deletion_failed(day: DayOfWeek, body: impl Into<String>) -> Self {
        Self::new(format!("Backup Deletion Failed for {}", day), body)
    }

    /// The temporary archive could not be removed
    pub fn cleanup_failed(day: DayOfWeek, body: impl Into<String>) -> Self {
        Self::new(format!("Backup Cleanup Error for {}", day), body)
    }

    /// Every step of the run completed
    pub fn succeeded(day: DayOfWeek, file_name: &str) -> Self {
        Self::new(
            format!("Backup Process Successful for {}", day),
            format!(
                "The backup file '{}' was successfully compressed, transferred, and old backups deleted.",
                file_name
            ),
        )
    }
}

/// Delivers status notifications to the operator
pub trait Notifier {
    fn send(&self, notification: &Notification) -> RotationResult<()>;
}

/// Records notifications instead of sending them (useful for testing)
#[derive(Debug, Default)]
pub struct MemoryNotifier {
    sent: RefCell<Vec<Notification>>,
    fail: Cell<bool>,
}

impl MemoryNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// A notifier whose every send fails
    pub fn failing() -> Self {
        let notifier = Self::default();
        notifier.fail.set(true);
        notifier
    }

    /// Notifications accepted so far
    pub fn sent(&self) -> Vec<Notification> {
        self.sent.borrow().clone()
    }
}

impl Notifier for MemoryNotifier {
    fn send(&self, notification: &Notification) -> RotationResult<()> {
        if self.fail.get() {
            return Err(RotationError::Notification(
                "notifier configured to fail".into(),
            ));
        }
        self.sent.borrow_mut().push(notification.clone());
        Ok(())
    }
}
