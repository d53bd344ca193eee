//! SMTP delivery through lettre
//!
//! Connects to the configured relay, upgrades to TLS with STARTTLS, and
//! sends a plain-text message from the configured sender to the single
//! configured recipient.

use std::time::Duration;

use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Message, SmtpTransport, Transport};

use super::{Notification, Notifier};
use crate::config::EmailSettings;
use crate::error::{RotationError, RotationResult};

/// Sends notifications over SMTP with STARTTLS
pub struct SmtpNotifier {
    settings: EmailSettings,
}

impl SmtpNotifier {
    pub fn new(settings: EmailSettings) -> Self {
        Self { settings }
    }

    /// Build the message without sending it
    pub fn build_message(&self, notification: &Notification) -> RotationResult<Message> {
        let from: Mailbox = self.settings.sender.parse().map_err(|e| {
            RotationError::Notification(format!(
                "Invalid sender address '{}': {}",
                self.settings.sender, e
            ))
        })?;
        let to: Mailbox = self.settings.recipient.parse().map_err(|e| {
            RotationError::Notification(format!(
                "Invalid recipient address '{}': {}",
                self.settings.recipient, e
            ))
        })?;

        Message::builder()
            .from(from)
            .to(to)
            .subject(notification.subject.as_str())
            .header(ContentType::TEXT_PLAIN)
            .body(notification.body.clone())
            .map_err(|e| RotationError::Notification(format!("Failed to build email: {}", e)))
    }

    fn transport(&self) -> RotationResult<SmtpTransport> {
        let mut builder = SmtpTransport::starttls_relay(&self.settings.smtp_server)
            .map_err(|e| {
                RotationError::Notification(format!(
                    "Failed to configure SMTP relay {}: {}",
                    self.settings.smtp_server, e
                ))
            })?
            .port(self.settings.smtp_port)
            .timeout(Some(Duration::from_secs(self.settings.timeout_secs)));

        if let Some((user, pass)) = self.settings.credentials() {
            builder = builder.credentials(Credentials::new(user.to_string(), pass.to_string()));
        }

        Ok(builder.build())
    }
}

impl Notifier for SmtpNotifier {
    fn send(&self, notification: &Notification) -> RotationResult<()> {
        let message = self.build_message(notification)?;
        self.transport()?
            .send(&message)
            .map_err(|e| RotationError::Notification(format!("Failed to send email: {}", e)))?;
        Ok(())
    }
}
