//! Built-in transports: a logging transport for local runs and test doubles.

use crate::{DeliveryReceipt, Email, MailerError};
use async_trait::async_trait;
use dmart_domain::constants::SAFE_ALPHABET;
use parking_lot::Mutex;
use std::borrow::Cow;
use std::fmt::Debug;
use tracing::info;

/// Seam between the platform and the actual mail provider.
#[async_trait]
pub trait MailTransport: Debug + Send + Sync {
    /// Delivers one message, returning the provider's receipt.
    async fn deliver(&self, email: &Email) -> Result<DeliveryReceipt, MailerError>;
}

/// Writes the message to the log and reports success. Default for local runs.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogTransport;

#[async_trait]
impl MailTransport for LogTransport {
    async fn deliver(&self, email: &Email) -> Result<DeliveryReceipt, MailerError> {
        let message_id = format!("log-{}", nanoid::nanoid!(16, SAFE_ALPHABET));
        info!(to = %email.to, subject = %email.subject, %message_id, "LogTransport: {}", email.text);
        Ok(DeliveryReceipt { message_id })
    }
}

/// Records every delivered envelope; for assertions in tests.
#[derive(Debug, Default)]
pub struct RecordingTransport {
    sent: Mutex<Vec<Email>>,
}

impl RecordingTransport {
    #[must_use]
    pub fn sent(&self) -> Vec<Email> {
        self.sent.lock().clone()
    }
}

#[async_trait]
impl MailTransport for RecordingTransport {
    async fn deliver(&self, email: &Email) -> Result<DeliveryReceipt, MailerError> {
        let mut sent = self.sent.lock();
        sent.push(email.clone());
        Ok(DeliveryReceipt { message_id: format!("recorded-{}", sent.len()) })
    }
}

/// Fails every delivery with the configured provider detail.
#[derive(Debug, Clone)]
pub struct FailingTransport {
    pub reason: Cow<'static, str>,
}

impl FailingTransport {
    #[must_use]
    pub fn new(reason: impl Into<Cow<'static, str>>) -> Self {
        Self { reason: reason.into() }
    }
}

#[async_trait]
impl MailTransport for FailingTransport {
    async fn deliver(&self, _email: &Email) -> Result<DeliveryReceipt, MailerError> {
        Err(MailerError::Delivery { provider: self.reason.clone() })
    }
}
