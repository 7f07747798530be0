//! # Mailer
//!
//! Outbound mail for the platform behind a single seam: [`MailTransport`].
//! The real provider lives outside this repository; what ships here is the
//! envelope type, a cloneable [`Mailer`] handle, and transports for local
//! runs and tests.
//!
//! Provider failures keep their detail in logs only; the [`MailerError`]
//! `Display` output is safe to surface to HTTP clients.
//!
//! ## Example
//! ```rust
//! use dmart_mailer::{Email, Mailer, transport::LogTransport};
//!
//! # async fn example() -> Result<(), dmart_mailer::MailerError> {
//! let mailer = Mailer::new(LogTransport);
//! let receipt = mailer
//!     .send(Email::new("farmer@drukmart.bt", "Welcome", "Kuzu zangpo la!"))
//!     .await?;
//! assert!(!receipt.message_id.is_empty());
//! # Ok(())
//! # }
//! ```

mod error;
pub mod transport;

pub use crate::error::MailerError;

use crate::transport::MailTransport;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info};

/// A plain-text email envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Email {
    pub to: String,
    pub subject: String,
    pub text: String,
}

impl Email {
    pub fn new(
        to: impl Into<String>,
        subject: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self { to: to.into(), subject: subject.into(), text: text.into() }
    }

    /// Returns the name of the first empty required field, if any.
    #[must_use]
    pub fn missing_field(&self) -> Option<&'static str> {
        if self.to.trim().is_empty() {
            Some("to")
        } else if self.subject.trim().is_empty() {
            Some("subject")
        } else if self.text.trim().is_empty() {
            Some("text")
        } else {
            None
        }
    }
}

/// Provider acknowledgement for a delivered message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryReceipt {
    pub message_id: String,
}

/// Cloneable handle over a [`MailTransport`].
#[derive(Debug, Clone)]
pub struct Mailer {
    transport: Arc<dyn MailTransport>,
}

impl Mailer {
    pub fn new(transport: impl MailTransport + 'static) -> Self {
        Self { transport: Arc::new(transport) }
    }

    #[must_use]
    pub fn from_arc(transport: Arc<dyn MailTransport>) -> Self {
        Self { transport }
    }

    /// Validates the envelope and hands it to the transport.
    ///
    /// # Errors
    /// * [`MailerError::IncompleteEnvelope`] when a required field is empty.
    /// * [`MailerError::Delivery`] when the transport rejects the message;
    ///   the provider detail is logged here and omitted from `Display`.
    pub async fn send(&self, email: Email) -> Result<DeliveryReceipt, MailerError> {
        if let Some(missing) = email.missing_field() {
            return Err(MailerError::IncompleteEnvelope { missing });
        }

        debug!(to = %email.to, subject = %email.subject, "Dispatching email");

        match self.transport.deliver(&email).await {
            Ok(receipt) => {
                info!(to = %email.to, message_id = %receipt.message_id, "Email delivered");
                Ok(receipt)
            },
            Err(err) => {
                tracing::error!(to = %email.to, detail = %err.provider_detail(), "Email delivery failed");
                Err(err)
            },
        }
    }
}
