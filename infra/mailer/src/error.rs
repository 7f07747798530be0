use std::borrow::Cow;

/// Errors produced while sending mail.
///
/// `Display` output is deliberately free of provider internals; use
/// [`MailerError::provider_detail`] when logging.
#[derive(Debug, thiserror::Error)]
pub enum MailerError {
    /// A required envelope field was empty.
    #[error("missing required field `{missing}`")]
    IncompleteEnvelope { missing: &'static str },

    /// The underlying provider rejected or failed to deliver the message.
    #[error("mail provider failed to deliver the message")]
    Delivery { provider: Cow<'static, str> },
}

impl MailerError {
    /// Full detail for logs, including whatever the provider reported.
    #[must_use]
    pub fn provider_detail(&self) -> &str {
        match self {
            Self::IncompleteEnvelope { missing } => missing,
            Self::Delivery { provider } => provider,
        }
    }
}
