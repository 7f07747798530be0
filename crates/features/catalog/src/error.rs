use std::borrow::Cow;

/// A specialized error enum for the catalog slice.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The upstream catalog API failed or returned an unusable payload.
    #[error("Upstream catalog error: {message}")]
    Upstream { message: Cow<'static, str> },
}

impl CatalogError {
    #[must_use]
    pub fn upstream(message: impl Into<Cow<'static, str>>) -> Self {
        Self::Upstream { message: message.into() }
    }
}
