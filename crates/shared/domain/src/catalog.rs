//! Catalog records as they arrive from the upstream marketplace API.
//!
//! The upstream is loosely typed: identifiers show up as JSON strings or
//! numbers depending on the producing endpoint, and image data is spread
//! across several historical field names. These types normalize identifiers
//! to string keys at the deserialization boundary and keep every image field
//! optional so resolution can stay priority-ordered.

use serde::{Deserialize, Deserializer, Serialize};

/// A product/category image record carrying zero or more candidate fields.
///
/// At most one field is authoritative at a time; which one wins is decided by
/// the resolver, not here. Empty strings are kept as-is and treated as absent
/// by the resolver.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProductImage {
    /// Absolute URL pointing at a binary-serving endpoint.
    pub product_image_url: Option<String>,
    /// Base64-encoded binary payload (no `data:` prefix).
    pub product_image_base64: Option<String>,
    /// Legacy combined field; may itself be a URL or a data URI.
    pub product_image: Option<String>,
    /// Legacy alias of [`Self::product_image`].
    pub image: Option<String>,
}

impl ProductImage {
    /// True when no candidate field carries a non-empty value.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        [&self.product_image_url, &self.product_image_base64, &self.product_image, &self.image]
            .into_iter()
            .all(|field| field.as_deref().is_none_or(str::is_empty))
    }
}

/// A marketplace category as fetched from the upstream API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    /// Unique identifier, normalized to a string key.
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Optional base64 payload (no `data:` prefix).
    #[serde(default)]
    pub image_base64: Option<String>,
}

/// A product listing, tagged with the category it belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    /// Identifier of the owning category, normalized to a string key.
    #[serde(deserialize_with = "string_or_number")]
    pub category_id: String,
    #[serde(flatten)]
    pub image: ProductImage,
}

/// Accepts a JSON string or integer and yields the stringified form, so
/// `"5"` and `5` produce the same lookup key.
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Repr {
        Text(String),
        Number(i64),
    }

    Ok(match Repr::deserialize(deserializer)? {
        Repr::Text(text) => text,
        Repr::Number(number) => number.to_string(),
    })
}
