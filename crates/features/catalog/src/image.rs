//! # Image Resolution
//!
//! Picks one displayable image string for a loosely-typed catalog record.
//! The function is total: every input yields a non-empty URL or data URI,
//! falling back to [`PLACEHOLDER_IMAGE_URL`].
//!
//! MIME sniffing works on the **encoded base64 text**, not decoded bytes.
//! Base64 encodes common magic bytes deterministically, so a literal prefix
//! match on the text is equivalent for the formats we care about and avoids
//! decoding payloads that are only ever passed through.

use dmart_domain::catalog::ProductImage;
use dmart_domain::constants::PLACEHOLDER_IMAGE_URL;

/// Guesses a MIME type from the prefix of base64-encoded image data.
///
/// Checked in order: JPEG, PNG, GIF (87a/89a), WEBP; anything unrecognized
/// defaults to JPEG.
#[must_use]
pub fn sniff_base64_mime(payload: &str) -> &'static str {
    if payload.starts_with("/9j/") {
        "image/jpeg"
    } else if payload.starts_with("iVBORw0KG") {
        "image/png"
    } else if payload.starts_with("R0lGODdh") || payload.starts_with("R0lGODlh") {
        "image/gif"
    } else if payload.starts_with("UklGR") || payload.starts_with("RIFF") {
        "image/webp"
    } else {
        "image/jpeg"
    }
}

/// Resolves the displayable image for a product record.
///
/// Priority order, first non-empty field wins:
/// 1. direct URL, returned verbatim
/// 2. base64 payload, wrapped into a `data:` URI with a sniffed MIME type
/// 3. legacy combined field (URL or data URI), returned verbatim
/// 4. legacy alias field, returned verbatim
/// 5. the placeholder constant
///
/// Empty-string fields count as absent and fall through to the next tier.
#[must_use]
pub fn resolve_image(source: Option<&ProductImage>) -> String {
    let Some(source) = source.filter(|record| !record.is_blank()) else {
        return PLACEHOLDER_IMAGE_URL.to_owned();
    };

    if let Some(url) = non_empty(&source.product_image_url) {
        return url.to_owned();
    }
    if let Some(payload) = non_empty(&source.product_image_base64) {
        return to_data_uri(payload);
    }
    if let Some(combined) = non_empty(&source.product_image) {
        return combined.to_owned();
    }
    if let Some(legacy) = non_empty(&source.image) {
        return legacy.to_owned();
    }

    PLACEHOLDER_IMAGE_URL.to_owned()
}

/// Resolves a bare optional base64 payload (category images), with the same
/// empty-as-absent policy and placeholder fallback.
#[must_use]
pub fn resolve_base64_image(payload: Option<&str>) -> String {
    match payload {
        Some(payload) if !payload.is_empty() => to_data_uri(payload),
        _ => PLACEHOLDER_IMAGE_URL.to_owned(),
    }
}

fn to_data_uri(payload: &str) -> String {
    format!("data:{};base64,{}", sniff_base64_mime(payload), payload)
}

fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|value| !value.is_empty())
}
