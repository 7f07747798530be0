//! Platform-wide constants.

/// Shown whenever a record carries no usable image field.
pub const PLACEHOLDER_IMAGE_URL: &str = "https://via.placeholder.com/300x200.png?text=No+Image";

/// Fixed code accepted by the demo OTP verifier.
pub const DEMO_OTP_CODE: &str = "1234";

/// Citizen Identification numbers are exactly this many digits.
pub const CID_LENGTH: usize = 11;

/// Bhutanese mobile numbers are exactly this many digits.
pub const PHONE_LENGTH: usize = 8;

/// Identifier alphabet without visually ambiguous characters (I, O, l, 0, 1).
pub const SAFE_ALPHABET: &[char; 55] = &[
    '2', '3', '4', '5', '6', '7', '8', '9', 'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'J', 'K', 'L',
    'M', 'N', 'P', 'Q', 'R', 'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z', 'a', 'b', 'c', 'd', 'e', 'f',
    'g', 'h', 'j', 'k', 'm', 'n', 'p', 'q', 'r', 's', 't', 'u', 'v', 'w', 'x', 'y', 'z',
];

// OpenAPI tags
pub const SYSTEM_TAG: &str = "System";
pub const CATALOG_TAG: &str = "Catalog";
pub const MESSAGING_TAG: &str = "Messaging";
