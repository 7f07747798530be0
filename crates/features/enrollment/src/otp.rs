//! OTP verification seam and the server-side challenge store.

use dmart_domain::config::OtpConfig;
use dmart_domain::constants::DEMO_OTP_CODE;
use moka::sync::Cache;
use std::borrow::Cow;
use std::fmt::Debug;
use std::time::Duration;
use tracing::debug;

/// Decides whether an entered code passes the OTP step.
///
/// The registration flow only talks to this trait, so the demo stub below can
/// be swapped for a real server-backed verifier without touching the state
/// machine.
pub trait OtpVerifier: Debug {
    fn verify(&self, code: &str) -> bool;
}

/// Demo verifier comparing against one fixed literal.
#[derive(Debug, Clone)]
pub struct StaticCodeVerifier {
    code: Cow<'static, str>,
}

impl StaticCodeVerifier {
    #[must_use]
    pub fn new(code: impl Into<Cow<'static, str>>) -> Self {
        Self { code: code.into() }
    }
}

impl Default for StaticCodeVerifier {
    fn default() -> Self {
        Self::new(DEMO_OTP_CODE)
    }
}

impl OtpVerifier for StaticCodeVerifier {
    fn verify(&self, code: &str) -> bool {
        code == self.code
    }
}

/// Server-side store of issued challenges, keyed by email.
///
/// Rows expire after the configured TTL; a successful verification does not
/// consume the row (matching the observed upstream behavior, with the TTL
/// bounding the replay window).
#[derive(Debug, Clone)]
pub struct OtpStore {
    codes: Cache<String, String>,
    code_length: usize,
}

impl OtpStore {
    #[must_use]
    pub fn new(config: &OtpConfig) -> Self {
        Self::with_ttl(
            Duration::from_secs(config.ttl_seconds),
            config.store_capacity,
            config.code_length,
        )
    }

    #[must_use]
    pub fn with_ttl(ttl: Duration, capacity: u64, code_length: usize) -> Self {
        let codes = Cache::builder().max_capacity(capacity).time_to_live(ttl).build();

        Self { codes, code_length }
    }

    /// Records a challenge for `email`, replacing any previous one.
    pub fn issue(&self, email: &str, code: &str) {
        debug!(%email, "OTP challenge stored");
        self.codes.insert(email.to_owned(), code.to_owned());
    }

    /// True iff a non-expired row matches both email and code exactly.
    #[must_use]
    pub fn verify(&self, email: &str, code: &str) -> bool {
        self.codes.get(email).is_some_and(|stored| stored == code)
    }

    /// Generates a fresh numeric code of the configured length.
    #[must_use]
    pub fn generate_code(&self) -> String {
        nanoid::nanoid!((self.code_length), &['0', '1', '2', '3', '4', '5', '6', '7', '8', '9'])
    }
}
