//! Enrollment feature slice: the registration flow, OTP challenges, and the
//! credential-reset validator.

mod error;
pub mod flow;
pub mod notify;
pub mod otp;
pub mod reset;

pub use crate::error::EnrollmentError;
pub use crate::flow::{BasicInfo, RegistrationFlow, RegistrationStep};
pub use crate::notify::{BufferedNotifier, Notice, NoticeLevel, Notifier, NullNotifier};
pub use crate::otp::{OtpStore, OtpVerifier, StaticCodeVerifier};
pub use crate::reset::{ResetFieldErrors, ResetForm, ResetRequest, sanitize_cid, sanitize_phone, validate_reset};

use dmart_domain::config::ApiConfig;
use dmart_domain::registry::{FeatureSlice, InitializedSlice};
use std::any::Any;
use std::ops::Deref;
use std::sync::Arc;

#[derive(Debug)]
pub struct EnrollmentInner {
    otp_store: OtpStore,
}

/// Enrollment feature state, cheap to clone.
#[derive(Debug, Clone)]
pub struct Enrollment {
    inner: Arc<EnrollmentInner>,
}

impl Deref for Enrollment {
    type Target = EnrollmentInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl FeatureSlice for Enrollment {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl EnrollmentInner {
    #[must_use]
    pub const fn otp_store(&self) -> &OtpStore {
        &self.otp_store
    }
}

/// Initialize the enrollment feature.
pub fn init(config: &ApiConfig) -> InitializedSlice {
    tracing::info!(
        otp_ttl_seconds = config.otp.ttl_seconds,
        "Enrollment slice initialized"
    );

    let inner = EnrollmentInner { otp_store: OtpStore::new(&config.otp) };

    InitializedSlice::new(Enrollment { inner: Arc::new(inner) })
}
