//! Credential-reset request validation.
//!
//! Two fixed-format identifiers: an 11-digit CID and an 8-digit phone
//! number. Input is sanitized as typed (non-digits stripped, length capped)
//! and both fields are validated synchronously on submit; an invalid field
//! aborts the whole submission.

use crate::notify::{Notice, Notifier};
use dmart_domain::constants::{CID_LENGTH, PHONE_LENGTH};
use serde::{Deserialize, Serialize};

/// A validated-on-submit reset request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResetRequest {
    pub cid: String,
    pub phone: String,
}

/// Field-keyed inline error texts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ResetFieldErrors {
    pub cid: Option<&'static str>,
    pub phone: Option<&'static str>,
}

impl ResetFieldErrors {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.cid.is_none() && self.phone.is_none()
    }
}

/// Keeps digits only, capped at the CID length.
#[must_use]
pub fn sanitize_cid(input: &str) -> String {
    digits_only(input, CID_LENGTH)
}

/// Keeps digits only, capped at the phone length.
#[must_use]
pub fn sanitize_phone(input: &str) -> String {
    digits_only(input, PHONE_LENGTH)
}

fn digits_only(input: &str, cap: usize) -> String {
    input.chars().filter(char::is_ascii_digit).take(cap).collect()
}

/// Validates both fields; any failure aborts the submission with a
/// field-keyed error map.
///
/// # Errors
/// Returns the error map when either field is not exactly its required
/// digit count.
pub fn validate_reset(request: &ResetRequest) -> Result<(), ResetFieldErrors> {
    let mut errors = ResetFieldErrors::default();

    if request.cid.len() != CID_LENGTH || !request.cid.chars().all(|c| c.is_ascii_digit()) {
        errors.cid = Some("CID must be exactly 11 digits");
    }
    if request.phone.len() != PHONE_LENGTH || !request.phone.chars().all(|c| c.is_ascii_digit()) {
        errors.phone = Some("Phone number must be exactly 8 digits");
    }

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

/// The reset modal's state: sanitizes as the user types, validates on
/// submit, and signals success through the injected notifier.
#[derive(Debug)]
pub struct ResetForm<'a> {
    request: ResetRequest,
    errors: ResetFieldErrors,
    notifier: &'a dyn Notifier,
}

impl<'a> ResetForm<'a> {
    #[must_use]
    pub fn new(notifier: &'a dyn Notifier) -> Self {
        Self { request: ResetRequest::default(), errors: ResetFieldErrors::default(), notifier }
    }

    pub fn input_cid(&mut self, raw: &str) {
        self.request.cid = sanitize_cid(raw);
    }

    pub fn input_phone(&mut self, raw: &str) {
        self.request.phone = sanitize_phone(raw);
    }

    #[must_use]
    pub const fn request(&self) -> &ResetRequest {
        &self.request
    }

    /// Inline errors from the last submit attempt.
    #[must_use]
    pub const fn errors(&self) -> &ResetFieldErrors {
        &self.errors
    }

    /// Submits the request. No network call is made in the current form;
    /// success is simulated and the caller may close the modal.
    ///
    /// Returns `true` when the submission passed and the modal closes.
    pub fn submit(&mut self) -> bool {
        match validate_reset(&self.request) {
            Ok(()) => {
                self.errors = ResetFieldErrors::default();
                self.notifier
                    .notify(Notice::success("Reset request submitted. Check your phone."));
                true
            },
            Err(errors) => {
                self.errors = errors;
                false
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::{BufferedNotifier, NoticeLevel, NullNotifier};

    #[test]
    fn sanitizers_strip_and_cap_as_typed() {
        assert_eq!(sanitize_cid("1a2b3c4d5e6f7g8h9i0j1k2l3"), "12345678901");
        assert_eq!(sanitize_cid("123"), "123");
        assert_eq!(sanitize_phone("phone: 1234-5678 ext 99"), "12345678");
    }

    #[test]
    fn cid_must_be_exactly_eleven_digits() {
        let ok = ResetRequest { cid: "12345678901".to_owned(), phone: "12345678".to_owned() };
        assert!(validate_reset(&ok).is_ok());

        let short = ResetRequest { cid: "1234567890".to_owned(), phone: "12345678".to_owned() };
        let errors = validate_reset(&short).unwrap_err();
        assert!(errors.cid.is_some());
        assert!(errors.phone.is_none());

        let lettered = ResetRequest { cid: "1234567890a".to_owned(), phone: "12345678".to_owned() };
        assert!(validate_reset(&lettered).unwrap_err().cid.is_some());
    }

    #[test]
    fn phone_must_be_exactly_eight_digits() {
        let short = ResetRequest { cid: "12345678901".to_owned(), phone: "1234567".to_owned() };
        let errors = validate_reset(&short).unwrap_err();
        assert!(errors.phone.is_some());
        assert!(errors.cid.is_none());
    }

    #[test]
    fn invalid_submit_populates_inline_errors_and_keeps_modal_open() {
        let notifier = BufferedNotifier::default();
        let mut form = ResetForm::new(&notifier);
        form.input_cid("123");
        form.input_phone("12345678");

        assert!(!form.submit());
        assert!(form.errors().cid.is_some());
        assert!(notifier.notices().is_empty(), "no confirmation on failed submit");
    }

    #[test]
    fn valid_submit_confirms_and_closes() {
        let notifier = BufferedNotifier::default();
        let mut form = ResetForm::new(&notifier);
        form.input_cid("1-2-3-4-5-6-7-8-9-0-1");
        form.input_phone("17 23 45 68");

        assert!(form.submit());
        assert!(form.errors().is_empty());
        assert_eq!(notifier.last().unwrap().level, NoticeLevel::Success);
    }

    #[test]
    fn typed_input_never_exceeds_the_caps() {
        let mut form = ResetForm::new(&NullNotifier);
        form.input_cid("999999999999999999");
        form.input_phone("888888888888");

        assert_eq!(form.request().cid.len(), 11);
        assert_eq!(form.request().phone.len(), 8);
    }
}
