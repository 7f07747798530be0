//! The registration flow: a linear, forward-only step machine.
//!
//! `basic → otp → location`, no back moves, no skips. The flow lives only as
//! long as its value; re-entering registration means constructing a fresh
//! flow, and nothing is persisted across it.

use crate::error::EnrollmentError;
use crate::notify::{Notice, Notifier};
use crate::otp::OtpVerifier;
use serde::{Deserialize, Serialize};

/// Steps of the registration flow, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RegistrationStep {
    Basic,
    Otp,
    /// Terminal for this flow; later screens are a separate surface.
    Location,
}

/// Fields collected on the basic-information step.
///
/// Nothing here is validated before the step advances. That matches the
/// observed upstream behavior; whether validation was intended is an open
/// product question (see DESIGN.md), so it is reproduced rather than fixed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BasicInfo {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
}

/// One in-flight registration session.
#[derive(Debug)]
pub struct RegistrationFlow<'a> {
    step: RegistrationStep,
    basic: Option<BasicInfo>,
    verifier: &'a dyn OtpVerifier,
    notifier: &'a dyn Notifier,
}

impl<'a> RegistrationFlow<'a> {
    /// Starts a fresh session at the basic-information step.
    #[must_use]
    pub fn new(verifier: &'a dyn OtpVerifier, notifier: &'a dyn Notifier) -> Self {
        Self { step: RegistrationStep::Basic, basic: None, verifier, notifier }
    }

    #[must_use]
    pub const fn step(&self) -> RegistrationStep {
        self.step
    }

    #[must_use]
    pub const fn is_complete(&self) -> bool {
        matches!(self.step, RegistrationStep::Location)
    }

    /// Basic information entered so far, once the step was submitted.
    #[must_use]
    pub const fn basic_info(&self) -> Option<&BasicInfo> {
        self.basic.as_ref()
    }

    /// Submits the basic-information step. Always advances to the OTP step
    /// regardless of field content.
    ///
    /// # Errors
    /// [`EnrollmentError::InvalidTransition`] when the flow already left the
    /// basic step.
    pub fn submit_basic(&mut self, info: BasicInfo) -> Result<RegistrationStep, EnrollmentError> {
        if self.step != RegistrationStep::Basic {
            return Err(EnrollmentError::InvalidTransition {
                at: self.step,
                expected: RegistrationStep::Basic,
            });
        }

        self.basic = Some(info);
        self.step = RegistrationStep::Otp;
        Ok(self.step)
    }

    /// Submits the entered OTP code.
    ///
    /// Advances to the location step only when the verifier accepts the code;
    /// otherwise the user gets a rejection notice and the step stays put.
    ///
    /// # Errors
    /// [`EnrollmentError::InvalidTransition`] when the flow is not at the OTP
    /// step.
    pub fn submit_otp(&mut self, code: &str) -> Result<RegistrationStep, EnrollmentError> {
        if self.step != RegistrationStep::Otp {
            return Err(EnrollmentError::InvalidTransition {
                at: self.step,
                expected: RegistrationStep::Otp,
            });
        }

        if self.verifier.verify(code) {
            self.step = RegistrationStep::Location;
        } else {
            self.notifier.notify(Notice::error("Invalid OTP. Please try again."));
        }

        Ok(self.step)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::{BufferedNotifier, NoticeLevel};
    use crate::otp::StaticCodeVerifier;

    #[test]
    fn basic_step_advances_without_any_validation() {
        let verifier = StaticCodeVerifier::default();
        let notifier = BufferedNotifier::default();
        let mut flow = RegistrationFlow::new(&verifier, &notifier);

        // Empty fields still advance; the gap is reproduced on purpose.
        let step = flow.submit_basic(BasicInfo::default()).unwrap();

        assert_eq!(step, RegistrationStep::Otp);
        assert!(notifier.notices().is_empty());
    }

    #[test]
    fn wrong_code_keeps_the_flow_at_otp_and_notifies() {
        let verifier = StaticCodeVerifier::default();
        let notifier = BufferedNotifier::default();
        let mut flow = RegistrationFlow::new(&verifier, &notifier);
        flow.submit_basic(BasicInfo::default()).unwrap();

        let step = flow.submit_otp("9999").unwrap();

        assert_eq!(step, RegistrationStep::Otp);
        let notice = notifier.last().expect("rejection notice");
        assert_eq!(notice.level, NoticeLevel::Error);
    }

    #[test]
    fn correct_code_completes_the_flow() {
        let verifier = StaticCodeVerifier::default();
        let notifier = BufferedNotifier::default();
        let mut flow = RegistrationFlow::new(&verifier, &notifier);
        flow.submit_basic(BasicInfo { email: "a@b.bt".to_owned(), ..Default::default() })
            .unwrap();

        let step = flow.submit_otp("1234").unwrap();

        assert_eq!(step, RegistrationStep::Location);
        assert!(flow.is_complete());
        assert_eq!(flow.basic_info().unwrap().email, "a@b.bt");
    }

    #[test]
    fn out_of_order_submissions_are_rejected() {
        let verifier = StaticCodeVerifier::default();
        let notifier = BufferedNotifier::default();
        let mut flow = RegistrationFlow::new(&verifier, &notifier);

        // OTP before basic
        assert!(matches!(
            flow.submit_otp("1234"),
            Err(EnrollmentError::InvalidTransition { at: RegistrationStep::Basic, .. })
        ));

        flow.submit_basic(BasicInfo::default()).unwrap();

        // Basic again while at OTP
        assert!(matches!(
            flow.submit_basic(BasicInfo::default()),
            Err(EnrollmentError::InvalidTransition { at: RegistrationStep::Otp, .. })
        ));

        flow.submit_otp("1234").unwrap();

        // Anything after the terminal step
        assert!(flow.submit_otp("1234").is_err());
        assert!(flow.submit_basic(BasicInfo::default()).is_err());
    }
}
