use crate::flow::RegistrationStep;

/// A specialized error enum for the enrollment slice.
#[derive(Debug, thiserror::Error)]
pub enum EnrollmentError {
    /// A step submission arrived while the flow was at a different step.
    /// The flow is strictly forward-only; there are no back or skip moves.
    #[error("Invalid transition: flow is at step {at:?}, not {expected:?}")]
    InvalidTransition { at: RegistrationStep, expected: RegistrationStep },
}
