use super::ErrorResponse;
use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use dmart::domain::config::ApiConfig;
use dmart::domain::constants::MESSAGING_TAG;
use dmart_mailer::{Email, Mailer, MailerError};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Email dispatch request. Every field is required and non-blank.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct SendEmailRequest {
    /// Recipient address
    pub to: String,
    /// Subject line
    pub subject: String,
    /// Plain-text body
    pub text: String,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SendEmailResponse {
    /// Human-readable summary
    pub message: String,
    /// Provider acknowledgement identifier
    pub message_id: String,
}

#[utoipa::path(
    post,
    path = "/send-email",
    request_body = SendEmailRequest,
    responses(
        (status = OK, description = "Email accepted by the mail provider", body = SendEmailResponse),
        (status = BAD_REQUEST, description = "A required field is missing or blank", body = ErrorResponse),
        (status = INTERNAL_SERVER_ERROR, description = "The mail provider rejected the message", body = ErrorResponse),
    ),
    tag = MESSAGING_TAG,
)]
pub async fn send_email_handler(
    State(config): State<ApiConfig>,
    State(mailer): State<Mailer>,
    Json(req): Json<SendEmailRequest>,
) -> Result<Json<SendEmailResponse>, (StatusCode, Json<ErrorResponse>)> {
    let subject = match &config.mail.subject_prefix {
        Some(prefix) if !req.subject.trim().is_empty() => format!("{prefix} {}", req.subject),
        _ => req.subject,
    };

    match mailer.send(Email::new(req.to, subject, req.text)).await {
        Ok(receipt) => Ok(Json(SendEmailResponse {
            message: "Email sent successfully.".to_owned(),
            message_id: receipt.message_id,
        })),
        Err(err @ MailerError::IncompleteEnvelope { .. }) => Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                message: "To, Subject and Text are required.".to_owned(),
                error: err.to_string(),
            }),
        )),
        Err(err @ MailerError::Delivery { .. }) => Err((
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                message: "Failed to send email.".to_owned(),
                error: err.to_string(),
            }),
        )),
    }
}
