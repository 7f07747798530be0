use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use dmart::domain::constants::MESSAGING_TAG;
use dmart::kernel::prelude::ApiState;
use dmart_enrollment::Enrollment;
use dmart_mailer::Email;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// OTP challenge request. Both fields are required and non-blank.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct OtpRequest {
    /// Challenge owner, used as the store key and mail recipient
    pub email: String,
    /// The numeric code
    pub otp: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct OtpResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl OtpResponse {
    fn succeeded(message: impl Into<String>) -> Json<Self> {
        Json(Self { success: true, message: Some(message.into()) })
    }

    fn failed(message: impl Into<String>) -> Json<Self> {
        Json(Self { success: false, message: Some(message.into()) })
    }
}

fn enrollment(state: &ApiState) -> Result<&Enrollment, (StatusCode, Json<OtpResponse>)> {
    state.try_get_slice::<Enrollment>().map_err(|err| {
        tracing::error!(error = %err, "Enrollment slice unavailable");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            OtpResponse::failed("OTP service is unavailable."),
        )
    })
}

#[utoipa::path(
    post,
    path = "/send-otp",
    request_body = OtpRequest,
    responses(
        (status = OK, description = "Challenge stored and mailed", body = OtpResponse),
        (status = BAD_REQUEST, description = "A required field is missing or blank", body = OtpResponse),
        (status = INTERNAL_SERVER_ERROR, description = "Challenge could not be mailed", body = OtpResponse),
    ),
    tag = MESSAGING_TAG,
)]
pub async fn send_otp_handler(
    State(state): State<ApiState>,
    Json(req): Json<OtpRequest>,
) -> Result<Json<OtpResponse>, (StatusCode, Json<OtpResponse>)> {
    if req.email.trim().is_empty() || req.otp.trim().is_empty() {
        return Err((StatusCode::BAD_REQUEST, OtpResponse::failed("Email and OTP are required.")));
    }

    let enrollment = enrollment(&state)?;

    let email = Email::new(
        req.email.clone(),
        "Your verification code",
        format!("Your one-time verification code is: {}", req.otp),
    );

    if let Err(err) = state.mailer.send(email).await {
        return Err((
            StatusCode::INTERNAL_SERVER_ERROR,
            OtpResponse::failed(format!("Failed to send OTP email. {err}")),
        ));
    }

    enrollment.otp_store().issue(&req.email, &req.otp);

    Ok(OtpResponse::succeeded("OTP sent successfully."))
}

#[utoipa::path(
    post,
    path = "/verify-otp",
    request_body = OtpRequest,
    responses(
        (status = OK, description = "A matching stored row exists", body = OtpResponse),
        (status = BAD_REQUEST, description = "No matching row, or the row expired", body = OtpResponse),
    ),
    tag = MESSAGING_TAG,
)]
pub async fn verify_otp_handler(
    State(state): State<ApiState>,
    Json(req): Json<OtpRequest>,
) -> Result<Json<OtpResponse>, (StatusCode, Json<OtpResponse>)> {
    let enrollment = enrollment(&state)?;

    if enrollment.otp_store().verify(&req.email, &req.otp) {
        Ok(Json(OtpResponse { success: true, message: None }))
    } else {
        Err((StatusCode::BAD_REQUEST, Json(OtpResponse { success: false, message: None })))
    }
}
