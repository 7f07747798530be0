//! HTTP route handlers grouped by OpenAPI tag.

pub mod catalog;
pub mod mail;
pub mod otp;

use dmart::kernel::prelude::ApiState;
use serde::Serialize;
use utoipa::ToSchema;
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

/// Structured failure body for messaging endpoints.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Human-readable summary.
    pub message: String,
    /// Short machine-oriented detail, safe to show to clients.
    pub error: String,
}

pub fn messaging_router() -> OpenApiRouter<ApiState> {
    OpenApiRouter::new()
        .routes(routes!(mail::send_email_handler))
        .routes(routes!(otp::send_otp_handler))
        .routes(routes!(otp::verify_otp_handler))
}

pub fn catalog_router() -> OpenApiRouter<ApiState> {
    OpenApiRouter::new().routes(routes!(catalog::list_categories_handler))
}
