use super::ErrorResponse;
use axum::Json;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use dmart::domain::constants::CATALOG_TAG;
use dmart::kernel::prelude::ApiState;
use dmart_catalog::{AnonymousActor, Catalog, CategorySummary};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Default, Deserialize, IntoParams, ToSchema)]
#[serde(default)]
pub struct CategoriesQuery {
    /// Caps the returned list; the configured featured limit still applies first.
    pub limit: Option<usize>,
}

#[utoipa::path(
    get,
    path = "/categories",
    params(CategoriesQuery),
    responses(
        (status = OK, description = "Featured categories with product counts", body = [CategorySummary]),
        (status = INTERNAL_SERVER_ERROR, description = "Catalog feature unavailable", body = ErrorResponse),
    ),
    tag = CATALOG_TAG,
)]
pub async fn list_categories_handler(
    State(state): State<ApiState>,
    Query(query): Query<CategoriesQuery>,
) -> Result<Json<Vec<CategorySummary>>, (StatusCode, Json<ErrorResponse>)> {
    let catalog = state.try_get_slice::<Catalog>().map_err(|err| {
        tracing::error!(error = %err, "Catalog slice unavailable");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                message: "Catalog is unavailable.".to_owned(),
                error: "catalog feature not registered".to_owned(),
            }),
        )
    })?;

    // Upstream failures degrade to an empty list on this display path.
    let mut summaries = catalog.featured_categories(&AnonymousActor).await;

    if let Some(limit) = query.limit {
        summaries.truncate(limit);
    }

    Ok(Json(summaries))
}
