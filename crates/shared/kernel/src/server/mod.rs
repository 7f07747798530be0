//! Server-side plumbing: the shared API state and the system router.

mod health;
pub mod state;

pub use state::{ApiState, ApiStateBuilder, ApiStateError};

use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

/// Routes every server carries regardless of enabled features.
/// Currently just the health check; merge this into the application router
/// before applying state.
pub fn system_router<S>() -> OpenApiRouter<S>
where
    S: Send + Sync + Clone + 'static,
{
    OpenApiRouter::<S>::new().routes(routes!(health::health_handler))
}
