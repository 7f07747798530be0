//! Facade crate for `DrukMart` features and shared modules.
//! Re-exports domain/kernel primitives and aggregates feature initialization.
//! Keep this crate thin: it should compose other crates, not implement business logic.
//!
//! ## Usage
//! - Call [`init`] to register feature slices; extend as new slices appear.

pub use dmart_domain as domain;
use dmart_domain::config::ApiConfig;
pub use dmart_kernel as kernel;

use dmart_catalog::CatalogClient;
use std::sync::Arc;

pub mod server {
    pub mod router {
        pub use dmart_kernel::server::system_router;
    }
}

/// Feature registry for runtime introspection.
pub mod features {
    pub use dmart_catalog as catalog;
    pub use dmart_enrollment as enrollment;

    /// Enabled feature slices.
    pub const ENABLED: &[&str] = &["catalog", "enrollment"];

    #[must_use]
    pub fn is_enabled(name: &str) -> bool {
        ENABLED.contains(&name)
    }
}

/// Initialize all enabled features for server mode.
#[must_use]
pub fn init(
    config: &ApiConfig,
    catalog_client: Arc<dyn CatalogClient>,
) -> Vec<domain::registry::InitializedSlice> {
    vec![
        // Catalog
        features::catalog::init(config, catalog_client),
        // Enrollment
        features::enrollment::init(config),
    ]
}
