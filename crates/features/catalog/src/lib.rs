//! Catalog feature slice: image resolution and category aggregation.
//!
//! The slice owns a [`CatalogClient`] handle and exposes the featured-category
//! view used by the landing surfaces. Both fetches must resolve before
//! aggregation runs; there is no partial-success path.

pub mod aggregate;
pub mod client;
mod error;
pub mod image;

pub use crate::aggregate::{CategorySummary, aggregate};
pub use crate::client::{
    ActorContext, AnonymousActor, CatalogClient, FailingCatalog, InMemoryCatalog, ProductQuery,
};
pub use crate::error::CatalogError;
pub use crate::image::{resolve_base64_image, resolve_image, sniff_base64_mime};

use dmart_domain::config::ApiConfig;
use dmart_domain::registry::{FeatureSlice, InitializedSlice};
use std::any::Any;
use std::ops::Deref;
use std::sync::Arc;
use tracing::warn;

#[derive(Debug)]
pub struct CatalogInner {
    client: Arc<dyn CatalogClient>,
    featured_limit: usize,
}

/// Catalog feature state, cheap to clone.
#[derive(Debug, Clone)]
pub struct Catalog {
    inner: Arc<CatalogInner>,
}

impl Deref for Catalog {
    type Target = CatalogInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl FeatureSlice for Catalog {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl Catalog {
    #[must_use]
    pub fn new(client: Arc<dyn CatalogClient>, featured_limit: usize) -> Self {
        Self { inner: Arc::new(CatalogInner { client, featured_limit }) }
    }

    /// Fetches categories and products, then aggregates them.
    ///
    /// Both fetches are joined; if either fails no partial result is built.
    ///
    /// # Errors
    /// Returns the first upstream failure.
    pub async fn try_featured_categories(
        &self,
        actor: &dyn ActorContext,
    ) -> Result<Vec<CategorySummary>, CatalogError> {
        let query = ProductQuery { cid: actor.current_cid(), include_own: false };

        let (categories, products) = tokio::try_join!(
            self.client.fetch_categories(),
            self.client.fetch_products(query)
        )?;

        Ok(aggregate(&categories, &products, self.featured_limit))
    }

    /// Display path: degrades any upstream failure to an empty list.
    ///
    /// The error is logged so the partial-failure information is not lost;
    /// callers that need to distinguish "failed" from "empty" use
    /// [`Self::try_featured_categories`].
    pub async fn featured_categories(&self, actor: &dyn ActorContext) -> Vec<CategorySummary> {
        match self.try_featured_categories(actor).await {
            Ok(summaries) => summaries,
            Err(err) => {
                warn!(error = %err, "Featured-category aggregation degraded to empty");
                Vec::new()
            },
        }
    }
}

/// Initialize the catalog feature.
pub fn init(config: &ApiConfig, client: Arc<dyn CatalogClient>) -> InitializedSlice {
    tracing::info!(featured_limit = config.catalog.featured_limit, "Catalog slice initialized");

    InitializedSlice::new(Catalog::new(client, config.catalog.featured_limit))
}
