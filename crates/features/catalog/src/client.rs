//! Collaborator traits for the upstream catalog API and the current actor,
//! plus an in-memory implementation for local runs and tests.

use crate::error::CatalogError;
use async_trait::async_trait;
use dmart_domain::catalog::{Category, Product};
use parking_lot::RwLock;
use std::borrow::Cow;
use std::fmt::Debug;

/// Query parameters for the product fetch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductQuery {
    /// CID of the current actor, when known.
    pub cid: Option<String>,
    /// Whether the actor's own listings are included.
    pub include_own: bool,
}

/// Upstream catalog API. Implemented elsewhere; this crate only consumes it.
#[async_trait]
pub trait CatalogClient: Debug + Send + Sync {
    async fn fetch_categories(&self) -> Result<Vec<Category>, CatalogError>;
    async fn fetch_products(&self, query: ProductQuery) -> Result<Vec<Product>, CatalogError>;
}

/// Supplies the current actor's identity, when any.
pub trait ActorContext: Debug + Send + Sync {
    fn current_cid(&self) -> Option<String>;
}

/// An actor with no identity (logged-out visitors).
#[derive(Debug, Clone, Copy, Default)]
pub struct AnonymousActor;

impl ActorContext for AnonymousActor {
    fn current_cid(&self) -> Option<String> {
        None
    }
}

/// In-memory catalog for local runs and tests.
///
/// The query filters are accepted but not applied; ownership filtering is an
/// upstream concern and the stub carries no owner data.
#[derive(Debug, Default)]
pub struct InMemoryCatalog {
    categories: RwLock<Vec<Category>>,
    products: RwLock<Vec<Product>>,
}

impl InMemoryCatalog {
    pub fn push_category(&self, category: Category) {
        self.categories.write().push(category);
    }

    pub fn push_product(&self, product: Product) {
        self.products.write().push(product);
    }
}

#[async_trait]
impl CatalogClient for InMemoryCatalog {
    async fn fetch_categories(&self) -> Result<Vec<Category>, CatalogError> {
        Ok(self.categories.read().clone())
    }

    async fn fetch_products(&self, _query: ProductQuery) -> Result<Vec<Product>, CatalogError> {
        Ok(self.products.read().clone())
    }
}

/// Fails every fetch; for exercising the degrade path in tests.
#[derive(Debug, Clone)]
pub struct FailingCatalog {
    pub reason: Cow<'static, str>,
    /// When set, only the product fetch fails and categories resolve fine.
    pub products_only: bool,
}

impl FailingCatalog {
    #[must_use]
    pub fn new(reason: impl Into<Cow<'static, str>>) -> Self {
        Self { reason: reason.into(), products_only: false }
    }

    #[must_use]
    pub fn products_only(reason: impl Into<Cow<'static, str>>) -> Self {
        Self { reason: reason.into(), products_only: true }
    }
}

#[async_trait]
impl CatalogClient for FailingCatalog {
    async fn fetch_categories(&self) -> Result<Vec<Category>, CatalogError> {
        if self.products_only {
            Ok(vec![
                Category {
                    id: "1".to_owned(),
                    name: "Vegetables".to_owned(),
                    description: String::new(),
                    image_base64: None,
                },
                Category {
                    id: "2".to_owned(),
                    name: "Dairy".to_owned(),
                    description: String::new(),
                    image_base64: None,
                },
            ])
        } else {
            Err(CatalogError::upstream(self.reason.clone()))
        }
    }

    async fn fetch_products(&self, _query: ProductQuery) -> Result<Vec<Product>, CatalogError> {
        Err(CatalogError::upstream(self.reason.clone()))
    }
}
