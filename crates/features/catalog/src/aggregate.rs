//! Combines independently fetched categories and products into a
//! display-ready list with per-category product counts.

use crate::image::resolve_base64_image;
use dmart_domain::catalog::{Category, Product};
use fxhash::FxHashMap;
use serde::Serialize;
use utoipa::ToSchema;

/// A category decorated for display: resolved image plus product count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CategorySummary {
    pub id: String,
    pub name: String,
    pub description: String,
    /// URL or data URI, always non-empty.
    pub image: String,
    pub product_count: usize,
}

/// Decorates the first `limit` categories (original order, no sort) with
/// resolved images and counts of products referencing them. Categories with
/// no matching products get count 0.
#[must_use]
pub fn aggregate(categories: &[Category], products: &[Product], limit: usize) -> Vec<CategorySummary> {
    let mut counts: FxHashMap<&str, usize> = FxHashMap::default();
    for product in products {
        *counts.entry(product.category_id.as_str()).or_default() += 1;
    }

    categories
        .iter()
        .take(limit)
        .map(|category| CategorySummary {
            id: category.id.clone(),
            name: category.name.clone(),
            description: category.description.clone(),
            image: resolve_base64_image(category.image_base64.as_deref()),
            product_count: counts.get(category.id.as_str()).copied().unwrap_or(0),
        })
        .collect()
}
