//! Pure query functions over a store snapshot.
//!
//! Filtering, search, pagination, and category statistics are all computed
//! against an immutable slice of products; nothing here touches the store or
//! holds state between calls.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::error::ApiError;
use crate::store::Product;

/// Default page when `page` is omitted (1-indexed).
pub const DEFAULT_PAGE: u32 = 1;
/// Default page size when `limit` is omitted.
pub const DEFAULT_LIMIT: u32 = 10;

/// Query-string parameters accepted by the product listing.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
pub struct ListParams {
    /// Keep only products in exactly this category (case-sensitive).
    pub category: Option<String>,
    /// Keep only products whose name contains this substring (case-insensitive).
    pub search: Option<String>,
    /// 1-indexed page number, default 1.
    pub page: Option<u32>,
    /// Page size, default 10.
    pub limit: Option<u32>,
}

/// Paginated listing envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProductPage {
    /// Count of the filtered sequence before pagination.
    pub total: usize,
    /// Page that was served (1-indexed).
    pub page: u32,
    /// Page size that was applied.
    pub limit: u32,
    /// The records on this page.
    pub data: Vec<Product>,
}

/// Apply the category and search filters conjunctively, preserving order.
fn filter<'a>(
    products: &'a [Product],
    category: Option<&str>,
    search: Option<&str>,
) -> Vec<&'a Product> {
    let search_lower = search.map(str::to_lowercase);

    products
        .iter()
        .filter(|p| category.map_or(true, |c| p.category == c))
        .filter(|p| {
            search_lower
                .as_deref()
                .map_or(true, |needle| p.name.to_lowercase().contains(needle))
        })
        .collect()
}

/// Compute one page of the filtered product listing.
///
/// Filtering happens before pagination; `total` counts the filtered sequence.
/// Out-of-range pages yield an empty `data` with no error. Zero `page` or
/// `limit` is rejected rather than silently coerced.
pub fn list_page(products: &[Product], params: &ListParams) -> Result<ProductPage, ApiError> {
    let page = params.page.unwrap_or(DEFAULT_PAGE);
    let limit = params.limit.unwrap_or(DEFAULT_LIMIT);

    if page == 0 {
        return Err(ApiError::Validation(
            "page must be a positive integer".to_string(),
        ));
    }
    if limit == 0 {
        return Err(ApiError::Validation(
            "limit must be a positive integer".to_string(),
        ));
    }

    let filtered = filter(
        products,
        params.category.as_deref(),
        params.search.as_deref(),
    );
    let total = filtered.len();

    let start = (page as usize - 1).saturating_mul(limit as usize);
    let data = filtered
        .into_iter()
        .skip(start)
        .take(limit as usize)
        .cloned()
        .collect();

    Ok(ProductPage {
        total,
        page,
        limit,
        data,
    })
}

/// Count live products per category.
///
/// Computed fresh from the given snapshot on every call; a `BTreeMap` keeps
/// the JSON key order deterministic.
pub fn category_stats(products: &[Product]) -> BTreeMap<String, usize> {
    let mut stats = BTreeMap::new();
    for product in products {
        *stats.entry(product.category.clone()).or_insert(0) += 1;
    }
    stats
}
