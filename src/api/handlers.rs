//! HTTP API handlers.

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use metrics::counter;
use metrics_exporter_prometheus::PrometheusHandle;
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::info;

use crate::error::{ApiError, ErrorBody, Result};
use crate::metrics::{METRIC_PRODUCTS_CREATED, METRIC_PRODUCTS_DELETED, METRIC_PRODUCTS_UPDATED};
use crate::query::{self, ListParams, ProductPage};
use crate::store::{Product, ProductDraft, ProductStore};
use crate::validate::validate_draft;

/// Application state shared with handlers.
#[derive(Clone)]
pub struct AppState {
    /// The product store.
    pub store: ProductStore,
    /// Expected `x-api-key` value; auth disabled when `None`.
    pub api_key: Option<String>,
    /// Prometheus handle backing `/metrics`; `None` in router tests.
    pub metrics_handle: Option<PrometheusHandle>,
}

impl AppState {
    /// Create app state with auth and metrics disabled.
    pub fn new(store: ProductStore) -> Self {
        Self {
            store,
            api_key: None,
            metrics_handle: None,
        }
    }

    /// Require the given api key on `/api/*` routes (no-op if `None`).
    pub fn with_api_key(mut self, api_key: Option<String>) -> Self {
        self.api_key = api_key;
        self
    }

    /// Attach the Prometheus recorder handle serving `/metrics`.
    pub fn with_metrics(mut self, handle: PrometheusHandle) -> Self {
        self.metrics_handle = Some(handle);
        self
    }
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Status: "ok".
    pub status: &'static str,
    /// Service name.
    pub service: &'static str,
    /// Crate version.
    pub version: &'static str,
}

/// Welcome handler for the root route.
pub async fn root() -> &'static str {
    "Welcome to the Product API! Go to /api/products to see all products."
}

/// Health check handler - always returns 200.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        service: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Prometheus text exposition of all counters.
pub async fn render_metrics(State(state): State<AppState>) -> Result<String> {
    let handle = state
        .metrics_handle
        .as_ref()
        .ok_or_else(|| ApiError::Internal(anyhow::anyhow!("metrics recorder not installed")))?;
    Ok(handle.render())
}

/// List products with optional filtering, search, and pagination.
#[utoipa::path(
    get,
    path = "/api/products",
    params(ListParams),
    responses(
        (status = 200, description = "Paginated product listing", body = ProductPage),
        (status = 400, description = "Invalid query parameters", body = ErrorBody)
    ),
    tag = "products"
)]
pub async fn list_products(
    State(state): State<AppState>,
    params: std::result::Result<Query<ListParams>, QueryRejection>,
) -> Result<Json<ProductPage>> {
    let Query(params) = params?;
    let snapshot = state.store.list().await;
    let page = query::list_page(&snapshot, &params)?;
    Ok(Json(page))
}

/// Fetch a single product by id.
#[utoipa::path(
    get,
    path = "/api/products/{id}",
    params(("id" = String, Path, description = "Product id")),
    responses(
        (status = 200, description = "The product", body = Product),
        (status = 404, description = "No such product", body = ErrorBody)
    ),
    tag = "products"
)]
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Product>> {
    let product = state
        .store
        .find_by_id(&id)
        .await
        .ok_or_else(|| ApiError::product_not_found(&id))?;
    Ok(Json(product))
}

/// Create a new product.
#[utoipa::path(
    post,
    path = "/api/products",
    request_body = ProductDraft,
    responses(
        (status = 201, description = "The created product", body = Product),
        (status = 400, description = "Malformed payload", body = ErrorBody)
    ),
    tag = "products"
)]
pub async fn create_product(
    State(state): State<AppState>,
    payload: std::result::Result<Json<ProductDraft>, JsonRejection>,
) -> Result<(StatusCode, Json<Product>)> {
    let Json(draft) = payload?;
    validate_draft(&draft)?;

    let product = state.store.insert(draft).await;
    counter!(METRIC_PRODUCTS_CREATED).increment(1);
    info!(id = %product.id, name = %product.name, "product created");

    Ok((StatusCode::CREATED, Json(product)))
}

/// Replace a product's fields, keeping its id.
#[utoipa::path(
    put,
    path = "/api/products/{id}",
    params(("id" = String, Path, description = "Product id")),
    request_body = ProductDraft,
    responses(
        (status = 200, description = "The updated product", body = Product),
        (status = 400, description = "Malformed payload", body = ErrorBody),
        (status = 404, description = "No such product", body = ErrorBody)
    ),
    tag = "products"
)]
pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: std::result::Result<Json<ProductDraft>, JsonRejection>,
) -> Result<Json<Product>> {
    let Json(draft) = payload?;
    validate_draft(&draft)?;

    let product = state
        .store
        .update(&id, draft)
        .await
        .ok_or_else(|| ApiError::product_not_found(&id))?;
    counter!(METRIC_PRODUCTS_UPDATED).increment(1);
    info!(id = %product.id, "product updated");

    Ok(Json(product))
}

/// Delete a product, returning the removed record.
#[utoipa::path(
    delete,
    path = "/api/products/{id}",
    params(("id" = String, Path, description = "Product id")),
    responses(
        (status = 200, description = "The removed product", body = Product),
        (status = 404, description = "No such product", body = ErrorBody)
    ),
    tag = "products"
)]
pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Product>> {
    let product = state
        .store
        .remove_by_id(&id)
        .await
        .ok_or_else(|| ApiError::product_not_found(&id))?;
    counter!(METRIC_PRODUCTS_DELETED).increment(1);
    info!(id = %product.id, "product deleted");

    Ok(Json(product))
}

/// Per-category product counts, computed fresh from the live store.
#[utoipa::path(
    get,
    path = "/api/products-stats",
    responses((status = 200, description = "Mapping from category name to product count")),
    tag = "products"
)]
pub async fn product_stats(State(state): State<AppState>) -> Json<BTreeMap<String, usize>> {
    let snapshot = state.store.list().await;
    Json(query::category_stats(&snapshot))
}
