//! HTTP API route definitions.

use axum::extract::{Request, State};
use axum::http::StatusCode;
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use metrics::counter;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::handlers::{
    create_product, delete_product, get_product, health, list_products, product_stats,
    render_metrics, root, update_product, AppState,
};
use crate::error::ErrorBody;
use crate::metrics::METRIC_AUTH_REJECTIONS;
use crate::openapi::ApiDoc;

/// Header carrying the API key.
pub const API_KEY_HEADER: &str = "x-api-key";

/// Create the API router.
///
/// `/api/*` sits behind the api-key check when one is configured; the welcome
/// route, health, metrics, and docs stay open.
pub fn create_router(state: AppState) -> Router {
    let api = Router::new()
        .route("/products", get(list_products).post(create_product))
        .route(
            "/products/:id",
            get(get_product).put(update_product).delete(delete_product),
        )
        .route("/products-stats", get(product_stats))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            require_api_key,
        ));

    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/metrics", get(render_metrics))
        .nest("/api", api)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Reject requests missing the configured `x-api-key`; pass-through when
/// no key is configured.
async fn require_api_key(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let Some(expected) = &state.api_key else {
        return next.run(request).await;
    };

    let provided = request
        .headers()
        .get(API_KEY_HEADER)
        .and_then(|value| value.to_str().ok());

    if provided == Some(expected.as_str()) {
        next.run(request).await
    } else {
        counter!(METRIC_AUTH_REJECTIONS).increment(1);
        (
            StatusCode::UNAUTHORIZED,
            Json(ErrorBody {
                message: "unauthorized".to_string(),
            }),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use tower::ServiceExt;

    use crate::store::ProductStore;

    fn app(state: AppState) -> Router {
        create_router(state)
    }

    #[tokio::test]
    async fn root_returns_welcome_text() {
        let app = app(AppState::new(ProductStore::seeded()));

        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn health_endpoint_returns_ok() {
        let app = app(AppState::new(ProductStore::new()));

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn unknown_product_yields_404() {
        let app = app(AppState::new(ProductStore::seeded()));

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/products/no-such-id")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn api_routes_reject_missing_key_when_configured() {
        let state = AppState::new(ProductStore::seeded())
            .with_api_key(Some("secret".to_string()));
        let app = app(state);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/products")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn api_routes_accept_correct_key() {
        let state = AppState::new(ProductStore::seeded())
            .with_api_key(Some("secret".to_string()));
        let app = app(state);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/products")
                    .header(API_KEY_HEADER, "secret")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn root_stays_open_with_auth_enabled() {
        let state = AppState::new(ProductStore::seeded())
            .with_api_key(Some("secret".to_string()));
        let app = app(state);

        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }
}
