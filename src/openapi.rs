//! OpenAPI documentation configuration.

use utoipa::OpenApi;

use crate::api::handlers;
use crate::error::ErrorBody;
use crate::query::ProductPage;
use crate::store::{Product, ProductDraft};

/// Combined OpenAPI documentation for the Product API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Product API",
        version = "0.1.0",
        description = "CRUD API over an in-memory product catalog",
        license(name = "MIT")
    ),
    paths(
        handlers::list_products,
        handlers::get_product,
        handlers::create_product,
        handlers::update_product,
        handlers::delete_product,
        handlers::product_stats,
    ),
    components(schemas(Product, ProductDraft, ProductPage, ErrorBody)),
    tags(
        (name = "products", description = "Product catalog endpoints")
    )
)]
pub struct ApiDoc;
