//! HTTP API module: application state, handlers, and router.

pub mod handlers;
pub mod routes;

pub use handlers::AppState;
pub use routes::create_router;
