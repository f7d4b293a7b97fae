//! In-memory product catalog CRUD API.
//!
//! A small HTTP/JSON service exposing create/read/update/delete operations
//! over a process-local collection of products, plus filtered, searched, and
//! paginated listings and per-category statistics. Nothing is persisted; the
//! collection is discarded on restart.
//!
//! # Modules
//!
//! - [`config`]: Configuration loading from environment
//! - [`error`]: Typed API errors and the HTTP error reporter
//! - [`store`]: The in-memory product store
//! - [`validate`]: Write-payload validation
//! - [`query`]: Pure filtering/search/pagination/statistics
//! - [`api`]: Router and request handlers
//! - [`openapi`]: OpenAPI documentation
//! - [`utils`]: Utility functions

pub mod api;
pub mod config;
pub mod error;
pub mod metrics;
pub mod openapi;
pub mod query;
pub mod store;
pub mod utils;
pub mod validate;

pub use config::Config;
pub use error::{ApiError, Result};
