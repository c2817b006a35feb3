//! # attractions-service
//!
//! Read-only HTTP query service over a table of tourist-attraction records.
//!
//! ## Endpoints
//!
//! - `GET /attractions`: every record
//! - `GET /attractions/{id}`: one record by numeric id
//! - `GET /attractions/{id}/{column}`: one allowlisted field of a record
//! - `GET /search?q=...`: records whose title, location or description
//!   contains `q`, ignoring ASCII case
//! - `GET /robots.txt`: static crawler policy file
//! - `GET /health`, `GET /ready`: liveness and readiness probes
//!
//! All payloads are JSON. Unknown paths answer 404 and known paths with the
//! wrong method answer 405.
//!
//! ## Example
//!
//! ```rust,no_run
//! use attractions_service::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let config = Config::load()?;
//!     init_tracing(&config)?;
//!
//!     let state = AppState::connect(config.clone()).await?;
//!
//!     Server::new(config).serve(router(state)).await
//! }
//! ```

pub mod columns;
pub mod config;
pub mod database;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod health;
pub mod middleware;
pub mod model;
pub mod observability;
pub mod query;
pub mod responses;
pub mod router;
pub mod server;
pub mod state;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::columns::Field;
    pub use crate::config::Config;
    pub use crate::database::create_pool;
    pub use crate::error::{
        DatabaseError, DatabaseErrorKind, DatabaseOperation, Error, ErrorResponse, Result,
    };
    pub use crate::extract::{AttractionId, SearchParams};
    pub use crate::health::{health, readiness};
    pub use crate::middleware::{
        log_requests, request_id_layer, request_id_propagation_layer, sensitive_headers_layer,
        SENSITIVE_HEADERS,
    };
    pub use crate::model::Attraction;
    pub use crate::observability::init_tracing;
    pub use crate::query::AttractionQueries;
    pub use crate::responses::{FieldValue, JsonOk};
    pub use crate::router::router;
    pub use crate::server::Server;
    pub use crate::state::AppState;
}
