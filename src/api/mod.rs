//! HTTP API.
//!
//! Exposes the services as JSON endpoints nested under `/api/`. The router
//! is composable: `api_router()` returns a `Router` that can be mounted on
//! any axum server instance, and `server` runs one in the background.

pub mod endpoints;
pub mod error;
pub mod middleware;
pub mod router;
pub mod server;
pub mod types;

pub use error::{ApiError, ApiErrorKind};
pub use router::api_router;
pub use server::{start_api_server, ApiServer, ApiSession};
pub use types::ApiContext;
