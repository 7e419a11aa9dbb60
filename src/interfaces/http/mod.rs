//! REST surface of the catalog.
//!
//! Handlers decode requests, validate client data, call the `CatalogService` and
//! encode either the result or a `{"error": ...}` body. `serve` owns the listener
//! lifecycle, including the bounded graceful shutdown.

pub mod handlers;
pub mod response;
pub mod server;

pub use handlers::router;
pub use server::{serve, shutdown_signal};
