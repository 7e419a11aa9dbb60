//! Application layer orchestrating the catalog.
//!
//! This module defines the `CatalogService`, the single entry point the request
//! layer uses to reach the record store and the fuel estimation.

pub mod catalog;
