//! Inbound adapters exposing the catalog to clients.

pub mod http;
