//! Storage adapters implementing the domain ports.

pub mod in_memory;
