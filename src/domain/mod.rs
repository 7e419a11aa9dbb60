//! Domain layer: the catalog record, its validation rules and the storage port.

pub mod exoplanet;
pub mod ports;
