use super::exoplanet::Exoplanet;
use crate::error::Result;
use async_trait::async_trait;
use uuid::Uuid;

/// Keyed storage for catalog records.
///
/// Implementations enforce no business rules; callers validate before writing.
#[async_trait]
pub trait ExoplanetStore: Send + Sync {
    /// Inserts the record, overwriting any record with the same id.
    async fn add(&self, exoplanet: Exoplanet) -> Result<()>;
    /// Returns every record in no particular order.
    async fn list(&self) -> Result<Vec<Exoplanet>>;
    /// Fails with `CatalogError::NotFound` if no record has this id.
    async fn get(&self, id: Uuid) -> Result<Exoplanet>;
    /// Inserts or overwrites. Does not require the id to exist.
    async fn update(&self, exoplanet: Exoplanet) -> Result<()>;
    /// Removing an absent id is a no-op.
    async fn delete(&self, id: Uuid) -> Result<()>;
}

pub type ExoplanetStoreBox = Box<dyn ExoplanetStore>;
pub type ExoplanetStoreFactory = Box<dyn Fn() -> ExoplanetStoreBox + Send + Sync>;
