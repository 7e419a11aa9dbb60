use crate::domain::exoplanet::{CrewCapacity, Exoplanet};
use crate::domain::ports::ExoplanetStoreBox;
use crate::error::Result;
use tracing::{debug, instrument};
use uuid::Uuid;

/// Orchestrates catalog operations on top of a record store.
///
/// CRUD calls are passed through unchanged, store errors included. Validation
/// happens before records reach this service.
pub struct CatalogService {
    store: ExoplanetStoreBox,
}

impl CatalogService {
    /// Creates a new `CatalogService` backed by `store`.
    pub fn new(store: ExoplanetStoreBox) -> Self {
        Self { store }
    }

    #[instrument(skip_all, fields(id = %exoplanet.id))]
    pub async fn add(&self, exoplanet: Exoplanet) -> Result<()> {
        self.store.add(exoplanet).await?;
        debug!("exoplanet added");
        Ok(())
    }

    pub async fn list(&self) -> Result<Vec<Exoplanet>> {
        let exoplanets = self.store.list().await?;
        debug!(count = exoplanets.len(), "listed exoplanets");
        Ok(exoplanets)
    }

    pub async fn get(&self, id: Uuid) -> Result<Exoplanet> {
        self.store.get(id).await
    }

    #[instrument(skip_all, fields(id = %exoplanet.id))]
    pub async fn update(&self, exoplanet: Exoplanet) -> Result<()> {
        self.store.update(exoplanet).await?;
        debug!("exoplanet updated");
        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: Uuid) -> Result<()> {
        self.store.delete(id).await?;
        debug!("exoplanet deleted");
        Ok(())
    }

    /// Estimates the fuel needed to reach the planet `id` with `crew` on board.
    #[instrument(skip(self, crew), fields(crew = crew.get()))]
    pub async fn estimate_fuel(&self, id: Uuid, crew: CrewCapacity) -> Result<f64> {
        let exoplanet = self.store.get(id).await?;
        let fuel = exoplanet.fuel_estimate(crew);
        debug!(gravity = exoplanet.gravity(), fuel, "fuel estimated");
        Ok(fuel)
    }
}
