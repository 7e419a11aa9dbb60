use crate::domain::exoplanet::Exoplanet;
use crate::domain::ports::ExoplanetStore;
use crate::error::{CatalogError, Result};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

/// A thread-safe in-memory store for catalog records.
///
/// Uses `Arc<RwLock<HashMap<Uuid, Exoplanet>>>` so concurrent handlers can read
/// together while writes are serialized. Contents live as long as the process.
#[derive(Default, Clone)]
pub struct InMemoryExoplanetStore {
    exoplanets: Arc<RwLock<HashMap<Uuid, Exoplanet>>>,
}

impl InMemoryExoplanetStore {
    /// Creates a new, empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ExoplanetStore for InMemoryExoplanetStore {
    async fn add(&self, exoplanet: Exoplanet) -> Result<()> {
        let mut exoplanets = self.exoplanets.write().await;
        exoplanets.insert(exoplanet.id, exoplanet);
        Ok(())
    }

    async fn list(&self) -> Result<Vec<Exoplanet>> {
        let exoplanets = self.exoplanets.read().await;
        Ok(exoplanets.values().cloned().collect())
    }

    async fn get(&self, id: Uuid) -> Result<Exoplanet> {
        let exoplanets = self.exoplanets.read().await;
        exoplanets
            .get(&id)
            .cloned()
            .ok_or(CatalogError::NotFound(id))
    }

    async fn update(&self, exoplanet: Exoplanet) -> Result<()> {
        let mut exoplanets = self.exoplanets.write().await;
        exoplanets.insert(exoplanet.id, exoplanet);
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<()> {
        let mut exoplanets = self.exoplanets.write().await;
        exoplanets.remove(&id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::exoplanet::PlanetKind;
    use std::collections::HashSet;

    fn planet(name: &str) -> Exoplanet {
        Exoplanet {
            id: Uuid::new_v4(),
            name: name.to_string(),
            description: "test planet".to_string(),
            distance: 42,
            radius: 1.5,
            kind: PlanetKind::Terrestrial { mass: 2.0 },
        }
    }

    #[tokio::test]
    async fn test_add_then_get() {
        let store = InMemoryExoplanetStore::new();
        let exoplanet = planet("Gliese 667 Cc");

        store.add(exoplanet.clone()).await.unwrap();
        let retrieved = store.get(exoplanet.id).await.unwrap();
        assert_eq!(retrieved, exoplanet);
    }

    #[tokio::test]
    async fn test_get_missing_is_not_found() {
        let store = InMemoryExoplanetStore::new();
        let id = Uuid::new_v4();
        assert!(matches!(
            store.get(id).await,
            Err(CatalogError::NotFound(missing)) if missing == id
        ));
    }

    #[tokio::test]
    async fn test_delete_then_get() {
        let store = InMemoryExoplanetStore::new();
        let exoplanet = planet("TRAPPIST-1e");
        store.add(exoplanet.clone()).await.unwrap();

        store.delete(exoplanet.id).await.unwrap();
        assert!(matches!(
            store.get(exoplanet.id).await,
            Err(CatalogError::NotFound(_))
        ));

        // Deleting twice is fine
        store.delete(exoplanet.id).await.unwrap();
    }

    #[tokio::test]
    async fn test_list_returns_every_record() {
        let store = InMemoryExoplanetStore::new();
        assert!(store.list().await.unwrap().is_empty());

        let mut expected = HashSet::new();
        for i in 0..5 {
            let exoplanet = planet(&format!("planet-{i}"));
            expected.insert(exoplanet.id);
            store.add(exoplanet).await.unwrap();
        }

        let listed: HashSet<Uuid> = store.list().await.unwrap().iter().map(|p| p.id).collect();
        assert_eq!(listed, expected);
    }

    #[tokio::test]
    async fn test_update_overwrites_and_upserts() {
        let store = InMemoryExoplanetStore::new();
        let mut exoplanet = planet("Kepler-452b");
        store.add(exoplanet.clone()).await.unwrap();

        exoplanet.name = "Earth's cousin".to_string();
        store.update(exoplanet.clone()).await.unwrap();
        assert_eq!(store.get(exoplanet.id).await.unwrap().name, "Earth's cousin");
        assert_eq!(store.list().await.unwrap().len(), 1);

        // No existence check on update
        let fresh = planet("Kepler-186f");
        store.update(fresh.clone()).await.unwrap();
        assert_eq!(store.get(fresh.id).await.unwrap(), fresh);
    }

    #[tokio::test]
    async fn test_add_overwrites_same_id() {
        let store = InMemoryExoplanetStore::new();
        let first = planet("first");
        let second = Exoplanet {
            name: "second".to_string(),
            ..first.clone()
        };

        store.add(first.clone()).await.unwrap();
        store.add(second).await.unwrap();

        assert_eq!(store.list().await.unwrap().len(), 1);
        assert_eq!(store.get(first.id).await.unwrap().name, "second");
    }

    #[tokio::test]
    async fn test_clones_share_state() {
        let store = InMemoryExoplanetStore::new();
        let other = store.clone();
        let exoplanet = planet("shared");

        store.add(exoplanet.clone()).await.unwrap();
        assert_eq!(other.get(exoplanet.id).await.unwrap(), exoplanet);
    }
}
