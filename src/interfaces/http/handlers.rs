use crate::application::catalog::CatalogService;
use crate::domain::exoplanet::{CrewCapacity, Exoplanet, ExoplanetDraft, ExoplanetPatch};
use crate::error::{CatalogError, Result};
use axum::Json;
use axum::Router;
use axum::body::Bytes;
use axum::extract::rejection::{PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::get;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::info;
use uuid::Uuid;

pub type SharedCatalog = Arc<CatalogService>;

/// Builds the catalog router.
pub fn router(catalog: SharedCatalog, request_timeout: Duration) -> Router {
    let routes = Router::new()
        .route("/exoplanets", get(list_exoplanets).post(create_exoplanet))
        .route(
            "/exoplanets/:id",
            get(get_exoplanet)
                .put(update_exoplanet)
                .delete(delete_exoplanet),
        )
        .route("/exoplanets/:id/fuel", get(estimate_fuel))
        .fallback(not_found);
    with_request_layers(routes, request_timeout).with_state(catalog)
}

/// Request tracing plus a per-request timeout answered with 408.
fn with_request_layers<S>(routes: Router<S>, request_timeout: Duration) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    routes
        .layer(TimeoutLayer::new(request_timeout))
        .layer(TraceLayer::new_for_http())
}

type PathId = std::result::Result<Path<String>, PathRejection>;

fn parse_id(path: PathId) -> Result<Uuid> {
    let Path(raw) = path?;
    Uuid::parse_str(&raw)
        .map_err(|e| CatalogError::MalformedRequest(format!("invalid exoplanet id: {e}")))
}

/// Decodes a JSON body whatever its `Content-Type`.
fn decode_json<T: DeserializeOwned>(body: &[u8]) -> Result<T> {
    serde_json::from_slice(body)
        .map_err(|e| CatalogError::MalformedRequest(format!("invalid request body: {e}")))
}

pub async fn create_exoplanet(
    State(catalog): State<SharedCatalog>,
    body: Bytes,
) -> Result<(StatusCode, Json<Exoplanet>)> {
    let draft: ExoplanetDraft = decode_json(&body)?;
    let exoplanet = draft.into_exoplanet(Uuid::new_v4())?;
    catalog.add(exoplanet.clone()).await?;
    info!(id = %exoplanet.id, name = %exoplanet.name, "exoplanet created");
    Ok((StatusCode::CREATED, Json(exoplanet)))
}

pub async fn list_exoplanets(State(catalog): State<SharedCatalog>) -> Result<Json<Vec<Exoplanet>>> {
    Ok(Json(catalog.list().await?))
}

pub async fn get_exoplanet(
    State(catalog): State<SharedCatalog>,
    path: PathId,
) -> Result<Json<Exoplanet>> {
    let id = parse_id(path)?;
    Ok(Json(catalog.get(id).await?))
}

/// Partial update: fields absent from the body keep their stored value, and the
/// merged record must pass validation before it replaces the stored one.
pub async fn update_exoplanet(
    State(catalog): State<SharedCatalog>,
    path: PathId,
    body: Bytes,
) -> Result<Json<Exoplanet>> {
    let id = parse_id(path)?;
    let existing = catalog.get(id).await?;
    let patch: ExoplanetPatch = decode_json(&body)?;
    let updated = patch.apply(existing).into_exoplanet(id)?;
    catalog.update(updated.clone()).await?;
    info!(%id, "exoplanet updated");
    Ok(Json(updated))
}

pub async fn delete_exoplanet(
    State(catalog): State<SharedCatalog>,
    path: PathId,
) -> Result<StatusCode> {
    let id = parse_id(path)?;
    catalog.delete(id).await?;
    info!(%id, "exoplanet deleted");
    Ok(StatusCode::NO_CONTENT)
}

#[derive(Debug, Serialize, PartialEq)]
pub struct FuelEstimate {
    pub fuel_cost: f64,
}

pub async fn estimate_fuel(
    State(catalog): State<SharedCatalog>,
    path: PathId,
    query: std::result::Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Json<FuelEstimate>> {
    let id = parse_id(path)?;
    let Query(params) = query?;
    // A repeated `crew` uses its first value
    let crew: CrewCapacity = params
        .iter()
        .find(|(key, _)| key == "crew")
        .map(|(_, value)| value.as_str())
        .filter(|crew| !crew.is_empty())
        .ok_or_else(|| CatalogError::MalformedRequest("crew capacity is required".to_string()))?
        .parse()?;

    let fuel_cost = catalog.estimate_fuel(id, crew).await?;
    if !fuel_cost.is_finite() {
        return Err(CatalogError::Internal(
            "fuel estimate is not a finite number".into(),
        ));
    }
    Ok(Json(FuelEstimate { fuel_cost }))
}

async fn not_found() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "404 not found")
}
