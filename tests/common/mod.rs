#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::{Request, Response, StatusCode, header};
use exoplanets::application::catalog::CatalogService;
use exoplanets::infrastructure::in_memory::InMemoryExoplanetStore;
use exoplanets::interfaces::http::router;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use std::sync::Arc;
use std::time::Duration;
use tower::ServiceExt;

/// A router over a fresh, empty in-memory store.
pub fn app() -> Router {
    let catalog = CatalogService::new(Box::new(InMemoryExoplanetStore::new()));
    router(Arc::new(catalog), Duration::from_secs(15))
}

pub fn json_request(method: &str, uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_vec(body).unwrap()))
        .unwrap()
}

pub fn raw_json_request(method: &str, uri: &str, body: &'static str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body))
        .unwrap()
}

pub fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub async fn send(app: &Router, request: Request<Body>) -> Response<Body> {
    app.clone().oneshot(request).await.unwrap()
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

pub async fn body_json(response: Response<Body>) -> Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

/// Sends the request and returns the status together with the JSON body.
pub async fn call(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = send(app, request).await;
    let status = response.status();
    (status, body_json(response).await)
}

pub fn terrestrial_body() -> Value {
    json!({
        "name": "Proxima Centauri b",
        "description": "Closest known exoplanet",
        "distance": 50,
        "radius": 1.0,
        "mass": 1.0,
        "type": "terrestrial"
    })
}

pub fn gas_giant_body() -> Value {
    json!({
        "name": "51 Pegasi b",
        "description": "First hot Jupiter",
        "distance": 50,
        "radius": 2.0,
        "type": "gasGiant"
    })
}

/// Creates a planet through the API and returns its id.
pub async fn create(app: &Router, body: &Value) -> String {
    let (status, created) = call(app, json_request("POST", "/exoplanets", body)).await;
    assert_eq!(status, StatusCode::CREATED, "creation failed: {created}");
    created["id"].as_str().unwrap().to_string()
}
