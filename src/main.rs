use clap::Parser;
use exoplanets::application::catalog::CatalogService;
use exoplanets::config::ServerConfig;
use exoplanets::domain::ports::ExoplanetStoreBox;
use exoplanets::infrastructure::in_memory::InMemoryExoplanetStore;
use exoplanets::interfaces::http;
use exoplanets::telemetry;
use miette::{IntoDiagnostic, Result, WrapErr};
use std::sync::Arc;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<()> {
    let config = ServerConfig::parse();
    telemetry::init_logging(config.log_format);

    let store: ExoplanetStoreBox = Box::new(InMemoryExoplanetStore::new());
    let catalog = Arc::new(CatalogService::new(store));
    let app = http::router(catalog, config.request_timeout());

    let listener = TcpListener::bind(config.bind)
        .await
        .into_diagnostic()
        .wrap_err_with(|| format!("could not listen on {}", config.bind))?;

    http::serve(
        listener,
        app,
        config.shutdown_grace(),
        http::shutdown_signal(),
    )
    .await?;

    Ok(())
}
