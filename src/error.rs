use crate::domain::exoplanet::ValidationError;
use miette::Diagnostic;
use std::time::Duration;
use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Diagnostic, Debug)]
pub enum CatalogError {
    #[error(transparent)]
    #[diagnostic(code(exoplanets::validation))]
    Validation(#[from] ValidationError),

    #[error("exoplanet {0} not found")]
    #[diagnostic(code(exoplanets::not_found))]
    NotFound(Uuid),

    #[error("{0}")]
    #[diagnostic(code(exoplanets::malformed_request))]
    MalformedRequest(String),

    #[error("internal error: {0}")]
    #[diagnostic(code(exoplanets::internal))]
    Internal(Box<dyn std::error::Error + Send + Sync>),

    #[error("IO error: {0}")]
    #[diagnostic(code(exoplanets::io))]
    Io(#[from] std::io::Error),

    #[error("in-flight requests did not finish within {0:?}")]
    #[diagnostic(
        code(exoplanets::shutdown_timed_out),
        help("raise --shutdown-grace-secs if long requests are expected")
    )]
    ShutdownTimedOut(Duration),
}

pub type Result<T> = std::result::Result<T, CatalogError>;
