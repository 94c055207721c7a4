use thiserror::Error;

use digimenu_catalog::CatalogError;
use digimenu_core::DomainError;

#[derive(Debug, Error)]
pub enum KioskError {
    /// Catalog could not be loaded (fatal at startup).
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// A session command was rejected.
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Invalid environment configuration.
    #[error("configuration error: {0}")]
    Config(String),

    /// Unparseable shell input. Never changes session state.
    #[error("{0}")]
    Input(String),

    #[error("terminal io failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to serialize view: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl KioskError {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn input(msg: impl Into<String>) -> Self {
        Self::Input(msg.into())
    }
}
