//! Catalog error model.

use thiserror::Error;

/// Result type used across the catalog crates.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Catalog-level error.
///
/// Price computation itself never fails: inputs are taken as given and the
/// arithmetic is left ungoverned. Errors only come from the edges, i.e. the
/// output sink and configuration parsing.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Writing a display line to the output sink failed.
    #[error("output sink failed: {0}")]
    Io(#[from] std::io::Error),

    /// A discount strategy description could not be parsed.
    #[error("invalid discount strategy: {0}")]
    InvalidStrategy(String),

    /// A configuration value was malformed.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl CatalogError {
    pub fn invalid_strategy(msg: impl Into<String>) -> Self {
        Self::InvalidStrategy(msg.into())
    }

    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }
}
