//! Data loading and configuration for the showcase gallery

pub mod config;
pub mod schema;
pub mod sources;

use sc_core::CatalogError;
use thiserror::Error;

// Re-exports
pub use config::{GalleryConfig, WindowConfig};
pub use schema::{Gallery, GalleryDocument, Overview};
pub use sources::{EmbeddedSource, JsonFileSource, ShowcaseSource};

/// Errors that can occur while loading gallery data
#[derive(Error, Debug)]
pub enum DataError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    
    #[error("showcase entry {index} is missing `{field}`")]
    MissingField { index: usize, field: &'static str },
    
    #[error("invalid catalog: {0}")]
    Catalog(#[from] CatalogError),
    
    #[error("invalid configuration: {0}")]
    Config(String),
}
