//! Catalog document sources

pub mod embedded;
pub mod json_source;

pub use embedded::EmbeddedSource;
pub use json_source::JsonFileSource;

use crate::schema::{Gallery, GalleryDocument};
use crate::DataError;

/// Something that can produce a catalog document
#[async_trait::async_trait]
pub trait ShowcaseSource: Send + Sync {
    /// Read the raw document
    async fn document(&self) -> Result<GalleryDocument, DataError>;
    
    /// Get the source name/path
    fn source_name(&self) -> &str;
    
    /// Read and validate
    async fn load(&self) -> Result<Gallery, DataError> {
        self.document().await?.validate()
    }
}
