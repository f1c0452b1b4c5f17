//! Catalog compiled into the binary

use super::ShowcaseSource;
use crate::schema::GalleryDocument;
use crate::DataError;

const DEFAULT_DOCUMENT: &str = include_str!("../../assets/showcases.json");

/// Source backed by an in-memory JSON string
pub struct EmbeddedSource {
    name: String,
    text: &'static str,
}

impl EmbeddedSource {
    /// The gallery's built-in catalog
    pub fn new() -> Self {
        Self::from_static("embedded", DEFAULT_DOCUMENT)
    }
    
    pub fn from_static(name: impl Into<String>, text: &'static str) -> Self {
        Self {
            name: name.into(),
            text,
        }
    }
}

impl Default for EmbeddedSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl ShowcaseSource for EmbeddedSource {
    async fn document(&self) -> Result<GalleryDocument, DataError> {
        GalleryDocument::from_json(self.text)
    }
    
    fn source_name(&self) -> &str {
        &self.name
    }
}
