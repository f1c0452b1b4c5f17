//! Catalog document read from disk

use std::path::PathBuf;

use tracing::info;

use super::ShowcaseSource;
use crate::schema::GalleryDocument;
use crate::DataError;

/// JSON catalog file
pub struct JsonFileSource {
    path: PathBuf,
    name: String,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("unknown")
            .to_string();
        Self { path, name }
    }
}

#[async_trait::async_trait]
impl ShowcaseSource for JsonFileSource {
    async fn document(&self) -> Result<GalleryDocument, DataError> {
        info!("Reading catalog from {:?}", self.path);
        let text = tokio::fs::read_to_string(&self.path).await?;
        GalleryDocument::from_json(&text)
    }
    
    fn source_name(&self) -> &str {
        &self.name
    }
}
