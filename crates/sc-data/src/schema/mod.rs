//! Catalog document schema and load-time validation
//!
//! The document is the static source the catalog is built from. Entries
//! are parsed leniently into [`RawShowcase`] and then checked once; a
//! missing `id`, `title` or `tags`, or an out-of-range rating, aborts loading.

mod overview;

pub use overview::{ContactLink, Identity, Interaction, Overview, Tools};

use serde::{Deserialize, Serialize};
use tracing::info;

use sc_core::{Catalog, ShowcaseDetails, ShowcaseRecord};

use crate::DataError;

/// Top-level catalog document
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GalleryDocument {
    /// Portfolio owner information for the overview sidebar
    #[serde(default)]
    pub overview: Option<Overview>,
    
    /// Showcase entries in display order
    #[serde(default)]
    pub showcases: Vec<RawShowcase>,
}

/// A showcase entry as written in the document
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawShowcase {
    pub id: Option<u32>,
    pub title: Option<String>,
    /// Older documents call this `category`
    #[serde(alias = "category")]
    pub tags: Option<Vec<String>>,
    pub thumbnail: Option<String>,
    /// Renderer key; defaults to the title
    #[serde(alias = "component")]
    pub renderer: Option<String>,
    #[serde(flatten)]
    pub details: ShowcaseDetails,
}

impl RawShowcase {
    fn into_record(self, index: usize) -> Result<ShowcaseRecord, DataError> {
        let id = self.id.ok_or(DataError::MissingField { index, field: "id" })?;
        let tags = self.tags.ok_or(DataError::MissingField { index, field: "tags" })?;
        let title = self.title.ok_or(DataError::MissingField { index, field: "title" })?;
        let renderer = self.renderer.unwrap_or_else(|| title.clone());
        
        let record = ShowcaseRecord::new(id, title, tags, renderer).with_details(self.details);
        Ok(match self.thumbnail.filter(|t| !t.is_empty()) {
            Some(thumbnail) => record.with_thumbnail(thumbnail),
            None => record,
        })
    }
}

/// A validated document: the catalog plus the overview block
#[derive(Debug, Clone)]
pub struct Gallery {
    pub catalog: Catalog,
    pub overview: Overview,
}

impl GalleryDocument {
    /// Parse a document from JSON text
    pub fn from_json(text: &str) -> Result<Self, DataError> {
        Ok(serde_json::from_str(text)?)
    }
    
    /// Validate every entry and build the catalog
    pub fn validate(self) -> Result<Gallery, DataError> {
        let records = self
            .showcases
            .into_iter()
            .enumerate()
            .map(|(index, raw)| raw.into_record(index))
            .collect::<Result<Vec<_>, _>>()?;
        
        let catalog = Catalog::from_records(records)?;
        info!("Validated catalog with {} showcases", catalog.len());
        
        Ok(Gallery {
            catalog,
            overview: self.overview.unwrap_or_default(),
        })
    }
}
