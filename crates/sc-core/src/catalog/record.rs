//! Showcase record types

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Stable identifier of a showcase. Never reused within a catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShowcaseId(pub u32);

impl fmt::Display for ShowcaseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for ShowcaseId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

/// Key of the presentational component that renders a showcase.
///
/// The core never interprets it; the UI looks it up in its own registry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RendererRef(pub String);

impl RendererRef {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// One portfolio item in the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShowcaseRecord {
    /// Unique identifier
    pub id: ShowcaseId,
    
    /// Display name
    pub title: String,
    
    /// Category tags (non-empty, unordered)
    pub tags: BTreeSet<String>,
    
    /// Optional thumbnail URL
    pub thumbnail: Option<String>,
    
    /// Presentational content reference
    pub renderer: RendererRef,
    
    /// Descriptive metadata for the viewer sidebar
    #[serde(default)]
    pub details: ShowcaseDetails,
}

impl ShowcaseRecord {
    /// Create a record with no thumbnail and empty details
    pub fn new<I, S>(id: u32, title: impl Into<String>, tags: I, renderer: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id: ShowcaseId(id),
            title: title.into(),
            tags: tags.into_iter().map(Into::into).collect(),
            thumbnail: None,
            renderer: RendererRef::new(renderer),
            details: ShowcaseDetails::default(),
        }
    }
    
    /// Set the thumbnail
    pub fn with_thumbnail(mut self, thumbnail: impl Into<String>) -> Self {
        self.thumbnail = Some(thumbnail.into());
        self
    }
    
    /// Set the details block
    pub fn with_details(mut self, details: ShowcaseDetails) -> Self {
        self.details = details;
        self
    }
    
    /// Whether this record carries the given tag
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }
}

/// Highest allowed `personal_rating`
pub const MAX_RATING: u8 = 5;

/// Optional metadata shown next to a showcase
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ShowcaseDetails {
    pub description: Option<String>,
    pub mood: Option<String>,
    pub interaction_type: Option<String>,
    /// `0..=MAX_RATING`, checked when the catalog is built
    pub personal_rating: Option<u8>,
    pub likes: Option<u32>,
    pub commentary: Option<String>,
    pub soundtrack: Option<String>,
    pub best_viewed_with: Option<String>,
    pub secret_interaction: Option<String>,
    pub time_to_build: Option<String>,
    pub difficulty: Option<String>,
    pub inspiration: Option<String>,
    pub tech: Vec<String>,
    pub warning: Option<String>,
}
