//! Catalog store
//!
//! The catalog is the fixed, ordered list of showcases loaded once at
//! startup. It is read-only afterwards and shared behind an `Arc`.

mod record;

pub use record::{RendererRef, ShowcaseDetails, ShowcaseId, ShowcaseRecord, MAX_RATING};

use ahash::AHashMap;
use thiserror::Error;

use crate::filter::ALL_TAG;

/// Reasons a list of records cannot form a catalog
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("duplicate showcase id {0}")]
    DuplicateId(ShowcaseId),
    
    #[error("showcase {0} has no tags")]
    EmptyTags(ShowcaseId),
    
    #[error("showcase {0} uses the reserved tag \"All\"")]
    ReservedTag(ShowcaseId),
    
    #[error("showcase {0} has an empty title")]
    EmptyTitle(ShowcaseId),
    
    #[error("showcase {id} has rating {rating}, expected 0..={max}", max = MAX_RATING)]
    InvalidRating { id: ShowcaseId, rating: u8 },
}

/// Read-only, ordered collection of showcase records
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    /// Records in display order
    records: Vec<ShowcaseRecord>,
    
    /// Position of each id within `records`
    positions: AHashMap<ShowcaseId, usize>,
}

impl Catalog {
    /// Build a catalog, validating every record.
    ///
    /// Display order is the order of `records`.
    pub fn from_records(records: Vec<ShowcaseRecord>) -> Result<Self, CatalogError> {
        let mut positions = AHashMap::with_capacity(records.len());
        
        for (idx, record) in records.iter().enumerate() {
            if record.title.trim().is_empty() {
                return Err(CatalogError::EmptyTitle(record.id));
            }
            if record.tags.is_empty() {
                return Err(CatalogError::EmptyTags(record.id));
            }
            if record.has_tag(ALL_TAG) {
                return Err(CatalogError::ReservedTag(record.id));
            }
            if let Some(rating) = record.details.personal_rating.filter(|r| *r > MAX_RATING) {
                return Err(CatalogError::InvalidRating { id: record.id, rating });
            }
            if positions.insert(record.id, idx).is_some() {
                return Err(CatalogError::DuplicateId(record.id));
            }
        }
        
        Ok(Self { records, positions })
    }
    
    /// An empty catalog
    pub fn empty() -> Self {
        Self::default()
    }
    
    /// All records in display order
    pub fn get_all(&self) -> &[ShowcaseRecord] {
        &self.records
    }
    
    /// Look up a record by id
    pub fn get_by_id(&self, id: ShowcaseId) -> Option<&ShowcaseRecord> {
        self.index_of(id).map(|idx| &self.records[idx])
    }
    
    /// Record at a display position
    pub fn get_by_index(&self, index: usize) -> Option<&ShowcaseRecord> {
        self.records.get(index)
    }
    
    /// Display position of an id
    pub fn index_of(&self, id: ShowcaseId) -> Option<usize> {
        self.positions.get(&id).copied()
    }
    
    /// Whether `id` is in the catalog
    pub fn contains(&self, id: ShowcaseId) -> bool {
        self.positions.contains_key(&id)
    }
    
    /// Number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }
    
    /// Whether the catalog has no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
