//! Pure filter operations

use std::collections::BTreeMap;

use super::{FilterSelection, TagCount, ALL_TAG};
use crate::catalog::{Catalog, ShowcaseRecord};

/// Toggle one tag in a selection.
///
/// Toggling `"All"` resets to `{"All"}` and is a no-op when already there.
/// Toggling a concrete tag drops `"All"`, flips the tag, and falls back to
/// `{"All"}` if nothing is left.
pub fn toggle_tag(current: &FilterSelection, tag: &str) -> FilterSelection {
    if tag == ALL_TAG {
        return FilterSelection::all();
    }
    
    let mut tags = current.concrete_tags();
    if !tags.remove(tag) {
        tags.insert(tag.to_string());
    }
    
    FilterSelection::from_tags(tags)
}

/// Records passing the selection, in catalog order
pub fn apply<'a>(catalog: &'a Catalog, selection: &FilterSelection) -> Vec<&'a ShowcaseRecord> {
    catalog
        .get_all()
        .iter()
        .filter(|record| selection.matches(&record.tags))
        .collect()
}

/// Filter bar entries: `"All"` with the catalog size, then every distinct
/// tag alphabetically with the number of records carrying it.
pub fn tag_counts(catalog: &Catalog) -> Vec<TagCount> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for record in catalog.get_all() {
        for tag in &record.tags {
            *counts.entry(tag.as_str()).or_insert(0) += 1;
        }
    }
    
    std::iter::once(TagCount {
        name: ALL_TAG.to_string(),
        count: catalog.len(),
    })
    .chain(counts.into_iter().map(|(name, count)| TagCount {
        name: name.to_string(),
        count,
    }))
    .collect()
}
