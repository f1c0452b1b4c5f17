//! Category filter
//!
//! A [`FilterSelection`] is either the `"All"` sentinel or a non-empty set
//! of concrete tags. The representation makes the two invariants
//! (never empty, `"All"` never mixed with other tags) unrepresentable to
//! break; [`engine`] holds the pure functions over it.

pub mod engine;

pub use engine::{apply, tag_counts, toggle_tag};

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Sentinel tag meaning "no restriction"
pub const ALL_TAG: &str = "All";

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum Selection {
    All,
    /// Invariant: non-empty and never contains `ALL_TAG`
    Tags(BTreeSet<String>),
}

/// The active category filter
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FilterSelection {
    inner: Selection,
}

impl FilterSelection {
    /// The `{"All"}` selection
    pub fn all() -> Self {
        Self { inner: Selection::All }
    }
    
    /// Build a selection from arbitrary tags, normalizing to `{"All"}` when
    /// the input is empty or mentions `"All"`.
    pub fn from_tags<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let tags: BTreeSet<String> = tags.into_iter().map(Into::into).collect();
        if tags.is_empty() || tags.contains(ALL_TAG) {
            Self::all()
        } else {
            Self { inner: Selection::Tags(tags) }
        }
    }
    
    /// Whether this is exactly `{"All"}`
    pub fn is_all(&self) -> bool {
        matches!(self.inner, Selection::All)
    }
    
    /// Membership test; `"All"` is a member only of the `{"All"}` selection
    pub fn contains(&self, tag: &str) -> bool {
        match &self.inner {
            Selection::All => tag == ALL_TAG,
            Selection::Tags(tags) => tags.contains(tag),
        }
    }
    
    /// Members in sorted order (`["All"]` for the sentinel)
    pub fn tags(&self) -> Vec<&str> {
        match &self.inner {
            Selection::All => vec![ALL_TAG],
            Selection::Tags(tags) => tags.iter().map(String::as_str).collect(),
        }
    }
    
    pub fn len(&self) -> usize {
        match &self.inner {
            Selection::All => 1,
            Selection::Tags(tags) => tags.len(),
        }
    }
    
    /// Always false; kept for API symmetry with collections
    pub fn is_empty(&self) -> bool {
        false
    }
    
    /// Whether a record with these tags passes the filter
    pub fn matches<'a, I>(&self, record_tags: I) -> bool
    where
        I: IntoIterator<Item = &'a String>,
    {
        match &self.inner {
            Selection::All => true,
            Selection::Tags(selected) => record_tags.into_iter().any(|t| selected.contains(t)),
        }
    }
    
    /// Concrete tags without the sentinel; empty for `{"All"}`
    pub(crate) fn concrete_tags(&self) -> BTreeSet<String> {
        match &self.inner {
            Selection::All => BTreeSet::new(),
            Selection::Tags(tags) => tags.clone(),
        }
    }
}

impl Default for FilterSelection {
    fn default() -> Self {
        Self::all()
    }
}

impl fmt::Display for FilterSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}}}", self.tags().join(", "))
    }
}

impl Serialize for FilterSelection {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.tags().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for FilterSelection {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let tags = Vec::<String>::deserialize(deserializer)?;
        Ok(Self::from_tags(tags))
    }
}

/// One entry of the filter bar
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagCount {
    pub name: String,
    pub count: usize,
}
