//! Address-bar routes
//!
//! `/` is the catalog view and `/showcase/<id>` a deep link to one
//! showcase. Anything else is treated as the catalog view.

use std::fmt;

use crate::catalog::ShowcaseId;
use crate::navigation::NavigationState;

const SHOWCASE_PREFIX: &str = "showcase";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Catalog,
    Showcase(ShowcaseId),
}

impl Route {
    /// Parse a path. Query strings and fragments are ignored.
    pub fn parse(path: &str) -> Self {
        let path = path
            .split(['?', '#'])
            .next()
            .unwrap_or_default();
        let mut segments = path.split('/').filter(|s| !s.is_empty());
        
        match (segments.next(), segments.next(), segments.next()) {
            (Some(prefix), Some(id), None) if prefix.eq_ignore_ascii_case(SHOWCASE_PREFIX) => id
                .parse::<u32>()
                .map(|id| Route::Showcase(ShowcaseId(id)))
                .unwrap_or(Route::Catalog),
            _ => Route::Catalog,
        }
    }
    
    /// Route reflecting a navigation state
    pub fn from_state(state: NavigationState) -> Self {
        match state {
            NavigationState::Closed => Route::Catalog,
            NavigationState::Open(id) => Route::Showcase(id),
        }
    }
}

impl From<NavigationState> for Route {
    fn from(state: NavigationState) -> Self {
        Self::from_state(state)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::Catalog => write!(f, "/"),
            Route::Showcase(id) => write!(f, "/{}/{}", SHOWCASE_PREFIX, id),
        }
    }
}
