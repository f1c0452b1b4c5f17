//! Quick-nav carousel adapter
//!
//! Keeps a focus ring over the full catalog in sync with the navigation
//! controller. The adapter never filters: positions are always full-catalog
//! positions. It is only meaningful while a showcase is open; when the
//! controller closes, the focus is cleared.

use std::sync::Arc;

use parking_lot::RwLock;
use tracing::debug;

use crate::catalog::{Catalog, ShowcaseId, ShowcaseRecord};
use crate::navigation::{NavigationContext, NavigationSubscriber};

pub struct QuickNav {
    catalog: Arc<Catalog>,
    focus: RwLock<Option<usize>>,
}

impl QuickNav {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            catalog,
            focus: RwLock::new(None),
        }
    }
    
    /// Items shown in the carousel, in catalog order
    pub fn items(&self) -> &[ShowcaseRecord] {
        self.catalog.get_all()
    }
    
    /// Current focus position, `None` while no showcase is open
    pub fn focus(&self) -> Option<usize> {
        *self.focus.read()
    }
    
    /// Id under the focus ring
    pub fn focused_id(&self) -> Option<ShowcaseId> {
        self.focus()
            .and_then(|idx| self.catalog.get_by_index(idx))
            .map(|record| record.id)
    }
    
    /// Move the focus ring to the position of `current_id`
    pub fn sync_to_current(&self, current_id: Option<ShowcaseId>) -> Option<usize> {
        let focus = current_id.and_then(|id| self.catalog.index_of(id));
        *self.focus.write() = focus;
        focus
    }
    
    /// Map a chosen position to the id to pass to `NavigationController::jump_to`
    pub fn select_focus(&self, index: usize) -> Option<ShowcaseId> {
        self.catalog.get_by_index(index).map(|record| record.id)
    }
    
    /// Rotate the focus ring by `delta` positions, wrapping in both
    /// directions. Does not navigate.
    pub fn step_focus(&self, delta: isize) -> Option<usize> {
        let len = self.catalog.len();
        let mut focus = self.focus.write();
        let current = (*focus)?;
        if len == 0 {
            return None;
        }
        
        let next = (current as isize + delta).rem_euclid(len as isize) as usize;
        *focus = Some(next);
        debug!("Quick-nav focus {} -> {}", current, next);
        Some(next)
    }
}

impl NavigationSubscriber for QuickNav {
    fn on_navigation_change(&self, context: &NavigationContext) {
        *self.focus.write() = context.position;
    }
}
