//! Navigation controller implementation

use super::{NavigationContext, NavigationState, NavigationSubscriber};
use crate::catalog::{Catalog, ShowcaseId, ShowcaseRecord};
use parking_lot::RwLock;
use std::sync::{Arc, Weak};
use tracing::{debug, warn};

/// Owns "which showcase is open" and moves it over the full catalog.
///
/// Transitions never fail: unknown ids and moves while closed are refused
/// and leave the state untouched. Subscribers are notified only when the
/// state actually changes.
pub struct NavigationController {
    catalog: Arc<Catalog>,
    state: RwLock<NavigationState>,
    subscribers: RwLock<Vec<Weak<dyn NavigationSubscriber>>>,
}

impl NavigationController {
    /// Create a controller in the `Closed` state
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            catalog,
            state: RwLock::new(NavigationState::Closed),
            subscribers: RwLock::new(Vec::new()),
        }
    }
    
    /// Current state
    pub fn state(&self) -> NavigationState {
        *self.state.read()
    }
    
    /// The open showcase, resolved against the catalog
    pub fn current_showcase(&self) -> Option<&ShowcaseRecord> {
        self.state()
            .current_id()
            .and_then(|id| self.catalog.get_by_id(id))
    }
    
    /// Open a showcase. Refused if `id` is not in the catalog.
    pub fn open(&self, id: ShowcaseId) -> bool {
        if !self.catalog.contains(id) {
            warn!("Refusing to open unknown showcase {}", id);
            return false;
        }
        self.transition(NavigationState::Open(id))
    }
    
    /// Return to the catalog view. Idempotent.
    pub fn close(&self) -> bool {
        self.transition(NavigationState::Closed)
    }
    
    /// Quick-nav entry point; same rules as [`open`](Self::open)
    pub fn jump_to(&self, id: ShowcaseId) -> bool {
        self.open(id)
    }
    
    /// Move to the next showcase, wrapping at the end
    pub fn next(&self) -> bool {
        self.step(1)
    }
    
    /// Move to the previous showcase, wrapping at the start
    pub fn prev(&self) -> bool {
        self.step(-1)
    }
    
    /// Circular step over the full catalog. No-op while closed or when the
    /// catalog is empty.
    fn step(&self, delta: isize) -> bool {
        let len = self.catalog.len();
        let Some(current) = self.state().current_id() else {
            debug!("Ignoring step while closed");
            return false;
        };
        if len == 0 {
            return false;
        }
        let Some(idx) = self.catalog.index_of(current) else {
            return false;
        };
        
        let target = (idx as isize + delta).rem_euclid(len as isize) as usize;
        match self.catalog.get_by_index(target) {
            Some(record) => self.transition(NavigationState::Open(record.id)),
            None => false,
        }
    }
    
    fn transition(&self, new_state: NavigationState) -> bool {
        let previous = {
            let mut state = self.state.write();
            if *state == new_state {
                return false;
            }
            std::mem::replace(&mut *state, new_state)
        };
        
        debug!("Navigation {:?} -> {:?}", previous, new_state);
        self.notify_subscribers(previous);
        true
    }
    
    /// Snapshot of the current state for subscribers
    pub fn context(&self) -> NavigationContext {
        let state = self.state();
        NavigationContext {
            state,
            previous: state,
            position: state.current_id().and_then(|id| self.catalog.index_of(id)),
            total: self.catalog.len(),
        }
    }
    
    /// Add a subscriber. Only a weak reference is kept.
    pub fn add_subscriber(&self, subscriber: Arc<dyn NavigationSubscriber>) {
        let mut subscribers = self.subscribers.write();
        subscribers.push(Arc::downgrade(&subscriber));
    }
    
    fn notify_subscribers(&self, previous: NavigationState) {
        let context = NavigationContext {
            previous,
            ..self.context()
        };
        
        // Subscribers run without the list lock held
        let live: Vec<Arc<dyn NavigationSubscriber>> = {
            let mut subscribers = self.subscribers.write();
            subscribers.retain(|weak| weak.strong_count() > 0);
            subscribers.iter().filter_map(Weak::upgrade).collect()
        };
        
        for subscriber in live {
            subscriber.on_navigation_change(&context);
        }
    }
}

impl std::fmt::Debug for NavigationController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NavigationController")
            .field("state", &self.state())
            .field("catalog_len", &self.catalog.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;
    
    fn catalog(ids: &[u32]) -> Arc<Catalog> {
        let records = ids
            .iter()
            .map(|&id| ShowcaseRecord::new(id, format!("Showcase {id}"), ["tag"], "Stub"))
            .collect();
        Arc::new(Catalog::from_records(records).unwrap())
    }
    
    #[derive(Default)]
    struct Recorder {
        seen: Mutex<Vec<NavigationContext>>,
    }
    
    impl NavigationSubscriber for Recorder {
        fn on_navigation_change(&self, context: &NavigationContext) {
            self.seen.lock().push(context.clone());
        }
    }
    
    #[test]
    fn test_next_wraps_around() {
        let nav = NavigationController::new(catalog(&[1, 2, 3]));
        
        assert!(nav.open(ShowcaseId(2)));
        nav.next();
        assert_eq!(nav.state(), NavigationState::Open(ShowcaseId(3)));
        nav.next();
        assert_eq!(nav.state(), NavigationState::Open(ShowcaseId(1)));
    }
    
    #[test]
    fn test_prev_wraps_around() {
        let nav = NavigationController::new(catalog(&[1, 2, 3]));
        
        nav.open(ShowcaseId(1));
        nav.prev();
        assert_eq!(nav.state(), NavigationState::Open(ShowcaseId(3)));
    }
    
    #[test]
    fn test_open_unknown_is_refused() {
        let nav = NavigationController::new(catalog(&[1, 2, 3]));
        
        assert!(!nav.open(ShowcaseId(999)));
        assert_eq!(nav.state(), NavigationState::Closed);
        
        nav.open(ShowcaseId(2));
        assert!(!nav.jump_to(ShowcaseId(999)));
        assert_eq!(nav.state(), NavigationState::Open(ShowcaseId(2)));
    }
    
    #[test]
    fn test_steps_while_closed_are_noops() {
        let nav = NavigationController::new(catalog(&[1, 2, 3]));
        
        assert!(!nav.next());
        assert!(!nav.prev());
        assert_eq!(nav.state(), NavigationState::Closed);
    }
    
    #[test]
    fn test_close_is_idempotent() {
        let nav = NavigationController::new(catalog(&[1, 2]));
        
        nav.open(ShowcaseId(1));
        assert!(nav.close());
        assert!(!nav.close());
        assert_eq!(nav.state(), NavigationState::Closed);
    }
    
    #[test]
    fn test_empty_catalog() {
        let nav = NavigationController::new(catalog(&[]));
        
        assert!(!nav.open(ShowcaseId(1)));
        assert!(!nav.next());
        assert!(nav.current_showcase().is_none());
    }
    
    #[test]
    fn test_current_showcase_resolves_record() {
        let nav = NavigationController::new(catalog(&[5, 6]));
        
        nav.open(ShowcaseId(6));
        assert_eq!(nav.current_showcase().unwrap().title, "Showcase 6");
    }
    
    #[test]
    fn test_subscribers_see_changes_only() {
        let nav = NavigationController::new(catalog(&[1, 2]));
        let recorder = Arc::new(Recorder::default());
        nav.add_subscriber(recorder.clone());
        
        nav.open(ShowcaseId(1));
        nav.open(ShowcaseId(1));
        nav.next();
        nav.close();
        
        let seen = recorder.seen.lock();
        assert_eq!(seen.len(), 3);
        assert_eq!(seen[0].previous, NavigationState::Closed);
        assert_eq!(seen[1].state, NavigationState::Open(ShowcaseId(2)));
        assert_eq!(seen[1].position, Some(1));
        assert_eq!(seen[2].state, NavigationState::Closed);
        assert_eq!(seen[2].position, None);
    }
    
    #[test]
    fn test_dropped_subscribers_are_pruned() {
        let nav = NavigationController::new(catalog(&[1, 2]));
        let recorder = Arc::new(Recorder::default());
        nav.add_subscriber(recorder.clone());
        drop(recorder);
        
        nav.open(ShowcaseId(1));
        assert!(nav.subscribers.read().is_empty());
    }
}
