use std::sync::Arc;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::catalog::{Catalog, ShowcaseId, ShowcaseRecord};
use crate::events::{events, EventBus};
use crate::filter::{self, FilterSelection, TagCount};
use crate::navigation::{NavigationController, NavigationState};
use crate::quick_nav::QuickNav;
use crate::route::Route;

/// What happens to the filter when the viewer returns to the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CloseFilterPolicy {
    /// Reset the selection to `{"All"}`
    #[default]
    ResetToAll,
    /// Keep whatever was selected before opening
    Keep,
}

/// Session behaviour knobs
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionSettings {
    pub close_filter_policy: CloseFilterPolicy,
}

/// One viewer session.
///
/// The only owner of the filter selection and navigation state. UI actions
/// go through these methods; collaborators observe through navigation
/// subscribers or the event bus.
pub struct Session {
    /// The catalog, shared read-only
    catalog: Arc<Catalog>,
    
    /// Active filter
    filter: RwLock<FilterSelection>,
    
    /// The navigation controller
    navigation: Arc<NavigationController>,
    
    /// Quick-nav adapter, subscribed to `navigation`
    quick_nav: Arc<QuickNav>,
    
    /// Whether the quick-nav overlay is shown
    quick_nav_open: RwLock<bool>,
    
    /// The event bus
    event_bus: Arc<EventBus>,
    
    settings: SessionSettings,
}

impl Session {
    /// Create a session with its own event bus
    pub fn new(catalog: Arc<Catalog>, settings: SessionSettings) -> Self {
        Self::with_event_bus(catalog, settings, Arc::new(EventBus::new()))
    }
    
    /// Create a session publishing on an existing bus
    pub fn with_event_bus(catalog: Arc<Catalog>, settings: SessionSettings, event_bus: Arc<EventBus>) -> Self {
        let navigation = Arc::new(NavigationController::new(catalog.clone()));
        let quick_nav = Arc::new(QuickNav::new(catalog.clone()));
        navigation.add_subscriber(quick_nav.clone());
        
        let tag_count = filter::tag_counts(&catalog).len() - 1;
        info!("Session started with {} showcases, {} tags", catalog.len(), tag_count);
        event_bus.publish(events::CatalogLoaded {
            showcase_count: catalog.len(),
            tag_count,
        });
        
        Self {
            catalog,
            filter: RwLock::new(FilterSelection::all()),
            navigation,
            quick_nav,
            quick_nav_open: RwLock::new(false),
            event_bus,
            settings,
        }
    }
    
    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }
    
    pub fn navigation(&self) -> &Arc<NavigationController> {
        &self.navigation
    }
    
    pub fn quick_nav(&self) -> &Arc<QuickNav> {
        &self.quick_nav
    }
    
    pub fn event_bus(&self) -> &Arc<EventBus> {
        &self.event_bus
    }
    
    pub fn settings(&self) -> &SessionSettings {
        &self.settings
    }
    
    // ---- Filter ----------------------------------------------------------
    
    /// Current filter selection
    pub fn filter(&self) -> FilterSelection {
        self.filter.read().clone()
    }
    
    /// Toggle a tag in the filter bar
    pub fn toggle_tag(&self, tag: &str) -> FilterSelection {
        let next = filter::toggle_tag(&self.filter.read(), tag);
        self.set_filter(next.clone());
        next
    }
    
    /// Back to `{"All"}`
    pub fn reset_filter(&self) {
        self.set_filter(FilterSelection::all());
    }
    
    fn set_filter(&self, selection: FilterSelection) {
        {
            let mut current = self.filter.write();
            if *current == selection {
                return;
            }
            *current = selection.clone();
        }
        
        let visible_count = filter::apply(&self.catalog, &selection).len();
        debug!("Filter now {} ({} visible)", selection, visible_count);
        self.event_bus.publish(events::FilterChanged {
            selection,
            visible_count,
        });
    }
    
    /// Showcases passing the current filter, in catalog order
    pub fn visible_showcases(&self) -> Vec<&ShowcaseRecord> {
        let selection = self.filter();
        filter::apply(&self.catalog, &selection)
    }
    
    /// Filter bar entries
    pub fn tag_counts(&self) -> Vec<TagCount> {
        filter::tag_counts(&self.catalog)
    }
    
    // ---- Navigation ------------------------------------------------------
    
    pub fn state(&self) -> NavigationState {
        self.navigation.state()
    }
    
    /// The open showcase, for the renderer
    pub fn current_showcase(&self) -> Option<&ShowcaseRecord> {
        self.navigation.current_showcase()
    }
    
    /// Route reflecting the current state, for URL sync
    pub fn route(&self) -> Route {
        Route::from_state(self.state())
    }
    
    pub fn open(&self, id: ShowcaseId) -> bool {
        self.navigate(|nav| nav.open(id))
    }
    
    /// Open the `index`-th card of the filtered grid
    pub fn open_visible(&self, index: usize) -> bool {
        let id = self.visible_showcases().get(index).map(|record| record.id);
        match id {
            Some(id) => self.open(id),
            None => false,
        }
    }
    
    pub fn close(&self) -> bool {
        self.navigate(|nav| nav.close())
    }
    
    pub fn next(&self) -> bool {
        self.navigate(|nav| nav.next())
    }
    
    pub fn prev(&self) -> bool {
        self.navigate(|nav| nav.prev())
    }
    
    pub fn jump_to(&self, id: ShowcaseId) -> bool {
        self.navigate(|nav| nav.jump_to(id))
    }
    
    /// Follow a deep link. Unknown showcases fall back to the catalog view.
    pub fn apply_route(&self, route: Route) -> bool {
        match route {
            Route::Showcase(id) if self.catalog.contains(id) => self.open(id),
            Route::Showcase(id) => {
                debug!("Route to unknown showcase {}, returning to catalog", id);
                self.close()
            }
            Route::Catalog => self.close(),
        }
    }
    
    fn navigate(&self, transition: impl FnOnce(&NavigationController) -> bool) -> bool {
        let previous = self.navigation.state();
        if !transition(&self.navigation) {
            return false;
        }
        
        *self.quick_nav_open.write() = false;
        
        match (previous, self.navigation.state()) {
            (_, NavigationState::Open(id)) => {
                self.event_bus.publish(events::ShowcaseOpened {
                    id,
                    previous: previous.current_id(),
                });
            }
            (NavigationState::Open(last), NavigationState::Closed) => {
                self.event_bus.publish(events::ShowcaseClosed { last });
                if self.settings.close_filter_policy == CloseFilterPolicy::ResetToAll {
                    self.reset_filter();
                }
            }
            (NavigationState::Closed, NavigationState::Closed) => {}
        }
        true
    }
    
    // ---- Quick-nav -------------------------------------------------------
    
    pub fn is_quick_nav_open(&self) -> bool {
        *self.quick_nav_open.read()
    }
    
    /// Show or hide the quick-nav overlay. It can only be shown while a
    /// showcase is open.
    pub fn toggle_quick_nav(&self) -> bool {
        let mut open = self.quick_nav_open.write();
        *open = !*open && self.state().is_open();
        *open
    }
    
    pub fn close_quick_nav(&self) {
        *self.quick_nav_open.write() = false;
    }
    
    /// Jump to the showcase at a quick-nav position
    pub fn select_quick_nav(&self, index: usize) -> bool {
        match self.quick_nav.select_focus(index) {
            Some(id) => self.jump_to(id),
            None => false,
        }
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("filter", &self.filter())
            .field("state", &self.state())
            .field("quick_nav_open", &self.is_quick_nav_open())
            .field("settings", &self.settings)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;
    
    fn catalog() -> Arc<Catalog> {
        Arc::new(
            Catalog::from_records(vec![
                ShowcaseRecord::new(1, "Pool", ["3D"], "Pool"),
                ShowcaseRecord::new(2, "Piano", ["2D"], "Piano"),
                ShowcaseRecord::new(3, "Ribbons", ["3D", "2D"], "Ribbons"),
                ShowcaseRecord::new(4, "Sundial", ["CSS"], "Sundial"),
            ])
            .unwrap(),
        )
    }
    
    fn session() -> Session {
        Session::new(catalog(), SessionSettings::default())
    }
    
    #[test]
    fn test_navigation_ignores_filter() {
        let session = session();
        session.toggle_tag("3D");
        
        let visible: Vec<ShowcaseId> = session.visible_showcases().iter().map(|r| r.id).collect();
        assert_eq!(visible, vec![ShowcaseId(1), ShowcaseId(3)]);
        
        // Showcase 2 is filtered out but is still the neighbour of 1
        assert!(session.open_visible(0));
        session.next();
        assert_eq!(session.state(), NavigationState::Open(ShowcaseId(2)));
    }
    
    #[test]
    fn test_open_visible_resolves_filtered_index() {
        let session = session();
        session.toggle_tag("CSS");
        
        assert!(session.open_visible(0));
        assert_eq!(session.state(), NavigationState::Open(ShowcaseId(4)));
        assert!(!session.open_visible(5));
    }
    
    #[test]
    fn test_close_resets_filter_by_default() {
        let session = session();
        session.toggle_tag("2D");
        session.open(ShowcaseId(2));
        session.close();
        
        assert!(session.filter().is_all());
    }
    
    #[test]
    fn test_close_keeps_filter_when_configured() {
        let session = Session::new(
            catalog(),
            SessionSettings {
                close_filter_policy: CloseFilterPolicy::Keep,
            },
        );
        session.toggle_tag("2D");
        session.open(ShowcaseId(2));
        session.close();
        
        assert_eq!(session.filter(), FilterSelection::from_tags(["2D"]));
    }
    
    #[test]
    fn test_quick_nav_requires_open_showcase() {
        let session = session();
        
        assert!(!session.toggle_quick_nav());
        
        session.open(ShowcaseId(1));
        assert!(session.toggle_quick_nav());
        assert_eq!(session.quick_nav().focus(), Some(0));
        
        assert!(session.select_quick_nav(3));
        assert_eq!(session.state(), NavigationState::Open(ShowcaseId(4)));
        assert!(!session.is_quick_nav_open());
        assert_eq!(session.quick_nav().focus(), Some(3));
    }
    
    #[test]
    fn test_close_hides_quick_nav() {
        let session = session();
        session.open(ShowcaseId(1));
        session.toggle_quick_nav();
        session.close();
        
        assert!(!session.is_quick_nav_open());
        assert_eq!(session.quick_nav().focus(), None);
    }
    
    #[test]
    fn test_apply_route() {
        let session = session();
        
        assert!(session.apply_route(Route::parse("/showcase/3")));
        assert_eq!(session.route(), Route::Showcase(ShowcaseId(3)));
        
        session.apply_route(Route::parse("/showcase/999"));
        assert_eq!(session.route(), Route::Catalog);
    }
    
    #[test]
    fn test_refused_open_keeps_state() {
        let session = session();
        
        assert!(!session.open(ShowcaseId(999)));
        assert_eq!(session.state(), NavigationState::Closed);
    }
    
    #[test]
    fn test_events_published() {
        let bus = Arc::new(EventBus::new());
        let log = Arc::new(Mutex::new(Vec::<String>::new()));
        
        let sink = log.clone();
        bus.subscribe(move |e: &events::ShowcaseOpened| {
            sink.lock().push(format!("open {}", e.id));
        });
        let sink = log.clone();
        bus.subscribe(move |e: &events::ShowcaseClosed| {
            sink.lock().push(format!("close {}", e.last));
        });
        let sink = log.clone();
        bus.subscribe(move |e: &events::FilterChanged| {
            sink.lock().push(format!("filter {} {}", e.selection, e.visible_count));
        });
        
        let session = Session::with_event_bus(catalog(), SessionSettings::default(), bus);
        session.toggle_tag("3D");
        session.toggle_tag(crate::filter::ALL_TAG);
        session.toggle_tag(crate::filter::ALL_TAG);
        session.open(ShowcaseId(1));
        session.prev();
        session.close();
        session.close();
        
        assert_eq!(
            *log.lock(),
            vec![
                "filter {3D} 2".to_string(),
                "filter {All} 4".to_string(),
                "open 1".to_string(),
                "open 4".to_string(),
                "close 4".to_string(),
            ]
        );
    }
    
    #[test]
    fn test_event_handler_can_drive_session() {
        let bus = Arc::new(EventBus::new());
        let session = Arc::new(Session::with_event_bus(catalog(), SessionSettings::default(), bus.clone()));
        
        // Closing bounces straight back to showcase 2
        let weak = Arc::downgrade(&session);
        bus.subscribe(move |_: &events::ShowcaseClosed| {
            if let Some(session) = weak.upgrade() {
                session.open(ShowcaseId(2));
            }
        });
        
        session.open(ShowcaseId(1));
        assert!(session.close());
        
        assert_eq!(session.state(), NavigationState::Open(ShowcaseId(2)));
        assert_eq!(session.quick_nav().focus(), Some(1));
    }
}
