//! Address bar mirror of the navigation state

use parking_lot::RwLock;
use sc_core::{NavigationContext, NavigationSubscriber, Route};

/// Keeps the displayed route in step with navigation
#[derive(Debug, Default)]
pub struct AddressBar {
    route: RwLock<Route>,
}

impl AddressBar {
    pub fn new(initial: Route) -> Self {
        Self {
            route: RwLock::new(initial),
        }
    }
    
    pub fn route(&self) -> Route {
        *self.route.read()
    }
}

impl NavigationSubscriber for AddressBar {
    fn on_navigation_change(&self, context: &NavigationContext) {
        *self.route.write() = Route::from_state(context.state);
    }
}
