//! Navigation subscriber trait

use super::NavigationContext;

/// Trait for collaborators that react to navigation changes
/// (fullscreen renderer, URL sync, quick-nav)
pub trait NavigationSubscriber: Send + Sync {
    /// Called after the navigation state changed
    fn on_navigation_change(&self, context: &NavigationContext);
}
