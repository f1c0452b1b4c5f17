use serde::{Serialize, Deserialize};

mod engine;
mod subscriber;

pub use engine::NavigationController;
pub use subscriber::NavigationSubscriber;

use crate::catalog::ShowcaseId;

/// Where the viewer currently is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum NavigationState {
    /// Catalog view, nothing open
    #[default]
    Closed,
    /// A showcase is open in the fullscreen viewer
    Open(ShowcaseId),
}

impl NavigationState {
    /// Id of the open showcase, if any
    pub fn current_id(&self) -> Option<ShowcaseId> {
        match self {
            NavigationState::Closed => None,
            NavigationState::Open(id) => Some(*id),
        }
    }
    
    pub fn is_open(&self) -> bool {
        matches!(self, NavigationState::Open(_))
    }
}

/// Context passed to subscribers after every transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationContext {
    /// New state
    pub state: NavigationState,
    /// State before the transition
    pub previous: NavigationState,
    /// Catalog position of the open showcase
    pub position: Option<usize>,
    /// Catalog size
    pub total: usize,
}
