//! User interface components for the showcase gallery
//! 
//! Panels never touch session state directly. They return [`UiAction`]s,
//! which [`apply_action`] routes into the [`Session`].

pub mod actions;
pub mod address_bar;
pub mod filter_panel;
pub mod gallery;
pub mod overview_panel;
pub mod quick_nav_panel;
pub mod shell;
pub mod status;
pub mod theme;
pub mod viewer;

/// Re-export commonly used types
pub use actions::{apply_action, keyboard_action, UiAction};
pub use address_bar::AddressBar;
pub use shell::{top_bar, ShellConfig};
pub use status::StatusLine;
pub use theme::{apply_theme, Theme};

use sc_core::Session;

/// Collect actions from every visible panel for one frame
#[derive(Debug, Default)]
pub struct ActionQueue {
    actions: Vec<UiAction>,
}

impl ActionQueue {
    pub fn push(&mut self, action: UiAction) {
        self.actions.push(action);
    }
    
    pub fn extend(&mut self, actions: impl IntoIterator<Item = UiAction>) {
        self.actions.extend(actions);
    }
    
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
    
    /// Apply queued actions in order
    pub fn drain_into(&mut self, session: &Session) {
        for action in self.actions.drain(..) {
            apply_action(session, action);
        }
    }
}

// Common icon definitions
pub mod icons {
    pub const PREV: &str = "◀";
    pub const NEXT: &str = "▶";
    pub const CLOSE: &str = "✕";
    pub const GRID: &str = "▦";
    pub const CHECK: &str = "✔";
}
