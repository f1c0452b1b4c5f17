//! UI actions and their effect on the session

use egui::Key;
use sc_core::{Session, ShowcaseId};
use tracing::debug;

/// Everything a user can do in the shell
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiAction {
    ToggleTag(String),
    /// Card index within the filtered grid
    OpenVisible(usize),
    Open(ShowcaseId),
    Close,
    Next,
    Prev,
    ToggleQuickNav,
    CloseQuickNav,
    /// Full-catalog position in the quick-nav
    SelectQuickNav(usize),
    StepQuickNavFocus(isize),
}

/// Apply one action. Returns whether session state changed.
pub fn apply_action(session: &Session, action: UiAction) -> bool {
    debug!("UI action {:?}", action);
    match action {
        UiAction::ToggleTag(tag) => {
            let before = session.filter();
            session.toggle_tag(&tag) != before
        }
        UiAction::OpenVisible(index) => session.open_visible(index),
        UiAction::Open(id) => session.open(id),
        UiAction::Close => session.close(),
        UiAction::Next => session.next(),
        UiAction::Prev => session.prev(),
        UiAction::ToggleQuickNav => {
            let before = session.is_quick_nav_open();
            session.toggle_quick_nav() != before
        }
        UiAction::CloseQuickNav => {
            let before = session.is_quick_nav_open();
            session.close_quick_nav();
            before
        }
        UiAction::SelectQuickNav(index) => session.select_quick_nav(index),
        UiAction::StepQuickNavFocus(delta) => session.quick_nav().step_focus(delta).is_some(),
    }
}

/// Map a key press to an action given the current session state.
///
/// With the quick-nav shown, arrows rotate its focus ring and Enter
/// selects; otherwise arrows step through showcases.
pub fn keyboard_action(session: &Session, key: Key) -> Option<UiAction> {
    let open = session.state().is_open();
    let quick_nav = session.is_quick_nav_open();
    
    match key {
        Key::Escape if quick_nav => Some(UiAction::CloseQuickNav),
        Key::Escape if open => Some(UiAction::Close),
        Key::ArrowRight if quick_nav => Some(UiAction::StepQuickNavFocus(1)),
        Key::ArrowLeft if quick_nav => Some(UiAction::StepQuickNavFocus(-1)),
        Key::Enter if quick_nav => session.quick_nav().focus().map(UiAction::SelectQuickNav),
        Key::ArrowRight if open => Some(UiAction::Next),
        Key::ArrowLeft if open => Some(UiAction::Prev),
        Key::Q if open => Some(UiAction::ToggleQuickNav),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sc_core::{Catalog, NavigationState, SessionSettings, ShowcaseRecord};
    use std::sync::Arc;
    
    fn session() -> Session {
        let catalog = Catalog::from_records(vec![
            ShowcaseRecord::new(1, "Pool", ["3D"], "Pool"),
            ShowcaseRecord::new(2, "Piano", ["2D"], "Piano"),
            ShowcaseRecord::new(3, "Grid", ["3D"], "Grid"),
        ])
        .unwrap();
        Session::new(Arc::new(catalog), SessionSettings::default())
    }
    
    #[test]
    fn test_filter_then_open_card() {
        let session = session();
        
        assert!(apply_action(&session, UiAction::ToggleTag("3D".into())));
        assert!(apply_action(&session, UiAction::OpenVisible(1)));
        assert_eq!(session.state(), NavigationState::Open(ShowcaseId(3)));
        
        assert!(apply_action(&session, UiAction::Next));
        assert_eq!(session.state(), NavigationState::Open(ShowcaseId(1)));
    }
    
    #[test]
    fn test_toggle_all_twice_reports_no_change() {
        let session = session();
        
        assert!(!apply_action(&session, UiAction::ToggleTag("All".into())));
    }
    
    #[test]
    fn test_keyboard_in_catalog_view() {
        let session = session();
        
        assert_eq!(keyboard_action(&session, Key::ArrowRight), None);
        assert_eq!(keyboard_action(&session, Key::Escape), None);
        assert_eq!(keyboard_action(&session, Key::Q), None);
    }
    
    #[test]
    fn test_keyboard_in_viewer() {
        let session = session();
        session.open(ShowcaseId(2));
        
        assert_eq!(keyboard_action(&session, Key::ArrowRight), Some(UiAction::Next));
        assert_eq!(keyboard_action(&session, Key::ArrowLeft), Some(UiAction::Prev));
        assert_eq!(keyboard_action(&session, Key::Escape), Some(UiAction::Close));
        assert_eq!(keyboard_action(&session, Key::Q), Some(UiAction::ToggleQuickNav));
    }
    
    #[test]
    fn test_keyboard_drives_quick_nav() {
        let session = session();
        session.open(ShowcaseId(2));
        apply_action(&session, UiAction::ToggleQuickNav);
        
        let step = keyboard_action(&session, Key::ArrowRight).unwrap();
        assert_eq!(step, UiAction::StepQuickNavFocus(1));
        apply_action(&session, step);
        
        let select = keyboard_action(&session, Key::Enter).unwrap();
        assert_eq!(select, UiAction::SelectQuickNav(2));
        apply_action(&session, select);
        
        assert_eq!(session.state(), NavigationState::Open(ShowcaseId(3)));
        assert!(!session.is_quick_nav_open());
    }
    
    #[test]
    fn test_escape_closes_quick_nav_before_viewer() {
        let session = session();
        session.open(ShowcaseId(1));
        session.toggle_quick_nav();
        
        assert_eq!(keyboard_action(&session, Key::Escape), Some(UiAction::CloseQuickNav));
        assert!(apply_action(&session, UiAction::CloseQuickNav));
        assert_eq!(keyboard_action(&session, Key::Escape), Some(UiAction::Close));
    }
}
