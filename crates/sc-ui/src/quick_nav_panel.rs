//! Quick-nav overlay listing the whole catalog

use egui::{Context, RichText, ScrollArea};
use sc_core::QuickNav;

use crate::{theme, UiAction};

/// Draw the quick-nav window. The current showcase is marked and the
/// focused entry highlighted; clicking an entry selects it.
pub fn quick_nav_panel(ctx: &Context, quick_nav: &QuickNav, current: Option<usize>) -> Option<UiAction> {
    let mut action = None;
    let mut open = true;
    let focus = quick_nav.focus();
    
    egui::Window::new("All Showcases")
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_BOTTOM, egui::vec2(0.0, -24.0))
        .show(ctx, |ui| {
            ScrollArea::horizontal().id_source("quick_nav_scroll").show(ui, |ui| {
                ui.horizontal(|ui| {
                    for (index, record) in quick_nav.items().iter().enumerate() {
                        let mut text = RichText::new(&record.title);
                        if current == Some(index) {
                            text = text.strong().color(theme::accent_color());
                        }
                        
                        let response = ui.selectable_label(focus == Some(index), text);
                        if focus == Some(index) {
                            response.scroll_to_me(Some(egui::Align::Center));
                        }
                        if response.clicked() {
                            action = Some(UiAction::SelectQuickNav(index));
                        }
                    }
                });
            });
            
            ui.label(
                RichText::new("← → to move, Enter to open, Esc to close")
                    .small()
                    .color(theme::muted_color()),
            );
        });
    
    if !open && action.is_none() {
        action = Some(UiAction::CloseQuickNav);
    }
    action
}
