//! Filter bar: one toggle per tag, with counts

use egui::{RichText, Ui};
use sc_core::{FilterSelection, TagCount};

use crate::{icons, theme, UiAction};

/// Draw the filter buttons and return the clicked tag, if any
pub fn filter_panel(ui: &mut Ui, tags: &[TagCount], selection: &FilterSelection) -> Option<UiAction> {
    let mut action = None;
    
    ui.heading("Filter Experiments");
    ui.add_space(4.0);
    
    ui.horizontal_wrapped(|ui| {
        for tag in tags {
            let selected = selection.contains(&tag.name);
            let mut text = format!("{:02} {}", tag.count, tag.name);
            if selected {
                text.push(' ');
                text.push_str(icons::CHECK);
            }
            
            let label = if selected {
                RichText::new(text).color(theme::accent_color())
            } else {
                RichText::new(text)
            };
            
            if ui.selectable_label(selected, label).clicked() {
                action = Some(UiAction::ToggleTag(tag.name.clone()));
            }
        }
    });
    
    action
}
