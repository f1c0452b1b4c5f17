//! Grid of showcase cards for the catalog view

use egui::{Frame, RichText, ScrollArea, Sense, Ui};
use sc_core::ShowcaseRecord;

use crate::{theme, UiAction};

const CARD_WIDTH: f32 = 220.0;
const CARD_HEIGHT: f32 = 120.0;

/// Draw the filtered showcases. Clicking a card yields its index in
/// `showcases`.
pub fn gallery(ui: &mut Ui, showcases: &[&ShowcaseRecord]) -> Option<UiAction> {
    let mut action = None;
    
    if showcases.is_empty() {
        ui.label(RichText::new("Nothing matches this filter.").color(theme::muted_color()));
        return None;
    }
    
    ScrollArea::vertical()
        .id_source("gallery_scroll")
        .auto_shrink([false; 2])
        .show(ui, |ui| {
            ui.horizontal_wrapped(|ui| {
                for (index, record) in showcases.iter().enumerate() {
                    if card(ui, record).clicked() {
                        action = Some(UiAction::OpenVisible(index));
                    }
                }
            });
        });
    
    action
}

fn card(ui: &mut Ui, record: &ShowcaseRecord) -> egui::Response {
    let inner = Frame::group(ui.style()).show(ui, |ui| {
        ui.set_min_size(egui::vec2(CARD_WIDTH, CARD_HEIGHT));
        ui.set_max_width(CARD_WIDTH);
        ui.vertical(|ui| {
            ui.label(RichText::new(&record.title).strong().size(16.0));
            if let Some(description) = &record.details.description {
                ui.label(RichText::new(description).small().color(theme::muted_color()));
            }
            ui.add_space(4.0);
            let tags: Vec<&str> = record.tags.iter().map(String::as_str).collect();
            ui.label(RichText::new(tags.join(" · ")).small().color(theme::accent_color()));
        });
    });
    
    let response = ui.interact(
        inner.response.rect,
        ui.id().with(("showcase_card", record.id.0)),
        Sense::click(),
    );
    response.on_hover_cursor(egui::CursorIcon::PointingHand)
}
