//! Fullscreen viewer for the open showcase

use egui::{Grid, RichText, ScrollArea, SidePanel, Ui};
use sc_core::{NavigationContext, ShowcaseDetails, ShowcaseRecord, MAX_RATING};

use crate::{icons, theme, UiAction};

/// Draw the showcase body with its navigation controls
pub fn viewer(ui: &mut Ui, record: &ShowcaseRecord, context: &NavigationContext) -> Option<UiAction> {
    let mut action = None;
    
    ui.horizontal(|ui| {
        if ui.button(icons::PREV).on_hover_text("Previous (←)").clicked() {
            action = Some(UiAction::Prev);
        }
        if let Some(position) = context.position {
            ui.label(RichText::new(format!("{} / {}", position + 1, context.total)).monospace());
        }
        if ui.button(icons::NEXT).on_hover_text("Next (→)").clicked() {
            action = Some(UiAction::Next);
        }
        ui.separator();
        ui.heading(record.title.as_str());
    });
    ui.separator();
    
    // Renderers are keyed by name; unknown keys get a placeholder stage
    egui::Frame::canvas(ui.style()).show(ui, |ui| {
        ui.set_min_size(ui.available_size());
        ui.centered_and_justified(|ui| {
            ui.label(
                RichText::new(format!("{} [{}]", record.title, record.renderer.as_str()))
                    .size(28.0)
                    .color(theme::muted_color()),
            );
        });
    });
    
    action
}

/// Sidebar with the showcase metadata
pub fn details_panel(ctx: &egui::Context, record: &ShowcaseRecord) {
    SidePanel::right("showcase_details")
        .resizable(true)
        .default_width(280.0)
        .show(ctx, |ui| {
            ScrollArea::vertical().id_source("details_scroll").show(ui, |ui| {
                details(ui, record);
            });
        });
}

fn details(ui: &mut Ui, record: &ShowcaseRecord) {
    let details: &ShowcaseDetails = &record.details;
    
    ui.heading("Details");
    if let Some(description) = &details.description {
        ui.label(description.as_str());
    }
    if let Some(warning) = &details.warning {
        ui.label(RichText::new(warning.as_str()).color(theme::warning_color()));
    }
    ui.add_space(6.0);
    
    Grid::new("details_grid").num_columns(2).striped(true).show(ui, |ui| {
        let tags: Vec<&str> = record.tags.iter().map(String::as_str).collect();
        let tags = tags.join(", ");
        row(ui, "Tags", Some(tags.as_str()));
        row(ui, "Mood", details.mood.as_deref());
        row(ui, "Interaction", details.interaction_type.as_deref());
        if let Some(rating) = details.personal_rating {
            let filled = usize::from(rating);
            let stars = "★".repeat(filled) + &"☆".repeat(usize::from(MAX_RATING).saturating_sub(filled));
            row(ui, "Rating", Some(stars.as_str()));
        }
        if let Some(likes) = details.likes {
            row(ui, "Likes", Some(likes.to_string().as_str()));
        }
        row(ui, "Difficulty", details.difficulty.as_deref());
        row(ui, "Time to build", details.time_to_build.as_deref());
        row(ui, "Best viewed with", details.best_viewed_with.as_deref());
        row(ui, "Soundtrack", details.soundtrack.as_deref());
        row(ui, "Inspiration", details.inspiration.as_deref());
        if !details.tech.is_empty() {
            row(ui, "Tech", Some(details.tech.join(", ").as_str()));
        }
    });
    
    if let Some(commentary) = &details.commentary {
        ui.add_space(6.0);
        ui.label(RichText::new(commentary.as_str()).italics());
    }
    if let Some(secret) = &details.secret_interaction {
        ui.collapsing("Secret", |ui| {
            ui.label(secret.as_str());
        });
    }
}

fn row(ui: &mut Ui, label: &str, value: Option<&str>) {
    if let Some(value) = value {
        ui.label(RichText::new(label).color(theme::muted_color()));
        ui.label(value);
        ui.end_row();
    }
}
