use egui::{Context, RichText, TopBottomPanel};
use sc_core::Session;

use crate::address_bar::AddressBar;
use crate::status::StatusLine;
use crate::{icons, theme, UiAction};

/// Shell configuration
pub struct ShellConfig {
    pub title: String,
    pub show_address_bar: bool,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            title: "Showcase Gallery".to_string(),
            show_address_bar: true,
        }
    }
}

/// Render the top bar: title, address, and viewer shortcuts
pub fn top_bar(
    ctx: &Context,
    config: &ShellConfig,
    session: &Session,
    address: &AddressBar,
    status: &StatusLine,
) -> Vec<UiAction> {
    let mut actions = Vec::new();
    
    TopBottomPanel::top("top_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(RichText::new(&config.title).strong());
            
            if config.show_address_bar {
                ui.separator();
                ui.label(RichText::new(address.route().to_string()).monospace().color(theme::muted_color()));
            }
            
            let line = status.text();
            if !line.is_empty() {
                ui.separator();
                ui.label(RichText::new(line).small().color(theme::muted_color()));
            }
            
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if session.state().is_open() {
                    if ui.button(icons::CLOSE).on_hover_text("Back to catalog (Esc)").clicked() {
                        actions.push(UiAction::Close);
                    }
                    if ui.button(icons::GRID).on_hover_text("All showcases (Q)").clicked() {
                        actions.push(UiAction::ToggleQuickNav);
                    }
                } else {
                    let visible = session.visible_showcases().len();
                    ui.label(format!("{} of {} showcases", visible, session.catalog().len()));
                }
            });
        });
    });
    
    actions
}
