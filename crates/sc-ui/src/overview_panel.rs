//! Overview sidebar: identity, tools, contact

use egui::{RichText, Ui};
use sc_data::Overview;

use crate::theme;

pub fn overview_panel(ui: &mut Ui, overview: &Overview) {
    ui.heading(overview.identity.name.as_str());
    ui.label(RichText::new(&overview.identity.title).color(theme::muted_color()));
    ui.separator();
    
    if !overview.tools.main.is_empty() {
        ui.label(RichText::new("Tools").strong());
        ui.label(overview.tools.main.join(", "));
    }
    if !overview.tools.secret_weapons.is_empty() {
        ui.label(RichText::new("Secret weapons").strong());
        ui.label(overview.tools.secret_weapons.join(", "));
    }
    
    if !overview.contact.is_empty() {
        ui.separator();
        ui.label(RichText::new("Contact").strong());
        for link in &overview.contact {
            ui.hyperlink_to(link.platform.as_str(), &link.url);
        }
    }
    
    let interaction = &overview.interaction;
    for (label, value) in [
        ("Preferred contact", &interaction.preferred_contact),
        ("Response time", &interaction.response_time),
        ("Status", &interaction.collaboration_status),
    ] {
        if let Some(value) = value {
            ui.label(RichText::new(format!("{label}: {value}")).small());
        }
    }
}
