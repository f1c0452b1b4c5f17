use egui::{Color32, Context, FontFamily, FontId, Rounding, Stroke, Style, TextStyle, Visuals};
use std::collections::BTreeMap;

/// Theme configuration
pub struct Theme {
    pub name: String,
    pub dark_mode: bool,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            name: "Inner Chamber".to_string(),
            dark_mode: true,
        }
    }
}

/// Apply the gallery theme: near-black panels, moss-green selection, peach text
pub fn apply_theme(ctx: &Context, theme: &Theme) {
    let mut style = Style::default();
    let mut visuals = if theme.dark_mode { Visuals::dark() } else { Visuals::light() };
    
    let bg_color = Color32::from_rgb(12, 12, 13);
    let panel_bg = Color32::from_rgb(24, 24, 27);
    let widget_bg = Color32::from_rgb(39, 39, 42);
    let hover_color = Color32::from_rgb(52, 52, 56);
    
    if theme.dark_mode {
        visuals.window_fill = panel_bg;
        visuals.panel_fill = panel_bg;
        visuals.extreme_bg_color = bg_color;
        visuals.faint_bg_color = widget_bg;
        
        visuals.widgets.inactive.bg_fill = widget_bg;
        visuals.widgets.inactive.weak_bg_fill = widget_bg;
        visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, text_color());
        visuals.widgets.hovered.bg_fill = hover_color;
        visuals.widgets.hovered.weak_bg_fill = hover_color;
        visuals.widgets.hovered.fg_stroke = Stroke::new(1.0, text_color());
        visuals.widgets.active.bg_fill = selected_color();
        visuals.widgets.active.bg_stroke = Stroke::new(1.0, accent_color());
    }
    
    for widgets in [
        &mut visuals.widgets.noninteractive,
        &mut visuals.widgets.inactive,
        &mut visuals.widgets.hovered,
        &mut visuals.widgets.active,
    ] {
        widgets.rounding = Rounding::same(6.0);
    }
    
    visuals.selection.bg_fill = selected_color();
    visuals.selection.stroke = Stroke::new(1.0, accent_color());
    visuals.hyperlink_color = accent_color();
    
    style.spacing.item_spacing = egui::vec2(8.0, 6.0);
    style.spacing.button_padding = egui::vec2(10.0, 5.0);
    
    let mut font_sizes = BTreeMap::new();
    font_sizes.insert(TextStyle::Small, FontId::new(11.0, FontFamily::Proportional));
    font_sizes.insert(TextStyle::Body, FontId::new(14.0, FontFamily::Proportional));
    font_sizes.insert(TextStyle::Button, FontId::new(14.0, FontFamily::Proportional));
    font_sizes.insert(TextStyle::Heading, FontId::new(22.0, FontFamily::Proportional));
    font_sizes.insert(TextStyle::Monospace, FontId::new(12.0, FontFamily::Monospace));
    style.text_styles = font_sizes;
    
    ctx.set_style(style);
    ctx.set_visuals(visuals);
}

/// Background of a selected filter button
pub fn selected_color() -> Color32 {
    Color32::from_rgb(41, 65, 34)
}

/// Accent used for checks and links
pub fn accent_color() -> Color32 {
    Color32::from_rgb(241, 204, 186)
}

pub fn text_color() -> Color32 {
    Color32::from_rgb(228, 228, 231)
}

pub fn muted_color() -> Color32 {
    Color32::from_rgb(161, 161, 170)
}

pub fn warning_color() -> Color32 {
    Color32::from_rgb(230, 180, 80)
}
