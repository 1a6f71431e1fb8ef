// Theme application for the egui shell

use egui::{Color32, Visuals};

/// Apply light or dark visuals according to the app context flag.
pub fn apply_theme(ctx: &egui::Context, dark_mode: bool) {
    let visuals = if dark_mode {
        Visuals::dark()
    } else {
        Visuals::light()
    };
    ctx.set_visuals(visuals);
}

/// Colors for calendar day cells, derived from the active visuals.
#[derive(Debug, Clone, Copy)]
pub struct CellPalette {
    pub in_month_text: Color32,
    pub out_month_text: Color32,
    pub today_outline: Color32,
    pub selected_week_bg: Color32,
}

impl CellPalette {
    pub fn from_visuals(visuals: &Visuals) -> Self {
        Self {
            in_month_text: visuals.text_color(),
            out_month_text: visuals.weak_text_color(),
            today_outline: visuals.selection.stroke.color,
            selected_week_bg: visuals.selection.bg_fill.gamma_multiply(0.35),
        }
    }
}
