//! Landing page shown before the planner is opened.

use egui::{RichText, Ui};

/// Action returned from the landing page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LandingAction {
    None,
    OpenPlanner,
}

pub struct LandingView;

impl LandingView {
    pub fn show(ui: &mut Ui) -> LandingAction {
        let mut action = LandingAction::None;

        ui.vertical_centered(|ui| {
            ui.add_space(ui.available_height() * 0.2);
            ui.label(RichText::new("Smart Planner").size(42.0).strong());
            ui.add_space(8.0);
            ui.label(
                RichText::new("Your year, month and day in one place")
                    .size(18.0)
                    .weak(),
            );
            ui.add_space(24.0);
            ui.label("Plan your year at a glance, drill into any week,");
            ui.label("and journal each day with reflection, memories and habit pages.");
            ui.add_space(32.0);

            if ui
                .button(RichText::new("  Open your planner  ").size(18.0))
                .clicked()
            {
                action = LandingAction::OpenPlanner;
            }
        });

        action
    }
}
