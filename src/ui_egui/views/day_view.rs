//! Day view: formatted date header, template drawer, and the selected
//! template's form.

use chrono::{Datelike, NaiveDate};
use egui::{RichText, Ui};

use crate::models::template::TemplateKind;
use crate::services::storage::uploader::Uploader;
use crate::ui_egui::templates::{self, TemplateState};

/// Action returned from the day view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayViewAction {
    None,
    /// Return to the month view.
    Close,
}

pub struct DayView;

impl DayView {
    pub fn show(
        ui: &mut Ui,
        date: NaiveDate,
        state: &mut TemplateState,
        drawer_open: &mut bool,
        uploader: &Uploader,
    ) -> DayViewAction {
        let mut action = DayViewAction::None;

        ui.horizontal(|ui| {
            if ui.button("◀").clicked() {
                action = DayViewAction::Close;
            }
            ui.label(
                RichText::new(date.format("%A, %B %-d, %Y").to_string())
                    .size(24.0)
                    .strong(),
            );
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let toggle_label = if *drawer_open { "Hide templates ▶" } else { "◀ Templates" };
                if ui.button(toggle_label).clicked() {
                    *drawer_open = !*drawer_open;
                }
            });
        });
        ui.separator();

        ui.horizontal_top(|ui| {
            // Template form.
            let drawer_width = if *drawer_open { 280.0 } else { 0.0 };
            ui.vertical(|ui| {
                ui.set_width((ui.available_width() - drawer_width).max(200.0));
                egui::ScrollArea::vertical()
                    .id_source("template_form")
                    .show(ui, |ui| match state.selected {
                        Some(kind) => {
                            templates::show_template(ui, kind, state, date.year(), uploader)
                        }
                        None => {
                            ui.add_space(40.0);
                            ui.vertical_centered(|ui| {
                                ui.label(
                                    RichText::new("Pick a template from the drawer to start this page")
                                        .weak(),
                                );
                            });
                        }
                    });
            });

            // Template drawer.
            if *drawer_open {
                ui.separator();
                ui.vertical(|ui| {
                    ui.set_width(260.0);
                    ui.label(RichText::new("Templates").strong());
                    ui.add_space(8.0);
                    for kind in TemplateKind::ALL {
                        let selected = state.selected == Some(kind);
                        let response = ui.selectable_label(
                            selected,
                            format!("{}\n{}", kind.title(), kind.description()),
                        );
                        if response.clicked() {
                            state.selected = Some(kind);
                            *drawer_open = false;
                        }
                        ui.add_space(4.0);
                    }
                });
            }
        });

        action
    }
}
