//! Year view: year picker plus a 3x4 grid of mini month cards.

use chrono::NaiveDate;
use egui::{RichText, Ui};

use crate::services::navigator::{grid, CalendarNavigator};
use crate::ui_egui::theme::CellPalette;
use crate::utils::date;

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Selectable years offered around the current selection.
const YEAR_WINDOW: i32 = 10;

const MINI_CELL: f32 = 22.0;

pub struct YearView;

impl YearView {
    pub fn show(ui: &mut Ui, navigator: &mut CalendarNavigator, today: NaiveDate) {
        let palette = CellPalette::from_visuals(ui.visuals());
        let year = navigator.cursor().year;

        // Year header: previous / picker / next.
        ui.vertical_centered(|ui| {
            ui.horizontal(|ui| {
                let total = 260.0;
                ui.add_space((ui.available_width() - total).max(0.0) / 2.0);

                // Stepping and picking both clamp so the grid derivations
                // stay inside chrono's representable dates.
                if ui.button("◀").clicked() {
                    navigator.set_year(date::clamp_year(year - 1));
                }

                let mut picked = year;
                egui::ComboBox::from_id_source("year_picker")
                    .selected_text(year.to_string())
                    .width(100.0)
                    .show_ui(ui, |ui| {
                        for candidate in (year - YEAR_WINDOW)..=(year + YEAR_WINDOW) {
                            ui.selectable_value(&mut picked, candidate, candidate.to_string());
                        }
                    });
                if picked != year {
                    navigator.set_year(date::clamp_year(picked));
                }

                if ui.button("▶").clicked() {
                    navigator.set_year(date::clamp_year(year + 1));
                }
            });
        });
        ui.add_space(16.0);

        // 3 columns x 4 rows of month cards.
        let year = navigator.cursor().year;
        let mut picked_month = None;

        egui::ScrollArea::vertical().show(ui, |ui| {
            egui::Grid::new("months_grid")
                .spacing([24.0, 24.0])
                .show(ui, |ui| {
                    for month0 in 0..12u32 {
                        if Self::month_card(ui, year, month0, today, &palette) {
                            picked_month = Some(month0);
                        }
                        if (month0 + 1) % 3 == 0 {
                            ui.end_row();
                        }
                    }
                });
        });

        if let Some(month0) = picked_month {
            if let Err(err) = navigator.select_month(month0) {
                log::error!("Month card produced an invalid selection: {err}");
            }
        }
    }

    /// One mini month card. Returns true when clicked.
    fn month_card(
        ui: &mut Ui,
        year: i32,
        month0: u32,
        today: NaiveDate,
        palette: &CellPalette,
    ) -> bool {
        let month_grid = match grid::month_grid(year, month0, today) {
            Ok(g) => g,
            Err(err) => {
                log::error!("Failed to derive grid for {year}-{month0}: {err}");
                return false;
            }
        };

        let mut clicked = false;
        let frame = egui::Frame::none()
            .fill(ui.visuals().panel_fill)
            .rounding(egui::Rounding::same(6.0))
            .stroke(ui.visuals().widgets.noninteractive.bg_stroke)
            .inner_margin(egui::Margin::same(10.0));

        let response = frame
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(
                        RichText::new(MONTH_NAMES[month0 as usize])
                            .strong()
                            .color(palette.today_outline),
                    );
                });
                ui.add_space(4.0);
                super::weekday_header(ui, MINI_CELL, palette);
                super::day_grid(ui, &month_grid, MINI_CELL, palette, None, false);
            })
            .response;

        let response = response
            .interact(egui::Sense::click())
            .on_hover_cursor(egui::CursorIcon::PointingHand);
        if response.clicked() {
            clicked = true;
        }
        clicked
    }
}

/// Month name for headers elsewhere in the shell.
pub fn month_name(month0: u32) -> &'static str {
    MONTH_NAMES[month0 as usize]
}
