//! Month view: mini calendar with week-row highlighting beside the seven
//! day cards of the highlighted row.

use chrono::NaiveDate;
use egui::{RichText, Ui, Vec2};

use crate::services::navigator::CalendarNavigator;
use crate::ui_egui::theme::CellPalette;

use super::year_view::month_name;

/// Action returned from the month view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonthViewAction {
    None,
    /// Drill into a day of the displayed month.
    OpenDay(u32),
}

const MINI_CELL: f32 = 34.0;
const CARD_MIN_HEIGHT: f32 = 150.0;

pub struct MonthView;

impl MonthView {
    pub fn show(ui: &mut Ui, navigator: &mut CalendarNavigator, today: NaiveDate) -> MonthViewAction {
        let palette = CellPalette::from_visuals(ui.visuals());
        let mut action = MonthViewAction::None;

        let cursor = *navigator.cursor();
        let Some(month0) = cursor.month0 else {
            // The shell only routes here at month depth.
            log::error!("Month view shown without a selected month");
            return action;
        };
        let highlighted_week = cursor.week_row.unwrap_or(0);

        ui.horizontal_top(|ui| {
            // Mini calendar section.
            ui.vertical(|ui| {
                ui.set_width(MINI_CELL * 7.0 + 24.0);

                ui.horizontal(|ui| {
                    if ui.button("◀").clicked() {
                        navigator.go_back_one_level();
                    }
                    ui.label(
                        RichText::new(format!("{} {}", month_name(month0), cursor.year))
                            .size(18.0)
                            .strong(),
                    );
                });
                ui.add_space(8.0);

                super::weekday_header(ui, MINI_CELL, &palette);
                if let Some(grid) = navigator.month_grid(today) {
                    // Clicking any cell highlights that cell's week row; it
                    // does not navigate into a day from here.
                    if let Some(row) = super::day_grid(
                        ui,
                        &grid,
                        MINI_CELL,
                        &palette,
                        Some(highlighted_week),
                        true,
                    ) {
                        if let Err(err) = navigator.select_week_row(row) {
                            log::error!("Week-row click out of bounds: {err}");
                        }
                    }
                }
            });

            ui.add_space(24.0);

            // Day cards for the highlighted week row.
            if let Some(slots) = navigator.week_row_days(today) {
                ui.vertical(|ui| {
                    let card_width = ((ui.available_width() - 3.0 * 8.0) / 4.0).max(120.0);
                    egui::Grid::new("week_day_cards")
                        .spacing([8.0, 8.0])
                        .show(ui, |ui| {
                            for (col, slot) in slots.iter().enumerate() {
                                if Self::day_card(ui, slot, card_width, &palette) {
                                    action = MonthViewAction::OpenDay(slot.day);
                                }
                                if (col + 1) % 4 == 0 {
                                    ui.end_row();
                                }
                            }
                        });
                });
            }
        });

        action
    }

    /// One day card. Returns true when an in-month card is clicked.
    fn day_card(
        ui: &mut Ui,
        slot: &crate::models::grid::WeekSlot,
        width: f32,
        palette: &CellPalette,
    ) -> bool {
        let fill = if slot.in_displayed_month {
            ui.visuals().panel_fill
        } else {
            ui.visuals().faint_bg_color
        };

        let frame = egui::Frame::none()
            .fill(fill)
            .rounding(egui::Rounding::same(6.0))
            .stroke(ui.visuals().widgets.noninteractive.bg_stroke)
            .inner_margin(egui::Margin::same(10.0));

        let response = frame
            .show(ui, |ui| {
                ui.set_min_size(Vec2::new(width, CARD_MIN_HEIGHT));
                ui.horizontal(|ui| {
                    ui.label(RichText::new(slot.weekday).color(palette.out_month_text));
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let day_text = if slot.is_today {
                            RichText::new(slot.day.to_string())
                                .strong()
                                .color(palette.today_outline)
                        } else if slot.in_displayed_month {
                            RichText::new(slot.day.to_string()).color(palette.in_month_text)
                        } else {
                            RichText::new(slot.day.to_string()).color(palette.out_month_text)
                        };
                        ui.label(day_text);
                    });
                });
                ui.separator();
            })
            .response;

        if !slot.in_displayed_month {
            return false;
        }

        response
            .interact(egui::Sense::click())
            .on_hover_cursor(egui::CursorIcon::PointingHand)
            .clicked()
    }
}
