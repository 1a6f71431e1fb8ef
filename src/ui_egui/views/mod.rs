use egui::{Align2, Color32, FontId, Rect, Sense, Stroke, Ui, Vec2};

use crate::models::grid::{DayCell, MonthGrid, GRID_COLS, WEEKDAY_LABELS};
use crate::ui_egui::theme::CellPalette;

pub mod day_view;
pub mod landing;
pub mod month_view;
pub mod year_view;

/// Paint the weekday header row above a day grid.
pub fn weekday_header(ui: &mut Ui, cell_size: f32, palette: &CellPalette) {
    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing = Vec2::splat(2.0);
        for label in WEEKDAY_LABELS {
            let (rect, _) =
                ui.allocate_exact_size(Vec2::new(cell_size, cell_size * 0.6), Sense::hover());
            ui.painter().text(
                rect.center(),
                Align2::CENTER_CENTER,
                label,
                FontId::proportional(cell_size * 0.32),
                palette.out_month_text,
            );
        }
    });
}

/// Paint one 42-cell grid. Returns the week row of the cell that was
/// clicked, if any.
pub fn day_grid(
    ui: &mut Ui,
    grid: &MonthGrid,
    cell_size: f32,
    palette: &CellPalette,
    highlighted_week: Option<usize>,
    clickable: bool,
) -> Option<usize> {
    let mut clicked_row = None;

    egui::Grid::new((grid.year, grid.month0, "day_grid"))
        .spacing([2.0, 2.0])
        .show(ui, |ui| {
            for (index, cell) in grid.cells.iter().enumerate() {
                let response = paint_cell(ui, cell, cell_size, palette, highlighted_week, clickable);
                if clickable && response.clicked() {
                    clicked_row = Some(cell.week_row);
                }
                if (index + 1) % GRID_COLS == 0 {
                    ui.end_row();
                }
            }
        });

    clicked_row
}

fn paint_cell(
    ui: &mut Ui,
    cell: &DayCell,
    cell_size: f32,
    palette: &CellPalette,
    highlighted_week: Option<usize>,
    clickable: bool,
) -> egui::Response {
    let sense = if clickable { Sense::click() } else { Sense::hover() };
    let (rect, response) = ui.allocate_exact_size(Vec2::splat(cell_size), sense);

    if highlighted_week == Some(cell.week_row) {
        ui.painter().rect_filled(rect, 3.0, palette.selected_week_bg);
    }

    if let Some(day) = cell.day {
        let color = if cell.in_displayed_month {
            palette.in_month_text
        } else {
            palette.out_month_text
        };
        ui.painter().text(
            rect.center(),
            Align2::CENTER_CENTER,
            day.to_string(),
            FontId::proportional(cell_size * 0.38),
            color,
        );
        if cell.is_today {
            paint_today_ring(ui, rect, palette.today_outline);
        }
    }

    response
}

fn paint_today_ring(ui: &Ui, rect: Rect, color: Color32) {
    ui.painter().circle_stroke(
        rect.center(),
        rect.width() * 0.42,
        Stroke::new(2.0, color),
    );
}
