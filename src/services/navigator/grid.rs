//! Month grid derivation.
//!
//! Builds the fixed 42-cell grid for a `(year, month)` and reconstructs the
//! seven dates of any week row. Pure functions over proleptic-Gregorian
//! `(year, month, day)` triples; timestamps and timezones never enter.

use chrono::{Datelike, NaiveDate};

use crate::models::cursor::NavigatorError;
use crate::models::grid::{DayCell, MonthGrid, WeekSlot, GRID_CELLS, GRID_COLS, GRID_ROWS, WEEKDAY_LABELS};
use crate::utils::date;

/// Derive the 42-cell grid for one month.
///
/// Leading padding covers the weekday offset of day 1, then one cell per
/// day of the month, then trailing padding up to exactly [`GRID_CELLS`].
/// `is_today` is set on at most one cell, and only when `today` falls
/// within the displayed month.
pub fn month_grid(year: i32, month0: u32, today: NaiveDate) -> Result<MonthGrid, NavigatorError> {
    check_month0(month0)?;

    let start = date::first_weekday_offset(year, month0) as usize;
    let days = date::days_in_month(year, month0);
    let today_here = today.year() == year && today.month0() == month0;

    let mut cells = Vec::with_capacity(GRID_CELLS);
    for index in 0..start {
        cells.push(DayCell::padding(index / GRID_COLS));
    }
    for day in 1..=days {
        let index = start + day as usize - 1;
        cells.push(DayCell {
            day: Some(day),
            in_displayed_month: true,
            is_today: today_here && today.day() == day,
            week_row: index / GRID_COLS,
        });
    }
    while cells.len() < GRID_CELLS {
        let row = cells.len() / GRID_COLS;
        cells.push(DayCell::padding(row));
    }

    debug_assert_eq!(cells.len(), GRID_CELLS);
    Ok(MonthGrid {
        year,
        month0,
        cells,
    })
}

/// Reconstruct the seven dates occupying one week row of a month's grid.
///
/// A pure slice over the same `(year, month, starting weekday)` inputs as
/// [`month_grid`], not a stored structure. Slots outside the displayed
/// month carry the adjacent month's actual day number.
pub fn week_row_days(
    year: i32,
    month0: u32,
    week_row: usize,
    today: NaiveDate,
) -> Result<[WeekSlot; 7], NavigatorError> {
    check_month0(month0)?;
    if week_row >= GRID_ROWS {
        return Err(NavigatorError::InvalidArgument {
            what: "week row",
            value: week_row as i64,
            min: 0,
            max: (GRID_ROWS - 1) as i64,
        });
    }

    let start = date::first_weekday_offset(year, month0) as i64;
    let days = date::days_in_month(year, month0) as i64;
    let today_here = today.year() == year && today.month0() == month0;

    Ok(std::array::from_fn(|col| {
        let day_of_month = (week_row * GRID_COLS + col) as i64 - start + 1;
        let (day, in_displayed_month) = if day_of_month < 1 {
            // Trailing days of the previous month.
            let (prev_year, prev_month0) = if month0 == 0 {
                (year - 1, 11)
            } else {
                (year, month0 - 1)
            };
            let prev_days = date::days_in_month(prev_year, prev_month0) as i64;
            ((prev_days + day_of_month) as u32, false)
        } else if day_of_month > days {
            ((day_of_month - days) as u32, false)
        } else {
            (day_of_month as u32, true)
        };

        WeekSlot {
            weekday: WEEKDAY_LABELS[col],
            day,
            in_displayed_month,
            is_today: in_displayed_month && today_here && today.day() == day,
        }
    }))
}

fn check_month0(month0: u32) -> Result<(), NavigatorError> {
    if month0 > 11 {
        return Err(NavigatorError::InvalidArgument {
            what: "month index",
            value: month0 as i64,
            min: 0,
            max: 11,
        });
    }
    Ok(())
}
