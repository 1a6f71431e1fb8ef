//! Calendar navigator service.
//!
//! Owns the drill-down cursor (year -> month -> week-row -> day) and derives
//! the month grid and week-row listings for the presentation layer. Pure
//! state plus derivation: every operation completes synchronously with no
//! I/O, and the same cursor and "today" always produce the same grid.
//! "Today" is supplied by the caller per derivation and never cached here.

use chrono::{Datelike, NaiveDate};

use crate::models::cursor::{CalendarCursor, NavigatorError};
use crate::models::grid::{MonthGrid, WeekSlot, GRID_ROWS};
use crate::utils::date;

pub mod grid;

/// Drill-down navigator over a single [`CalendarCursor`].
///
/// Each navigator instance owns its cursor exclusively; multiple open
/// calendar widgets get independent navigators with no coordination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarNavigator {
    cursor: CalendarCursor,
}

impl CalendarNavigator {
    /// Start a session at year depth on today's year.
    pub fn new(today: NaiveDate) -> Self {
        Self {
            cursor: CalendarCursor::for_year(today.year()),
        }
    }

    pub fn cursor(&self) -> &CalendarCursor {
        &self.cursor
    }

    /// Set the displayed year and drop every deeper selection.
    ///
    /// Any `i32` is accepted; the navigator imposes no range. The UI bounds
    /// the picker to a window around the selection instead.
    pub fn set_year(&mut self, year: i32) {
        self.cursor = CalendarCursor::for_year(year);
    }

    /// Drill into a month (zero-based), dropping week-row and day.
    pub fn select_month(&mut self, month0: u32) -> Result<(), NavigatorError> {
        if month0 > 11 {
            return Err(NavigatorError::InvalidArgument {
                what: "month index",
                value: month0 as i64,
                min: 0,
                max: 11,
            });
        }
        self.cursor.month0 = Some(month0);
        self.cursor.week_row = None;
        self.cursor.day = None;
        Ok(())
    }

    /// Highlight a week row of the current month's grid.
    ///
    /// Changes only which row is highlighted; deliberately does not clear a
    /// selected day and does not navigate anywhere by itself.
    pub fn select_week_row(&mut self, week_row: usize) -> Result<(), NavigatorError> {
        if self.cursor.month0.is_none() {
            return Err(NavigatorError::InvalidState {
                operation: "select_week_row",
            });
        }
        if week_row >= GRID_ROWS {
            return Err(NavigatorError::InvalidArgument {
                what: "week row",
                value: week_row as i64,
                min: 0,
                max: (GRID_ROWS - 1) as i64,
            });
        }
        self.cursor.week_row = Some(week_row);
        Ok(())
    }

    /// Drill into a day of the current month.
    ///
    /// Returns `Ok(true)` when the day was selected. Days outside
    /// `1..=days_in_month` are a defined no-op returning `Ok(false)`:
    /// clicks on padding cells never navigate. Calling without a selected
    /// month is caller misuse and fails with `InvalidState`.
    pub fn select_day(&mut self, day: u32) -> Result<bool, NavigatorError> {
        let month0 = self.cursor.month0.ok_or(NavigatorError::InvalidState {
            operation: "select_day",
        })?;
        if day < 1 || day > date::days_in_month(self.cursor.year, month0) {
            return Ok(false);
        }
        self.cursor.day = Some(day);
        Ok(true)
    }

    /// Pop one drill-down level: day -> month view, month -> year view.
    /// No-op at year level; there is nothing above the year.
    pub fn go_back_one_level(&mut self) {
        if self.cursor.day.is_some() {
            self.cursor.day = None;
        } else if self.cursor.month0.is_some() {
            // Clearing the month invalidates the week row beneath it too.
            self.cursor.month0 = None;
            self.cursor.week_row = None;
        }
    }

    /// The 42-cell grid for the selected month, or `None` at year depth.
    pub fn month_grid(&self, today: NaiveDate) -> Option<MonthGrid> {
        let month0 = self.cursor.month0?;
        Some(
            grid::month_grid(self.cursor.year, month0, today)
                .expect("cursor month is validated on selection"),
        )
    }

    /// The seven dates of the highlighted week row (row 0 before any row is
    /// picked), or `None` at year depth.
    pub fn week_row_days(&self, today: NaiveDate) -> Option<[WeekSlot; 7]> {
        let month0 = self.cursor.month0?;
        let row = self.cursor.week_row.unwrap_or(0);
        Some(
            grid::week_row_days(self.cursor.year, month0, row, today)
                .expect("cursor month and week row are validated on selection"),
        )
    }

    /// The fully selected date, once the cursor is at day depth.
    pub fn selected_date(&self) -> Option<NaiveDate> {
        let month0 = self.cursor.month0?;
        let day = self.cursor.day?;
        NaiveDate::from_ymd_opt(self.cursor.year, month0 + 1, day)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    fn at_month(month0: u32) -> CalendarNavigator {
        let mut nav = CalendarNavigator::new(today());
        nav.select_month(month0).unwrap();
        nav
    }

    #[test]
    fn new_session_starts_at_todays_year() {
        let nav = CalendarNavigator::new(today());
        assert_eq!(*nav.cursor(), CalendarCursor::for_year(2024));
    }

    #[test]
    fn set_year_clears_every_deeper_selection() {
        let mut nav = at_month(5);
        nav.select_week_row(2).unwrap();
        assert!(nav.select_day(10).unwrap());

        nav.set_year(2030);
        assert_eq!(*nav.cursor(), CalendarCursor::for_year(2030));
    }

    #[test]
    fn select_month_clears_week_row_and_day() {
        let mut nav = at_month(1);
        nav.select_week_row(4).unwrap();
        assert!(nav.select_day(29).unwrap());

        nav.select_month(2).unwrap();
        let cursor = nav.cursor();
        assert_eq!(cursor.month0, Some(2));
        assert_eq!(cursor.week_row, None);
        assert_eq!(cursor.day, None);
    }

    #[test]
    fn select_month_rejects_out_of_range_index() {
        let mut nav = CalendarNavigator::new(today());
        let err = nav.select_month(12).unwrap_err();
        assert_eq!(
            err,
            NavigatorError::InvalidArgument {
                what: "month index",
                value: 12,
                min: 0,
                max: 11,
            }
        );
        assert!(nav.cursor().at_year_level());
    }

    #[test]
    fn select_week_row_requires_a_month() {
        let mut nav = CalendarNavigator::new(today());
        let err = nav.select_week_row(0).unwrap_err();
        assert_eq!(
            err,
            NavigatorError::InvalidState {
                operation: "select_week_row",
            }
        );
    }

    #[test]
    fn select_week_row_rejects_rows_past_the_grid() {
        let mut nav = at_month(0);
        let err = nav.select_week_row(6).unwrap_err();
        assert!(matches!(err, NavigatorError::InvalidArgument { .. }));
        assert_eq!(nav.cursor().week_row, None);
    }

    #[test]
    fn select_week_row_does_not_clear_the_day() {
        // Observed product behavior: picking a row only moves the highlight.
        let mut nav = at_month(3);
        assert!(nav.select_day(12).unwrap());
        nav.select_week_row(1).unwrap();
        assert_eq!(nav.cursor().day, Some(12));
        assert_eq!(nav.cursor().week_row, Some(1));
    }

    #[test]
    fn select_day_requires_a_month() {
        let mut nav = CalendarNavigator::new(today());
        assert!(nav.select_day(1).is_err());
    }

    #[test]
    fn select_day_is_a_no_op_outside_the_month() {
        let mut nav = at_month(3); // April: 30 days
        assert!(!nav.select_day(0).unwrap());
        assert!(!nav.select_day(31).unwrap());
        assert_eq!(nav.cursor().day, None);

        assert!(nav.select_day(30).unwrap());
        assert_eq!(nav.cursor().day, Some(30));
    }

    #[test]
    fn leap_day_is_selectable_only_in_leap_years() {
        let mut nav = at_month(1);
        assert!(nav.select_day(29).unwrap());

        nav.set_year(2023);
        nav.select_month(1).unwrap();
        assert!(!nav.select_day(29).unwrap());
        assert_eq!(nav.cursor().day, None);
    }

    #[test]
    fn go_back_pops_one_level_at_a_time() {
        let mut nav = at_month(5);
        nav.select_week_row(2).unwrap();
        assert!(nav.select_day(10).unwrap());

        nav.go_back_one_level();
        assert_eq!(nav.cursor().day, None);
        assert_eq!(nav.cursor().month0, Some(5));

        nav.go_back_one_level();
        assert!(nav.cursor().at_year_level());
    }

    #[test]
    fn go_back_is_idempotent_at_year_level() {
        let mut nav = CalendarNavigator::new(today());
        let before = *nav.cursor();
        nav.go_back_one_level();
        nav.go_back_one_level();
        assert_eq!(*nav.cursor(), before);
    }

    #[test]
    fn month_switch_scenario_clears_stale_day() {
        // Feb 29 2024 selected, then switching to March must drop the day
        // rather than silently keep it.
        let mut nav = at_month(1);
        assert!(nav.select_day(29).unwrap());
        assert_eq!(nav.cursor().day, Some(29));

        let grid = nav.month_grid(today()).unwrap();
        let feb29 = grid
            .cells
            .iter()
            .find(|c| c.day == Some(29))
            .expect("leap February has a 29th");
        assert!(feb29.in_displayed_month);

        nav.select_month(2).unwrap();
        assert_eq!(nav.cursor().month0, Some(2));
        assert_eq!(nav.cursor().day, None);
    }

    #[test]
    fn derivations_are_absent_at_year_depth() {
        let nav = CalendarNavigator::new(today());
        assert!(nav.month_grid(today()).is_none());
        assert!(nav.week_row_days(today()).is_none());
        assert!(nav.selected_date().is_none());
    }

    #[test]
    fn selected_date_combines_cursor_fields() {
        let mut nav = at_month(5);
        assert!(nav.select_day(15).unwrap());
        assert_eq!(nav.selected_date(), Some(today()));
    }

    #[test]
    fn week_row_listing_defaults_to_the_first_row() {
        let nav = at_month(5);
        let slots = nav.week_row_days(today()).unwrap();
        // June 2024 starts on a Saturday: row 0 is six padding slots + day 1.
        assert!(!slots[0].in_displayed_month);
        assert_eq!(slots[6].day, 1);
        assert!(slots[6].in_displayed_month);
    }
}
