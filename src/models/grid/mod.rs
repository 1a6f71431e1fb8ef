// Month grid models
// Fixed 6x7 grid of day cells plus week-row slices derived from it

/// Weekday labels in the fixed Sun-Sat column order used by every grid.
pub const WEEKDAY_LABELS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Columns per grid row (one per weekday).
pub const GRID_COLS: usize = 7;
/// Rows per grid (always six full weeks).
pub const GRID_ROWS: usize = 6;
/// Total cell count. Fixed regardless of month length or starting weekday
/// so every month renders with a uniform shape.
pub const GRID_CELLS: usize = GRID_ROWS * GRID_COLS;

/// One cell of a month grid.
///
/// `day` is `None` for padding cells (before day 1 or after the last day of
/// the displayed month). `week_row` is the zero-based 7-day row the cell
/// occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayCell {
    pub day: Option<u32>,
    pub in_displayed_month: bool,
    pub is_today: bool,
    pub week_row: usize,
}

impl DayCell {
    /// A padding cell with no day number.
    pub fn padding(week_row: usize) -> Self {
        Self {
            day: None,
            in_displayed_month: false,
            is_today: false,
            week_row,
        }
    }
}

/// The derived 42-cell grid for one `(year, month)`.
///
/// A pure derived value: recomputed whenever the displayed month changes,
/// never mutated in place, never cached across sessions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    pub year: i32,
    /// Zero-based month (0 = January).
    pub month0: u32,
    /// Exactly [`GRID_CELLS`] cells in row-major order.
    pub cells: Vec<DayCell>,
}

impl MonthGrid {
    /// The seven cells of one week row.
    ///
    /// # Panics
    /// Panics when `row` is not in `0..GRID_ROWS`; rows outside the grid are
    /// a programming error.
    pub fn week(&self, row: usize) -> &[DayCell] {
        assert!(row < GRID_ROWS, "week row {row} outside 0..{GRID_ROWS}");
        &self.cells[row * GRID_COLS..(row + 1) * GRID_COLS]
    }

    /// Number of cells belonging to the displayed month.
    pub fn day_count(&self) -> usize {
        self.cells.iter().filter(|c| c.in_displayed_month).count()
    }
}

/// One of the seven dates occupying a selected week row.
///
/// Unlike [`DayCell`], out-of-month slots still carry a real day number
/// reconstructed from the adjacent month (e.g. day 31 of the previous
/// month), for display as "not in current month".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekSlot {
    pub weekday: &'static str,
    pub day: u32,
    pub in_displayed_month: bool,
    pub is_today: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn padding_cell_carries_no_day() {
        let cell = DayCell::padding(3);
        assert_eq!(cell.day, None);
        assert!(!cell.in_displayed_month);
        assert!(!cell.is_today);
        assert_eq!(cell.week_row, 3);
    }

    #[test]
    fn week_slices_are_seven_wide() {
        let grid = MonthGrid {
            year: 2024,
            month0: 0,
            cells: (0..GRID_CELLS).map(|i| DayCell::padding(i / GRID_COLS)).collect(),
        };
        for row in 0..GRID_ROWS {
            let week = grid.week(row);
            assert_eq!(week.len(), GRID_COLS);
            assert!(week.iter().all(|c| c.week_row == row));
        }
    }

    #[test]
    #[should_panic(expected = "week row 6")]
    fn week_row_out_of_range_panics() {
        let grid = MonthGrid {
            year: 2024,
            month0: 0,
            cells: (0..GRID_CELLS).map(|i| DayCell::padding(i / GRID_COLS)).collect(),
        };
        let _ = grid.week(GRID_ROWS);
    }
}
