// Calendar cursor model
// Drill-down position for the year -> month -> week-row -> day hierarchy

use thiserror::Error;

/// Errors raised by the calendar navigator.
///
/// Both variants are caller misuse, not runtime failures: the navigator
/// performs no I/O and cannot fail transiently. They propagate immediately
/// instead of being absorbed, since absorbing them would leave the cursor
/// inconsistent (e.g. a week row pointing into a month that was never
/// selected) and the grid would mis-render with no diagnosable cause.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum NavigatorError {
    /// An index argument was outside its documented range.
    #[error("{what} {value} is out of range {min}..={max}")]
    InvalidArgument {
        what: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },
    /// An operation required a deeper selection than the cursor holds.
    #[error("{operation} requires a month to be selected first")]
    InvalidState { operation: &'static str },
}

/// The navigator's current drill-down position.
///
/// Depth is encoded by which optional fields are set: year only, year +
/// month, year + month + week row, or year + month + day. Deeper fields are
/// only meaningful when every shallower field is set; clearing a shallow
/// field clears everything below it.
///
/// `month0` is zero-based (0 = January, 11 = December), matching
/// `chrono::Datelike::month0`. `week_row` indexes one of the six 7-day rows
/// of the fixed month grid. `day` is the ordinary 1-based day of month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarCursor {
    pub year: i32,
    pub month0: Option<u32>,
    pub week_row: Option<usize>,
    pub day: Option<u32>,
}

impl CalendarCursor {
    /// Cursor at year depth with no deeper selection.
    pub fn for_year(year: i32) -> Self {
        Self {
            year,
            month0: None,
            week_row: None,
            day: None,
        }
    }

    /// True when no field deeper than the year is set.
    pub fn at_year_level(&self) -> bool {
        self.month0.is_none() && self.week_row.is_none() && self.day.is_none()
    }

    /// Consistency check for the depth invariant.
    pub fn is_consistent(&self) -> bool {
        if self.month0.is_none() {
            return self.week_row.is_none() && self.day.is_none();
        }
        true
    }
}
