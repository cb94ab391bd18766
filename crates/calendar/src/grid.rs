//! Month-grid construction: week rows covering a calendar month.

use crate::date::Date;
use crate::error::CalendarError;
use crate::iso_week::iso_week;
use crate::weekday::Weekday;

/// Number of week rows in every month grid.
///
/// Six rows always suffice: the anchor lies at most 6 days before the 1st,
/// and 6 + 31 days fit within the 42 grid cells.
pub const WEEKS_PER_GRID: usize = 6;

/// Inclusive range of years accepted by [`MonthGridBuilder::build`].
/// 1582 is the first Gregorian calendar year.
pub const YEAR_RANGE: std::ops::RangeInclusive<i32> = 1582..=3000;

/// One week of a month grid: an ISO week-number label plus 7 consecutive
/// days starting on the grid's week-start day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekRow {
    week: u8,
    days: [Date; 7],
}

impl WeekRow {
    /// Returns the ISO week-number label (1..=53).
    pub fn week_number(self) -> u8 {
        self.week
    }

    /// Returns the 7 consecutive days of this row.
    pub fn days(&self) -> &[Date; 7] {
        &self.days
    }
}

/// A calendar month laid out as week rows.
///
/// The rows cover every day of the target month plus the leading and
/// trailing days of adjacent months needed for alignment. Built fresh per
/// render request and immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    year: i32,
    month: u8,
    rows: Vec<WeekRow>,
}

impl MonthGrid {
    /// Returns the target year.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Returns the target month (1..=12).
    pub fn month(&self) -> u8 {
        self.month
    }

    /// Returns the week rows, always [`WEEKS_PER_GRID`] of them.
    pub fn rows(&self) -> &[WeekRow] {
        &self.rows
    }

    /// Returns true if `date` belongs to the grid's target month. Dates for
    /// which this is false occupy grid positions but render blank.
    pub fn contains(&self, date: Date) -> bool {
        date.year() == self.year && date.month() == self.month
    }
}

/// Builds [`MonthGrid`]s under a fixed week-start policy.
#[derive(Debug, Clone, Copy)]
pub struct MonthGridBuilder {
    week_start: Weekday,
}

impl Default for MonthGridBuilder {
    fn default() -> Self {
        Self::new(Weekday::Monday)
    }
}

impl MonthGridBuilder {
    /// Creates a builder whose grids start each week on `week_start`.
    pub fn new(week_start: Weekday) -> Self {
        Self { week_start }
    }

    /// Returns the configured week-start day.
    pub fn week_start(&self) -> Weekday {
        self.week_start
    }

    /// Builds the grid for the given month.
    ///
    /// The anchor is the week-start day on or before the 1st of the month;
    /// every cell is the anchor offset by `7 * row + column` days. Each
    /// row's week-number label is the ISO week of the Thursday inside that
    /// row (for Monday-start rows, the Monday's ISO week).
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidYear`] if `year` is outside
    /// [`YEAR_RANGE`], or [`CalendarError::InvalidMonth`] if `month` is not
    /// in 1..=12.
    pub fn build(&self, year: i32, month: u8) -> Result<MonthGrid, CalendarError> {
        if !YEAR_RANGE.contains(&year) {
            return Err(CalendarError::InvalidYear { year });
        }
        let first = Date::new(year, month, 1)?;
        let anchor = first.offset(-i64::from(first.weekday().days_since(self.week_start)));
        let thursday_col = i64::from(Weekday::Thursday.days_since(self.week_start));

        let rows = (0..WEEKS_PER_GRID)
            .map(|row| {
                let start = anchor.offset(7 * row as i64);
                WeekRow {
                    week: iso_week(start.offset(thursday_col)).week,
                    days: std::array::from_fn(|col| start.offset(col as i64)),
                }
            })
            .collect();

        Ok(MonthGrid { year, month, rows })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_six_rows_of_seven_days() {
        let grid = MonthGridBuilder::default().build(2024, 2).unwrap();
        assert_eq!(grid.rows().len(), WEEKS_PER_GRID);
        for row in grid.rows() {
            assert_eq!(row.days().len(), 7);
        }
    }

    #[test]
    fn year_below_range() {
        assert_eq!(
            MonthGridBuilder::default().build(1581, 6).unwrap_err(),
            CalendarError::InvalidYear { year: 1581 }
        );
    }

    #[test]
    fn year_above_range() {
        assert_eq!(
            MonthGridBuilder::default().build(3001, 6).unwrap_err(),
            CalendarError::InvalidYear { year: 3001 }
        );
    }

    #[test]
    fn year_range_endpoints() {
        assert!(MonthGridBuilder::default().build(1582, 10).is_ok());
        assert!(MonthGridBuilder::default().build(3000, 12).is_ok());
    }

    #[test]
    fn invalid_month() {
        assert_eq!(
            MonthGridBuilder::default().build(2024, 0).unwrap_err(),
            CalendarError::InvalidMonth { month: 0 }
        );
        assert_eq!(
            MonthGridBuilder::default().build(2024, 13).unwrap_err(),
            CalendarError::InvalidMonth { month: 13 }
        );
    }

    #[test]
    fn anchor_on_first_when_month_starts_on_week_start() {
        // January 2024 starts on a Monday.
        let grid = MonthGridBuilder::default().build(2024, 1).unwrap();
        assert_eq!(grid.rows()[0].days()[0], Date::new(2024, 1, 1).unwrap());
    }

    #[test]
    fn contains_only_target_month() {
        let grid = MonthGridBuilder::default().build(2024, 2).unwrap();
        assert!(grid.contains(Date::new(2024, 2, 1).unwrap()));
        assert!(grid.contains(Date::new(2024, 2, 29).unwrap()));
        assert!(!grid.contains(Date::new(2024, 1, 31).unwrap()));
        assert!(!grid.contains(Date::new(2024, 3, 1).unwrap()));
        // Same month number in a different year is still outside the grid.
        assert!(!grid.contains(Date::new(2023, 2, 15).unwrap()));
    }

    #[test]
    fn sunday_start_anchor() {
        let builder = MonthGridBuilder::new(Weekday::Sunday);
        let grid = builder.build(2024, 2).unwrap();
        // February 1st 2024 is a Thursday; the preceding Sunday is Jan 28.
        assert_eq!(grid.rows()[0].days()[0], Date::new(2024, 1, 28).unwrap());
        assert_eq!(grid.rows()[0].days()[0].weekday(), Weekday::Sunday);
    }
}
