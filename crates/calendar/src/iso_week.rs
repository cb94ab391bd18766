//! ISO-8601 week numbering.

use crate::date::Date;

/// ISO-8601 week identification of a date: the ISO year plus the week
/// number within it.
///
/// A date's ISO year can differ from its calendar year near year
/// boundaries: late-December dates can fall in week 1 of the next year and
/// early-January dates in week 52 or 53 of the previous year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IsoWeek {
    /// The ISO year the week belongs to.
    pub year: i32,
    /// The week number within the ISO year (1..=53).
    pub week: u8,
}

/// Computes the ISO-8601 week of the given date.
///
/// Week 1 is the week containing the year's first Thursday, so the Thursday
/// of a date's (Monday-start) week decides both the ISO year and the week
/// number.
pub fn iso_week(date: Date) -> IsoWeek {
    let thursday = date.offset(3 - i64::from(date.weekday().monday0()));
    IsoWeek {
        year: thursday.year(),
        week: ((thursday.ordinal() - 1) / 7 + 1) as u8,
    }
}
