//! Localized month names and weekday abbreviations.

use crate::weekday::Weekday;

/// Output language for month names and weekday abbreviations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    /// Dutch (`nl`): lowercase month names, two-letter weekday abbreviations.
    #[default]
    Dutch,
    /// English (`en`).
    English,
}

const MONTHS_NL: [&str; 12] = [
    "januari",
    "februari",
    "maart",
    "april",
    "mei",
    "juni",
    "juli",
    "augustus",
    "september",
    "oktober",
    "november",
    "december",
];

const MONTHS_EN: [&str; 12] = [
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

const WEEKDAYS_NL: [&str; 7] = ["ma", "di", "wo", "do", "vr", "za", "zo"];

const WEEKDAYS_EN: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

impl Locale {
    /// Returns the full month name for `month`.
    ///
    /// # Panics
    ///
    /// Panics if `month` is not in 1..=12. Callers pass months taken from
    /// validated dates or grids, which uphold this.
    pub fn month_name(self, month: u8) -> &'static str {
        let table = match self {
            Locale::Dutch => &MONTHS_NL,
            Locale::English => &MONTHS_EN,
        };
        table[usize::from(month) - 1]
    }

    /// Returns the abbreviated weekday name.
    pub fn weekday_abbrev(self, weekday: Weekday) -> &'static str {
        let table = match self {
            Locale::Dutch => &WEEKDAYS_NL,
            Locale::English => &WEEKDAYS_EN,
        };
        table[usize::from(weekday.monday0())]
    }
}
