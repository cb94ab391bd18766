//! Pure conversion functions: TOML config strings -> crate API types.

use anyhow::{Context, Result, bail};

use maandkal_calendar::{Locale, Weekday};

/// Parses a locale name into the corresponding [`Locale`].
pub fn parse_locale(s: &str) -> Result<Locale> {
    match s.to_lowercase().as_str() {
        "nl" | "nl_nl" | "dutch" => Ok(Locale::Dutch),
        "en" | "en_us" | "en_gb" | "english" => Ok(Locale::English),
        other => bail!("unknown locale: {other:?}"),
    }
}

/// Parses an English weekday name into the corresponding [`Weekday`].
pub fn parse_week_start(s: &str) -> Result<Weekday> {
    match s.to_lowercase().as_str() {
        "monday" => Ok(Weekday::Monday),
        "tuesday" => Ok(Weekday::Tuesday),
        "wednesday" => Ok(Weekday::Wednesday),
        "thursday" => Ok(Weekday::Thursday),
        "friday" => Ok(Weekday::Friday),
        "saturday" => Ok(Weekday::Saturday),
        "sunday" => Ok(Weekday::Sunday),
        other => bail!("unknown week start day: {other:?}"),
    }
}

/// Resolves an IANA timezone name against the system database.
pub fn resolve_timezone(name: &str) -> Result<jiff::tz::TimeZone> {
    jiff::tz::TimeZone::get(name).with_context(|| format!("unknown timezone: {name:?}"))
}
