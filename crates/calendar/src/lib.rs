//! # maandkal-calendar
//!
//! Pure Gregorian date arithmetic and month-grid construction.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["Date (y, m, d)"] -->|".offset(days)"| A
//!     A -->|".weekday()"| B["Weekday"]
//!     A -->|"iso_week()"| C["IsoWeek"]
//!     D["MonthGridBuilder"] -->|".build(year, month)"| E["MonthGrid"]
//!     E -->|".rows()"| F["WeekRow (week label + 7 days)"]
//!     G["Locale"] -->|".month_name() / .weekday_abbrev()"| H["display strings"]
//! ```
//!
//! ## Quick Start
//!
//! ```ignore
//! use maandkal_calendar::{Date, MonthGridBuilder, Weekday, iso_week};
//!
//! // Date arithmetic
//! let first = Date::new(2024, 2, 1)?; // a Thursday
//! assert_eq!(first.weekday(), Weekday::Thursday);
//! assert_eq!(first.offset(-3), Date::new(2024, 1, 29)?);
//!
//! // ISO week numbering
//! assert_eq!(iso_week(Date::new(2021, 1, 1)?).week, 53);
//!
//! // Month grids: 6 week rows covering the month
//! let grid = MonthGridBuilder::default().build(2024, 2)?;
//! assert_eq!(grid.rows().len(), 6);
//! assert_eq!(grid.rows()[0].days()[0], Date::new(2024, 1, 29)?);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `date` | Gregorian date with rata-die offset arithmetic |
//! | `weekday` | Weekday enum with Monday-based indexing |
//! | `iso_week` | ISO-8601 week numbering |
//! | `grid` | Week rows and the month-grid builder |
//! | `locale` | Month names and weekday abbreviations |
//! | `tables` | Month-length and ordinal lookup tables |
//! | `error` | Error types |

mod date;
mod error;
mod grid;
mod iso_week;
mod locale;
mod tables;
mod weekday;

pub use date::Date;
pub use error::CalendarError;
pub use grid::{MonthGrid, MonthGridBuilder, WEEKS_PER_GRID, WeekRow, YEAR_RANGE};
pub use iso_week::{IsoWeek, iso_week};
pub use locale::Locale;
pub use tables::{days_in_month, is_leap_year};
pub use weekday::Weekday;
