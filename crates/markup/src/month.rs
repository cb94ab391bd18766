//! Month table assembly: a `MonthGrid` rendered into the typed table model.

use maandkal_calendar::{Locale, MonthGrid};

use crate::table::{Cell, Row, Table};

/// Renders a month grid as a `table.month`.
///
/// Layout: a title row spanning all columns (localized month name + year),
/// a `week` header row (`wk` label + one ISO week number per grid row,
/// zero-padded to two digits), then one row per weekday with the weeks as
/// columns. Day cells outside the target month are blank.
pub fn month_table(grid: &MonthGrid, locale: Locale) -> Table {
    let mut table = Table::new("month");

    let mut title = Row::with_class("title");
    title.push(Cell::header_span(
        format!("{} {}", locale.month_name(grid.month()), grid.year()),
        7,
    ));
    table.push(title);

    let mut week = Row::with_class("week");
    week.push(Cell::header("wk"));
    for row in grid.rows() {
        week.push(Cell::data(format!("{:02}", row.week_number())));
    }
    table.push(week);

    // One output row per weekday position; the grid's week rows become
    // columns.
    for day_ix in 0..7 {
        let weekday = grid.rows()[0].days()[day_ix].weekday();
        let mut out = Row::new();
        out.push(Cell::header(locale.weekday_abbrev(weekday)));
        for week_row in grid.rows() {
            let date = week_row.days()[day_ix];
            if grid.contains(date) {
                out.push(Cell::data(date.day().to_string()));
            } else {
                out.push(Cell::Blank);
            }
        }
        table.push(out);
    }

    table
}
