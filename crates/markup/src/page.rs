//! Page composition: render layouts, per-page fragments, document assembly.

use maandkal_calendar::{CalendarError, Locale, MonthGrid, MonthGridBuilder};

use crate::escape::escape;
use crate::month::month_table;

/// How month tables are arranged into pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// The requested month, full page, duplicated on two pages (two A5
    /// cards per printed sheet).
    MonthCard {
        /// The month to render (1..=12).
        month: u8,
    },
    /// A 2x3 scaffold of month tables per page: months 1-6 on the first
    /// page, 7-12 on the second.
    SixPerPage,
    /// One month table per page, twelve pages.
    MonthPerPage,
}

/// Composes the per-page HTML fragments for a layout.
///
/// # Errors
///
/// Propagates [`CalendarError`] from grid construction (invalid year or
/// month).
pub fn compose_pages(
    layout: Layout,
    year: i32,
    builder: &MonthGridBuilder,
    locale: Locale,
) -> Result<Vec<String>, CalendarError> {
    match layout {
        Layout::MonthCard { month } => {
            let grid = builder.build(year, month)?;
            let html = month_table(&grid, locale).to_html();
            Ok(vec![html.clone(), html])
        }
        Layout::SixPerPage => {
            let grids = year_grids(year, builder)?;
            Ok(vec![
                scaffold_page(&grids[0..6], locale),
                scaffold_page(&grids[6..12], locale),
            ])
        }
        Layout::MonthPerPage => {
            let grids = year_grids(year, builder)?;
            Ok(grids
                .iter()
                .map(|grid| month_table(grid, locale).to_html())
                .collect())
        }
    }
}

/// Builds the twelve grids of a year, January first.
fn year_grids(year: i32, builder: &MonthGridBuilder) -> Result<Vec<MonthGrid>, CalendarError> {
    (1..=12).map(|month| builder.build(year, month)).collect()
}

/// Lays six month tables out as a 2x3 `table.scaffold`.
fn scaffold_page(grids: &[MonthGrid], locale: Locale) -> String {
    let mut html = String::from("<table class=\"scaffold\">");
    for chunk in grids.chunks(3) {
        html.push_str("<tr>");
        for grid in chunk {
            html.push_str("<td>");
            html.push_str(&month_table(grid, locale).to_html());
            html.push_str("</td>");
        }
        html.push_str("</tr>");
    }
    html.push_str("</table>");
    html
}

/// Assembles the final HTML document: document-level CSS in the head, each
/// page fragment wrapped in a `div.page`.
///
/// The stylesheet is injected verbatim; its content is opaque to the core.
pub fn document(title: &str, css: &str, pages: &[String]) -> String {
    let mut html = String::from("<!DOCTYPE html><html><head>");
    html.push_str(&format!("<title>{}</title>", escape(title)));
    html.push_str(&format!("<style>{css}</style>"));
    html.push_str("</head><body>");
    for page in pages {
        html.push_str("<div class=\"page\">");
        html.push_str(page);
        html.push_str("</div>");
    }
    html.push_str("</body></html>");
    html
}
