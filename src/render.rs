use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::info;

use maandkal_calendar::MonthGridBuilder;
use maandkal_markup::{Layout, compose_pages, document};
use maandkal_pdf::{DocumentMeta, PageSetup, render_pdf, write_pdf};

use crate::cli::RenderArgs;
use crate::config::MaandkalConfig;
use crate::convert;

/// Default configuration path, used when `--config` is not passed.
const DEFAULT_CONFIG: &str = "maandkal.toml";

/// The requested render. The `month` subcommand's month may still need
/// resolving against the configured timezone.
#[derive(Debug)]
pub enum Request {
    /// Single month, duplicated on two pages.
    Month(Option<u8>),
    /// Six months per page over two pages.
    Compact,
    /// One month per page over twelve pages.
    Year,
}

/// Runs the render pipeline for a request.
pub fn run(request: Request, args: RenderArgs) -> Result<()> {
    // Step 1: Load configuration and parse it into API types.
    let config = load_config(args.config.as_deref())?;
    let locale = convert::parse_locale(&config.calendar.locale)?;
    let week_start = convert::parse_week_start(&config.calendar.week_start)?;
    let tz = convert::resolve_timezone(&config.calendar.timezone)?;

    // Step 2: Resolve year/month defaults from the configured timezone.
    let today = jiff::Timestamp::now().to_zoned(tz).date();
    let year = args.year.unwrap_or_else(|| i32::from(today.year()));
    let layout = match request {
        Request::Month(month) => Layout::MonthCard {
            month: month.unwrap_or(today.month() as u8),
        },
        Request::Compact => Layout::SixPerPage,
        Request::Year => Layout::MonthPerPage,
    };

    // Step 3: Build the grids and compose per-page markup.
    info!(year, ?layout, "composing calendar pages");
    let builder = MonthGridBuilder::new(week_start);
    let pages = compose_pages(layout, year, &builder, locale)?;

    // Step 4: Read the stylesheet. This happens before document
    // construction; a missing file aborts the render.
    let stylesheet = fs::read_to_string(&config.render.stylesheet).with_context(|| {
        format!(
            "failed to read stylesheet: {}",
            config.render.stylesheet.display()
        )
    })?;
    let css = format!("{} {}", PageSetup::a5_landscape().css(), stylesheet);

    // Step 5: Assemble the document and hand it to the PDF engine.
    let title = format!("Maandkalender {year}");
    let html = document(&title, &css, &pages);
    let meta = DocumentMeta {
        title: title.clone(),
        author: "maandkal".to_string(),
    };
    let bytes = render_pdf(&html, &meta)?;

    // Step 6: Write the output file.
    let output = args
        .output
        .unwrap_or_else(|| config.render.output_dir.join(format!("{title}.pdf")));
    write_pdf(&output, &bytes)?;
    info!(
        path = %output.display(),
        n_pages = pages.len(),
        "calendar written"
    );
    Ok(())
}

/// Loads the TOML configuration.
///
/// A missing file at the default path falls back to built-in defaults; an
/// explicitly passed path must exist.
fn load_config(path: Option<&Path>) -> Result<MaandkalConfig> {
    let (path, required) = match path {
        Some(p) => (p.to_path_buf(), true),
        None => (PathBuf::from(DEFAULT_CONFIG), false),
    };
    if !required && !path.exists() {
        return Ok(MaandkalConfig::default());
    }
    let toml_str = fs::read_to_string(&path)
        .with_context(|| format!("failed to read config: {}", path.display()))?;
    toml::from_str(&toml_str).context("failed to parse TOML config")
}
