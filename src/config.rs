use std::path::PathBuf;

use serde::Deserialize;

/// Top-level maandkal configuration.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct MaandkalConfig {
    /// Calendar settings.
    #[serde(default)]
    pub calendar: CalendarToml,

    /// Render settings.
    #[serde(default)]
    pub render: RenderToml,
}

/// The `[calendar]` section.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CalendarToml {
    /// Output language: "nl" (default) or "en".
    #[serde(default = "default_locale")]
    pub locale: String,

    /// IANA timezone used to resolve the current year and month defaults.
    #[serde(default = "default_timezone")]
    pub timezone: String,

    /// First day of the week, by English name.
    #[serde(default = "default_week_start")]
    pub week_start: String,
}

impl Default for CalendarToml {
    fn default() -> Self {
        Self {
            locale: default_locale(),
            timezone: default_timezone(),
            week_start: default_week_start(),
        }
    }
}

fn default_locale() -> String {
    "nl".to_string()
}
fn default_timezone() -> String {
    "Europe/Amsterdam".to_string()
}
fn default_week_start() -> String {
    "monday".to_string()
}

/// The `[render]` section.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RenderToml {
    /// Stylesheet injected into the rendered document.
    #[serde(default = "default_stylesheet")]
    pub stylesheet: PathBuf,

    /// Directory the output PDF is written to.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
}

impl Default for RenderToml {
    fn default() -> Self {
        Self {
            stylesheet: default_stylesheet(),
            output_dir: default_output_dir(),
        }
    }
}

fn default_stylesheet() -> PathBuf {
    PathBuf::from("style.css")
}
fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}
