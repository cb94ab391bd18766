use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Maandkal printable calendar generator.
#[derive(Parser)]
#[command(
    name = "maandkal",
    version,
    about = "Printable month/week calendar PDF generator"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Render a single month, duplicated on two A5 pages.
    Month(MonthArgs),
    /// Render the whole year, six months per page over two pages.
    Compact(RenderArgs),
    /// Render the whole year, one month per page over twelve pages.
    Year(RenderArgs),
}

/// Arguments shared by all render subcommands.
#[derive(clap::Args)]
pub struct RenderArgs {
    /// Year to render (defaults to the current year in the configured
    /// timezone).
    #[arg(short, long)]
    pub year: Option<i32>,

    /// Path to TOML configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override the output PDF path.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the `month` subcommand.
#[derive(clap::Args)]
pub struct MonthArgs {
    /// Month to render, 1-12 (defaults to the current month in the
    /// configured timezone).
    #[arg(short, long)]
    pub month: Option<u8>,

    /// Shared render arguments.
    #[command(flatten)]
    pub render: RenderArgs,
}
