mod cli;
mod config;
mod convert;
mod logging;
mod render;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};
use crate::render::Request;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Month(args) => render::run(Request::Month(args.month), args.render),
        Command::Compact(args) => render::run(Request::Compact, args),
        Command::Year(args) => render::run(Request::Year, args),
    }
}
