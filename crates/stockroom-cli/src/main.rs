use std::io;

use clap::Parser;
use tracing::Level;

mod cli;
mod config;
mod console;
mod menu;
mod session;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    let level = if cli.verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();

    if cli.no_color {
        colored::control::set_override(false);
    }

    let config = config::StockroomConfig::resolve(&cli)?;
    let console = console::Console::new(io::stdin().lock(), io::stdout());
    let mut session = session::Session::open(config, console)?;
    session.run()
}
