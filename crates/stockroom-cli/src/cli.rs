use std::path::PathBuf;

use clap::Parser;

use crate::config::SavePolicy;

#[derive(Parser)]
#[command(
    name = "stockroom",
    about = "Stockroom: interactive shoe inventory tracker",
    version,
)]
pub struct Cli {
    /// Inventory file to load and save [default: inventory.txt]
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Currency symbol used when printing stock values [default: £]
    #[arg(long)]
    pub currency: Option<String>,

    /// Which changes are written back to the inventory file [default: restock]
    #[arg(long, value_enum)]
    pub autosave: Option<SavePolicy>,

    /// TOML file providing defaults for the options above
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[arg(short, long)]
    pub verbose: bool,

    /// Disable coloured output
    #[arg(long)]
    pub no_color: bool,
}
