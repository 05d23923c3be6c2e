use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Optional path to the SQLite database file. If not provided, looks for DATABASE_PATH env var.
    #[arg(short, long)]
    pub database: Option<PathBuf>,

    /// Open the database read-only instead of the default read/write mode.
    #[arg(long)]
    pub read_only: bool,
}
