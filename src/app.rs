pub mod cli;
pub mod config;
pub mod formatter;
pub mod inspector;
pub mod models;

use anyhow::Result;
use clap::Parser;
use rusqlite::{Connection, OpenFlags};

use self::cli::Cli;
use self::config::{resolve_config, AppConfig};
use self::formatter::OutputGenerator;
use self::inspector::Inspector;

// Connects, Scans, and Formats in one go.
pub fn generate_report(config: &AppConfig) -> Result<String> {
    // 1. Connect
    let conn = open_connection(config)?;

    // 2. Scan (Inspector)
    let inspector = Inspector::new(&conn);
    let table_data = inspector.scan()?;

    // 3. Format (OutputGenerator)
    let output = OutputGenerator::generate_plaintext(&table_data)?;
    tracing::debug!(bytes = output.len(), "report generated");

    Ok(output)
    // The connection drops here, on the error paths above just the same.
}

fn open_connection(config: &AppConfig) -> Result<Connection> {
    tracing::debug!(
        path = %config.database_path.display(),
        read_only = config.read_only,
        "opening SQLite database"
    );

    let conn = if config.read_only {
        Connection::open_with_flags(&config.database_path, OpenFlags::SQLITE_OPEN_READ_ONLY)?
    } else {
        // Default flags are read/write + create: a missing file becomes a
        // fresh empty database, which reports zero tables rather than erroring.
        Connection::open(&config.database_path)?
    };

    Ok(conn)
}

pub fn run() -> Result<()> {
    // 1. Parse Args
    let args = Cli::parse();

    // 2. Resolve Config
    let config = resolve_config(args);

    // 3. Generate
    match generate_report(&config) {
        // 4. Output
        Ok(report) => print!("{}", report),

        // Database-layer failures collapse into a single diagnostic line and
        // a normal exit; any other failure kind propagates unchanged.
        Err(err) => match err.downcast_ref::<rusqlite::Error>() {
            Some(db_err) => println!("An error occurred: {}", db_err),
            None => return Err(err),
        },
    }

    Ok(())
}
