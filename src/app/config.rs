use crate::app::cli::Cli;
use std::env;
use std::path::PathBuf;

/// Used when neither --database nor DATABASE_PATH is given.
pub const DEFAULT_DATABASE_PATH: &str = "data/ICAR Collective.db";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_path: PathBuf,
    pub read_only: bool,
}

pub fn resolve_config(cli: Cli) -> AppConfig {
    // Load environment variables from .env file if present
    dotenvy::dotenv().ok();

    let database_path = cli
        .database
        .or_else(|| env::var_os("DATABASE_PATH").map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DATABASE_PATH));

    AppConfig {
        database_path,
        read_only: cli.read_only,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_flag_takes_precedence() {
        let cli = Cli {
            database: Some(PathBuf::from("/tmp/override.db")),
            read_only: true,
        };

        let config = resolve_config(cli);
        assert_eq!(config.database_path, PathBuf::from("/tmp/override.db"));
        assert!(config.read_only);
    }

    #[test]
    fn falls_back_to_default_path() {
        env::remove_var("DATABASE_PATH");
        let cli = Cli {
            database: None,
            read_only: false,
        };

        let config = resolve_config(cli);
        assert_eq!(config.database_path, PathBuf::from(DEFAULT_DATABASE_PATH));
        assert!(!config.read_only);
    }
}
