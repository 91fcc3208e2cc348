//! Common CLI utility functions shared across commands.

use anyhow::{Context, Result};
use lbmigrate_core::MigrationConfig;

use crate::cli::Args;

/// Build the migration config: defaults, then the config file, then flags.
pub fn resolve_config(args: &Args) -> Result<MigrationConfig> {
    let mut config = match &args.config {
        Some(path) => MigrationConfig::load(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => MigrationConfig::default(),
    };

    if let Some(url) = &args.redis_url {
        config.redis_url = Some(url.clone());
    }
    if let Some(input) = &args.input {
        config.input = input.clone();
    }
    if let Some(key) = &args.key {
        config.key = key.clone();
    }
    if let Some(collection) = &args.collection {
        config.collection = Some(collection.clone());
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::io::Write;
    use std::path::PathBuf;

    #[test]
    fn test_defaults_without_flags() {
        let args = Args::try_parse_from(["lbmigrate", "--redis-url", "redis://h:1"]).unwrap();
        let config = resolve_config(&args).unwrap();

        assert_eq!(config.key, "tetris-leaderboard");
        assert_eq!(config.input, PathBuf::from("./tetris-leaderboard.json"));
        assert_eq!(config.redis_url.as_deref(), Some("redis://h:1"));
    }

    #[test]
    fn test_flags_override_config_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "key = \"from-file\"\ninput = \"file.json\"").unwrap();
        let path = file.path().to_str().unwrap().to_string();

        let args = Args::try_parse_from(["lbmigrate", "-c", &path, "-k", "from-flag"]).unwrap();
        let config = resolve_config(&args).unwrap();

        assert_eq!(config.key, "from-flag");
        assert_eq!(config.input, PathBuf::from("file.json"));
    }

    #[test]
    fn test_missing_config_file() {
        let args = Args::try_parse_from(["lbmigrate", "-c", "/nonexistent/lbmigrate.toml"]).unwrap();
        let err = resolve_config(&args).unwrap_err();
        assert!(err.to_string().contains("Failed to load config"));
    }
}
