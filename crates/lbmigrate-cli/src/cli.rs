//! CLI argument definitions for lbmigrate.

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "lbmigrate")]
#[command(about = "Migrate a leaderboard JSON export into a Redis sorted set", version)]
pub struct Args {
    /// Redis connection URL, credentials included (redis:// or rediss://)
    #[arg(long, env = "LBMIGRATE_REDIS_URL", hide_env_values = true)]
    pub redis_url: Option<String>,

    /// JSON export to read (default: ./tetris-leaderboard.json)
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Destination sorted-set key (default: tetris-leaderboard)
    #[arg(short, long)]
    pub key: Option<String>,

    /// Collection name inside the export, if different from the key
    #[arg(long)]
    pub collection: Option<String>,

    /// Load settings from a TOML file; flags take precedence
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Extract and print scores without connecting to Redis
    #[arg(long)]
    pub dry_run: bool,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_no_args() {
        let args = Args::try_parse_from(["lbmigrate"]).unwrap();
        assert!(args.input.is_none());
        assert!(args.key.is_none());
        assert!(args.config.is_none());
        assert!(!args.dry_run);
        assert!(!args.json);
    }

    #[test]
    fn test_parse_all_flags() {
        let args = Args::try_parse_from([
            "lbmigrate",
            "--redis-url",
            "redis://localhost:6379",
            "-i",
            "scores.json",
            "-k",
            "board",
            "--collection",
            "scores",
            "--dry-run",
            "--json",
        ])
        .unwrap();

        assert_eq!(args.redis_url.as_deref(), Some("redis://localhost:6379"));
        assert_eq!(args.input, Some(PathBuf::from("scores.json")));
        assert_eq!(args.key.as_deref(), Some("board"));
        assert_eq!(args.collection.as_deref(), Some("scores"));
        assert!(args.dry_run);
        assert!(args.json);
    }

    #[test]
    fn test_parse_config_short() {
        let args = Args::try_parse_from(["lbmigrate", "-c", "migrate.toml"]).unwrap();
        assert_eq!(args.config, Some(PathBuf::from("migrate.toml")));
    }

    #[test]
    fn test_unknown_flag_rejected() {
        assert!(Args::try_parse_from(["lbmigrate", "--batch-size", "10"]).is_err());
    }
}
