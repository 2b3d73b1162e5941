//! CLI command definitions.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Oblique - daily oblique-strategy style questions
#[derive(Parser, Debug)]
#[command(name = "oblique")]
#[command(about = "Build the question archive and publish a daily generated question", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Rebuild the archive from an export (overwrites it)
    #[command(subcommand)]
    Extract(ExtractCommands),

    /// Generate and publish today's question
    Generate {
        /// Configuration file layered over the bundled defaults
        #[arg(long)]
        config: Option<PathBuf>,

        /// Archive file, overriding the configured path
        #[arg(long)]
        archive: Option<PathBuf>,

        /// Today file, overriding the configured path
        #[arg(long)]
        today: Option<PathBuf>,
    },
}

/// Export formats
#[derive(Subcommand, Debug)]
pub enum ExtractCommands {
    /// Zip container holding cards.xml
    Cards {
        /// Path to the export
        path: PathBuf,

        /// Archive file to write (defaults to the configured archive path)
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Tab-separated export with a header row
    Tsv {
        /// Path to the export
        path: PathBuf,

        /// Archive file to write (defaults to the configured archive path)
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// SQLite card database
    #[cfg(feature = "sqlite")]
    Db {
        /// Path to the database
        path: PathBuf,

        /// Archive file to write (defaults to the configured archive path)
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_extract_with_out() {
        let cli = Cli::try_parse_from(["oblique", "extract", "tsv", "deck.tsv", "--out", "q.json"])
            .unwrap();
        match cli.command {
            Commands::Extract(ExtractCommands::Tsv { path, out }) => {
                assert_eq!(path, PathBuf::from("deck.tsv"));
                assert_eq!(out, Some(PathBuf::from("q.json")));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_generate_with_global_flags() {
        let cli = Cli::try_parse_from(["oblique", "generate", "--config", "o.toml", "-v", "--json-logs"])
            .unwrap();
        assert!(cli.verbose);
        assert!(cli.json_logs);
        assert!(matches!(
            cli.command,
            Commands::Generate { config: Some(_), archive: None, today: None }
        ));
    }

    #[test]
    fn test_extract_requires_path() {
        assert!(Cli::try_parse_from(["oblique", "extract", "cards"]).is_err());
        assert!(Cli::try_parse_from(["oblique", "extract", "xml", "a"]).is_err());
    }
}
