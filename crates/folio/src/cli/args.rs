//! Argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Blog content and career timeline for the folio portfolio site
#[derive(Debug, Parser)]
#[command(name = "folio", version, about)]
pub struct Cli {
    /// Config file (defaults to ~/.config/folio/config.toml)
    #[arg(long, global = true, env = "FOLIO_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List published posts, newest first
    Posts {
        /// Content directory (overrides config)
        #[arg(long)]
        dir: Option<PathBuf>,

        /// Show at most this many posts
        #[arg(long)]
        limit: Option<usize>,

        /// Only posts with this tag
        #[arg(long)]
        tag: Option<String>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// List every tag used by published posts
    Tags {
        /// Content directory (overrides config)
        #[arg(long)]
        dir: Option<PathBuf>,
    },

    /// Generate the RSS feed
    Feed {
        /// Content directory (overrides config)
        #[arg(long)]
        dir: Option<PathBuf>,

        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Site URL (overrides config)
        #[arg(long)]
        site: Option<String>,

        /// Include rendered post bodies (requires the `markdown` feature)
        #[arg(long)]
        full_content: bool,
    },

    /// Show the career timeline for a year
    Timeline {
        /// Year to select (defaults to the configured initial year)
        #[arg(long)]
        year: Option<i32>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Print one generated set of background shapes as JSON
    Shapes {
        /// Seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,

        /// Number of shapes
        #[arg(long)]
        count: Option<usize>,
    },

    /// Play the name highlight animation in the terminal
    Name {
        /// Number of frames to print
        #[arg(long, default_value_t = 5)]
        frames: u32,

        /// Seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Manage the config file
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Print the effective configuration
    Show,

    /// Write a default config file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}
