//! Command-line interface for folio.

mod args;
mod config;
mod name;
mod posts;
mod shapes;
mod timeline;
mod util;

use clap::Parser;

pub use args::{Cli, Commands};

/// Parse arguments, set up logging and dispatch to a command handler.
pub fn run_cli() {
    let cli = Cli::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp_millis()
        .init();

    let result = match cli.command {
        Commands::Posts {
            dir,
            limit,
            tag,
            json,
        } => posts::handle_posts(cli.config.as_deref(), dir, limit, tag, json),
        Commands::Tags { dir } => posts::handle_tags(cli.config.as_deref(), dir),
        Commands::Feed {
            dir,
            output,
            site,
            full_content,
        } => posts::handle_feed(cli.config.as_deref(), dir, output, site, full_content),
        Commands::Timeline { year, json } => {
            timeline::handle_timeline(cli.config.as_deref(), year, json)
        }
        Commands::Shapes { seed, count } => shapes::handle_shapes(seed, count),
        Commands::Name { frames, seed } => name::handle_name(cli.config.as_deref(), frames, seed),
        Commands::Config { command } => config::handle_config(cli.config.as_deref(), command),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
