//! `folio`: command-line access to the portfolio's blog content and timeline.

/// CLI module - argument parsing and command handlers
mod cli;

fn main() {
    cli::run_cli();
}
