//! Config command handlers

use std::path::Path;

use folio_core::config::{Config, ConfigError};
use folio_core::error::Result;

use crate::cli::args::ConfigCommand;
use crate::cli::util::load_config;

/// Handle the config command
pub fn handle_config(config_path: Option<&Path>, command: ConfigCommand) -> Result<()> {
    match command {
        ConfigCommand::Show => {
            let config = load_config(config_path)?;
            let rendered = toml_string(&config)?;
            print!("{}", rendered);
        }
        ConfigCommand::Init { force } => {
            let path = match config_path {
                Some(path) => path.to_path_buf(),
                None => Config::config_path().ok_or(ConfigError::NoConfigDir)?,
            };
            if path.exists() && !force {
                println!(
                    "Config already exists at {} (use --force to overwrite)",
                    path.display()
                );
                return Ok(());
            }
            Config::default().save_to(&path)?;
            println!("✓ Wrote default config to {}", path.display());
        }
    }
    Ok(())
}

fn toml_string(config: &Config) -> std::result::Result<String, ConfigError> {
    Ok(toml::to_string_pretty(config)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_writes_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("folio").join("config.toml");

        handle_config(Some(&path), ConfigCommand::Init { force: false }).unwrap();
        assert_eq!(Config::load_from(&path).unwrap(), Config::default());
    }

    #[test]
    fn test_init_keeps_existing_without_force() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "title = \"Mine\"\n").unwrap();

        handle_config(Some(&path), ConfigCommand::Init { force: false }).unwrap();
        assert_eq!(Config::load_from(&path).unwrap().title, "Mine");

        handle_config(Some(&path), ConfigCommand::Init { force: true }).unwrap();
        assert_eq!(Config::load_from(&path).unwrap(), Config::default());
    }

    #[test]
    fn test_show_rejects_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "title = [").unwrap();

        assert!(handle_config(Some(&path), ConfigCommand::Show).is_err());
    }

    #[test]
    fn test_defaults_render_as_toml() {
        let rendered = toml_string(&Config::default()).unwrap();
        assert!(rendered.contains("base = \"/about\""));
        assert!(rendered.contains("GooApps"));
    }
}
