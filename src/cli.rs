// CLI module - command-line argument parsing and handlers
//
// `daizy` with no subcommand opens the site. Run-time overrides:
// - --demo: play the scripted pointer tour
// - --theme <name>: pick a theme for this run
//
// Subcommands:
// - config --show: Display effective configuration
// - config --path: Print the config file location
// - config --reset: Regenerate config file with defaults

use crate::config::{Config, VERSION};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::Write;

/// ENDofDAIZY - the studio site, in your terminal
#[derive(Parser, Debug)]
#[command(name = "daizy")]
#[command(version = VERSION)]
#[command(about = "The ENDofDAIZY studio site as a terminal app", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Play a scripted tour of the page
    #[arg(long)]
    pub demo: bool,

    /// Theme for this run (overrides config and DAIZY_THEME)
    #[arg(long, value_name = "NAME")]
    pub theme: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage configuration
    Config {
        /// Show effective configuration
        #[arg(long)]
        show: bool,

        /// Show config file path
        #[arg(long)]
        path: bool,

        /// Reset config file to defaults
        #[arg(long)]
        reset: bool,
    },
}

impl Cli {
    /// Fold run-time flags into the loaded config
    pub fn apply(&self, config: &mut Config) {
        if self.demo {
            config.demo_mode = true;
        }
        if let Some(theme) = &self.theme {
            config.theme = theme.clone();
        }
    }
}

/// Handle CLI subcommands. Returns true if one ran (exit after).
pub fn handle_command(cli: &Cli) -> Result<bool> {
    let Some(Commands::Config { show, path, reset }) = &cli.command else {
        return Ok(false);
    };

    if *path {
        handle_config_path()?;
    } else if *show {
        handle_config_show();
    } else if *reset {
        handle_config_reset()?;
    } else {
        println!("Usage: daizy config [--show|--path|--reset]");
        println!();
        println!("Options:");
        println!("  --show    Display effective configuration");
        println!("  --path    Show config file path");
        println!("  --reset   Reset config file to defaults");
    }
    Ok(true)
}

fn handle_config_path() -> Result<()> {
    let path = Config::config_path().context("Could not determine config path")?;
    println!("{}", path.display());
    Ok(())
}

fn handle_config_show() {
    let config = Config::from_env();

    println!("# Effective configuration (env > file > defaults)");
    println!();
    print!("{}", config.to_toml());

    println!();
    if let Some(path) = Config::config_path() {
        if path.exists() {
            println!("# Source: {}", path.display());
        } else {
            println!("# Source: defaults (no config file)");
        }
    }
}

fn handle_config_reset() -> Result<()> {
    let path = Config::config_path().context("Could not determine config path")?;

    if path.exists() {
        eprint!(
            "Config file exists at {}. Overwrite? [y/N] ",
            path.display()
        );
        std::io::stderr().flush().context("Failed to flush prompt")?;

        let mut input = String::new();
        std::io::stdin()
            .read_line(&mut input)
            .context("Failed to read answer")?;

        if !input.trim().eq_ignore_ascii_case("y") {
            println!("Aborted.");
            return Ok(());
        }
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }

    std::fs::write(&path, Config::default().to_toml())
        .with_context(|| format!("Failed to write {}", path.display()))?;

    println!("Config reset to defaults: {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_invocation_runs_the_site() {
        let cli = Cli::try_parse_from(["daizy"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.demo);
        assert!(cli.theme.is_none());
    }

    #[test]
    fn run_flags_override_config() {
        let cli = Cli::try_parse_from(["daizy", "--demo", "--theme", "Daizy Mono"]).unwrap();
        let mut config = Config::default();
        cli.apply(&mut config);
        assert!(config.demo_mode);
        assert_eq!(config.theme, "Daizy Mono");
    }

    #[test]
    fn config_subcommand_parses_flags() {
        let cli = Cli::try_parse_from(["daizy", "config", "--path"]).unwrap();
        match cli.command {
            Some(Commands::Config { path, show, reset }) => {
                assert!(path);
                assert!(!show && !reset);
            }
            None => panic!("expected config subcommand"),
        }
    }

    #[test]
    fn unknown_flag_is_rejected() {
        assert!(Cli::try_parse_from(["daizy", "--edit"]).is_err());
    }
}
