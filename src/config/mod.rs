//! Configuration for the site
//!
//! Configuration is loaded in order of precedence:
//! 1. Environment variables (highest priority)
//! 2. Config file (~/.config/daizy/config.toml)
//! 3. Built-in defaults (lowest priority)

use serde::Deserialize;
use std::path::PathBuf;

// ─────────────────────────────────────────────────────────────────────────────
// Submodules
// ─────────────────────────────────────────────────────────────────────────────

mod assets;
mod motion;
mod observability;
mod serialization;

#[cfg(test)]
mod tests;

// ─────────────────────────────────────────────────────────────────────────────
// Re-exports
// ─────────────────────────────────────────────────────────────────────────────

pub use assets::{AssetsConfig, FileAssets};
pub use motion::{FileMotion, MotionConfig};
pub use observability::{FileLogging, LogRotation, LoggingConfig};

// ─────────────────────────────────────────────────────────────────────────────
// Constants
// ─────────────────────────────────────────────────────────────────────────────

/// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Theme used when nothing else is configured
pub const DEFAULT_THEME: &str = "Daizy Dark";

// ─────────────────────────────────────────────────────────────────────────────
// Application Configuration
// ─────────────────────────────────────────────────────────────────────────────

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Theme name: "Daizy Dark", "Daizy Mono", or a file in ~/.config/daizy/themes
    pub theme: String,

    /// Paint the theme background (true) or keep the terminal's own (false)
    pub use_theme_background: bool,

    /// Play the scripted pointer tour
    pub demo_mode: bool,

    /// Animation tuning
    pub motion: MotionConfig,

    /// Background image fetching
    pub assets: AssetsConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: DEFAULT_THEME.to_string(),
            use_theme_background: true,
            demo_mode: false,
            motion: MotionConfig::default(),
            assets: AssetsConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// File Configuration (deserialization layer)
// ─────────────────────────────────────────────────────────────────────────────

/// Config file structure
#[derive(Debug, Deserialize, Default)]
pub(crate) struct FileConfig {
    pub theme: Option<String>,
    pub use_theme_background: Option<bool>,

    /// Optional [motion] section
    pub motion: Option<FileMotion>,

    /// Optional [assets] section
    pub assets: Option<FileAssets>,

    /// Optional [logging] section
    pub logging: Option<FileLogging>,
}

/// Truthy env flag: "1" or "true" (any case)
fn env_flag(name: &str) -> Option<bool> {
    std::env::var(name)
        .ok()
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
}

// ─────────────────────────────────────────────────────────────────────────────
// Configuration Loading
// ─────────────────────────────────────────────────────────────────────────────

impl Config {
    /// Get the config file path: ~/.config/daizy/config.toml
    /// Uses Unix-style ~/.config on all platforms for consistency
    pub fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|p| p.join("config.toml"))
    }

    /// ~/.config/daizy (also holds user themes)
    pub fn config_dir() -> Option<PathBuf> {
        dirs::home_dir().map(|p| p.join(".config").join("daizy"))
    }

    /// Create config file with defaults if it doesn't exist
    pub fn ensure_config_exists() {
        let Some(path) = Self::config_path() else {
            return;
        };

        if path.exists() {
            return;
        }

        if let Some(parent) = path.parent() {
            if std::fs::create_dir_all(parent).is_err() {
                return; // config is optional
            }
        }

        let _ = std::fs::write(&path, Self::default().to_toml());
    }

    /// Load file config if it exists
    ///
    /// A config file that exists but does not parse ends the process with a
    /// boxed error message and exit code 1.
    fn load_file_config() -> FileConfig {
        let Some(path) = Self::config_path() else {
            return FileConfig::default();
        };

        match std::fs::read_to_string(&path) {
            Ok(contents) => match Self::parse_file_config(&contents) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("\n╔══════════════════════════════════════════════════════════════╗");
                    eprintln!("║  CONFIG ERROR - Failed to parse configuration file          ║");
                    eprintln!("╚══════════════════════════════════════════════════════════════╝\n");
                    eprintln!("  File: {}\n", path.display());
                    eprintln!("  Error: {}\n", e);
                    eprintln!("  Tip: Check for:\n");
                    eprintln!("    - Missing quotes around string values");
                    eprintln!("    - Invalid boolean values (use true/false)");
                    eprintln!("    - Numbers written as strings in [motion]");
                    eprintln!("    - Typos in section names\n");
                    eprintln!("  To reset, run `daizy config --reset`.\n");
                    std::process::exit(1);
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => FileConfig::default(),
            Err(e) => {
                eprintln!("\n╔══════════════════════════════════════════════════════════════╗");
                eprintln!("║  CONFIG ERROR - Cannot read configuration file              ║");
                eprintln!("╚══════════════════════════════════════════════════════════════╝\n");
                eprintln!("  File: {}\n", path.display());
                eprintln!("  Error: {}\n", e);
                std::process::exit(1);
            }
        }
    }

    pub(crate) fn parse_file_config(contents: &str) -> Result<FileConfig, toml::de::Error> {
        toml::from_str(contents)
    }

    /// Merge a parsed file over the defaults (no env lookups)
    pub(crate) fn from_file_config(file: FileConfig) -> Self {
        let defaults = Self::default();
        Self {
            theme: file.theme.unwrap_or(defaults.theme),
            use_theme_background: file
                .use_theme_background
                .unwrap_or(defaults.use_theme_background),
            demo_mode: defaults.demo_mode,
            motion: MotionConfig::from_file(file.motion),
            assets: AssetsConfig::from_file(file.assets),
            logging: LoggingConfig::from_file(file.logging),
        }
    }

    /// Load configuration: env vars -> file -> defaults
    pub fn from_env() -> Self {
        let mut config = Self::from_file_config(Self::load_file_config());

        // Theme: env > file > default
        if let Ok(theme) = std::env::var("DAIZY_THEME") {
            config.theme = theme;
        }

        // Demo mode: env only (runtime flag)
        config.demo_mode = env_flag("DAIZY_DEMO").unwrap_or(false);

        // Asset fetching: env > file > default
        if let Some(fetch) = env_flag("DAIZY_FETCH_ASSETS") {
            config.assets.fetch = fetch;
        }

        config
    }
}
