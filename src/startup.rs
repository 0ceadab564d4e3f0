// Startup module - banner and subsystem status
//
// Printed to stdout before the alternate screen takes over, and echoed
// into the log viewer so the boot sequence is visible from inside the app.

use crate::config::{Config, VERSION};

/// ANSI color codes for terminal output
mod colors {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
}

/// One line of the boot report
#[derive(Debug, Clone, PartialEq)]
pub struct ModuleStatus {
    pub name: &'static str,
    pub enabled: bool,
    pub description: String,
}

fn module_status(config: &Config) -> Vec<ModuleStatus> {
    let mut modules = vec![
        ModuleStatus {
            name: "theme",
            enabled: true,
            description: config.theme.clone(),
        },
        ModuleStatus {
            name: "assets",
            enabled: config.assets.fetch,
            description: if config.assets.fetch {
                format!("Fetching images ({}s timeout)", config.assets.timeout_secs)
            } else {
                "Offline (images assumed loaded)".to_string()
            },
        },
        ModuleStatus {
            name: "file-log",
            enabled: config.logging.file_enabled,
            description: if config.logging.file_enabled {
                format!(
                    "{} ({})",
                    config.logging.file_dir.display(),
                    config.logging.file_rotation.as_str()
                )
            } else {
                "JSON log files".to_string()
            },
        },
    ];

    if config.demo_mode {
        modules.push(ModuleStatus {
            name: "demo",
            enabled: true,
            description: "Scripted pointer tour".to_string(),
        });
    }

    modules
}

/// Print the banner and subsystem status before the TUI starts
pub fn print_startup(config: &Config) {
    use colors::*;

    println!();
    println!("  {BOLD}ENDofDAIZY{RESET} {DIM}v{VERSION}{RESET}");
    println!("  {DIM}Design studio, terminal edition{RESET}");
    println!();

    if let Some(path) = Config::config_path() {
        if path.exists() {
            println!("  {DIM}Config:{RESET} {GREEN}✓{RESET} {}", path.display());
        } else {
            println!("  {DIM}Config:{RESET} {DIM}(using defaults){RESET}");
        }
    }
    println!();

    for module in module_status(config) {
        let (icon, style) = if module.enabled {
            (format!("{GREEN}✓{RESET}"), "")
        } else {
            (format!("{DIM}○{RESET}"), DIM)
        };
        println!(
            "    {icon} {style}{:<10}{RESET} {DIM}{}{RESET}",
            module.name, module.description
        );
    }

    if config.demo_mode {
        println!();
        println!("  {YELLOW}▸ Demo mode active{RESET}");
    }
    println!();
}

/// Same report into the log viewer
pub fn log_startup(config: &Config) {
    tracing::info!("ENDofDAIZY v{}", VERSION);
    for module in module_status(config) {
        let icon = if module.enabled { "✓" } else { "○" };
        tracing::info!("  {} {} - {}", icon, module.name, module.description);
    }
    tracing::info!(
        frame_ms = config.motion.frame_ms,
        trail = config.motion.trail_length,
        "Ready"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_only_listed_when_active() {
        let mut config = Config::default();
        assert!(!module_status(&config).iter().any(|m| m.name == "demo"));
        config.demo_mode = true;
        assert!(module_status(&config).iter().any(|m| m.name == "demo"));
    }

    #[test]
    fn offline_assets_show_as_disabled() {
        let mut config = Config::default();
        config.assets.fetch = false;
        let assets = module_status(&config)
            .into_iter()
            .find(|m| m.name == "assets")
            .unwrap();
        assert!(!assets.enabled);
        assert!(assets.description.starts_with("Offline"));
    }
}
