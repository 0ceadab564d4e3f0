// Theme system for the TUI
//
// - TomlTheme: on-disk format with explicit page colors
// - Theme: resolved colors ready for drawing
//
// Theme loading priority:
// 1. External TOML themes from ~/.config/daizy/themes/*.toml
// 2. Bundled themes (compiled in, extracted on first run)
// 3. Daizy Dark

mod bundled;
mod toml_format;

pub use toml_format::TomlTheme;

use crate::site::content::Accent;
use ratatui::style::Color;
use ratatui::widgets::BorderType;
use std::path::{Path, PathBuf};

/// Theme configuration options
#[derive(Debug, Clone)]
pub struct ThemeConfig {
    /// Use theme's background color (true) or terminal's default (false)
    pub use_theme_background: bool,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            use_theme_background: true,
        }
    }
}

/// Complete resolved theme ready for use in the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,

    // ─── Page ────────────────────────────────────────────────
    pub background: Color,
    pub surface: Color,
    pub foreground: Color,
    pub muted: Color,
    pub border: Color,
    pub backdrop: Color,
    pub border_type: BorderType,

    // ─── Accents ─────────────────────────────────────────────
    /// Cursor, trail, call-to-action hover
    pub electric: Color,
    pub green: Color,
    pub blue: Color,
    pub error: Color,
}

impl Theme {
    /// Load theme by name with default configuration
    pub fn by_name(name: &str) -> Self {
        Self::by_name_with_config(name, &ThemeConfig::default())
    }

    /// Load theme by name, falling back to Daizy Dark for unknown names
    pub fn by_name_with_config(name: &str, config: &ThemeConfig) -> Self {
        if let Some(theme) = Self::find(name, config) {
            return theme;
        }

        tracing::warn!(
            theme = name,
            available = ?Self::list_available(),
            "Unknown theme, using {}",
            crate::config::DEFAULT_THEME
        );
        Self::find(crate::config::DEFAULT_THEME, config)
            .unwrap_or_else(|| Self::hardcoded_default(config))
    }

    /// External file first, then bundled
    pub fn find(name: &str, config: &ThemeConfig) -> Option<Self> {
        Self::load_external(name)
            .or_else(|| Self::load_bundled(name))
            .map(|toml| Self::from_toml(toml, config))
    }

    fn load_external(name: &str) -> Option<TomlTheme> {
        Self::load_from_dir(&Self::themes_dir()?, name)
    }

    /// `<name>.toml` or `<name_with_underscores>.toml` inside `dir`
    fn load_from_dir(dir: &Path, name: &str) -> Option<TomlTheme> {
        let normalized = name.replace(' ', "_");

        let found = [name, normalized.as_str()].into_iter().find_map(|stem| {
            let path = dir.join(format!("{}.toml", stem));
            let contents = std::fs::read_to_string(&path).ok()?;
            match TomlTheme::from_str(&contents) {
                Ok(theme) => Some(theme),
                Err(e) => {
                    tracing::warn!(
                        path = %path.display(),
                        error = %e,
                        "Skipping unreadable theme file"
                    );
                    None
                }
            }
        });
        found
    }

    fn load_bundled(name: &str) -> Option<TomlTheme> {
        let filename = format!("{}.toml", name.replace(' ', "_"));
        bundled::BUNDLED_THEMES
            .iter()
            .find(|t| t.filename.eq_ignore_ascii_case(&filename))
            .and_then(|t| TomlTheme::from_str(t.content).ok())
    }

    /// ~/.config/daizy/themes
    fn themes_dir() -> Option<PathBuf> {
        crate::config::Config::config_dir().map(|d| d.join("themes"))
    }

    fn parse_border_type(value: Option<&str>) -> BorderType {
        match value {
            Some("rounded") => BorderType::Rounded,
            Some("double") => BorderType::Double,
            Some("thick") => BorderType::Thick,
            _ => BorderType::Plain,
        }
    }

    fn from_toml(toml: TomlTheme, config: &ThemeConfig) -> Self {
        let parse = TomlTheme::parse_color;

        let background = if config.use_theme_background {
            parse(&toml.ui.background)
        } else {
            Color::Reset
        };
        let surface = if config.use_theme_background {
            parse(&toml.ui.surface)
        } else {
            Color::Reset
        };

        Self {
            name: toml.meta.name,
            background,
            surface,
            foreground: parse(&toml.ui.foreground),
            muted: parse(&toml.ui.muted),
            border: parse(&toml.ui.border),
            backdrop: toml
                .ui
                .backdrop
                .as_deref()
                .map(parse)
                .unwrap_or(background),
            border_type: Self::parse_border_type(toml.ui.border_type.as_deref()),
            electric: parse(&toml.accents.electric),
            green: parse(&toml.accents.green),
            blue: parse(&toml.accents.blue),
            error: parse(&toml.accents.error),
        }
    }

    /// Used only if the bundled Daizy Dark somehow fails to parse
    fn hardcoded_default(config: &ThemeConfig) -> Self {
        let (background, surface) = if config.use_theme_background {
            (Color::Rgb(10, 10, 10), Color::Rgb(26, 26, 26))
        } else {
            (Color::Reset, Color::Reset)
        };

        Self {
            name: "Daizy Dark (Fallback)".to_string(),
            background,
            surface,
            foreground: Color::White,
            muted: Color::Gray,
            border: Color::DarkGray,
            backdrop: background,
            border_type: BorderType::Plain,
            electric: Color::Rgb(0, 191, 255),
            green: Color::LightGreen,
            blue: Color::LightBlue,
            error: Color::LightRed,
        }
    }

    /// Color for a service column heading
    pub fn accent(&self, accent: Accent) -> Color {
        match accent {
            Accent::Green => self.green,
            Accent::Blue => self.blue,
            Accent::Electric => self.electric,
        }
    }

    /// List all available themes (bundled + external)
    pub fn list_available() -> Vec<String> {
        let mut themes = bundled::list_bundled_themes();

        if let Some(dir) = Self::themes_dir() {
            if let Ok(entries) = std::fs::read_dir(dir) {
                for entry in entries.flatten() {
                    let path = entry.path();
                    if path.extension().is_some_and(|ext| ext == "toml") {
                        if let Some(stem) = path.file_stem() {
                            let display = stem.to_string_lossy().replace('_', " ");
                            if !themes.iter().any(|t| t.eq_ignore_ascii_case(&display)) {
                                themes.push(display);
                            }
                        }
                    }
                }
            }
        }

        themes
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::by_name(crate::config::DEFAULT_THEME)
    }
}

/// Write bundled themes to ~/.config/daizy/themes if they are not there yet
pub fn ensure_themes_extracted() {
    let Some(themes_dir) = Theme::themes_dir() else {
        return;
    };

    if std::fs::create_dir_all(&themes_dir).is_err() {
        return;
    }

    for theme in bundled::BUNDLED_THEMES {
        let path = themes_dir.join(theme.filename);
        // Never overwrite user edits
        if !path.exists() {
            let _ = std::fs::write(&path, theme.content);
        }
    }
}
