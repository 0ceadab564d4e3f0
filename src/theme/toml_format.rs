// TOML theme format parser
//
// Each theme names its page colors explicitly. Format version: 1

use ratatui::style::Color;
use serde::Deserialize;

/// Root structure for TOML theme files
#[derive(Debug, Clone, Deserialize)]
pub struct TomlTheme {
    pub meta: ThemeMeta,
    pub ui: UiColors,
    pub accents: AccentColors,
}

/// Theme metadata
#[derive(Debug, Clone, Deserialize)]
pub struct ThemeMeta {
    pub name: String,
    pub version: u32,
    #[serde(default)]
    pub author: Option<String>,
}

/// Page chrome
#[derive(Debug, Clone, Deserialize)]
pub struct UiColors {
    pub background: String,
    /// Cards, nav bar and modal panel
    pub surface: String,
    pub foreground: String,
    pub muted: String,
    pub border: String,
    /// Dimmed backdrop behind an open modal (falls back to background)
    pub backdrop: Option<String>,
    /// "plain", "rounded", "double", "thick" (default: plain)
    pub border_type: Option<String>,
}

/// Accent colors used by buttons, service columns and the cursor
#[derive(Debug, Clone, Deserialize)]
pub struct AccentColors {
    pub electric: String,
    pub green: String,
    pub blue: String,
    pub error: String,
}

impl TomlTheme {
    pub fn from_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Parse a color string to ratatui Color
    ///
    /// Supports `#RRGGBB` and `ansi:0-15` / `ansi:fg` / `ansi:bg` for
    /// terminal-native colors. Anything else is white.
    pub fn parse_color(value: &str) -> Color {
        if let Some(ansi) = value.strip_prefix("ansi:") {
            return match ansi {
                "0" => Color::Black,
                "1" => Color::Red,
                "2" => Color::Green,
                "3" => Color::Yellow,
                "4" => Color::Blue,
                "5" => Color::Magenta,
                "6" => Color::Cyan,
                "7" => Color::White,
                "8" => Color::DarkGray,
                "9" => Color::LightRed,
                "10" => Color::LightGreen,
                "11" => Color::LightYellow,
                "12" => Color::LightBlue,
                "13" => Color::LightMagenta,
                "14" => Color::LightCyan,
                "15" => Color::Gray,
                "fg" | "bg" => Color::Reset,
                _ => Color::White,
            };
        }

        let hex = value.trim_start_matches('#');
        if hex.len() != 6 || !hex.is_ascii() {
            return Color::White;
        }
        let channel =
            |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).unwrap_or(255);
        Color::Rgb(channel(0..2), channel(2..4), channel(4..6))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_color() {
        assert_eq!(TomlTheme::parse_color("#00BFFF"), Color::Rgb(0, 191, 255));
        assert_eq!(TomlTheme::parse_color("1a1a1a"), Color::Rgb(26, 26, 26));
        assert_eq!(TomlTheme::parse_color("ansi:14"), Color::LightCyan);
        assert_eq!(TomlTheme::parse_color("ansi:bg"), Color::Reset);
        assert_eq!(TomlTheme::parse_color("blue"), Color::White);
        assert_eq!(TomlTheme::parse_color("#ééé"), Color::White);
    }

    #[test]
    fn test_parse_theme() {
        let toml = r##"
[meta]
name = "Paper"
version = 1

[ui]
background = "#ffffff"
surface = "#f3f3f3"
foreground = "#111111"
muted = "#666666"
border = "#dddddd"

[accents]
electric = "#0077cc"
green = "#118833"
blue = "#2255aa"
error = "#cc2222"
"##;

        let theme = TomlTheme::from_str(toml).unwrap();
        assert_eq!(theme.meta.name, "Paper");
        assert_eq!(theme.meta.version, 1);
        assert!(theme.meta.author.is_none());
        assert!(theme.ui.backdrop.is_none());
        assert_eq!(theme.accents.electric, "#0077cc");
    }

    #[test]
    fn test_missing_section_is_an_error() {
        let toml = r##"
[meta]
name = "Broken"
version = 1
"##;
        assert!(TomlTheme::from_str(toml).is_err());
    }
}
