//! Bundled TOML themes (compiled into binary, extracted on first run)
//!
//! Written to ~/.config/daizy/themes/ on first run so users have a starting
//! point to copy and edit.

mod daizy_dark;
mod daizy_mono;

/// Bundled theme: file name and TOML content
pub struct BundledTheme {
    pub filename: &'static str,
    pub content: &'static str,
}

pub const BUNDLED_THEMES: &[BundledTheme] = &[
    BundledTheme {
        filename: "Daizy_Dark.toml",
        content: daizy_dark::THEME,
    },
    BundledTheme {
        filename: "Daizy_Mono.toml",
        content: daizy_mono::THEME,
    },
];

/// Display names of the bundled themes
pub fn list_bundled_themes() -> Vec<String> {
    BUNDLED_THEMES
        .iter()
        .map(|t| t.filename.trim_end_matches(".toml").replace('_', " "))
        .collect()
}
