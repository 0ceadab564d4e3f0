//! Config serialization to TOML
//!
//! Single source of truth for config file format.

use super::Config;

impl Config {
    /// Serialize config to TOML format (used for the first-run template and `config --show`)
    pub fn to_toml(&self) -> String {
        let fallback = self.assets.background_fallback.as_deref().unwrap_or("");

        format!(
            r#"# daizy configuration

# Theme: "Daizy Dark", "Daizy Mono", or the name of a file in ~/.config/daizy/themes
theme = "{theme}"

# Use theme's background color (true) or terminal's default (false)
use_theme_background = {use_bg}

# Animation tuning
[motion]
trail_length = {trail_length}
reveal_threshold = {reveal_threshold:?}   # fraction of a card on screen before it animates in
px_per_row = {px_per_row:?}
parallax_max_px = {parallax_max_px:?}
auto_close_ms = {auto_close_ms}     # sent contact modal closes after this long
frame_ms = {frame_ms}

# Background images (DAIZY_FETCH_ASSETS overrides fetch)
[assets]
fetch = {fetch}
timeout_secs = {timeout_secs}
background = "{background}"
background_fallback = "{fallback}"   # empty string disables the fallback
hero_image = "{hero_image}"

# Logging configuration (RUST_LOG env var overrides)
[logging]
level = "{log_level}"
# JSON file logging (in addition to the in-app log viewer)
file_enabled = {log_file_enabled}
file_dir = "{log_file_dir}"
file_rotation = "{log_file_rotation}"  # hourly, daily, never
file_prefix = "{log_file_prefix}"
"#,
            theme = self.theme,
            use_bg = self.use_theme_background,
            trail_length = self.motion.trail_length,
            reveal_threshold = self.motion.reveal_threshold,
            px_per_row = self.motion.px_per_row,
            parallax_max_px = self.motion.parallax_max_px,
            auto_close_ms = self.motion.auto_close_ms,
            frame_ms = self.motion.frame_ms,
            fetch = self.assets.fetch,
            timeout_secs = self.assets.timeout_secs,
            background = self.assets.background,
            fallback = fallback,
            hero_image = self.assets.hero_image,
            log_level = self.logging.level,
            log_file_enabled = self.logging.file_enabled,
            log_file_dir = self.logging.file_dir.display().to_string().replace('\\', "/"),
            log_file_rotation = self.logging.file_rotation.as_str(),
            log_file_prefix = self.logging.file_prefix,
        )
    }
}
