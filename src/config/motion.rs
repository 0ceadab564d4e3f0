//! Animation tuning: trail length, reveal threshold, parallax, timers

use serde::Deserialize;

/// Motion settings
#[derive(Debug, Clone, PartialEq)]
pub struct MotionConfig {
    /// Pointer trail capacity (dots kept behind the cursor)
    pub trail_length: usize,
    /// Fraction of a card that must be on screen before it animates in
    pub reveal_threshold: f32,
    /// Page pixels per terminal row, for pixel-based motion values
    pub px_per_row: f64,
    /// Hero backdrop shift at full parallax, in pixels
    pub parallax_max_px: f64,
    /// Delay before a sent contact modal closes itself
    pub auto_close_ms: u64,
    /// Redraw interval while something is animating
    pub frame_ms: u64,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            trail_length: crate::motion::DEFAULT_TRAIL_LENGTH,
            reveal_threshold: crate::motion::DEFAULT_THRESHOLD,
            px_per_row: 16.0,
            parallax_max_px: 200.0,
            auto_close_ms: 3000,
            frame_ms: 16,
        }
    }
}

/// Motion settings as loaded from config file
#[derive(Debug, Deserialize, Default)]
pub struct FileMotion {
    pub trail_length: Option<usize>,
    pub reveal_threshold: Option<f32>,
    pub px_per_row: Option<f64>,
    pub parallax_max_px: Option<f64>,
    pub auto_close_ms: Option<u64>,
    pub frame_ms: Option<u64>,
}

impl MotionConfig {
    /// Create from file config with defaults; out-of-range values are clamped
    pub fn from_file(file: Option<FileMotion>) -> Self {
        let file = file.unwrap_or_default();
        let defaults = Self::default();

        Self {
            trail_length: file.trail_length.unwrap_or(defaults.trail_length).max(1),
            reveal_threshold: file
                .reveal_threshold
                .unwrap_or(defaults.reveal_threshold)
                .clamp(0.0, 1.0),
            px_per_row: file.px_per_row.unwrap_or(defaults.px_per_row).max(1.0),
            parallax_max_px: file
                .parallax_max_px
                .unwrap_or(defaults.parallax_max_px)
                .max(0.0),
            auto_close_ms: file.auto_close_ms.unwrap_or(defaults.auto_close_ms),
            frame_ms: file.frame_ms.unwrap_or(defaults.frame_ms).clamp(8, 250),
        }
    }
}
