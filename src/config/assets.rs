//! Background image sources

use serde::Deserialize;

const BACKGROUND_URL: &str = "https://i.ibb.co/5X70pxf7/Untitled-design-2-685408a4cb7d9-png.png";
const BACKGROUND_FALLBACK_URL: &str = "https://i.ibb.co/nqWGd85/background.png";
const HERO_IMAGE_URL: &str = "https://images.unsplash.com/photo-1634017839464-5c339ebe3cb4?ixlib=rb-4.0.3&ixid=M3wxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8fA%3D%3D&auto=format&fit=crop&w=2000&q=80";

/// Asset fetch settings
#[derive(Debug, Clone, PartialEq)]
pub struct AssetsConfig {
    /// Fetch over the network; false treats every primary as loaded
    pub fetch: bool,
    /// Per-request timeout
    pub timeout_secs: u64,
    pub background: String,
    /// Tried once if the primary background fails
    pub background_fallback: Option<String>,
    pub hero_image: String,
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            fetch: true,
            timeout_secs: 10,
            background: BACKGROUND_URL.to_string(),
            background_fallback: Some(BACKGROUND_FALLBACK_URL.to_string()),
            hero_image: HERO_IMAGE_URL.to_string(),
        }
    }
}

/// Asset settings as loaded from config file
#[derive(Debug, Deserialize, Default)]
pub struct FileAssets {
    pub fetch: Option<bool>,
    pub timeout_secs: Option<u64>,
    pub background: Option<String>,
    /// Empty string disables the fallback
    pub background_fallback: Option<String>,
    pub hero_image: Option<String>,
}

impl AssetsConfig {
    /// Create from file config with defaults
    pub fn from_file(file: Option<FileAssets>) -> Self {
        let file = file.unwrap_or_default();
        let defaults = Self::default();

        Self {
            fetch: file.fetch.unwrap_or(defaults.fetch),
            timeout_secs: file.timeout_secs.unwrap_or(defaults.timeout_secs).max(1),
            background: file.background.unwrap_or(defaults.background),
            background_fallback: match file.background_fallback {
                Some(url) if url.trim().is_empty() => None,
                Some(url) => Some(url),
                None => defaults.background_fallback,
            },
            hero_image: file.hero_image.unwrap_or(defaults.hero_image),
        }
    }
}
