// Assets module - best-effort background image loading
//
// The page has two remote images: the site backdrop (with one fallback URL)
// and the hero image. Each is fetched once, in a blocking worker, and the
// result is reported back to the UI loop as a SiteEvent. There are no
// retries beyond the single fallback; if everything fails the backdrop area
// simply stays blank.

use crate::config::AssetsConfig;
use crate::events::SiteEvent;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

/// Errors from a single fetch attempt
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum AssetError {
    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("request to {url} failed: {reason}")]
    Transport { url: String, reason: String },

    #[error("failed to build HTTP client: {0}")]
    Client(String),
}

/// Which image a load result belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetSlot {
    Background,
    HeroImage,
}

impl AssetSlot {
    pub fn label(&self) -> &'static str {
        match self {
            AssetSlot::Background => "background",
            AssetSlot::HeroImage => "hero image",
        }
    }
}

/// A primary URL plus an optional single fallback
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetSource {
    pub primary: String,
    pub fallback: Option<String>,
}

impl AssetSource {
    pub fn new(primary: impl Into<String>) -> Self {
        Self {
            primary: primary.into(),
            fallback: None,
        }
    }

    pub fn with_fallback(mut self, fallback: impl Into<String>) -> Self {
        self.fallback = Some(fallback.into());
        self
    }
}

/// Load outcome as the renderer sees it
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AssetStatus {
    #[default]
    Pending,
    Loaded {
        url: String,
        via_fallback: bool,
        bytes: usize,
    },
    Failed,
}

impl AssetStatus {
    pub fn is_loaded(&self) -> bool {
        matches!(self, AssetStatus::Loaded { .. })
    }
}

/// Something that can GET a URL and report its body size
pub trait AssetFetcher: Send + Sync {
    /// Human-readable name for logging
    fn name(&self) -> &'static str;

    fn fetch(&self, url: &str) -> Result<usize, AssetError>;
}

/// Real fetcher backed by a blocking reqwest client
///
/// Must be created and dropped off the async runtime (see [`spawn_loads`]).
pub struct HttpFetcher {
    client: reqwest::blocking::Client,
}

impl HttpFetcher {
    pub fn new(timeout: Duration) -> Result<Self, AssetError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("daizy/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| AssetError::Client(e.to_string()))?;
        Ok(Self { client })
    }
}

impl AssetFetcher for HttpFetcher {
    fn name(&self) -> &'static str {
        "http"
    }

    fn fetch(&self, url: &str) -> Result<usize, AssetError> {
        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| AssetError::Transport {
                url: url.to_string(),
                reason: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(AssetError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.bytes().map_err(|e| AssetError::Transport {
            url: url.to_string(),
            reason: e.to_string(),
        })?;
        Ok(body.len())
    }
}

/// Used when fetching is disabled: every URL "loads" without touching the network
pub struct OfflineFetcher;

impl AssetFetcher for OfflineFetcher {
    fn name(&self) -> &'static str {
        "offline"
    }

    fn fetch(&self, _url: &str) -> Result<usize, AssetError> {
        Ok(0)
    }
}

/// Try the primary URL, then the fallback once. Never retries further.
pub fn load_with_fallback(fetcher: &dyn AssetFetcher, source: &AssetSource) -> AssetStatus {
    match fetcher.fetch(&source.primary) {
        Ok(bytes) => {
            return AssetStatus::Loaded {
                url: source.primary.clone(),
                via_fallback: false,
                bytes,
            }
        }
        Err(e) => tracing::warn!("Asset load failed: {}", e),
    }

    let Some(fallback) = &source.fallback else {
        return AssetStatus::Failed;
    };

    tracing::info!("Trying fallback URL {}", fallback);
    match fetcher.fetch(fallback) {
        Ok(bytes) => AssetStatus::Loaded {
            url: fallback.clone(),
            via_fallback: true,
            bytes,
        },
        Err(e) => {
            tracing::warn!("Fallback asset load failed: {}", e);
            AssetStatus::Failed
        }
    }
}

/// The two sources the page uses, built from config
pub fn page_sources(config: &AssetsConfig) -> Vec<(AssetSlot, AssetSource)> {
    let mut background = AssetSource::new(&config.background);
    if let Some(fallback) = &config.background_fallback {
        background = background.with_fallback(fallback);
    }
    vec![
        (AssetSlot::Background, background),
        (AssetSlot::HeroImage, AssetSource::new(&config.hero_image)),
    ]
}

/// Run every load against `fetcher` and report each result on `tx`
pub fn load_all(
    fetcher: &dyn AssetFetcher,
    sources: &[(AssetSlot, AssetSource)],
    tx: &mpsc::Sender<SiteEvent>,
) {
    for (slot, source) in sources {
        let status = load_with_fallback(fetcher, source);
        match &status {
            AssetStatus::Loaded {
                url,
                via_fallback,
                bytes,
            } => tracing::debug!(
                fetcher = fetcher.name(),
                via_fallback,
                bytes,
                "Loaded {} from {}",
                slot.label(),
                url
            ),
            _ => tracing::warn!("{} unavailable, leaving it blank", slot.label()),
        }
        // Receiver gone means the UI already quit
        if tx
            .blocking_send(SiteEvent::AssetLoaded {
                slot: *slot,
                status,
            })
            .is_err()
        {
            return;
        }
    }
}

/// Fetch the page's assets in the background
///
/// The blocking client lives entirely inside the worker thread.
pub fn spawn_loads(
    config: AssetsConfig,
    tx: mpsc::Sender<SiteEvent>,
) -> tokio::task::JoinHandle<()> {
    tokio::task::spawn_blocking(move || {
        let sources = page_sources(&config);
        let fetcher: Arc<dyn AssetFetcher> = if config.fetch {
            match HttpFetcher::new(Duration::from_secs(config.timeout_secs)) {
                Ok(http) => Arc::new(http),
                Err(e) => {
                    tracing::error!("{}", e);
                    for (slot, _) in &sources {
                        let _ = tx.blocking_send(SiteEvent::AssetLoaded {
                            slot: *slot,
                            status: AssetStatus::Failed,
                        });
                    }
                    return;
                }
            }
        } else {
            tracing::debug!("Asset fetching disabled, using offline fetcher");
            Arc::new(OfflineFetcher)
        };
        load_all(fetcher.as_ref(), &sources, &tx);
    })
}
