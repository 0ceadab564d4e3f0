//! Reveal-on-viewport entrance animation
//!
//! "Play once" semantics: the first time an element becomes visible enough,
//! it latches `entered` and runs a one-shot fade/slide-in. Scrolling away and
//! back never replays it.

use super::ease::Ease;
use std::time::{Duration, Instant};

/// Default visible fraction an element needs before it reveals
pub const DEFAULT_THRESHOLD: f32 = 0.2;

/// Fraction of an element's rows inside the viewport, in `[0, 1]`.
///
/// All values are in the same unit (rows of the page). Zero-height elements
/// count as fully visible when their top row is inside the viewport.
pub fn visible_fraction(top: i64, height: u16, viewport_top: i64, viewport_height: u16) -> f32 {
    let bottom = top + height as i64;
    let viewport_bottom = viewport_top + viewport_height as i64;

    if height == 0 {
        return if top >= viewport_top && top < viewport_bottom {
            1.0
        } else {
            0.0
        };
    }

    let overlap = bottom.min(viewport_bottom) - top.max(viewport_top);
    if overlap <= 0 {
        0.0
    } else {
        overlap as f32 / height as f32
    }
}

/// Entrance tween parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealStyle {
    /// Vertical offset the element starts at, in page pixels
    pub offset_px: f64,
    pub duration: Duration,
    pub delay: Duration,
    pub ease: Ease,
}

impl RevealStyle {
    /// Portfolio card entrance: 60px rise over 1.2s, staggered 150ms per card
    pub fn project_card(index: usize) -> Self {
        Self {
            offset_px: 60.0,
            duration: Duration::from_millis(1200),
            delay: Duration::from_millis(150 * index as u64),
            ease: Ease::Signature,
        }
    }

    /// Testimonial entrance: 40px rise over 1.2s, staggered 100ms per card
    pub fn testimonial(index: usize) -> Self {
        Self {
            offset_px: 40.0,
            duration: Duration::from_millis(1200),
            delay: Duration::from_millis(100 * index as u64),
            ease: Ease::Signature,
        }
    }
}

/// One-shot viewport reveal state for a single element
#[derive(Debug, Clone)]
pub struct RevealOnViewport {
    threshold: f32,
    style: RevealStyle,
    entered_at: Option<Instant>,
}

impl RevealOnViewport {
    pub fn new(threshold: f32, style: RevealStyle) -> Self {
        Self {
            threshold: threshold.clamp(0.0, 1.0),
            style,
            entered_at: None,
        }
    }

    /// Feed the element's current visible fraction.
    ///
    /// Returns true only on the call that latches the entered flag.
    pub fn observe(&mut self, visible_fraction: f32, now: Instant) -> bool {
        if self.entered_at.is_some() {
            return false;
        }
        if visible_fraction > 0.0 && visible_fraction >= self.threshold {
            self.entered_at = Some(now);
            return true;
        }
        false
    }

    pub fn has_entered(&self) -> bool {
        self.entered_at.is_some()
    }

    /// Eased entrance progress in `[0, 1]`; 0 before entering or during delay
    pub fn progress(&self, now: Instant) -> f64 {
        let Some(start) = self.entered_at else {
            return 0.0;
        };
        let elapsed = now.saturating_duration_since(start);
        let Some(running) = elapsed.checked_sub(self.style.delay) else {
            return 0.0;
        };
        if self.style.duration.is_zero() {
            return 1.0;
        }
        let t = running.as_secs_f64() / self.style.duration.as_secs_f64();
        self.style.ease.apply(t)
    }

    /// Current opacity in `[0, 1]`
    pub fn opacity(&self, now: Instant) -> f64 {
        self.progress(now)
    }

    /// Remaining vertical offset in page pixels
    pub fn offset_px(&self, now: Instant) -> f64 {
        if !self.has_entered() {
            return self.style.offset_px;
        }
        self.style.offset_px * (1.0 - self.progress(now))
    }

    /// True while the entrance is still playing
    pub fn is_animating(&self, now: Instant) -> bool {
        self.has_entered() && self.progress(now) < 1.0
    }
}
