//! Staged entrance timelines
//!
//! A small sequencer in the spirit of a GSAP timeline: tweens are placed one
//! after another (optionally staggered or overlapping), then sampled by key at
//! any instant. Used for the hero headline sequence and the nav slide-in.

use super::ease::Ease;
use std::time::{Duration, Instant};

/// Where a new tween group starts relative to the end of the timeline so far
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Position {
    /// Right after the previous group ends
    After,
    /// This long before the previous group ends ("-=0.4")
    Overlap(Duration),
}

/// Shape of a single from-to tween
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TweenSpec {
    pub duration: Duration,
    pub ease: Ease,
    /// Starting vertical offset in page pixels (negative = above)
    pub from_offset_px: f64,
}

#[derive(Debug, Clone)]
struct Placed<K> {
    key: K,
    start: Duration,
    spec: TweenSpec,
}

/// Sampled state of one tween
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TweenState {
    pub progress: f64,
    pub opacity: f64,
    pub offset_px: f64,
}

impl TweenState {
    /// Fully settled; what keys without a tween report
    pub const DONE: TweenState = TweenState {
        progress: 1.0,
        opacity: 1.0,
        offset_px: 0.0,
    };
}

#[derive(Debug, Clone)]
pub struct Timeline<K> {
    started_at: Option<Instant>,
    cursor: Duration,
    tweens: Vec<Placed<K>>,
}

impl<K: PartialEq + Copy> Timeline<K> {
    /// Empty timeline whose first group starts after `delay`
    pub fn new(delay: Duration) -> Self {
        Self {
            started_at: None,
            cursor: delay,
            tweens: Vec::new(),
        }
    }

    /// Add a group of tweens, each `stagger` after the previous one
    pub fn from_to(mut self, keys: &[K], spec: TweenSpec, stagger: Duration, at: Position) -> Self {
        let group_start = match at {
            Position::After => self.cursor,
            Position::Overlap(d) => self.cursor.saturating_sub(d),
        };

        let mut end = group_start;
        for (i, key) in keys.iter().enumerate() {
            let start = group_start + stagger * i as u32;
            end = end.max(start + spec.duration);
            self.tweens.push(Placed {
                key: *key,
                start,
                spec,
            });
        }
        self.cursor = self.cursor.max(end);
        self
    }

    /// Start playing (idempotent: a running timeline keeps its start time)
    pub fn play(&mut self, now: Instant) {
        if self.started_at.is_none() {
            self.started_at = Some(now);
        }
    }

    pub fn is_playing(&self) -> bool {
        self.started_at.is_some()
    }

    /// Total length including the leading delay
    pub fn duration(&self) -> Duration {
        self.cursor
    }

    pub fn is_finished(&self, now: Instant) -> bool {
        self.started_at
            .is_some_and(|s| now.saturating_duration_since(s) >= self.cursor)
    }

    /// Sample the tween for `key`. Unknown keys report [`TweenState::DONE`].
    pub fn sample(&self, key: K, now: Instant) -> TweenState {
        let Some(placed) = self.tweens.iter().find(|p| p.key == key) else {
            return TweenState::DONE;
        };

        let elapsed = self
            .started_at
            .map(|s| now.saturating_duration_since(s))
            .unwrap_or_default();

        let progress = match elapsed.checked_sub(placed.start) {
            None => 0.0,
            Some(_) if placed.spec.duration.is_zero() => 1.0,
            Some(running) => placed
                .spec
                .ease
                .apply(running.as_secs_f64() / placed.spec.duration.as_secs_f64()),
        };

        TweenState {
            progress,
            opacity: progress,
            offset_px: placed.spec.from_offset_px * (1.0 - progress),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq)]
    enum Part {
        Headline,
        Subheadline,
        LearnMore,
    }

    fn hero() -> Timeline<Part> {
        Timeline::new(Duration::from_millis(500))
            .from_to(
                &[Part::Headline, Part::Subheadline],
                TweenSpec {
                    duration: Duration::from_millis(1200),
                    ease: Ease::OutCubic,
                    from_offset_px: 50.0,
                },
                Duration::from_millis(100),
                Position::After,
            )
            .from_to(
                &[Part::LearnMore],
                TweenSpec {
                    duration: Duration::from_millis(800),
                    ease: Ease::OutQuad,
                    from_offset_px: 20.0,
                },
                Duration::ZERO,
                Position::Overlap(Duration::from_millis(400)),
            )
    }

    #[test]
    fn staggered_groups_are_placed_like_gsap() {
        // 0.5 delay + 0.1 stagger + 1.2 = 1.8; learn-more starts 1.4, ends 2.2
        assert_eq!(hero().duration(), Duration::from_millis(2200));
    }

    #[test]
    fn nothing_moves_before_play() {
        let tl = hero();
        let now = Instant::now();
        let s = tl.sample(Part::Headline, now + Duration::from_secs(10));
        assert_eq!(s.progress, 0.0);
        assert_eq!(s.offset_px, 50.0);
    }

    #[test]
    fn sampling_follows_schedule() {
        let mut tl = hero();
        let t0 = Instant::now();
        tl.play(t0);

        // Inside the initial delay
        assert_eq!(tl.sample(Part::Headline, t0 + Duration::from_millis(400)).opacity, 0.0);

        // Headline has started, subheadline is still waiting on its stagger
        let at = t0 + Duration::from_millis(550);
        assert!(tl.sample(Part::Headline, at).progress > 0.0);
        assert_eq!(tl.sample(Part::Subheadline, at).progress, 0.0);

        // Learn-more starts at 1.4s
        assert_eq!(tl.sample(Part::LearnMore, t0 + Duration::from_millis(1399)).progress, 0.0);
        assert!(tl.sample(Part::LearnMore, t0 + Duration::from_millis(1500)).progress > 0.0);

        let end = t0 + Duration::from_millis(2200);
        assert!(tl.is_finished(end));
        for part in [Part::Headline, Part::Subheadline, Part::LearnMore] {
            let s = tl.sample(part, end);
            assert!((s.progress - 1.0).abs() < 1e-9);
            assert!(s.offset_px.abs() < 1e-9);
        }
    }

    #[test]
    fn play_is_idempotent() {
        let mut tl = hero();
        let t0 = Instant::now();
        tl.play(t0);
        tl.play(t0 + Duration::from_secs(1));
        assert!(tl.is_finished(t0 + Duration::from_millis(2200)));
    }

    #[test]
    fn unknown_key_is_settled() {
        let tl: Timeline<Part> = Timeline::new(Duration::ZERO);
        assert_eq!(tl.sample(Part::Headline, Instant::now()), TweenState::DONE);
    }
}
