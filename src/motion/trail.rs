//! Pointer trail buffer
//!
//! Keeps the last few pointer positions so the cursor can leave a fading
//! "shooting star" tail. The buffer is a bounded queue: new points go on the
//! tail, the oldest fall off the head once capacity is exceeded.

use super::ease::Ease;
use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Default number of points kept in the trail
pub const DEFAULT_TRAIL_LENGTH: usize = 8;

/// How long a single trail dot takes to fade out completely
pub const DOT_FADE: Duration = Duration::from_millis(600);

/// Unique identifier of a trail point within its buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TrailId(u64);

/// A recorded pointer position (terminal column/row)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrailPoint {
    pub x: u16,
    pub y: u16,
    pub id: TrailId,
    pub created_at: Instant,
}

impl TrailPoint {
    /// Brightness of this dot in `[0, 1]`.
    ///
    /// `rank` counts from the tail: 0 is the most recent point. Rank strength
    /// steps down by 0.1 per position from 0.8, and the whole dot fades out
    /// over [`DOT_FADE`] after it was created.
    pub fn intensity(&self, rank: usize, now: Instant) -> f32 {
        let rank_strength = (0.8 - 0.1 * rank as f32).max(0.0) / 0.8;
        let age = now.saturating_duration_since(self.created_at);
        let t = age.as_secs_f64() / DOT_FADE.as_secs_f64();
        let fade = 1.0 - Ease::EaseOut.apply(t);
        rank_strength * fade as f32
    }

    /// Glow radius hint in cells-worth of "pixels" (8 for the newest point)
    pub fn glow(rank: usize) -> u8 {
        8u8.saturating_sub(rank.min(u8::MAX as usize) as u8)
    }
}

/// Fixed-capacity ordered record of recent pointer positions
#[derive(Debug, Clone)]
pub struct PointerTrailBuffer {
    points: VecDeque<TrailPoint>,
    capacity: usize,
    next_id: u64,
}

impl PointerTrailBuffer {
    /// Create a buffer holding at most `capacity` points (minimum 1)
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            points: VecDeque::with_capacity(capacity + 1),
            capacity,
            next_id: 0,
        }
    }

    /// Record a pointer move at the current time
    pub fn on_pointer_move(&mut self, x: u16, y: u16) -> TrailId {
        self.on_pointer_move_at(x, y, Instant::now())
    }

    /// Record a pointer move with an explicit timestamp
    pub fn on_pointer_move_at(&mut self, x: u16, y: u16, now: Instant) -> TrailId {
        let id = TrailId(self.next_id);
        self.next_id += 1;

        self.points.push_back(TrailPoint {
            x,
            y,
            id,
            created_at: now,
        });
        while self.points.len() > self.capacity {
            self.points.pop_front();
        }
        id
    }

    /// Points in arrival order, oldest first
    pub fn current_trail(
        &self,
    ) -> impl DoubleEndedIterator<Item = &TrailPoint> + ExactSizeIterator {
        self.points.iter()
    }

    /// Points paired with their rank from the tail, newest first
    pub fn ranked(&self) -> impl Iterator<Item = (usize, &TrailPoint)> {
        self.points.iter().rev().enumerate()
    }

    /// Most recent point, if any
    pub fn head(&self) -> Option<&TrailPoint> {
        self.points.back()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// True while at least one dot is still visibly fading
    pub fn is_animating(&self, now: Instant) -> bool {
        self.points
            .back()
            .is_some_and(|p| now.saturating_duration_since(p.created_at) < DOT_FADE)
    }
}

impl Default for PointerTrailBuffer {
    fn default() -> Self {
        Self::new(DEFAULT_TRAIL_LENGTH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_tracks_moves_up_to_capacity() {
        let mut trail = PointerTrailBuffer::default();
        for n in 1..=20u16 {
            trail.on_pointer_move(n, n);
            assert_eq!(trail.len(), (n as usize).min(8));
            assert!(trail.len() <= trail.capacity());
        }
    }

    #[test]
    fn keeps_last_moves_oldest_first() {
        let mut trail = PointerTrailBuffer::default();
        for n in 0..12u16 {
            trail.on_pointer_move(n, 100 - n);
        }
        let xs: Vec<u16> = trail.current_trail().map(|p| p.x).collect();
        assert_eq!(xs, vec![4, 5, 6, 7, 8, 9, 10, 11]);
        assert_eq!(trail.head().map(|p| p.x), Some(11));
    }

    #[test]
    fn ids_are_unique_within_the_same_instant() {
        let mut trail = PointerTrailBuffer::default();
        let now = Instant::now();
        let a = trail.on_pointer_move_at(1, 1, now);
        let b = trail.on_pointer_move_at(1, 1, now);
        assert_ne!(a, b);

        let ids: Vec<TrailId> = trail.current_trail().map(|p| p.id).collect();
        let mut sorted = ids.clone();
        sorted.sort();
        assert_eq!(ids, sorted);
    }

    #[test]
    fn zero_capacity_is_coerced_to_one() {
        let mut trail = PointerTrailBuffer::new(0);
        trail.on_pointer_move(1, 2);
        trail.on_pointer_move(3, 4);
        assert_eq!(trail.len(), 1);
        assert_eq!(trail.head().map(|p| (p.x, p.y)), Some((3, 4)));
    }

    #[test]
    fn ranked_starts_at_newest() {
        let mut trail = PointerTrailBuffer::new(3);
        trail.on_pointer_move(1, 0);
        trail.on_pointer_move(2, 0);
        trail.on_pointer_move(3, 0);
        let ranked: Vec<(usize, u16)> = trail.ranked().map(|(r, p)| (r, p.x)).collect();
        assert_eq!(ranked, vec![(0, 3), (1, 2), (2, 1)]);
    }

    #[test]
    fn intensity_falls_with_rank_and_age() {
        let now = Instant::now();
        let mut trail = PointerTrailBuffer::default();
        trail.on_pointer_move_at(0, 0, now);
        let point = *trail.head().unwrap();

        assert!((point.intensity(0, now) - 1.0).abs() < 1e-6);
        assert!(point.intensity(3, now) < point.intensity(0, now));
        assert!(point.intensity(7, now) > 0.0);
        assert!(point.intensity(8, now).abs() < 1e-6);

        let later = now + Duration::from_millis(300);
        assert!(point.intensity(0, later) < 1.0);
        assert_eq!(point.intensity(0, now + DOT_FADE), 0.0);
    }

    #[test]
    fn glow_shrinks_with_rank() {
        assert_eq!(TrailPoint::glow(0), 8);
        assert_eq!(TrailPoint::glow(7), 1);
        assert_eq!(TrailPoint::glow(100), 0);
    }

    #[test]
    fn animating_until_newest_dot_fades() {
        let now = Instant::now();
        let mut trail = PointerTrailBuffer::default();
        assert!(!trail.is_animating(now));
        trail.on_pointer_move_at(5, 5, now);
        assert!(trail.is_animating(now + Duration::from_millis(100)));
        assert!(!trail.is_animating(now + DOT_FADE));
    }
}
