//! Damped spring follower
//!
//! The cursor indicator chases the pointer on a spring instead of snapping to
//! it. Integration is semi-implicit Euler in fixed sub-steps so long frames
//! stay stable.

use std::time::Duration;

/// Largest integration step; longer frames are split
const MAX_STEP: f64 = 0.004;

/// Below this distance and speed the spring snaps to rest
const REST_EPSILON: f64 = 0.01;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringConfig {
    pub stiffness: f64,
    pub damping: f64,
    pub mass: f64,
}

impl SpringConfig {
    /// The cursor's spring: snappy with a slight overshoot
    pub const CURSOR: SpringConfig = SpringConfig {
        stiffness: 400.0,
        damping: 28.0,
        mass: 0.8,
    };
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self::CURSOR
    }
}

/// A 2D point pulled toward a target by a damped spring
#[derive(Debug, Clone)]
pub struct Spring2 {
    config: SpringConfig,
    position: (f64, f64),
    velocity: (f64, f64),
    target: (f64, f64),
}

impl Spring2 {
    pub fn new(config: SpringConfig, at: (f64, f64)) -> Self {
        Self {
            config,
            position: at,
            velocity: (0.0, 0.0),
            target: at,
        }
    }

    pub fn set_target(&mut self, target: (f64, f64)) {
        self.target = target;
    }

    /// Jump straight to a point with no motion (first pointer sighting)
    pub fn snap_to(&mut self, at: (f64, f64)) {
        self.position = at;
        self.target = at;
        self.velocity = (0.0, 0.0);
    }

    /// Advance the simulation by `dt`
    pub fn step(&mut self, dt: Duration) {
        let mut remaining = dt.as_secs_f64();
        let mass = self.config.mass.max(f64::EPSILON);

        while remaining > 0.0 {
            let h = remaining.min(MAX_STEP);
            remaining -= h;

            let ax = (-self.config.stiffness * (self.position.0 - self.target.0)
                - self.config.damping * self.velocity.0)
                / mass;
            let ay = (-self.config.stiffness * (self.position.1 - self.target.1)
                - self.config.damping * self.velocity.1)
                / mass;

            self.velocity.0 += ax * h;
            self.velocity.1 += ay * h;
            self.position.0 += self.velocity.0 * h;
            self.position.1 += self.velocity.1 * h;
        }

        if self.is_settled() {
            self.position = self.target;
            self.velocity = (0.0, 0.0);
        }
    }

    pub fn position(&self) -> (f64, f64) {
        self.position
    }

    /// Position rounded to the nearest terminal cell
    pub fn cell(&self) -> (u16, u16) {
        let clamp = |v: f64| v.round().clamp(0.0, u16::MAX as f64) as u16;
        (clamp(self.position.0), clamp(self.position.1))
    }

    pub fn is_settled(&self) -> bool {
        let dx = self.position.0 - self.target.0;
        let dy = self.position.1 - self.target.1;
        dx.abs() < REST_EPSILON
            && dy.abs() < REST_EPSILON
            && self.velocity.0.abs() < REST_EPSILON
            && self.velocity.1.abs() < REST_EPSILON
    }
}
