//! Auto-close timer handle
//!
//! A deadline owned by the modal's submitted state. It is never scheduled
//! anywhere else: dropping the handle is cancelling it, and the modal drops it
//! on every transition out of the submitted state.

use std::time::{Duration, Instant};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AutoCloseTimer {
    /// Modal session this timer was armed for
    session: u64,
    deadline: Instant,
}

impl AutoCloseTimer {
    pub fn arm(session: u64, now: Instant, delay: Duration) -> Self {
        Self {
            session,
            deadline: now + delay,
        }
    }

    pub fn session(&self) -> u64 {
        self.session
    }

    /// Due for a specific session; a timer from an older session never fires
    pub fn is_due(&self, session: u64, now: Instant) -> bool {
        self.session == session && now >= self.deadline
    }

    pub fn remaining(&self, now: Instant) -> Duration {
        self.deadline.saturating_duration_since(now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn due_exactly_at_deadline() {
        let t0 = Instant::now();
        let timer = AutoCloseTimer::arm(1, t0, Duration::from_millis(3000));
        assert!(!timer.is_due(1, t0 + Duration::from_millis(2999)));
        assert!(timer.is_due(1, t0 + Duration::from_millis(3000)));
        assert_eq!(
            timer.remaining(t0 + Duration::from_millis(1000)),
            Duration::from_millis(2000)
        );
        assert_eq!(timer.remaining(t0 + Duration::from_secs(9)), Duration::ZERO);
    }

    #[test]
    fn stale_session_never_fires() {
        let t0 = Instant::now();
        let timer = AutoCloseTimer::arm(1, t0, Duration::from_millis(10));
        assert!(!timer.is_due(2, t0 + Duration::from_secs(1)));
    }
}
