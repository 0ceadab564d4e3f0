// Input handling with per-key behaviors
//
// - State-change keys trigger once per press (quit, help, jumps)
// - Repeatable keys trigger on press, then repeat while held (scrolling)
//
// Text typed into the contact form bypasses this entirely; debouncing would
// swallow doubled letters on terminals that never send key releases.

use crossterm::event::KeyCode;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Minimum gap between two triggers of a held state-change key
const STATE_CHANGE_DEBOUNCE: Duration = Duration::from_millis(150);

#[derive(Debug, Clone, Copy)]
pub enum KeyBehavior {
    StateChange,
    Repeatable {
        initial_delay: Duration,
        repeat_interval: Duration,
    },
}

impl KeyBehavior {
    /// Line scrolling
    pub fn navigation() -> Self {
        Self::Repeatable {
            initial_delay: Duration::from_millis(400),
            repeat_interval: Duration::from_millis(40),
        }
    }

    /// Page scrolling
    pub fn paging() -> Self {
        Self::Repeatable {
            initial_delay: Duration::from_millis(300),
            repeat_interval: Duration::from_millis(120),
        }
    }
}

#[derive(Debug, Default)]
struct KeyState {
    press_started: Option<Instant>,
    last_triggered: Option<Instant>,
}

impl KeyState {
    fn is_pressed(&self) -> bool {
        self.press_started.is_some()
    }
}

pub struct InputHandler {
    key_states: HashMap<KeyCode, KeyState>,
    key_behaviors: HashMap<KeyCode, KeyBehavior>,
}

impl InputHandler {
    pub fn new() -> Self {
        Self {
            key_states: HashMap::new(),
            key_behaviors: HashMap::new(),
        }
    }

    pub fn configure_keys(&mut self, keys: &[KeyCode], behavior: KeyBehavior) {
        for key in keys {
            self.key_behaviors.insert(*key, behavior);
        }
    }

    /// Returns true if the key's action should run now
    pub fn handle_key_press(&mut self, key: KeyCode) -> bool {
        self.handle_key_press_at(key, Instant::now())
    }

    pub fn handle_key_press_at(&mut self, key: KeyCode, now: Instant) -> bool {
        let behavior = self
            .key_behaviors
            .get(&key)
            .copied()
            .unwrap_or(KeyBehavior::StateChange);
        let state = self.key_states.entry(key).or_default();

        let (Some(press_started), Some(last)) = (state.press_started, state.last_triggered) else {
            state.press_started = Some(now);
            state.last_triggered = Some(now);
            return true;
        };

        let since_last = now.saturating_duration_since(last);
        let fire = match behavior {
            // Terminals without release events report every press as "held"
            KeyBehavior::StateChange => since_last >= STATE_CHANGE_DEBOUNCE,
            KeyBehavior::Repeatable {
                initial_delay,
                repeat_interval,
            } => {
                now.saturating_duration_since(press_started) >= initial_delay
                    && since_last >= repeat_interval
            }
        };
        if fire {
            state.last_triggered = Some(now);
        }
        fire
    }

    pub fn handle_key_release(&mut self, key: KeyCode) {
        if let Some(state) = self.key_states.get_mut(&key) {
            *state = KeyState::default();
        }
    }

    /// Forget every held key (modal opened or closed under a held key)
    pub fn reset(&mut self) {
        self.key_states.clear();
    }

    pub fn is_pressed(&self, key: KeyCode) -> bool {
        self.key_states.get(&key).is_some_and(KeyState::is_pressed)
    }

    pub fn with_default_config() -> Self {
        let mut handler = Self::new();

        handler.configure_keys(
            &[
                KeyCode::Up,
                KeyCode::Down,
                KeyCode::Char('j'),
                KeyCode::Char('k'),
            ],
            KeyBehavior::navigation(),
        );
        handler.configure_keys(
            &[KeyCode::PageUp, KeyCode::PageDown, KeyCode::Char(' ')],
            KeyBehavior::paging(),
        );
        // Home/End, digits, q, ?, c, L fall through to StateChange

        handler
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::with_default_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_change_fires_once_per_press() {
        let mut handler = InputHandler::new();
        let t0 = Instant::now();

        assert!(handler.handle_key_press_at(KeyCode::Enter, t0));
        assert!(!handler.handle_key_press_at(KeyCode::Enter, t0 + Duration::from_millis(20)));
        assert!(handler.is_pressed(KeyCode::Enter));

        handler.handle_key_release(KeyCode::Enter);
        assert!(!handler.is_pressed(KeyCode::Enter));
        assert!(handler.handle_key_press_at(KeyCode::Enter, t0 + Duration::from_millis(30)));
    }

    #[test]
    fn state_change_debounces_without_release_events() {
        let mut handler = InputHandler::new();
        let t0 = Instant::now();

        assert!(handler.handle_key_press_at(KeyCode::Char('q'), t0));
        assert!(!handler.handle_key_press_at(KeyCode::Char('q'), t0 + Duration::from_millis(100)));
        assert!(handler.handle_key_press_at(KeyCode::Char('q'), t0 + Duration::from_millis(150)));
    }

    #[test]
    fn repeatable_waits_for_initial_delay() {
        let mut handler = InputHandler::new();
        handler.configure_keys(
            &[KeyCode::Down],
            KeyBehavior::Repeatable {
                initial_delay: Duration::from_millis(100),
                repeat_interval: Duration::from_millis(50),
            },
        );
        let t0 = Instant::now();
        let at = |ms| t0 + Duration::from_millis(ms);

        assert!(handler.handle_key_press_at(KeyCode::Down, t0));
        assert!(!handler.handle_key_press_at(KeyCode::Down, at(10)));
        assert!(handler.handle_key_press_at(KeyCode::Down, at(110)));
        assert!(!handler.handle_key_press_at(KeyCode::Down, at(130)));
        assert!(handler.handle_key_press_at(KeyCode::Down, at(165)));
    }

    #[test]
    fn reset_releases_everything() {
        let mut handler = InputHandler::default();
        let t0 = Instant::now();
        handler.handle_key_press_at(KeyCode::Char('?'), t0);
        handler.reset();
        assert!(handler.handle_key_press_at(KeyCode::Char('?'), t0 + Duration::from_millis(1)));
    }
}
