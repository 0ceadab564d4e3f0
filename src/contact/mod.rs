//! Contact modal state machine
//!
//! ```text
//!   Closed ──open()──▶ Open(idle) ──submit()──▶ Open(submitted)
//!     ▲                   │  ▲                      │     │
//!     │                   │  └── edit(field, v) ────┘     │
//!     ├──── cancel() ─────┘                               │
//!     ├──── cancel() ─────────────────────────────────────┤
//!     └──── tick(now) once the 3s auto-close timer is due ┘
//! ```
//!
//! Submission is local only: the values are logged through `tracing` and
//! returned to the caller. There is no backend and nothing is sent anywhere.

mod form;
mod timer;

pub use form::{ContactForm, Field};
pub use timer::AutoCloseTimer;

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::time::{Duration, Instant};

/// Delay between a successful submit and the modal closing itself
pub const AUTO_CLOSE: Duration = Duration::from_millis(3000);

/// Reasons a submit is refused
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("contact modal is not open")]
    NotOpen,

    #[error("message already sent for this session")]
    AlreadySubmitted,
}

/// What happened to a submission. There is exactly one outcome today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Delivery {
    /// Written to the local log; no network request was made
    LocalLogOnly,
}

/// Record of one submitted contact form
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
    pub submitted_at: DateTime<Utc>,
    pub delivery: Delivery,
}

impl ContactSubmission {
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|e| format!("{{\"error\":\"{}\"}}", e))
    }
}

/// Externally visible modal state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalState {
    Closed,
    Idle,
    Submitted,
}

#[derive(Debug, Clone)]
enum Phase {
    Closed,
    Idle,
    /// The timer lives here so leaving this phase cancels it
    Submitted { timer: AutoCloseTimer },
}

/// One contact modal instance (each section that opens one owns its own)
#[derive(Debug, Clone)]
pub struct ContactModal {
    phase: Phase,
    form: ContactForm,
    /// Incremented on every open; identifies the current modal session
    session: u64,
    auto_close: Duration,
}

impl ContactModal {
    pub fn new() -> Self {
        Self::with_auto_close(AUTO_CLOSE)
    }

    pub fn with_auto_close(auto_close: Duration) -> Self {
        Self {
            phase: Phase::Closed,
            form: ContactForm::default(),
            session: 0,
            auto_close,
        }
    }

    pub fn state(&self) -> ModalState {
        match self.phase {
            Phase::Closed => ModalState::Closed,
            Phase::Idle => ModalState::Idle,
            Phase::Submitted { .. } => ModalState::Submitted,
        }
    }

    pub fn is_open(&self) -> bool {
        !matches!(self.phase, Phase::Closed)
    }

    pub fn is_submitted(&self) -> bool {
        matches!(self.phase, Phase::Submitted { .. })
    }

    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    pub fn session(&self) -> u64 {
        self.session
    }

    /// Open with empty fields. Returns false if it was already open.
    pub fn open(&mut self) -> bool {
        if self.is_open() {
            return false;
        }
        self.session += 1;
        self.form.clear();
        self.phase = Phase::Idle;
        tracing::debug!(session = self.session, "Contact modal opened");
        true
    }

    /// Replace one field's value. Ignored unless the form is editable.
    pub fn edit(&mut self, field: Field, value: &str) {
        if matches!(self.phase, Phase::Idle) {
            self.form.set(field, value);
        }
    }

    /// Type one character into a field
    pub fn insert_char(&mut self, field: Field, ch: char) -> bool {
        if !matches!(self.phase, Phase::Idle) {
            return false;
        }
        self.form.push(field, ch);
        true
    }

    /// Delete the last character of a field
    pub fn backspace(&mut self, field: Field) -> bool {
        matches!(self.phase, Phase::Idle) && self.form.pop(field)
    }

    /// Record the form locally and arm the auto-close timer.
    ///
    /// Does not validate: the input layer only calls this once every field is
    /// filled in.
    pub fn submit(&mut self, now: Instant) -> Result<ContactSubmission, ContactError> {
        match self.phase {
            Phase::Closed => return Err(ContactError::NotOpen),
            Phase::Submitted { .. } => return Err(ContactError::AlreadySubmitted),
            Phase::Idle => {}
        }

        let submission = ContactSubmission {
            name: self.form.name.clone(),
            email: self.form.email.clone(),
            message: self.form.message.clone(),
            submitted_at: Utc::now(),
            delivery: Delivery::LocalLogOnly,
        };

        tracing::info!(
            target: "daizy::contact",
            session = self.session,
            name = %submission.name,
            email = %submission.email,
            message = %submission.message,
            "Contact form submitted (logged locally, nothing sent)"
        );
        tracing::debug!(payload = %submission.to_json(), "Contact submission record");

        self.phase = Phase::Submitted {
            timer: AutoCloseTimer::arm(self.session, now, self.auto_close),
        };
        Ok(submission)
    }

    /// Advance the clock. Returns true if this tick auto-closed the modal.
    pub fn tick(&mut self, now: Instant) -> bool {
        let due = match &self.phase {
            Phase::Submitted { timer } => timer.is_due(self.session, now),
            _ => false,
        };
        if due {
            self.close();
            tracing::debug!(session = self.session, "Contact modal auto-closed");
        }
        due
    }

    /// Close immediately, discarding fields and any pending timer.
    /// Returns false if it was already closed.
    pub fn cancel(&mut self) -> bool {
        if !self.is_open() {
            return false;
        }
        if self.is_submitted() {
            tracing::debug!(session = self.session, "Pending auto-close cancelled");
        } else if !self.form.is_blank() {
            tracing::debug!(session = self.session, "Draft discarded");
        }
        self.close();
        true
    }

    /// Time left before the submitted modal closes itself
    pub fn time_until_close(&self, now: Instant) -> Option<Duration> {
        match &self.phase {
            Phase::Submitted { timer } => Some(timer.remaining(now)),
            _ => None,
        }
    }

    fn close(&mut self) {
        self.phase = Phase::Closed;
        self.form.clear();
    }
}

impl Default for ContactModal {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(modal: &mut ContactModal) {
        modal.edit(Field::Name, "A");
        modal.edit(Field::Email, "a@b.com");
        modal.edit(Field::Message, "hi");
    }

    #[test]
    fn starts_closed_and_opens_empty() {
        let mut modal = ContactModal::new();
        assert_eq!(modal.state(), ModalState::Closed);
        assert!(modal.open());
        assert_eq!(modal.state(), ModalState::Idle);
        assert!(modal.form().is_blank());
        // Re-opening an open modal is a no-op
        assert!(!modal.open());
        assert_eq!(modal.session(), 1);
    }

    #[test]
    fn full_session_scenario() {
        let t0 = Instant::now();
        let mut modal = ContactModal::new();
        modal.open();
        filled(&mut modal);

        let submission = modal.submit(t0).expect("submit from idle");
        assert_eq!(submission.name, "A");
        assert_eq!(submission.email, "a@b.com");
        assert_eq!(submission.message, "hi");
        assert_eq!(modal.state(), ModalState::Submitted);

        assert!(!modal.tick(t0 + Duration::from_millis(2999)));
        assert_eq!(modal.state(), ModalState::Submitted);

        assert!(modal.tick(t0 + Duration::from_millis(3000)));
        assert_eq!(modal.state(), ModalState::Closed);
        assert_eq!(modal.form(), &ContactForm::default());
    }

    #[test]
    fn submission_is_local_only() {
        let mut modal = ContactModal::new();
        modal.open();
        filled(&mut modal);
        let submission = modal.submit(Instant::now()).unwrap();
        assert_eq!(submission.delivery, Delivery::LocalLogOnly);

        let json = submission.to_json();
        assert!(json.contains("\"delivery\":\"local_log_only\""));
        assert!(json.contains("\"email\":\"a@b.com\""));
    }

    #[test]
    fn submitted_flips_once_per_session() {
        let t0 = Instant::now();
        let mut modal = ContactModal::new();
        modal.open();
        filled(&mut modal);
        modal.submit(t0).unwrap();
        assert_eq!(modal.submit(t0), Err(ContactError::AlreadySubmitted));
    }

    #[test]
    fn submit_while_closed_is_refused() {
        let mut modal = ContactModal::new();
        assert_eq!(modal.submit(Instant::now()), Err(ContactError::NotOpen));
    }

    #[test]
    fn cancel_during_submitted_prevents_late_reset() {
        let t0 = Instant::now();
        let mut modal = ContactModal::new();
        modal.open();
        filled(&mut modal);
        modal.submit(t0).unwrap();

        assert!(modal.cancel());
        assert_eq!(modal.state(), ModalState::Closed);
        assert_eq!(modal.time_until_close(t0), None);

        // Reopen and start typing; the old deadline passing must not touch it
        modal.open();
        modal.edit(Field::Name, "B");
        assert!(!modal.tick(t0 + Duration::from_millis(3500)));
        assert_eq!(modal.state(), ModalState::Idle);
        assert_eq!(modal.form().name, "B");
    }

    #[test]
    fn cancel_from_idle_discards_fields() {
        let mut modal = ContactModal::new();
        modal.open();
        filled(&mut modal);
        assert!(modal.cancel());
        assert!(modal.form().is_blank());
        assert!(!modal.cancel());

        modal.open();
        assert!(modal.form().is_blank());
    }

    #[test]
    fn edits_ignored_outside_idle() {
        let t0 = Instant::now();
        let mut modal = ContactModal::new();
        modal.edit(Field::Name, "ghost");
        assert!(!modal.insert_char(Field::Name, 'x'));
        assert!(modal.form().is_blank());

        modal.open();
        filled(&mut modal);
        modal.submit(t0).unwrap();
        modal.edit(Field::Name, "changed");
        assert!(!modal.backspace(Field::Email));
        assert_eq!(modal.form().name, "A");
        assert_eq!(modal.form().email, "a@b.com");
    }

    #[test]
    fn submission_keeps_long_values_verbatim() {
        let t0 = Instant::now();
        let mut modal = ContactModal::new();
        modal.open();
        let name = "x".repeat(100);
        modal.edit(Field::Name, &name);
        modal.edit(Field::Email, "a@b.com");
        modal.edit(Field::Message, "hi");
        let submission = modal.submit(t0).unwrap();
        assert_eq!(submission.name, name);
    }

    #[test]
    fn character_editing() {
        let mut modal = ContactModal::new();
        modal.open();
        for ch in "Ann".chars() {
            assert!(modal.insert_char(Field::Name, ch));
        }
        assert!(modal.backspace(Field::Name));
        assert_eq!(modal.form().name, "An");
    }

    #[test]
    fn countdown_reports_remaining_time() {
        let t0 = Instant::now();
        let mut modal = ContactModal::with_auto_close(Duration::from_millis(500));
        modal.open();
        filled(&mut modal);
        modal.submit(t0).unwrap();
        assert_eq!(
            modal.time_until_close(t0 + Duration::from_millis(200)),
            Some(Duration::from_millis(300))
        );
        assert!(modal.tick(t0 + Duration::from_millis(500)));
    }

    #[test]
    fn tick_without_pending_timer_is_noop() {
        let mut modal = ContactModal::new();
        assert!(!modal.tick(Instant::now()));
        modal.open();
        assert!(!modal.tick(Instant::now() + Duration::from_secs(60)));
        assert_eq!(modal.state(), ModalState::Idle);
    }
}
