// Modal system for TUI overlays
//
// Self-contained modal dialogs that handle their own input and return actions.
// App just holds Option<Modal> (help, logs) plus the page's contact modals;
// input routing acts on the returned action.

use crate::contact::Field;
use crossterm::event::{KeyCode, KeyModifiers};

/// Actions returned by overlay input handling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalAction {
    /// Input consumed, no state change needed
    None,
    Close,
    ScrollUp,
    ScrollDown,
    PageUp,
    PageDown,
    ScrollTop,
    ScrollBottom,
}

/// Terminal-only overlays (not part of the page)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modal {
    /// Keyboard and mouse reference
    Help,
    /// Captured tracing output
    Logs,
}

impl Modal {
    /// Handle keyboard input, return action for caller to execute
    pub fn handle_input(&self, key: KeyCode) -> ModalAction {
        match self {
            Modal::Help => match key {
                KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') => ModalAction::Close,
                _ => ModalAction::None,
            },
            Modal::Logs => match key {
                KeyCode::Esc | KeyCode::Char('L') | KeyCode::Char('q') => ModalAction::Close,
                KeyCode::Up | KeyCode::Char('k') => ModalAction::ScrollUp,
                KeyCode::Down | KeyCode::Char('j') => ModalAction::ScrollDown,
                KeyCode::PageUp => ModalAction::PageUp,
                KeyCode::PageDown => ModalAction::PageDown,
                KeyCode::Home | KeyCode::Char('g') => ModalAction::ScrollTop,
                KeyCode::End | KeyCode::Char('G') => ModalAction::ScrollBottom,
                _ => ModalAction::None,
            },
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Contact dialog focus
// ─────────────────────────────────────────────────────────────────────────────

/// Focusable element of the contact dialog, in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactFocus {
    Field(Field),
    Cancel,
    Send,
}

impl Default for ContactFocus {
    fn default() -> Self {
        ContactFocus::Field(Field::Name)
    }
}

const TAB_ORDER: [ContactFocus; 5] = [
    ContactFocus::Field(Field::Name),
    ContactFocus::Field(Field::Email),
    ContactFocus::Field(Field::Message),
    ContactFocus::Cancel,
    ContactFocus::Send,
];

impl ContactFocus {
    fn position(self) -> usize {
        TAB_ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        TAB_ORDER[(self.position() + 1) % TAB_ORDER.len()]
    }

    pub fn prev(self) -> Self {
        TAB_ORDER[(self.position() + TAB_ORDER.len() - 1) % TAB_ORDER.len()]
    }

    pub fn field(self) -> Option<Field> {
        match self {
            ContactFocus::Field(field) => Some(field),
            _ => None,
        }
    }
}

/// What a key press in the open contact dialog asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactAction {
    None,
    Focus(ContactFocus),
    Insert(Field, char),
    Backspace(Field),
    Cancel,
    Submit,
}

/// Map a key to a contact dialog action.
///
/// Once the message is sent only closing is possible.
pub fn contact_input(
    focus: ContactFocus,
    key: KeyCode,
    modifiers: KeyModifiers,
    submitted: bool,
) -> ContactAction {
    if submitted {
        return match key {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char(' ') => ContactAction::Cancel,
            _ => ContactAction::None,
        };
    }

    match key {
        KeyCode::Esc => ContactAction::Cancel,
        KeyCode::Tab | KeyCode::Down => ContactAction::Focus(focus.next()),
        KeyCode::BackTab | KeyCode::Up => ContactAction::Focus(focus.prev()),
        KeyCode::Left | KeyCode::Right if focus.field().is_none() => {
            ContactAction::Focus(if focus == ContactFocus::Cancel {
                ContactFocus::Send
            } else {
                ContactFocus::Cancel
            })
        }
        KeyCode::Enter => match focus {
            // Enter inside a text box moves on; the message box keeps it simple
            ContactFocus::Field(_) => ContactAction::Focus(focus.next()),
            ContactFocus::Cancel => ContactAction::Cancel,
            ContactFocus::Send => ContactAction::Submit,
        },
        KeyCode::Backspace => match focus.field() {
            Some(field) => ContactAction::Backspace(field),
            None => ContactAction::None,
        },
        // Shortcut chords are not text
        KeyCode::Char(_) if modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
            ContactAction::None
        }
        KeyCode::Char(' ') if focus == ContactFocus::Cancel => ContactAction::Cancel,
        KeyCode::Char(' ') if focus == ContactFocus::Send => ContactAction::Submit,
        KeyCode::Char(c) => match focus.field() {
            Some(field) => ContactAction::Insert(field, c),
            None => ContactAction::None,
        },
        _ => ContactAction::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn help_closes_on_toggle_key() {
        assert_eq!(Modal::Help.handle_input(KeyCode::Char('?')), ModalAction::Close);
        assert_eq!(Modal::Help.handle_input(KeyCode::Down), ModalAction::None);
    }

    #[test]
    fn logs_scroll_keys() {
        assert_eq!(Modal::Logs.handle_input(KeyCode::Char('j')), ModalAction::ScrollDown);
        assert_eq!(Modal::Logs.handle_input(KeyCode::End), ModalAction::ScrollBottom);
        assert_eq!(Modal::Logs.handle_input(KeyCode::Char('L')), ModalAction::Close);
    }

    #[test]
    fn focus_cycles_through_tab_order() {
        let mut focus = ContactFocus::default();
        let mut seen = vec![focus];
        for _ in 0..4 {
            focus = focus.next();
            seen.push(focus);
        }
        assert_eq!(seen, TAB_ORDER.to_vec());
        assert_eq!(focus.next(), ContactFocus::default());
        assert_eq!(ContactFocus::default().prev(), ContactFocus::Send);
    }

    #[test]
    fn typing_goes_to_the_focused_field() {
        let focus = ContactFocus::Field(Field::Email);
        assert_eq!(
            contact_input(focus, KeyCode::Char('a'), KeyModifiers::NONE, false),
            ContactAction::Insert(Field::Email, 'a')
        );
        assert_eq!(
            contact_input(focus, KeyCode::Char(' '), KeyModifiers::NONE, false),
            ContactAction::Insert(Field::Email, ' ')
        );
        assert_eq!(
            contact_input(focus, KeyCode::Backspace, KeyModifiers::NONE, false),
            ContactAction::Backspace(Field::Email)
        );
        // 'q' is text here, not quit
        assert_eq!(
            contact_input(focus, KeyCode::Char('q'), KeyModifiers::NONE, false),
            ContactAction::Insert(Field::Email, 'q')
        );
    }

    #[test]
    fn buttons_activate_with_enter_or_space() {
        assert_eq!(
            contact_input(ContactFocus::Send, KeyCode::Enter, KeyModifiers::NONE, false),
            ContactAction::Submit
        );
        assert_eq!(
            contact_input(ContactFocus::Cancel, KeyCode::Char(' '), KeyModifiers::NONE, false),
            ContactAction::Cancel
        );
        assert_eq!(
            contact_input(ContactFocus::Cancel, KeyCode::Right, KeyModifiers::NONE, false),
            ContactAction::Focus(ContactFocus::Send)
        );
        assert_eq!(
            contact_input(
                ContactFocus::Field(Field::Name),
                KeyCode::Enter,
                KeyModifiers::NONE,
                false
            ),
            ContactAction::Focus(ContactFocus::Field(Field::Email))
        );
    }

    #[test]
    fn control_and_alt_chords_do_not_type() {
        let focus = ContactFocus::Field(Field::Name);
        assert_eq!(
            contact_input(focus, KeyCode::Char('a'), KeyModifiers::CONTROL, false),
            ContactAction::None
        );
        assert_eq!(
            contact_input(focus, KeyCode::Char('x'), KeyModifiers::ALT, false),
            ContactAction::None
        );
        assert_eq!(
            contact_input(focus, KeyCode::Char('A'), KeyModifiers::SHIFT, false),
            ContactAction::Insert(Field::Name, 'A')
        );
    }

    #[test]
    fn submitted_dialog_only_closes() {
        let focus = ContactFocus::Field(Field::Name);
        let none = KeyModifiers::NONE;
        assert_eq!(contact_input(focus, KeyCode::Char('a'), none, true), ContactAction::None);
        assert_eq!(contact_input(focus, KeyCode::Esc, none, true), ContactAction::Cancel);
    }
}
