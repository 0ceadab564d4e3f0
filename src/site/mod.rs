// Site module - the portfolio page itself
//
// - content: static copy (projects, services, testimonials, labels)
// - layout:  page geometry and anchors for a terminal size
// - page:    live page state (scroll, entrance animations, contact modals)

pub mod content;
pub mod layout;
pub mod page;

pub use layout::{Anchor, PageLayout};
pub use page::{HeroPart, ModalOwner, Page};

use crate::contact::Field;

/// Interactive elements the cursor reacts to and clicks land on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target {
    /// Brand label in the nav bar (back to top)
    Brand,
    NavLink(Anchor),
    /// Nav bar "START A PROJECT" button
    StartProject,
    /// Hero "LEARN MORE" link
    LearnMore,
    /// Footer "GET STARTED" button
    GetStarted,
    ModalField(Field),
    ModalCancel,
    ModalSend,
}

impl Target {
    /// Part of the contact dialog (only registered while it is open)
    pub fn is_modal(&self) -> bool {
        matches!(
            self,
            Target::ModalField(_) | Target::ModalCancel | Target::ModalSend
        )
    }

    /// The modal a call-to-action opens, if it is one
    pub fn opens_modal(&self) -> Option<ModalOwner> {
        match self {
            Target::StartProject => Some(ModalOwner::Nav),
            Target::LearnMore => Some(ModalOwner::Hero),
            Target::GetStarted => Some(ModalOwner::Footer),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn call_to_actions_map_to_their_own_modal() {
        assert_eq!(Target::StartProject.opens_modal(), Some(ModalOwner::Nav));
        assert_eq!(Target::LearnMore.opens_modal(), Some(ModalOwner::Hero));
        assert_eq!(Target::GetStarted.opens_modal(), Some(ModalOwner::Footer));
        assert_eq!(Target::NavLink(Anchor::Work).opens_modal(), None);
    }

    #[test]
    fn modal_targets_are_flagged() {
        assert!(Target::ModalSend.is_modal());
        assert!(Target::ModalField(Field::Email).is_modal());
        assert!(!Target::Brand.is_modal());
    }
}
