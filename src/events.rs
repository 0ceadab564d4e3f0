// Events that flow from background tasks into the UI loop
//
// Asset loads finish on a blocking worker and the demo driver runs as its own
// task; both report here over one mpsc channel so the UI loop stays the only
// owner of page state.

use crate::assets::{AssetSlot, AssetStatus};
use crate::contact::Field;
use crate::site::{Anchor, ModalOwner};

/// Message delivered to the UI loop
#[derive(Debug, Clone, PartialEq)]
pub enum SiteEvent {
    /// A background image finished loading (or gave up)
    AssetLoaded { slot: AssetSlot, status: AssetStatus },

    /// Synthetic input from the demo tour
    Demo(DemoStep),
}

/// One scripted input step. Applied exactly like the matching user input.
#[derive(Debug, Clone, PartialEq)]
pub enum DemoStep {
    /// Pointer moved to a screen cell
    PointerTo { x: u16, y: u16 },
    /// Wheel scroll by rows (positive = down)
    Scroll(i32),
    JumpTo(Anchor),
    OpenContact(ModalOwner),
    /// Replace one field of the open contact modal
    Fill(Field, String),
    /// Press "Send Message" on the open contact modal
    Submit,
}
