// Motion module - animation state behind the page effects
//
// Everything here is plain state plus `Instant` arithmetic; nothing touches
// the terminal. The TUI feeds pointer/scroll events and the frame clock in,
// and reads opacities, offsets and flags out when drawing.
//
// - trail:    fading pointer trail (bounded FIFO)
// - hover:    registration-based hover detection for the cursor indicator
// - reveal:   one-shot reveal when an element scrolls into view
// - parallax: clamped scroll-linked transform for the hero backdrop
// - timeline: staged hero / nav entrance tweens
// - spring:   cursor indicator follower
// - ease:     easing curves shared by all of the above

pub mod ease;
pub mod hover;
pub mod parallax;
pub mod reveal;
pub mod spring;
pub mod timeline;
pub mod trail;

pub use ease::Ease;
pub use hover::HoverDetector;
pub use parallax::ScrollLinkedTransform;
pub use reveal::{visible_fraction, RevealOnViewport, RevealStyle, DEFAULT_THRESHOLD};
pub use spring::{Spring2, SpringConfig};
pub use timeline::{Position, Timeline, TweenSpec, TweenState};
pub use trail::{PointerTrailBuffer, TrailPoint, DEFAULT_TRAIL_LENGTH};
