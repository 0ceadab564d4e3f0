//! Hover detection over interactive elements
//!
//! Elements that want "interactive" cursor behavior register their bounds
//! here and unregister when they leave the screen. The detector answers one
//! question for the cursor: is the pointer over any registered element?
//!
//! Registration replaces a one-time scan of the page, so elements that appear
//! later (the contact modal's buttons, cards scrolled into view) are tracked
//! as soon as they register.

use ratatui::layout::Rect;

/// Tracks pointer overlap with registered interactive targets
#[derive(Debug, Clone)]
pub struct HoverDetector<T> {
    /// Registered targets in registration order (later = on top)
    targets: Vec<(T, Rect)>,
    /// Last known pointer position, None when outside the window
    pointer: Option<(u16, u16)>,
    hovering: bool,
}

impl<T: PartialEq + Clone> HoverDetector<T> {
    pub fn new() -> Self {
        Self {
            targets: Vec::new(),
            pointer: None,
            hovering: false,
        }
    }

    /// Register a target, or move it if already registered.
    ///
    /// Moving an existing target keeps its stacking position.
    pub fn register(&mut self, id: T, bounds: Rect) {
        match self.targets.iter_mut().find(|(t, _)| *t == id) {
            Some(entry) => entry.1 = bounds,
            None => self.targets.push((id, bounds)),
        }
        self.refresh();
    }

    /// Remove a target. Unknown ids are ignored.
    pub fn unregister(&mut self, id: &T) {
        self.targets.retain(|(t, _)| t != id);
        self.refresh();
    }

    /// Remove every target matching the predicate
    pub fn unregister_where(&mut self, mut pred: impl FnMut(&T) -> bool) {
        self.targets.retain(|(t, _)| !pred(t));
        self.refresh();
    }

    pub fn pointer_moved(&mut self, x: u16, y: u16) {
        self.pointer = Some((x, y));
        self.refresh();
    }

    /// Pointer left the window (focus lost, terminal resized away)
    pub fn pointer_left(&mut self) {
        self.pointer = None;
        self.hovering = false;
    }

    /// True iff the pointer is inside at least one registered target
    pub fn is_hovering(&self) -> bool {
        self.hovering
    }

    /// Top-most target under a point
    pub fn target_at(&self, x: u16, y: u16) -> Option<&T> {
        self.targets
            .iter()
            .rev()
            .find(|(_, r)| contains(r, x, y))
            .map(|(t, _)| t)
    }

    /// Target currently under the pointer
    pub fn hovered(&self) -> Option<&T> {
        let (x, y) = self.pointer?;
        self.target_at(x, y)
    }

    pub fn is_registered(&self, id: &T) -> bool {
        self.targets.iter().any(|(t, _)| t == id)
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    fn refresh(&mut self) {
        self.hovering = match self.pointer {
            Some((x, y)) => self.targets.iter().any(|(_, r)| contains(r, x, y)),
            None => false,
        };
    }
}

impl<T: PartialEq + Clone> Default for HoverDetector<T> {
    fn default() -> Self {
        Self::new()
    }
}

fn contains(r: &Rect, x: u16, y: u16) -> bool {
    x >= r.x && x < r.x.saturating_add(r.width) && y >= r.y && y < r.y.saturating_add(r.height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    enum Id {
        Button,
        Link,
    }

    #[test]
    fn hovering_requires_a_registered_target() {
        let mut hover: HoverDetector<Id> = HoverDetector::new();
        hover.pointer_moved(5, 5);
        assert!(!hover.is_hovering());

        hover.register(Id::Button, Rect::new(0, 0, 10, 10));
        assert!(hover.is_hovering());

        hover.pointer_moved(20, 20);
        assert!(!hover.is_hovering());
    }

    #[test]
    fn target_moving_under_still_pointer_is_detected() {
        let mut hover = HoverDetector::new();
        hover.register(Id::Link, Rect::new(0, 0, 4, 1));
        hover.pointer_moved(10, 3);
        assert!(!hover.is_hovering());

        // Page scrolled: the link now sits under the pointer
        hover.register(Id::Link, Rect::new(8, 3, 4, 1));
        assert!(hover.is_hovering());
        assert_eq!(hover.len(), 1);
    }

    #[test]
    fn unregister_clears_hover() {
        let mut hover = HoverDetector::new();
        hover.register(Id::Button, Rect::new(0, 0, 10, 2));
        hover.pointer_moved(1, 1);
        assert!(hover.is_hovering());

        hover.unregister(&Id::Button);
        assert!(!hover.is_hovering());
        assert!(!hover.is_registered(&Id::Button));

        // Unknown id is a no-op
        hover.unregister(&Id::Link);
    }

    #[test]
    fn bounds_are_half_open() {
        let mut hover = HoverDetector::new();
        hover.register(Id::Button, Rect::new(2, 2, 3, 1));
        hover.pointer_moved(4, 2);
        assert!(hover.is_hovering());
        hover.pointer_moved(5, 2);
        assert!(!hover.is_hovering());
        hover.pointer_moved(4, 3);
        assert!(!hover.is_hovering());
    }

    #[test]
    fn later_registration_is_on_top() {
        let mut hover = HoverDetector::new();
        hover.register(Id::Link, Rect::new(0, 0, 10, 10));
        hover.register(Id::Button, Rect::new(2, 2, 2, 2));
        assert_eq!(hover.target_at(3, 3), Some(&Id::Button));
        assert_eq!(hover.target_at(8, 8), Some(&Id::Link));
        assert_eq!(hover.target_at(30, 30), None);
    }

    #[test]
    fn pointer_leaving_stops_hover() {
        let mut hover = HoverDetector::new();
        hover.register(Id::Button, Rect::new(0, 0, 10, 10));
        hover.pointer_moved(1, 1);
        assert_eq!(hover.hovered(), Some(&Id::Button));

        hover.pointer_left();
        assert!(!hover.is_hovering());
        assert_eq!(hover.hovered(), None);
    }

    #[test]
    fn unregister_where_drops_matching_targets() {
        let mut hover = HoverDetector::new();
        hover.register(Id::Button, Rect::new(0, 0, 1, 1));
        hover.register(Id::Link, Rect::new(1, 0, 1, 1));
        hover.unregister_where(|t| *t == Id::Link);
        assert!(hover.is_registered(&Id::Button));
        assert!(!hover.is_registered(&Id::Link));
    }
}
