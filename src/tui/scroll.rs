// Scroll state for list overlays (the log viewer)
//
// The page itself scrolls in page rows through `site::Page`; this is the
// smaller list-style state with auto-follow for streaming content.

/// Scroll position over a list of `total` items shown `viewport` at a time
#[derive(Debug, Clone)]
pub struct ScrollState {
    offset: usize,
    total: usize,
    viewport: usize,
    /// Keep the view pinned to the newest item. Scrolling up turns it off;
    /// reaching the bottom turns it back on.
    pub auto_follow: bool,
}

impl ScrollState {
    pub fn new() -> Self {
        Self {
            offset: 0,
            total: 0,
            viewport: 0,
            auto_follow: true,
        }
    }

    /// Call each frame with the current sizes
    pub fn update_dimensions(&mut self, total: usize, viewport: usize) {
        self.total = total;
        self.viewport = viewport;

        if self.auto_follow {
            self.offset = self.max_offset();
        } else {
            self.offset = self.offset.min(self.max_offset());
        }
    }

    pub fn scroll_up(&mut self) {
        if self.offset > 0 {
            self.offset -= 1;
            self.auto_follow = false;
        }
    }

    pub fn scroll_down(&mut self) {
        if self.offset < self.max_offset() {
            self.offset += 1;
        }
        if self.offset >= self.max_offset() {
            self.auto_follow = true;
        }
    }

    pub fn page_up(&mut self) {
        self.offset = self.offset.saturating_sub(self.viewport.max(1));
        self.auto_follow = false;
    }

    pub fn page_down(&mut self) {
        self.offset = (self.offset + self.viewport.max(1)).min(self.max_offset());
        if self.offset >= self.max_offset() {
            self.auto_follow = true;
        }
    }

    pub fn scroll_to_top(&mut self) {
        self.offset = 0;
        self.auto_follow = false;
    }

    pub fn scroll_to_bottom(&mut self) {
        self.offset = self.max_offset();
        self.auto_follow = true;
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    /// (start, end) item indices in view
    pub fn visible_range(&self) -> (usize, usize) {
        let end = (self.offset + self.viewport).min(self.total);
        (self.offset.min(end), end)
    }

    pub fn needs_scrollbar(&self) -> bool {
        self.total > self.viewport
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn viewport(&self) -> usize {
        self.viewport
    }

    fn max_offset(&self) -> usize {
        self.total.saturating_sub(self.viewport)
    }
}

impl Default for ScrollState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auto_follow_tracks_new_content() {
        let mut scroll = ScrollState::new();
        scroll.update_dimensions(10, 5);
        assert_eq!(scroll.offset(), 5);
        scroll.update_dimensions(15, 5);
        assert_eq!(scroll.offset(), 10);
    }

    #[test]
    fn scrolling_up_pauses_follow_until_bottom() {
        let mut scroll = ScrollState::new();
        scroll.update_dimensions(20, 5);

        scroll.scroll_up();
        assert!(!scroll.auto_follow);
        assert_eq!(scroll.offset(), 14);

        // New entries do not move a paused view
        scroll.update_dimensions(25, 5);
        assert_eq!(scroll.offset(), 14);

        scroll.page_down();
        scroll.page_down();
        assert!(scroll.auto_follow);
        assert_eq!(scroll.offset(), 20);
    }

    #[test]
    fn visible_range_at_top_and_bottom() {
        let mut scroll = ScrollState::new();
        scroll.update_dimensions(100, 10);
        assert_eq!(scroll.visible_range(), (90, 100));

        scroll.scroll_to_top();
        assert_eq!(scroll.visible_range(), (0, 10));
        assert!(scroll.needs_scrollbar());
    }

    #[test]
    fn short_content_never_scrolls() {
        let mut scroll = ScrollState::new();
        scroll.update_dimensions(3, 10);
        scroll.scroll_down();
        assert_eq!(scroll.offset(), 0);
        assert_eq!(scroll.visible_range(), (0, 3));
        assert!(!scroll.needs_scrollbar());
    }
}
