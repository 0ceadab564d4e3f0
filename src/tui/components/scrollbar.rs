//! Thin right-edge scrollbar shared by the page and the log viewer

use crate::tui::scroll::ScrollState;
use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};

/// Scrollbar for a list overlay; skipped when everything fits
pub fn render_scrollbar(f: &mut Frame, area: Rect, scroll: &ScrollState, thumb: Style) {
    if !scroll.needs_scrollbar() {
        return;
    }
    render_scrollbar_raw(f, area, scroll.total(), scroll.viewport(), scroll.offset(), thumb);
}

/// Scrollbar from raw values (the page scrolls in rows, not list items)
pub fn render_scrollbar_raw(
    f: &mut Frame,
    area: Rect,
    total: usize,
    viewport: usize,
    offset: usize,
    thumb: Style,
) {
    if total <= viewport {
        return;
    }

    let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
        .begin_symbol(None)
        .end_symbol(None)
        .thumb_style(thumb);

    // ScrollbarState wants how far it can scroll, not the total length
    let mut state = ScrollbarState::new(total.saturating_sub(viewport)).position(offset);
    f.render_stateful_widget(scrollbar, area, &mut state);
}
