//! Toast notification component
//!
//! A non-blocking overlay that auto-dismisses after a fixed duration.
//! Renders in the bottom-right corner, above the status line, on top of
//! everything but the cursor.

use crate::theme::Theme;
use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use std::time::{Duration, Instant};
use unicode_width::UnicodeWidthStr;

const TOAST_DURATION: Duration = Duration::from_secs(2);

/// A toast notification that auto-dismisses
#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    created_at: Instant,
    duration: Duration,
}

impl Toast {
    pub fn new(message: impl Into<String>, now: Instant) -> Self {
        Self {
            message: message.into(),
            created_at: now,
            duration: TOAST_DURATION,
        }
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.created_at) >= self.duration
    }

    /// Bottom-right placement inside `area`
    pub fn area(&self, area: Rect) -> Rect {
        // 2 cells of padding + border on each side
        let width = (self.message.width() as u16 + 4).min(area.width.saturating_sub(4));
        let height = 3;
        let x = area.right().saturating_sub(width + 2);
        let y = area.bottom().saturating_sub(height + 1);
        Rect::new(x, y, width, height).intersection(area)
    }

    pub fn render(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let toast_area = self.area(area);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(theme.border_type)
            .border_style(Style::default().fg(theme.electric))
            .style(Style::default().bg(theme.surface));

        let text = Paragraph::new(self.message.as_str())
            .alignment(Alignment::Center)
            .style(Style::default().fg(theme.foreground))
            .block(block);

        f.render_widget(Clear, toast_area);
        f.render_widget(text, toast_area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expires_after_two_seconds() {
        let t0 = Instant::now();
        let toast = Toast::new("✓ Message sent", t0);
        assert!(!toast.is_expired(t0 + Duration::from_millis(1999)));
        assert!(toast.is_expired(t0 + Duration::from_secs(2)));
    }

    #[test]
    fn sits_in_bottom_right_corner() {
        let toast = Toast::new("hello", Instant::now());
        let area = toast.area(Rect::new(0, 0, 80, 24));
        assert_eq!(area, Rect::new(69, 20, 9, 3));
    }
}
