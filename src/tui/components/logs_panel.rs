//! Logs panel component
//!
//! Lists captured tracing events inside the log viewer overlay. Owns only its
//! scroll position; entries come from the shared `LogBuffer` each frame.

use super::scrollbar::render_scrollbar;
use crate::logging::{LogEntry, LogLevel};
use crate::theme::Theme;
use crate::tui::scroll::ScrollState;
use crate::util::truncate_to_width;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

pub struct LogsPanel {
    pub scroll: ScrollState,
}

impl LogsPanel {
    pub fn new() -> Self {
        Self {
            scroll: ScrollState::new(),
        }
    }

    /// Sync with the buffer (call each frame before rendering)
    pub fn sync_entries(&mut self, count: usize, viewport_height: usize) {
        self.scroll.update_dimensions(count, viewport_height);
    }

    pub fn render(&self, f: &mut Frame, area: Rect, entries: &[LogEntry], theme: &Theme) {
        let (start, end) = self.scroll.visible_range();
        let max_cols = area.width.saturating_sub(3) as usize;

        let items: Vec<ListItem> = entries
            .iter()
            .skip(start)
            .take(end - start)
            .map(|entry| {
                let formatted = format_log_entry(entry);
                ListItem::new(Line::raw(truncate_to_width(&formatted, max_cols).to_string()))
                    .style(log_level_style(entry.level, theme))
            })
            .collect();

        let title = if self.scroll.auto_follow {
            format!(" Logs ({}) ", entries.len())
        } else {
            format!(" Logs ({}) [scroll] ", entries.len())
        };

        let list = List::new(items).style(Style::default().bg(theme.surface)).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(theme.border_type)
                .border_style(Style::default().fg(theme.border))
                .title(title)
                .title_bottom(Line::from(" ↑/↓ scroll · g/G ends · L or Esc to close ").centered()),
        );

        f.render_widget(list, area);
        render_scrollbar(f, area, &self.scroll, Style::default().fg(theme.muted));
    }
}

impl Default for LogsPanel {
    fn default() -> Self {
        Self::new()
    }
}

fn format_log_entry(entry: &LogEntry) -> String {
    format!(
        "[{}] {:5} {}",
        entry.timestamp.format("%H:%M:%S"),
        entry.level.as_str(),
        entry.display_text()
    )
}

fn log_level_style(level: LogLevel, theme: &Theme) -> Style {
    match level {
        LogLevel::Error => Style::default()
            .fg(theme.error)
            .add_modifier(Modifier::BOLD),
        LogLevel::Warn => Style::default().fg(theme.electric),
        LogLevel::Info => Style::default().fg(theme.foreground),
        LogLevel::Debug | LogLevel::Trace => Style::default().fg(theme.muted),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn entry_line_includes_fields() {
        let entry = LogEntry {
            timestamp: chrono::Utc.with_ymd_and_hms(2025, 1, 2, 3, 4, 5).unwrap(),
            level: LogLevel::Info,
            target: "daizy::contact".into(),
            message: "Contact form submitted".into(),
            fields: vec![("name".into(), "Ada".into())],
        };
        assert_eq!(
            format_log_entry(&entry),
            "[03:04:05] INFO  Contact form submitted name=Ada"
        );
    }

    #[test]
    fn errors_are_bold() {
        let theme = Theme::default();
        let style = log_level_style(LogLevel::Error, &theme);
        assert!(style.add_modifier.contains(Modifier::BOLD));
        assert_eq!(log_level_style(LogLevel::Debug, &theme).fg, Some(theme.muted));
    }
}
