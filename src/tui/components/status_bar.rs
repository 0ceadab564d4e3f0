// Status bar component
//
// One line under the page: current section, scroll position, background
// image status, and the key hints.

use crate::assets::AssetStatus;
use crate::tui::app::App;
use crate::tui::layout::Breakpoint;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

fn asset_glyph(status: &AssetStatus) -> &'static str {
    match status {
        AssetStatus::Pending => "…",
        AssetStatus::Loaded { via_fallback: true, .. } => "✓*",
        AssetStatus::Loaded { .. } => "✓",
        AssetStatus::Failed => "✗",
    }
}

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let bp = Breakpoint::from_width(area.width);
    let dim = Style::default().fg(theme.muted);

    let mut spans = vec![
        Span::styled(format!(" {} ", app.current_section()), Style::default().fg(theme.electric)),
        Span::styled(format!("│ {:>3}% ", app.scroll_percent()), dim),
    ];

    if bp.at_least(Breakpoint::Normal) {
        spans.push(Span::styled(
            format!(
                "│ bg {} hero {} ",
                asset_glyph(&app.background),
                asset_glyph(&app.hero_image)
            ),
            dim,
        ));
    }

    let hints = if bp.at_least(Breakpoint::Normal) {
        "│ ↑↓ scroll · 1-3 jump · c contact · ? help · q quit"
    } else {
        "│ ? help · q quit"
    };
    spans.push(Span::styled(hints, dim));

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(theme.surface));
    f.render_widget(status, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_loads_are_marked() {
        let loaded = AssetStatus::Loaded {
            url: "u".into(),
            via_fallback: true,
            bytes: 1,
        };
        assert_eq!(asset_glyph(&loaded), "✓*");
        assert_eq!(asset_glyph(&AssetStatus::Failed), "✗");
        assert_eq!(asset_glyph(&AssetStatus::Pending), "…");
    }
}
