// Overlay rendering
//
// Terminal-only overlays drawn above the page:
// - Help: keyboard and mouse reference plus the active theme
// - Logs: captured tracing output (scrollable)

use crate::config::VERSION;
use crate::tui::app::App;
use crate::tui::layout::{centered_percent, centered_rect};
use crate::tui::modal::Modal;
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

pub fn render(f: &mut Frame, modal: Modal, app: &mut App) {
    match modal {
        Modal::Help => render_help(f, app),
        Modal::Logs => render_logs(f, app),
    }
}

fn render_help(f: &mut Frame, app: &App) {
    let theme = &app.theme;
    let key_style = Style::default().fg(theme.electric);
    let desc_style = Style::default().fg(theme.foreground);
    let header_style = Style::default()
        .fg(theme.foreground)
        .add_modifier(Modifier::BOLD);

    // "    key         description"
    let kb = |key: &str, desc: &str| -> Line {
        Line::from(vec![
            Span::raw("    "),
            Span::styled(format!("{:<12}", key), key_style),
            Span::styled(desc.to_string(), desc_style),
        ])
    };

    let content = Text::from(vec![
        Line::raw(""),
        Line::from(Span::styled("  Page", header_style)),
        kb("↑/↓, j/k", "Scroll"),
        kb("PgUp/PgDn", "Scroll a screen"),
        kb("Home/End", "Top / bottom"),
        kb("1 2 3", "Work / Services / Testimonials"),
        kb("c", "Start a project"),
        Line::raw(""),
        Line::from(Span::styled("  Contact form", header_style)),
        kb("Tab/⇧Tab", "Next / previous field"),
        kb("Enter", "Next field / press button"),
        kb("Esc", "Close"),
        Line::raw(""),
        Line::from(Span::styled("  Mouse", header_style)),
        kb("Move", "Cursor and trail"),
        kb("Click", "Links and buttons"),
        kb("Wheel", "Scroll"),
        Line::raw(""),
        Line::from(Span::styled("  General", header_style)),
        kb("L", "Logs"),
        kb("?", "Toggle this help"),
        kb("q, Ctrl-C", "Quit"),
        Line::raw(""),
        Line::from(vec![
            Span::styled("  Theme: ", desc_style),
            Span::styled(theme.name.as_str(), key_style),
            Span::styled(format!("  ·  v{}", VERSION), Style::default().fg(theme.muted)),
        ]),
    ]);

    let area = centered_rect(48, 28, f.area());
    f.render_widget(Clear, area);

    let paragraph = Paragraph::new(content)
        .style(Style::default().bg(theme.surface))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.electric))
                .border_type(theme.border_type)
                .title(" Help ")
                .title_bottom(Line::from(" Press ? or Esc to close ").centered()),
        );

    f.render_widget(paragraph, area);
}

fn render_logs(f: &mut Frame, app: &mut App) {
    let area = centered_percent(90, 80, f.area());
    let entries = app.log_buffer.get_all();
    app.logs_panel
        .sync_entries(entries.len(), area.height.saturating_sub(2) as usize);

    f.render_widget(Clear, area);
    app.logs_panel.render(f, area, &entries, &app.theme);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::logging::LogBuffer;
    use ratatui::{backend::TestBackend, Terminal};

    #[test]
    fn help_lists_theme_name() {
        let mut app = App::new(&Config::default(), LogBuffer::new(), 80, 30);
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        terminal.draw(|f| render(f, Modal::Help, &mut app)).unwrap();
        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains("Toggle this help"));
        assert!(text.contains(&app.theme.name));
    }
}
