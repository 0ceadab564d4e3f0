// Contact dialog rendering
//
// Centered panel over a dimmed page. Idle: title, intro, three input boxes
// and the Cancel / Send Message buttons. Submitted: a confirmation with the
// auto-close countdown.

use crate::contact::{ContactModal, Field};
use crate::site::{content, Target};
use crate::theme::Theme;
use crate::tui::app::App;
use crate::tui::canvas::dim_area;
use crate::tui::layout::centered_rect;
use crate::tui::modal::ContactFocus;
use crate::util::wrap_words;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use std::time::Instant;
use unicode_width::UnicodeWidthChar;

const DIALOG_WIDTH: u16 = 60;
const DIALOG_HEIGHT: u16 = 22;
const MESSAGE_ROWS: u16 = 5;

/// Screen geometry of the dialog and its controls
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DialogLayout {
    pub dialog: Rect,
    pub title: Rect,
    pub intro: Rect,
    /// Input boxes (with borders) in tab order
    pub fields: [Rect; 3],
    pub cancel: Rect,
    pub send: Rect,
}

pub fn dialog_layout(screen: Rect) -> DialogLayout {
    let width = DIALOG_WIDTH.min(screen.width.saturating_sub(4));
    let dialog = centered_rect(width, DIALOG_HEIGHT, screen);
    let x = dialog.x + 2;
    let width = dialog.width.saturating_sub(4);
    let top = dialog.y + 2;

    let title = Rect::new(x, top, width, 1);
    let intro = Rect::new(x, top + 2, width, 2);
    let name = Rect::new(x, top + 5, width, 3);
    let email = Rect::new(x, top + 8, width, 3);
    let message = Rect::new(x, top + 11, width, MESSAGE_ROWS);

    let send_width = content::MODAL_SEND.len() as u16 + 4;
    let cancel_width = content::MODAL_CANCEL.len() as u16 + 4;
    let buttons_y = top + 11 + MESSAGE_ROWS + 1;
    let send = Rect::new((x + width).saturating_sub(send_width), buttons_y, send_width, 1);
    let cancel = Rect::new(send.x.saturating_sub(cancel_width + 2), buttons_y, cancel_width, 1);

    // Anything pushed off a very short screen is dropped
    let clip = |r: Rect| r.intersection(dialog);
    DialogLayout {
        dialog,
        title: clip(title),
        intro: clip(intro),
        fields: [clip(name), clip(email), clip(message)],
        cancel: clip(cancel),
        send: clip(send),
    }
}

/// Last `cols` display columns of `s`
fn tail_to_width(s: &str, cols: usize) -> &str {
    let mut used = 0;
    for (idx, ch) in s.char_indices().rev() {
        used += ch.width().unwrap_or(0);
        if used > cols {
            return &s[idx + ch.len_utf8()..];
        }
    }
    s
}

pub fn render(f: &mut Frame, app: &App, now: Instant) {
    let Some(owner) = app.page.active_modal() else {
        return;
    };
    let modal = app.page.modal(owner);
    let theme = &app.theme;

    let screen = f.area();
    dim_area(f.buffer_mut(), screen, theme.backdrop);

    let layout = dialog_layout(screen);
    f.render_widget(Clear, layout.dialog);
    f.render_widget(
        Block::default()
            .borders(Borders::ALL)
            .border_type(theme.border_type)
            .border_style(Style::default().fg(theme.border))
            .style(Style::default().bg(theme.surface)),
        layout.dialog,
    );

    if modal.is_submitted() {
        render_sent(f, modal, &layout, theme, now);
    } else {
        render_form(f, app, modal, &layout);
    }
}

fn render_sent(
    f: &mut Frame,
    modal: &ContactModal,
    layout: &DialogLayout,
    theme: &Theme,
    now: Instant,
) {
    let seconds = modal
        .time_until_close(now)
        .map(|d| d.as_secs_f64().ceil() as u64)
        .unwrap_or(0);

    let lines = vec![
        Line::raw(""),
        Line::from(Span::styled(
            "✓",
            Style::default().fg(theme.green).add_modifier(Modifier::BOLD),
        )),
        Line::raw(""),
        Line::from(Span::styled(
            content::MODAL_SENT_TITLE,
            Style::default()
                .fg(theme.foreground)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(content::MODAL_SENT_BODY, Style::default().fg(theme.muted))),
        Line::raw(""),
        Line::from(Span::styled(
            format!("Closing in {}s", seconds),
            Style::default().fg(theme.muted),
        )),
    ];

    let inner = centered_rect(
        layout.dialog.width.saturating_sub(4),
        lines.len() as u16,
        layout.dialog,
    );
    f.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner);
}

fn render_form(f: &mut Frame, app: &App, modal: &ContactModal, layout: &DialogLayout) {
    let theme = &app.theme;
    let hovered = app.hover.hovered().copied();

    f.render_widget(
        Paragraph::new(Span::styled(
            content::MODAL_TITLE,
            Style::default()
                .fg(theme.foreground)
                .add_modifier(Modifier::BOLD),
        )),
        layout.title,
    );
    let intro: Vec<Line> = wrap_words(content::MODAL_INTRO, layout.intro.width as usize)
        .into_iter()
        .map(|l| Line::from(Span::styled(l, Style::default().fg(theme.muted))))
        .collect();
    f.render_widget(Paragraph::new(intro), layout.intro);

    for (field, rect) in Field::ALL.into_iter().zip(layout.fields) {
        let focused = app.contact_focus == ContactFocus::Field(field);
        let border = if app.missing_field == Some(field) {
            theme.error
        } else if focused || hovered == Some(Target::ModalField(field)) {
            theme.electric
        } else {
            theme.border
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(theme.border_type)
            .border_style(Style::default().fg(border));
        let inner_width = rect.width.saturating_sub(2) as usize;
        let value = modal.form().get(field);

        let lines: Vec<Line> = if value.is_empty() {
            vec![Line::from(vec![
                Span::styled(if focused { "▏" } else { "" }, Style::default().fg(theme.electric)),
                Span::styled(field.placeholder(), Style::default().fg(theme.muted)),
            ])]
        } else if field == Field::Message {
            // Keep the end of the message (where typing happens) in view
            let wrapped = wrap_words(value, inner_width.saturating_sub(1).max(1));
            let rows = rect.height.saturating_sub(2) as usize;
            let skip = wrapped.len().saturating_sub(rows);
            let count = wrapped.len() - skip;
            wrapped
                .into_iter()
                .skip(skip)
                .enumerate()
                .map(|(i, l)| {
                    let mut spans = vec![Span::styled(l, Style::default().fg(theme.foreground))];
                    if focused && i + 1 == count {
                        spans.push(Span::styled("▏", Style::default().fg(theme.electric)));
                    }
                    Line::from(spans)
                })
                .collect()
        } else {
            let shown = tail_to_width(value, inner_width.saturating_sub(1));
            let mut spans = vec![Span::styled(
                shown.to_string(),
                Style::default().fg(theme.foreground),
            )];
            if focused {
                spans.push(Span::styled("▏", Style::default().fg(theme.electric)));
            }
            vec![Line::from(spans)]
        };

        f.render_widget(Paragraph::new(lines).block(block), rect);
    }

    let cancel_active =
        app.contact_focus == ContactFocus::Cancel || hovered == Some(Target::ModalCancel);
    let cancel_style = if cancel_active {
        Style::default().fg(theme.foreground).bg(theme.border)
    } else {
        Style::default().fg(theme.muted).bg(theme.surface)
    };
    f.render_widget(
        Paragraph::new(format!("  {}  ", content::MODAL_CANCEL)).style(cancel_style),
        layout.cancel,
    );

    let send_active = app.contact_focus == ContactFocus::Send || hovered == Some(Target::ModalSend);
    let mut send_style = Style::default()
        .fg(theme.background)
        .bg(theme.electric)
        .add_modifier(Modifier::BOLD);
    if send_active {
        send_style = send_style.add_modifier(Modifier::UNDERLINED);
    }
    f.render_widget(
        Paragraph::new(format!("  {}  ", content::MODAL_SEND)).style(send_style),
        layout.send,
    );
}
