// Page rendering
//
// Draws every section at its page rows into a `PageCanvas`, then copies the
// rows under the viewport to the frame. Entrance animations apply here:
// opacity becomes a color blend toward the background, offsets become whole
// rows.

use crate::assets::AssetStatus;
use crate::site::content::{self, Media, Project, Testimonial};
use crate::site::{HeroPart, Target};
use crate::theme::Theme;
use crate::tui::app::App;
use crate::tui::canvas::{blend, shifted, PageCanvas};
use crate::tui::components::scrollbar::render_scrollbar_raw;
use crate::util::wrap_words;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use std::time::Instant;

fn wrapped(text: &str, width: u16, style: Style) -> Vec<Line<'static>> {
    wrap_words(text, width as usize)
        .into_iter()
        .map(|l| Line::from(Span::styled(l, style)))
        .collect()
}

/// Inside of a bordered box with one column of padding each side
fn padded(rect: Rect) -> Rect {
    Rect::new(
        rect.x + 2,
        rect.y + 1,
        rect.width.saturating_sub(4),
        rect.height.saturating_sub(2),
    )
}

fn card_block(theme: &Theme) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(theme.border_type)
        .border_style(Style::default().fg(theme.border))
        .style(Style::default().bg(theme.surface))
}

pub fn render(f: &mut Frame, app: &App, now: Instant) {
    let page = &app.page;
    let layout = page.layout();
    let viewport = app.viewport();
    let theme = &app.theme;

    let mut canvas = PageCanvas::new(
        layout.width,
        layout.total_height(),
        page.scroll_offset(),
        viewport.height,
    );
    let area = canvas.area();
    canvas.fill(area, theme.background);

    if app.background.is_loaded() {
        texture(&mut canvas, theme, page.scroll_offset(), viewport.height);
    }
    hero(&mut canvas, app, now);
    work(&mut canvas, app, now);
    services(&mut canvas, app);
    testimonials(&mut canvas, app, now);
    footer(&mut canvas, app);

    canvas.blit(f.buffer_mut(), viewport);

    render_scrollbar_raw(
        f,
        viewport,
        layout.total_height() as usize,
        viewport.height as usize,
        page.scroll_offset() as usize,
        Style::default().fg(theme.border),
    );
}

/// Faint dot grid standing in for the page background image
fn texture(canvas: &mut PageCanvas, theme: &Theme, scroll: u16, rows: u16) {
    let color = blend(theme.muted, theme.background, 0.2);
    let width = canvas.area().width;
    let bottom = scroll.saturating_add(rows).min(canvas.area().bottom());
    let buf = canvas.buffer_mut();
    for y in scroll..bottom {
        for x in 0..width {
            if (x as u32 * 7 + y as u32 * 13) % 29 == 0 {
                if let Some(cell) = buf.cell_mut((x, y)) {
                    cell.set_symbol("·").set_fg(color);
                }
            }
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Hero
// ─────────────────────────────────────────────────────────────────────────────

fn hero(canvas: &mut PageCanvas, app: &App, now: Instant) {
    let page = &app.page;
    let layout = page.layout();
    let theme = &app.theme;

    if !canvas.is_visible(layout.hero) {
        return;
    }

    if app.hero_image.is_loaded() {
        hero_backdrop(canvas, app);
    }

    let column = layout.column;
    let draw = |canvas: &mut PageCanvas, part: HeroPart, row: u16, line: Line<'static>| {
        let state = page.hero_state(part, now);
        if state.opacity <= 0.0 {
            return;
        }
        let rect = shifted(
            Rect::new(column.x, row, column.width, 1),
            page.px_to_rows(state.offset_px),
        );
        canvas.render(Paragraph::new(line), rect);
        canvas.fade(rect, theme.background, state.opacity);
    };

    // Letter-spaced when there is room, like a display face
    let headline = if column.width as usize >= content::HEADLINE.len() * 2 {
        content::HEADLINE
            .chars()
            .map(|c| c.to_string())
            .collect::<Vec<_>>()
            .join(" ")
    } else {
        content::HEADLINE.to_string()
    };
    draw(
        canvas,
        HeroPart::Headline,
        layout.headline_row,
        Line::from(Span::styled(
            headline,
            Style::default()
                .fg(theme.foreground)
                .add_modifier(Modifier::BOLD),
        )),
    );
    draw(
        canvas,
        HeroPart::Subheadline,
        layout.subheadline_row,
        Line::from(Span::styled(content::SUBHEADLINE, Style::default().fg(theme.muted))),
    );

    let hovered = app.hover.hovered() == Some(&Target::LearnMore);
    let learn_more = Style::default()
        .fg(if hovered { theme.electric } else { theme.foreground })
        .add_modifier(Modifier::UNDERLINED);
    draw(
        canvas,
        HeroPart::LearnMore,
        layout.learn_more.y,
        Line::from(vec![
            Span::styled(content::LEARN_MORE, learn_more),
            Span::styled(" →", Style::default().fg(theme.electric)),
        ]),
    );
}

/// Diagonal streaks standing in for the hero photo, shifted by the parallax
fn hero_backdrop(canvas: &mut PageCanvas, app: &App) {
    let theme = &app.theme;
    let hero = app.page.layout().hero;
    let shift = app.page.parallax_rows() as i32;
    let color = blend(theme.electric, theme.background, 0.15);
    let buf = canvas.buffer_mut();

    for y in hero.top()..hero.bottom() {
        // Image rows move down with the scroll, slower than the page
        let image_row = y as i32 - shift;
        if image_row < 0 {
            continue;
        }
        for x in hero.left()..hero.right() {
            if (x as i32 + image_row * 2) % 17 == 0 {
                if let Some(cell) = buf.cell_mut((x, y)) {
                    cell.set_symbol("╱").set_fg(color);
                }
            }
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Work
// ─────────────────────────────────────────────────────────────────────────────

fn work(canvas: &mut PageCanvas, app: &App, now: Instant) {
    let page = &app.page;
    for (i, (project, boxes)) in content::PROJECTS
        .iter()
        .zip(&page.layout().projects)
        .enumerate()
    {
        let Some(reveal) = page.project_reveal(i) else {
            continue;
        };
        let opacity = reveal.opacity(now);
        if opacity <= 0.0 {
            continue;
        }
        let rows = page.px_to_rows(reveal.offset_px(now));
        let card = shifted(boxes.card, rows);
        if !canvas.is_visible(card) {
            continue;
        }
        project_card(canvas, &app.theme, project, card, shifted(boxes.media, rows));
        canvas.fade(card, app.theme.background, opacity);
    }
}

fn project_card(
    canvas: &mut PageCanvas,
    theme: &Theme,
    project: &Project,
    card: Rect,
    media: Rect,
) {
    canvas.render(card_block(theme), card);

    let (label, fill) = match project.media {
        Media::Video => ("▶  VIDEO", "▒"),
        Media::Image => ("▣  IMAGE", "░"),
    };
    let fill_style = Style::default().fg(blend(theme.border, theme.surface, 0.8));
    let fill_lines: Vec<Line> = (0..media.height)
        .map(|_| Line::from(Span::styled(fill.repeat(media.width as usize), fill_style)))
        .collect();
    canvas.render(Paragraph::new(fill_lines), media);
    let label_rect = Rect::new(media.x, media.y + media.height / 2, media.width, 1);
    canvas.render(
        Paragraph::new(Span::styled(
            label,
            Style::default()
                .fg(theme.muted)
                .bg(theme.surface)
                .add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center),
        label_rect,
    );

    let text = Rect::new(
        card.x + 2,
        media.bottom() + 1,
        card.width.saturating_sub(4),
        card.bottom().saturating_sub(media.bottom() + 2),
    );
    let mut lines = vec![
        Line::from(Span::styled(
            project.title,
            Style::default()
                .fg(theme.foreground)
                .add_modifier(Modifier::BOLD),
        )),
        Line::raw(""),
    ];
    lines.extend(wrapped(project.description, text.width, Style::default().fg(theme.muted)));
    lines.push(Line::raw(""));
    lines.extend(wrapped(
        &project.services.join("  ·  "),
        text.width,
        Style::default().fg(theme.electric),
    ));
    lines.push(Line::raw(""));
    lines.push(Line::from(Span::styled(
        project.category,
        Style::default().fg(theme.muted).add_modifier(Modifier::DIM),
    )));
    canvas.render(Paragraph::new(lines), text);
}

// ─────────────────────────────────────────────────────────────────────────────
// Services
// ─────────────────────────────────────────────────────────────────────────────

fn services(canvas: &mut PageCanvas, app: &App) {
    let layout = app.page.layout();
    let theme = &app.theme;
    if !canvas.is_visible(layout.services) {
        return;
    }

    let headline = layout.services_headline;
    canvas.render(card_block(theme), headline);
    let inner = padded(headline);
    canvas.render(
        Paragraph::new(wrapped(
            content::SERVICES_HEADLINE,
            inner.width,
            Style::default()
                .fg(theme.foreground)
                .add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center),
        Rect { y: inner.y + 1, ..inner },
    );

    for (column, rect) in content::SERVICES.iter().zip(&layout.service_columns) {
        canvas.render(card_block(theme), *rect);
        let mut lines = vec![
            Line::from(vec![
                Span::styled("● ", Style::default().fg(theme.accent(column.accent))),
                Span::styled(
                    column.heading,
                    Style::default()
                        .fg(theme.foreground)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::raw(""),
        ];
        lines.extend(
            column
                .items
                .iter()
                .map(|item| Line::from(Span::styled(*item, Style::default().fg(theme.muted)))),
        );
        canvas.render(Paragraph::new(lines), padded(*rect));
    }

    let about = layout.about;
    canvas.render(card_block(theme), about);
    let inner = padded(about);
    let mut lines = Vec::new();
    for (i, paragraph) in content::ABOUT.iter().enumerate() {
        if i > 0 {
            lines.push(Line::raw(""));
        }
        lines.extend(wrapped(paragraph, inner.width, Style::default().fg(theme.muted)));
    }
    canvas.render(Paragraph::new(lines), Rect { y: inner.y + 1, ..inner });
}

// ─────────────────────────────────────────────────────────────────────────────
// Testimonials
// ─────────────────────────────────────────────────────────────────────────────

fn testimonials(canvas: &mut PageCanvas, app: &App, now: Instant) {
    let page = &app.page;
    let layout = page.layout();
    let theme = &app.theme;
    if !canvas.is_visible(layout.testimonials) {
        return;
    }

    canvas.render(
        Paragraph::new(Span::styled(
            content::TESTIMONIALS_HEADLINE,
            Style::default()
                .fg(theme.foreground)
                .add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center),
        Rect {
            y: layout.testimonials_title.y + 2,
            height: 1,
            ..layout.testimonials_title
        },
    );

    for (i, (testimonial, rect)) in content::TESTIMONIALS
        .iter()
        .zip(&layout.testimonial_cards)
        .enumerate()
    {
        let Some(reveal) = page.testimonial_reveal(i) else {
            continue;
        };
        let opacity = reveal.opacity(now);
        if opacity <= 0.0 {
            continue;
        }
        let card = shifted(*rect, page.px_to_rows(reveal.offset_px(now)));
        testimonial_card(canvas, theme, testimonial, card);
        canvas.fade(card, theme.background, opacity);
    }
}

fn testimonial_card(canvas: &mut PageCanvas, theme: &Theme, testimonial: &Testimonial, card: Rect) {
    canvas.render(card_block(theme), card);
    let inner = padded(card);
    let mut lines = vec![
        Line::from(Span::styled(
            testimonial.name,
            Style::default()
                .fg(theme.foreground)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(testimonial.role, Style::default().fg(theme.muted))),
        Line::raw(""),
    ];
    lines.extend(wrapped(
        testimonial.text,
        inner.width,
        Style::default().fg(theme.foreground),
    ));
    canvas.render(Paragraph::new(lines), inner);
}

// ─────────────────────────────────────────────────────────────────────────────
// Footer
// ─────────────────────────────────────────────────────────────────────────────

fn footer(canvas: &mut PageCanvas, app: &App) {
    let layout = app.page.layout();
    let theme = &app.theme;
    if !canvas.is_visible(layout.footer) {
        return;
    }

    let frame = layout.footer_box;
    canvas.render(card_block(theme), frame);
    let row = |y: u16| Rect::new(frame.x + 1, y, frame.width.saturating_sub(2), 1);

    canvas.render(
        Paragraph::new(Span::styled(
            content::FOOTER_HEADLINE,
            Style::default()
                .fg(theme.foreground)
                .add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center),
        row(frame.y + 1),
    );

    let button = if app.hover.hovered() == Some(&Target::GetStarted) {
        Style::default()
            .fg(theme.background)
            .bg(theme.electric)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
            .fg(theme.electric)
            .bg(theme.surface)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
    };
    canvas.render(
        Paragraph::new(format!("   {}   ", content::GET_STARTED)).style(button),
        layout.get_started,
    );

    canvas.render(
        Paragraph::new(Span::styled(content::COPYRIGHT, Style::default().fg(theme.muted)))
            .alignment(Alignment::Center),
        row(frame.bottom().saturating_sub(2)),
    );
}
