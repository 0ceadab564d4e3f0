// Cursor overlay
//
// The pointer trail is drawn as fading dots, newest brightest; the spring
// follower is drawn as a ring that fills in while hovering something
// clickable. Both paint straight onto the frame after everything else.

use crate::motion::{PointerTrailBuffer, Spring2};
use crate::theme::Theme;
use crate::tui::canvas::blend;
use ratatui::{buffer::Buffer, style::Color};
use std::time::Instant;

/// Dot glyph for a trail point by glow radius
fn dot_symbol(glow: u8) -> &'static str {
    match glow {
        6.. => "●",
        3..=5 => "•",
        _ => "·",
    }
}

fn base_color(buf: &Buffer, x: u16, y: u16, fallback: Color) -> Color {
    match buf.cell((x, y)).map(|c| c.bg) {
        Some(Color::Reset) | None => fallback,
        Some(bg) => bg,
    }
}

pub fn render_trail(buf: &mut Buffer, trail: &PointerTrailBuffer, theme: &Theme, now: Instant) {
    // Oldest first so newer dots win shared cells
    let ranked: Vec<_> = trail.ranked().collect();
    for (rank, point) in ranked.into_iter().rev() {
        let intensity = point.intensity(rank, now);
        if intensity <= 0.05 {
            continue;
        }
        let bg = base_color(buf, point.x, point.y, theme.background);
        let color = blend(theme.electric, bg, intensity as f64);
        if let Some(cell) = buf.cell_mut((point.x, point.y)) {
            cell.set_symbol(dot_symbol(crate::motion::TrailPoint::glow(rank)))
                .set_fg(color);
        }
    }
}

pub fn render_cursor(buf: &mut Buffer, spring: &Spring2, theme: &Theme, hovering: bool) {
    let (x, y) = spring.cell();
    let symbol = if hovering { "◉" } else { "○" };
    if let Some(cell) = buf.cell_mut((x, y)) {
        cell.set_symbol(symbol).set_fg(theme.electric);
    }
}
