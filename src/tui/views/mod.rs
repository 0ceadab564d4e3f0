// Views module - screen-level rendering
//
// One screen: the scrolling page with the fixed nav bar over it and the
// status line under it. Overlays stack on top in a fixed order:
// contact dialog, help/logs, toast, then the pointer trail and cursor.

pub mod contact;
mod modal;
mod page;

use super::app::App;
use crate::tui::canvas::{blit, fade_area};
use crate::tui::components::{self, cursor, nav_bar};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;
use std::time::Instant;

/// Main UI render function - called on every frame
pub fn draw(f: &mut Frame, app: &mut App, now: Instant) {
    let area = f.area();
    f.render_widget(Block::default().style(Style::default().bg(app.theme.background)), area);

    page::render(f, app, now);
    render_nav(f, app, now);

    let status = Rect::new(area.x, area.bottom().saturating_sub(1), area.width, 1);
    components::render_status(f, status, app);

    contact::render(f, app, now);

    if let Some(modal) = app.modal {
        modal::render(f, modal, app);
    }

    if let Some(toast) = &app.toast {
        toast.render(f, area, &app.theme);
    }

    cursor::render_trail(f.buffer_mut(), &app.trail, &app.theme, now);
    if app.pointer.is_some() {
        cursor::render_cursor(f.buffer_mut(), &app.cursor, &app.theme, app.hover.is_hovering());
    }
}

/// Nav bar, sliding down from above the screen during its entrance
fn render_nav(f: &mut Frame, app: &App, now: Instant) {
    let state = app.page.nav_state(now);
    if state.opacity <= 0.0 {
        return;
    }

    let width = f.area().width;
    let layout = nav_bar::NavLayout::compute(width);
    let mut buf = Buffer::empty(Rect::new(0, 0, width, nav_bar::NAV_HEIGHT));
    nav_bar::render(&mut buf, &layout, &app.theme, app.hover.hovered().copied());
    let full = buf.area;
    fade_area(&mut buf, full, app.theme.background, state.opacity);

    let rows = app.page.px_to_rows(state.offset_px);
    let hidden = rows.unsigned_abs().min(nav_bar::NAV_HEIGHT as u32) as u16;
    if rows < 0 {
        // Top rows are still above the screen
        let visible = Rect::new(0, 0, width, nav_bar::NAV_HEIGHT - hidden);
        blit(&buf, hidden, f.buffer_mut(), visible);
    } else {
        let below = Rect::new(0, hidden, width, nav_bar::NAV_HEIGHT);
        blit(&buf, 0, f.buffer_mut(), below);
    }
}
