//! Off-screen page surface
//!
//! The page is taller than the terminal. Sections draw at their page rows
//! into a full-height buffer, then the rows under the viewport are copied to
//! the frame. Opacity is emulated by blending cell colors toward the page
//! background.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Color;
use ratatui::widgets::Widget;

pub struct PageCanvas {
    buf: Buffer,
    scroll: u16,
    viewport_height: u16,
}

impl PageCanvas {
    pub fn new(width: u16, total_height: u16, scroll: u16, viewport_height: u16) -> Self {
        Self {
            buf: Buffer::empty(Rect::new(0, 0, width, total_height)),
            scroll,
            viewport_height,
        }
    }

    pub fn area(&self) -> Rect {
        self.buf.area
    }

    pub fn buffer(&self) -> &Buffer {
        &self.buf
    }

    pub fn buffer_mut(&mut self) -> &mut Buffer {
        &mut self.buf
    }

    /// Whether any row of `rect` falls inside the viewport
    pub fn is_visible(&self, rect: Rect) -> bool {
        let top = self.scroll;
        let bottom = self.scroll.saturating_add(self.viewport_height);
        rect.height > 0 && rect.y < bottom && rect.bottom() > top
    }

    /// Intersection with the page, None when nothing is left
    pub fn clip(&self, rect: Rect) -> Option<Rect> {
        let clipped = rect.intersection(self.buf.area);
        (!clipped.is_empty()).then_some(clipped)
    }

    /// Render a widget at page coordinates; skipped when off screen
    pub fn render<W: Widget>(&mut self, widget: W, rect: Rect) {
        if !self.is_visible(rect) {
            return;
        }
        if let Some(area) = self.clip(rect) {
            widget.render(area, &mut self.buf);
        }
    }

    /// Fill a region's background
    pub fn fill(&mut self, rect: Rect, bg: Color) {
        if let Some(area) = self.clip(rect) {
            for y in area.top()..area.bottom() {
                for x in area.left()..area.right() {
                    if let Some(cell) = self.buf.cell_mut((x, y)) {
                        cell.set_bg(bg);
                    }
                }
            }
        }
    }

    /// Blend a region's foreground toward `bg` (`opacity` 1.0 leaves it as is)
    pub fn fade(&mut self, rect: Rect, bg: Color, opacity: f64) {
        if let Some(area) = self.clip(rect) {
            fade_area(&mut self.buf, area, bg, opacity);
        }
    }

    /// Copy the visible window of the page onto the frame at `dst`
    pub fn blit(&self, dst: &mut Buffer, at: Rect) {
        blit(&self.buf, self.scroll, dst, at);
    }
}

/// Move a rect down (positive) or up (negative) by whole rows
pub fn shifted(rect: Rect, rows: i32) -> Rect {
    let y = (rect.y as i32 + rows).clamp(0, u16::MAX as i32) as u16;
    Rect { y, ..rect }
}

/// Copy rows starting at `src_row` of `src` into `at` on `dst`
pub fn blit(src: &Buffer, src_row: u16, dst: &mut Buffer, at: Rect) {
    let at = at.intersection(dst.area);
    for dy in 0..at.height {
        let sy = src_row.saturating_add(dy);
        if sy >= src.area.bottom() {
            break;
        }
        for dx in 0..at.width.min(src.area.width) {
            let Some(cell) = src.cell((src.area.x + dx, sy)) else {
                continue;
            };
            if let Some(target) = dst.cell_mut((at.x + dx, at.y + dy)) {
                *target = cell.clone();
            }
        }
    }
}

/// Linear mix of `fg` toward `bg`. `amount` 1.0 is pure `fg`.
///
/// Palette colors cannot be mixed, so they step: background, dark gray,
/// then the color itself.
pub fn blend(fg: Color, bg: Color, amount: f64) -> Color {
    let amount = amount.clamp(0.0, 1.0);
    match (fg, bg) {
        (Color::Rgb(fr, fg_, fb), Color::Rgb(br, bg_, bb)) => {
            let mix = |f: u8, b: u8| (b as f64 + (f as f64 - b as f64) * amount).round() as u8;
            Color::Rgb(mix(fr, br), mix(fg_, bg_), mix(fb, bb))
        }
        (Color::Rgb(r, g, b), Color::Reset) => {
            let mix = |c: u8| (c as f64 * amount).round() as u8;
            Color::Rgb(mix(r), mix(g), mix(b))
        }
        _ if amount >= 0.67 => fg,
        _ if amount >= 0.34 => Color::DarkGray,
        _ => bg,
    }
}

/// Fade every cell's foreground in `area` toward `bg`
pub fn fade_area(buf: &mut Buffer, area: Rect, bg: Color, opacity: f64) {
    if opacity >= 1.0 {
        return;
    }
    let area = area.intersection(buf.area);
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            if let Some(cell) = buf.cell_mut((x, y)) {
                let faded = blend(cell.fg, bg, opacity);
                cell.set_fg(faded);
            }
        }
    }
}

/// Darken everything in `area` for a modal backdrop
pub fn dim_area(buf: &mut Buffer, area: Rect, backdrop: Color) {
    let area = area.intersection(buf.area);
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            if let Some(cell) = buf.cell_mut((x, y)) {
                let fg = blend(cell.fg, backdrop, 0.35);
                cell.set_fg(fg);
                cell.set_bg(backdrop);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::widgets::Paragraph;

    #[test]
    fn blend_mixes_rgb_channels() {
        let white = Color::Rgb(255, 255, 255);
        let black = Color::Rgb(0, 0, 0);
        assert_eq!(blend(white, black, 1.0), white);
        assert_eq!(blend(white, black, 0.0), black);
        assert_eq!(blend(white, black, 0.5), Color::Rgb(128, 128, 128));
    }

    #[test]
    fn blend_steps_palette_colors() {
        assert_eq!(blend(Color::Cyan, Color::Black, 0.9), Color::Cyan);
        assert_eq!(blend(Color::Cyan, Color::Black, 0.5), Color::DarkGray);
        assert_eq!(blend(Color::Cyan, Color::Black, 0.1), Color::Black);
    }

    #[test]
    fn visibility_follows_the_scroll_window() {
        let canvas = PageCanvas::new(20, 100, 30, 10);
        assert!(canvas.is_visible(Rect::new(0, 35, 5, 2)));
        assert!(canvas.is_visible(Rect::new(0, 25, 5, 6)));
        assert!(!canvas.is_visible(Rect::new(0, 25, 5, 5)));
        assert!(!canvas.is_visible(Rect::new(0, 40, 5, 5)));
    }

    #[test]
    fn blit_copies_the_scrolled_window() {
        let mut canvas = PageCanvas::new(10, 50, 20, 5);
        canvas.render(Paragraph::new("hello"), Rect::new(0, 21, 10, 1));
        // Off screen: not drawn at all
        canvas.render(Paragraph::new("gone"), Rect::new(0, 2, 10, 1));
        assert_eq!(canvas.buffer().cell((0, 2)).map(|c| c.symbol()), Some(" "));

        let mut frame = Buffer::empty(Rect::new(0, 0, 10, 5));
        let area = frame.area;
        canvas.blit(&mut frame, area);
        assert_eq!(frame.cell((0, 1)).map(|c| c.symbol()), Some("h"));
        assert_eq!(frame.cell((4, 1)).map(|c| c.symbol()), Some("o"));
    }

    #[test]
    fn shifted_saturates_at_zero() {
        let rect = Rect::new(2, 3, 4, 4);
        assert_eq!(shifted(rect, 2).y, 5);
        assert_eq!(shifted(rect, -10).y, 0);
    }

    #[test]
    fn dim_area_paints_backdrop() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 4, 2));
        dim_area(&mut buf, Rect::new(0, 0, 2, 1), Color::Rgb(5, 5, 5));
        assert_eq!(buf.cell((1, 0)).map(|c| c.bg), Some(Color::Rgb(5, 5, 5)));
        assert_eq!(buf.cell((3, 0)).map(|c| c.bg), Some(Color::Reset));
    }
}
