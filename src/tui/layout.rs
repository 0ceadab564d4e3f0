//! Responsive breakpoints and overlay geometry
//!
//! Single source of truth for width thresholds; page layout and overlays ask
//! here instead of comparing widths inline.

use ratatui::layout::Rect;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Breakpoint {
    /// < 60 cols: phone-width page, single column everywhere
    Compact,
    /// 60-99 cols: md, nav links shown, two testimonial columns
    Normal,
    /// 100-139 cols: lg, three testimonial columns
    Wide,
    /// 140+ cols
    UltraWide,
}

impl Breakpoint {
    pub fn from_width(width: u16) -> Self {
        match width {
            0..=59 => Breakpoint::Compact,
            60..=99 => Breakpoint::Normal,
            100..=139 => Breakpoint::Wide,
            _ => Breakpoint::UltraWide,
        }
    }

    /// Check if at least this breakpoint (inclusive)
    pub fn at_least(&self, min: Breakpoint) -> bool {
        *self >= min
    }
}

/// Rect of the given size centered in `area`, shrunk to fit
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x + (area.width - width) / 2;
    let y = area.y + (area.height - height) / 2;
    Rect::new(x, y, width, height)
}

/// Rect covering a percentage of `area`, centered
pub fn centered_percent(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let width = (area.width as u32 * percent_x.min(100) as u32 / 100) as u16;
    let height = (area.height as u32 * percent_y.min(100) as u32 / 100) as u16;
    centered_rect(width, height, area)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakpoint_thresholds() {
        assert_eq!(Breakpoint::from_width(40), Breakpoint::Compact);
        assert_eq!(Breakpoint::from_width(59), Breakpoint::Compact);
        assert_eq!(Breakpoint::from_width(60), Breakpoint::Normal);
        assert_eq!(Breakpoint::from_width(99), Breakpoint::Normal);
        assert_eq!(Breakpoint::from_width(100), Breakpoint::Wide);
        assert_eq!(Breakpoint::from_width(139), Breakpoint::Wide);
        assert_eq!(Breakpoint::from_width(140), Breakpoint::UltraWide);
    }

    #[test]
    fn at_least_comparisons() {
        let wide = Breakpoint::Wide;
        assert!(wide.at_least(Breakpoint::Compact));
        assert!(wide.at_least(Breakpoint::Wide));
        assert!(!wide.at_least(Breakpoint::UltraWide));
    }

    #[test]
    fn centered_rect_fits_inside_area() {
        let area = Rect::new(0, 0, 80, 24);
        assert_eq!(centered_rect(40, 10, area), Rect::new(20, 7, 40, 10));
        // Larger than the area: clamped, anchored at the origin
        assert_eq!(centered_rect(100, 30, area), area);
        assert_eq!(centered_percent(50, 50, area), Rect::new(20, 6, 40, 12));
    }
}
