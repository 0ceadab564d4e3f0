// Navigation bar component
//
// Fixed three-row bar over the top of the page: brand on the left, section
// links in the middle (hidden on narrow terminals), the START A PROJECT
// button on the right. Drawn into its own buffer so the entrance can slide it
// down from above the screen.

use crate::site::content;
use crate::site::{Anchor, Target};
use crate::theme::Theme;
use crate::tui::layout::Breakpoint;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

pub const NAV_HEIGHT: u16 = 3;
/// Row of the labels inside the bar
const LABEL_ROW: u16 = 1;
const EDGE_PADDING: u16 = 2;
const LINK_GAP: u16 = 4;

/// Screen positions of the bar's clickable labels
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLayout {
    pub brand: Rect,
    pub links: Vec<(Anchor, Rect)>,
    pub start_project: Rect,
}

impl NavLayout {
    pub fn compute(width: u16) -> Self {
        let brand = Rect::new(EDGE_PADDING, LABEL_ROW, content::BRAND.len() as u16, 1);

        let button_width = content::START_A_PROJECT.len() as u16 + 4;
        let start_project = Rect::new(
            width.saturating_sub(EDGE_PADDING + button_width),
            LABEL_ROW,
            button_width,
            1,
        );

        let mut links = Vec::new();
        if Breakpoint::from_width(width).at_least(Breakpoint::Normal) {
            let total: u16 = content::NAV_LINKS.iter().map(|l| l.len() as u16).sum::<u16>()
                + LINK_GAP * (content::NAV_LINKS.len() as u16 - 1);
            let mut x = width.saturating_sub(total) / 2;
            // Only when the links clear both ends of the bar
            if x > brand.right() + 1 && x + total + 1 < start_project.x {
                for (i, label) in content::NAV_LINKS.iter().enumerate() {
                    if let Some(anchor) = Anchor::nav(i) {
                        let w = label.len() as u16;
                        links.push((anchor, Rect::new(x, LABEL_ROW, w, 1)));
                        x += w + LINK_GAP;
                    }
                }
            }
        }

        Self {
            brand,
            links,
            start_project,
        }
    }

    /// Every target with its bounds, in drawing order
    pub fn targets(&self) -> impl Iterator<Item = (Target, Rect)> + '_ {
        std::iter::once((Target::Brand, self.brand))
            .chain(self.links.iter().map(|(a, r)| (Target::NavLink(*a), *r)))
            .chain(std::iter::once((Target::StartProject, self.start_project)))
    }
}

/// Draw the bar into a `NAV_HEIGHT`-row buffer
pub fn render(buf: &mut Buffer, layout: &NavLayout, theme: &Theme, hovered: Option<Target>) {
    let area = buf.area;
    Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(theme.border))
        .style(Style::default().bg(theme.surface))
        .render(area, buf);

    let label_style = |target: Target, base: Style| {
        if hovered == Some(target) {
            base.fg(theme.electric)
        } else {
            base
        }
    };

    Paragraph::new(Line::from(Span::styled(
        content::BRAND,
        label_style(
            Target::Brand,
            Style::default()
                .fg(theme.foreground)
                .add_modifier(Modifier::BOLD),
        ),
    )))
    .render(layout.brand.intersection(area), buf);

    for ((anchor, rect), label) in layout.links.iter().zip(content::NAV_LINKS) {
        Paragraph::new(Span::styled(
            label,
            label_style(Target::NavLink(*anchor), Style::default().fg(theme.muted)),
        ))
        .render(rect.intersection(area), buf);
    }

    let button = if hovered == Some(Target::StartProject) {
        Style::default()
            .fg(theme.background)
            .bg(theme.electric)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
            .fg(theme.electric)
            .bg(theme.surface)
            .add_modifier(Modifier::BOLD)
    };
    Paragraph::new(Line::from(format!("  {}  ", content::START_A_PROJECT)))
        .style(button)
        .render(layout.start_project.intersection(area), buf);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn links_hidden_on_compact_width() {
        let layout = NavLayout::compute(50);
        assert!(layout.links.is_empty());
        assert_eq!(layout.targets().count(), 2);
    }

    #[test]
    fn links_sit_between_brand_and_button() {
        let layout = NavLayout::compute(120);
        assert_eq!(layout.links.len(), 3);
        assert_eq!(layout.links[0].0, Anchor::Work);
        assert!(layout.links[0].1.x > layout.brand.right());
        assert!(layout.links[2].1.right() < layout.start_project.x);
        assert_eq!(layout.start_project.right(), 118);
    }

    #[test]
    fn hovered_button_inverts() {
        let layout = NavLayout::compute(80);
        let theme = Theme::default();
        let mut buf = Buffer::empty(Rect::new(0, 0, 80, NAV_HEIGHT));
        render(&mut buf, &layout, &theme, Some(Target::StartProject));
        let cell = buf
            .cell((layout.start_project.x + 2, LABEL_ROW))
            .expect("in bounds");
        assert_eq!(cell.symbol(), "S");
        assert_eq!(cell.bg, theme.electric);
    }
}
