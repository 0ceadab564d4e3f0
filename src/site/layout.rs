//! Page geometry
//!
//! Computes where every section and card sits on the full-height page for a
//! given terminal size. Rows are page rows (row 0 is the top of the hero);
//! the renderer draws the whole page at these positions and the viewport
//! shows a window of it.

use super::content::{self, Media};
use crate::tui::layout::Breakpoint;
use crate::util::wrapped_height;
use ratatui::layout::Rect;

/// Widest the centered content column gets
const MAX_CONTENT_WIDTH: u16 = 96;
/// Horizontal padding on each side of the content column
const SIDE_PADDING: u16 = 2;
/// Blank rows above and below each section's content
const SECTION_PADDING: u16 = 3;
const CARD_GAP: u16 = 2;
const VIDEO_MEDIA_ROWS: u16 = 16;
const IMAGE_MEDIA_ROWS: u16 = 9;
/// Row of the hero headline, counted from the top of the page
const HERO_TEXT_ROW: u16 = 8;

/// In-page link targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Anchor {
    Top,
    Work,
    Services,
    Testimonials,
}

impl Anchor {
    /// The fragment id a link points at
    pub fn id(&self) -> &'static str {
        match self {
            Anchor::Top => "top",
            Anchor::Work => "work",
            Anchor::Services => "services",
            Anchor::Testimonials => "testimonials",
        }
    }

    /// Anchor behind the n-th navigation link
    pub fn nav(index: usize) -> Option<Anchor> {
        match index {
            0 => Some(Anchor::Work),
            1 => Some(Anchor::Services),
            2 => Some(Anchor::Testimonials),
            _ => None,
        }
    }
}

/// Number of testimonial columns: one below md, two at md, three at lg and up
pub fn testimonial_columns(width: u16) -> u16 {
    match Breakpoint::from_width(width) {
        Breakpoint::Compact => 1,
        Breakpoint::Normal => 2,
        Breakpoint::Wide | Breakpoint::UltraWide => 3,
    }
}

/// A portfolio card and its media area
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectBox {
    pub card: Rect,
    pub media: Rect,
}

/// Full page geometry for one terminal size
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLayout {
    pub width: u16,
    pub viewport_height: u16,
    /// Centered content column (x and width only; y/height unused)
    pub column: Rect,

    pub hero: Rect,
    pub work: Rect,
    pub services: Rect,
    pub testimonials: Rect,
    pub footer: Rect,

    /// Resting rows of the hero copy (before any entrance offset)
    pub headline_row: u16,
    pub subheadline_row: u16,
    pub learn_more: Rect,

    pub projects: Vec<ProjectBox>,

    pub services_headline: Rect,
    pub service_columns: Vec<Rect>,
    pub about: Rect,

    pub testimonials_title: Rect,
    pub testimonial_cards: Vec<Rect>,

    pub footer_box: Rect,
    pub get_started: Rect,
}

impl PageLayout {
    pub fn compute(width: u16, viewport_height: u16) -> Self {
        let width = width.max(20);
        let viewport_height = viewport_height.max(10);

        let column_width = width
            .saturating_sub(SIDE_PADDING * 2)
            .min(MAX_CONTENT_WIDTH)
            .max(16);
        let column_x = width.saturating_sub(column_width) / 2;
        let column = Rect::new(column_x, 0, column_width, 0);
        // Text inside a bordered box with one column of padding each side
        let inner = column_width.saturating_sub(4) as usize;

        // ─── Hero ──────────────────────────────────────────────
        let hero = Rect::new(0, 0, width, viewport_height);
        let headline_row = HERO_TEXT_ROW.min(viewport_height.saturating_sub(6));
        let subheadline_row = headline_row + 1;
        let learn_more = Rect::new(
            column_x,
            subheadline_row + 2,
            content::LEARN_MORE.len() as u16,
            1,
        );

        // ─── Work ──────────────────────────────────────────────
        let mut y = hero.bottom() + SECTION_PADDING;
        let work_top = hero.bottom();
        let mut projects = Vec::with_capacity(content::PROJECTS.len());
        for project in content::PROJECTS.iter() {
            let media_rows = match project.media {
                Media::Video => VIDEO_MEDIA_ROWS,
                Media::Image => IMAGE_MEDIA_ROWS,
            };
            let services = project.services.join("  ·  ");
            let text_rows = 1 // title
                + 1
                + wrapped_height(project.description, inner)
                + 1
                + wrapped_height(&services, inner)
                + 1
                + 1; // category
            // border + media + padding + text + padding + border
            let height = 1 + media_rows + 1 + text_rows + 1 + 1;
            let card = Rect::new(column_x, y, column_width, height);
            let media = Rect::new(column_x + 1, y + 1, column_width.saturating_sub(2), media_rows);
            projects.push(ProjectBox { card, media });
            y += height + CARD_GAP;
        }
        let work = Rect::new(0, work_top, width, y - CARD_GAP + SECTION_PADDING - work_top);

        // ─── Services ──────────────────────────────────────────
        let services_top = work.bottom();
        let mut y = services_top + SECTION_PADDING;
        let headline_rows = wrapped_height(content::SERVICES_HEADLINE, inner);
        let services_headline = Rect::new(column_x, y, column_width, headline_rows + 4);
        y = services_headline.bottom() + CARD_GAP;

        let tallest = content::SERVICES
            .iter()
            .map(|c| c.items.len() as u16)
            .max()
            .unwrap_or(0);
        let col_height = 2 + 2 + tallest; // border, heading + gap, items
        let mut service_columns = Vec::with_capacity(content::SERVICES.len());
        if Breakpoint::from_width(width).at_least(Breakpoint::Normal) {
            let n = content::SERVICES.len() as u16;
            let col_width = column_width.saturating_sub(CARD_GAP * (n - 1)) / n;
            for i in 0..n {
                let x = column_x + i * (col_width + CARD_GAP);
                service_columns.push(Rect::new(x, y, col_width, col_height));
            }
            y += col_height + CARD_GAP;
        } else {
            for column in content::SERVICES.iter() {
                let h = 4 + column.items.len() as u16;
                service_columns.push(Rect::new(column_x, y, column_width, h));
                y += h + 1;
            }
            y += CARD_GAP - 1;
        }

        let about_rows: u16 = content::ABOUT
            .iter()
            .map(|p| wrapped_height(p, inner))
            .sum::<u16>()
            + (content::ABOUT.len() as u16 - 1);
        let about = Rect::new(column_x, y, column_width, about_rows + 4);
        let services = Rect::new(
            0,
            services_top,
            width,
            about.bottom() + SECTION_PADDING - services_top,
        );

        // ─── Testimonials ──────────────────────────────────────
        let testimonials_top = services.bottom();
        let mut y = testimonials_top + SECTION_PADDING;
        let testimonials_title = Rect::new(column_x, y, column_width, 5);
        y = testimonials_title.bottom() + CARD_GAP;

        let cols = testimonial_columns(width);
        let card_width = column_width.saturating_sub(CARD_GAP * (cols - 1)) / cols;
        let card_inner = card_width.saturating_sub(4) as usize;
        let mut testimonial_cards = Vec::with_capacity(content::TESTIMONIALS.len());
        for row in content::TESTIMONIALS.chunks(cols as usize) {
            // border, name, role, blank, text, border
            let row_height = row
                .iter()
                .map(|t| 2 + 3 + wrapped_height(t.text, card_inner))
                .max()
                .unwrap_or(0);
            for (i, _) in row.iter().enumerate() {
                let x = column_x + i as u16 * (card_width + CARD_GAP);
                testimonial_cards.push(Rect::new(x, y, card_width, row_height));
            }
            y += row_height + CARD_GAP;
        }
        let testimonials = Rect::new(
            0,
            testimonials_top,
            width,
            y - CARD_GAP + SECTION_PADDING - testimonials_top,
        );

        // ─── Footer ────────────────────────────────────────────
        let footer_top = testimonials.bottom();
        let footer_box = Rect::new(column_x, footer_top + SECTION_PADDING, column_width, 9);
        let button_width = content::GET_STARTED.len() as u16 + 6;
        let get_started = Rect::new(
            column_x + column_width.saturating_sub(button_width) / 2,
            footer_box.y + 3,
            button_width,
            1,
        );
        let footer = Rect::new(
            0,
            footer_top,
            width,
            footer_box.bottom() + SECTION_PADDING - footer_top,
        );

        Self {
            width,
            viewport_height,
            column,
            hero,
            work,
            services,
            testimonials,
            footer,
            headline_row,
            subheadline_row,
            learn_more,
            projects,
            services_headline,
            service_columns,
            about,
            testimonials_title,
            testimonial_cards,
            footer_box,
            get_started,
        }
    }

    /// Total page height in rows
    pub fn total_height(&self) -> u16 {
        self.footer.bottom()
    }

    /// Largest scroll offset that still fills the viewport
    pub fn max_scroll(&self) -> u16 {
        self.total_height().saturating_sub(self.viewport_height)
    }

    /// Page row an anchor link scrolls to
    pub fn anchor_row(&self, anchor: Anchor) -> u16 {
        match anchor {
            Anchor::Top => 0,
            Anchor::Work => self.work.y,
            Anchor::Services => self.services.y,
            Anchor::Testimonials => self.testimonials.y,
        }
    }
}
