//! Page composition state
//!
//! Owns everything that changes while the page is on screen: the scroll
//! position, the entrance timelines, one reveal per card, the hero parallax
//! and the three independent contact modals. Each section's modal is its own
//! instance; nothing else is shared between sections.

use super::content;
use super::layout::{Anchor, PageLayout};
use crate::config::MotionConfig;
use crate::contact::ContactModal;
use crate::motion::{
    visible_fraction, Ease, Position, RevealOnViewport, RevealStyle, ScrollLinkedTransform,
    Timeline, TweenSpec, TweenState,
};
use std::time::{Duration, Instant};

/// Hero copy elements animated by the entrance timeline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeroPart {
    Headline,
    Subheadline,
    LearnMore,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct NavBar;

/// Section that owns a contact modal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModalOwner {
    Nav,
    Hero,
    Footer,
}

impl ModalOwner {
    pub const ALL: [ModalOwner; 3] = [ModalOwner::Nav, ModalOwner::Hero, ModalOwner::Footer];
}

fn hero_timeline() -> Timeline<HeroPart> {
    Timeline::new(Duration::from_millis(500))
        .from_to(
            &[HeroPart::Headline, HeroPart::Subheadline],
            TweenSpec {
                duration: Duration::from_millis(1200),
                ease: Ease::OutCubic,
                from_offset_px: 50.0,
            },
            Duration::from_millis(100),
            Position::After,
        )
        .from_to(
            &[HeroPart::LearnMore],
            TweenSpec {
                duration: Duration::from_millis(800),
                ease: Ease::OutQuad,
                from_offset_px: 20.0,
            },
            Duration::ZERO,
            Position::Overlap(Duration::from_millis(400)),
        )
}

fn nav_timeline() -> Timeline<NavBar> {
    Timeline::new(Duration::ZERO).from_to(
        &[NavBar],
        TweenSpec {
            duration: Duration::from_millis(1200),
            ease: Ease::Signature,
            from_offset_px: -100.0,
        },
        Duration::ZERO,
        Position::After,
    )
}

pub struct Page {
    layout: PageLayout,
    /// Rows scrolled past the top of the page
    scroll: u16,
    px_per_row: f64,
    parallax: ScrollLinkedTransform,

    hero: Timeline<HeroPart>,
    nav: Timeline<NavBar>,
    project_reveals: Vec<RevealOnViewport>,
    testimonial_reveals: Vec<RevealOnViewport>,

    nav_modal: ContactModal,
    hero_modal: ContactModal,
    footer_modal: ContactModal,
}

impl Page {
    pub fn new(motion: &MotionConfig, width: u16, height: u16) -> Self {
        let auto_close = Duration::from_millis(motion.auto_close_ms);
        let threshold = motion.reveal_threshold;

        Self {
            layout: PageLayout::compute(width, height),
            scroll: 0,
            px_per_row: motion.px_per_row.max(1.0),
            parallax: ScrollLinkedTransform::hero(motion.parallax_max_px),
            hero: hero_timeline(),
            nav: nav_timeline(),
            project_reveals: (0..content::PROJECTS.len())
                .map(|i| RevealOnViewport::new(threshold, RevealStyle::project_card(i)))
                .collect(),
            testimonial_reveals: (0..content::TESTIMONIALS.len())
                .map(|i| RevealOnViewport::new(threshold, RevealStyle::testimonial(i)))
                .collect(),
            nav_modal: ContactModal::with_auto_close(auto_close),
            hero_modal: ContactModal::with_auto_close(auto_close),
            footer_modal: ContactModal::with_auto_close(auto_close),
        }
    }

    /// Start the entrance animations (first frame on screen)
    pub fn mount(&mut self, now: Instant) {
        self.hero.play(now);
        self.nav.play(now);
        self.observe_viewport(now);
    }

    pub fn layout(&self) -> &PageLayout {
        &self.layout
    }

    /// Recompute geometry for a new terminal size, keeping the scroll in range
    pub fn resize(&mut self, width: u16, height: u16) {
        self.layout = PageLayout::compute(width, height);
        self.scroll = self.scroll.min(self.layout.max_scroll());
    }

    // ─────────────────────────────────────────────────────────────────────
    // Scrolling
    // ─────────────────────────────────────────────────────────────────────

    pub fn scroll_offset(&self) -> u16 {
        self.scroll
    }

    pub fn scroll_to(&mut self, row: u16) {
        self.scroll = row.min(self.layout.max_scroll());
    }

    pub fn scroll_by(&mut self, rows: i32) {
        let target = (self.scroll as i32 + rows).clamp(0, self.layout.max_scroll() as i32);
        self.scroll = target as u16;
    }

    pub fn page_down(&mut self) {
        self.scroll_by(self.layout.viewport_height.saturating_sub(2).max(1) as i32);
    }

    pub fn page_up(&mut self) {
        self.scroll_by(-(self.layout.viewport_height.saturating_sub(2).max(1) as i32));
    }

    pub fn scroll_to_bottom(&mut self) {
        self.scroll = self.layout.max_scroll();
    }

    /// Follow an in-page link
    pub fn jump_to(&mut self, anchor: Anchor) {
        let row = self.layout.anchor_row(anchor);
        tracing::debug!(anchor = anchor.id(), row, "Jumping to anchor");
        self.scroll_to(row);
    }

    /// Scroll position in virtual pixels
    pub fn scroll_px(&self) -> f64 {
        self.scroll as f64 * self.px_per_row
    }

    /// Hero backdrop shift, in rows, for the current scroll position
    pub fn parallax_rows(&self) -> u16 {
        (self.parallax.apply(self.scroll_px()) / self.px_per_row).round() as u16
    }

    /// Convert an animation offset in pixels to whole rows (rounded toward zero)
    pub fn px_to_rows(&self, px: f64) -> i32 {
        (px / self.px_per_row).trunc() as i32
    }

    // ─────────────────────────────────────────────────────────────────────
    // Entrance animations
    // ─────────────────────────────────────────────────────────────────────

    /// Feed the visible fraction of every card to its reveal.
    ///
    /// Returns how many cards entered on this call.
    pub fn observe_viewport(&mut self, now: Instant) -> usize {
        let viewport_top = self.scroll as i64;
        let viewport_height = self.layout.viewport_height;
        let mut entered = 0;

        for (i, (reveal, project)) in self
            .project_reveals
            .iter_mut()
            .zip(&self.layout.projects)
            .enumerate()
        {
            let fraction = visible_fraction(
                project.card.y as i64,
                project.card.height,
                viewport_top,
                viewport_height,
            );
            if reveal.observe(fraction, now) {
                tracing::trace!(card = i, fraction, "Project card revealed");
                entered += 1;
            }
        }

        for (i, (reveal, card)) in self
            .testimonial_reveals
            .iter_mut()
            .zip(&self.layout.testimonial_cards)
            .enumerate()
        {
            let fraction =
                visible_fraction(card.y as i64, card.height, viewport_top, viewport_height);
            if reveal.observe(fraction, now) {
                tracing::trace!(card = i, fraction, "Testimonial revealed");
                entered += 1;
            }
        }

        entered
    }

    pub fn project_reveal(&self, index: usize) -> Option<&RevealOnViewport> {
        self.project_reveals.get(index)
    }

    pub fn testimonial_reveal(&self, index: usize) -> Option<&RevealOnViewport> {
        self.testimonial_reveals.get(index)
    }

    pub fn hero_state(&self, part: HeroPart, now: Instant) -> TweenState {
        self.hero.sample(part, now)
    }

    pub fn nav_state(&self, now: Instant) -> TweenState {
        self.nav.sample(NavBar, now)
    }

    /// Whether anything on the page still needs per-frame redraws
    pub fn is_animating(&self, now: Instant) -> bool {
        !self.hero.is_finished(now)
            || !self.nav.is_finished(now)
            || self.project_reveals.iter().any(|r| r.is_animating(now))
            || self.testimonial_reveals.iter().any(|r| r.is_animating(now))
            || ModalOwner::ALL
                .iter()
                .any(|o| self.modal(*o).is_submitted())
    }

    // ─────────────────────────────────────────────────────────────────────
    // Contact modals
    // ─────────────────────────────────────────────────────────────────────

    pub fn modal(&self, owner: ModalOwner) -> &ContactModal {
        match owner {
            ModalOwner::Nav => &self.nav_modal,
            ModalOwner::Hero => &self.hero_modal,
            ModalOwner::Footer => &self.footer_modal,
        }
    }

    pub fn modal_mut(&mut self, owner: ModalOwner) -> &mut ContactModal {
        match owner {
            ModalOwner::Nav => &mut self.nav_modal,
            ModalOwner::Hero => &mut self.hero_modal,
            ModalOwner::Footer => &mut self.footer_modal,
        }
    }

    /// The open modal, if any. The backdrop blocks the page, so at most one
    /// is ever open.
    pub fn active_modal(&self) -> Option<ModalOwner> {
        ModalOwner::ALL
            .into_iter()
            .find(|o| self.modal(*o).is_open())
    }

    /// Open a section's modal unless another one is already covering the page
    pub fn open_modal(&mut self, owner: ModalOwner) -> bool {
        if self.active_modal().is_some() {
            return false;
        }
        self.modal_mut(owner).open()
    }

    /// Advance every modal's auto-close timer; returns the ones that closed
    pub fn tick(&mut self, now: Instant) -> Vec<ModalOwner> {
        ModalOwner::ALL
            .into_iter()
            .filter(|o| self.modal_mut(*o).tick(now))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::{Field, ModalState};

    fn page() -> Page {
        Page::new(&MotionConfig::default(), 120, 40)
    }

    #[test]
    fn scroll_is_clamped_to_page() {
        let mut page = page();
        page.scroll_by(-10);
        assert_eq!(page.scroll_offset(), 0);
        page.scroll_by(100_000);
        assert_eq!(page.scroll_offset(), page.layout().max_scroll());
        page.scroll_to(0);
        page.page_down();
        assert_eq!(page.scroll_offset(), 38);
        page.page_up();
        assert_eq!(page.scroll_offset(), 0);
    }

    #[test]
    fn jump_to_anchor_scrolls_to_section() {
        let mut page = page();
        page.jump_to(Anchor::Services);
        assert_eq!(page.scroll_offset(), page.layout().services.y);
        page.jump_to(Anchor::Top);
        assert_eq!(page.scroll_offset(), 0);
    }

    #[test]
    fn parallax_follows_scroll_in_pixels() {
        let mut page = page();
        assert_eq!(page.parallax_rows(), 0);
        // 25 rows * 16px = 400px -> 100px -> 6.25 rows
        page.scroll_to(25);
        assert_eq!(page.scroll_px(), 400.0);
        assert_eq!(page.parallax_rows(), 6);
        // Far past the domain the shift stays at 200px
        page.scroll_to_bottom();
        assert_eq!(page.parallax_rows(), 13);
    }

    #[test]
    fn cards_reveal_once_when_scrolled_into_view() {
        let mut page = page();
        let t0 = Instant::now();
        page.mount(t0);
        assert!(!page.project_reveal(0).unwrap().has_entered());

        page.jump_to(Anchor::Work);
        assert!(page.observe_viewport(t0) >= 1);
        assert!(page.project_reveal(0).unwrap().has_entered());

        // Scrolling away and back does not re-trigger
        page.jump_to(Anchor::Top);
        page.observe_viewport(t0);
        page.jump_to(Anchor::Work);
        assert_eq!(page.observe_viewport(t0), 0);
        assert!(page.project_reveal(0).unwrap().has_entered());
    }

    #[test]
    fn hero_entrance_plays_after_mount() {
        let mut page = page();
        let t0 = Instant::now();
        assert_eq!(page.hero_state(HeroPart::Headline, t0).opacity, 0.0);
        page.mount(t0);
        let done = t0 + Duration::from_millis(2200);
        assert!((page.hero_state(HeroPart::LearnMore, done).opacity - 1.0).abs() < 1e-9);
        assert!(page.nav_state(done).offset_px.abs() < 1e-9);
        assert!(page.is_animating(t0 + Duration::from_millis(100)));
    }

    #[test]
    fn modals_are_independent_per_section() {
        let mut page = page();
        assert!(page.open_modal(ModalOwner::Footer));
        assert_eq!(page.active_modal(), Some(ModalOwner::Footer));
        // Another section cannot open over the backdrop
        assert!(!page.open_modal(ModalOwner::Nav));
        assert_eq!(page.modal(ModalOwner::Nav).state(), ModalState::Closed);

        page.modal_mut(ModalOwner::Footer).edit(Field::Name, "A");
        assert!(page.modal(ModalOwner::Nav).form().is_blank());

        page.modal_mut(ModalOwner::Footer).cancel();
        assert_eq!(page.active_modal(), None);
        assert!(page.open_modal(ModalOwner::Hero));
    }

    #[test]
    fn tick_closes_submitted_modal_after_delay() {
        let mut page = page();
        let t0 = Instant::now();
        page.open_modal(ModalOwner::Nav);
        let modal = page.modal_mut(ModalOwner::Nav);
        modal.edit(Field::Name, "A");
        modal.edit(Field::Email, "a@b.com");
        modal.edit(Field::Message, "hi");
        modal.submit(t0).unwrap();

        assert!(page.tick(t0 + Duration::from_millis(2999)).is_empty());
        assert_eq!(page.tick(t0 + Duration::from_millis(3000)), vec![ModalOwner::Nav]);
        assert_eq!(page.active_modal(), None);
    }

    #[test]
    fn resize_keeps_scroll_in_range() {
        let mut page = page();
        page.scroll_to_bottom();
        page.resize(200, 60);
        assert!(page.scroll_offset() <= page.layout().max_scroll());
    }
}
