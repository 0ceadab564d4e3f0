// TUI application state
//
// Owns the page plus everything that only exists in the terminal: the
// pointer trail, the hover registry and spring cursor, the help and log
// overlays, toasts, and the background image status. Input handlers in
// `tui::mod` call into here; views only read.

use super::components::logs_panel::LogsPanel;
use super::components::nav_bar::{NavLayout, NAV_HEIGHT};
use super::components::Toast;
use super::input::InputHandler;
use super::modal::{ContactFocus, Modal};
use super::views::contact::dialog_layout;
use crate::assets::{AssetSlot, AssetStatus};
use crate::config::Config;
use crate::contact::Field;
use crate::events::{DemoStep, SiteEvent};
use crate::logging::LogBuffer;
use crate::motion::{HoverDetector, PointerTrailBuffer, Spring2, SpringConfig};
use crate::site::{Anchor, ModalOwner, Page, Target};
use crate::theme::{Theme, ThemeConfig};
use ratatui::layout::Rect;
use std::time::{Duration, Instant};

/// Longest frame step fed to the cursor spring (after a stall)
const MAX_SPRING_STEP: Duration = Duration::from_millis(100);

pub struct App {
    pub theme: Theme,
    pub page: Page,

    // ─── Pointer ─────────────────────────────────────────────
    pub trail: PointerTrailBuffer,
    pub hover: HoverDetector<Target>,
    pub cursor: Spring2,
    /// Last pointer cell, None until the first move or after focus loss
    pub pointer: Option<(u16, u16)>,

    // ─── Contact dialog ──────────────────────────────────────
    pub contact_focus: ContactFocus,
    /// Required field flagged by the last refused submit
    pub missing_field: Option<Field>,

    // ─── Terminal overlays ───────────────────────────────────
    pub modal: Option<Modal>,
    pub logs_panel: LogsPanel,
    pub log_buffer: LogBuffer,
    pub toast: Option<Toast>,

    pub background: AssetStatus,
    pub hero_image: AssetStatus,

    pub should_quit: bool,
    /// Something changed since the last draw
    pub dirty: bool,
    input_handler: InputHandler,
    screen: Rect,
    last_tick: Option<Instant>,
}

impl App {
    pub fn new(config: &Config, log_buffer: LogBuffer, width: u16, height: u16) -> Self {
        let theme = Theme::by_name_with_config(
            &config.theme,
            &ThemeConfig {
                use_theme_background: config.use_theme_background,
            },
        );
        let screen = Rect::new(0, 0, width, height);

        Self {
            theme,
            page: Page::new(&config.motion, width, page_viewport(height)),
            trail: PointerTrailBuffer::new(config.motion.trail_length),
            hover: HoverDetector::new(),
            cursor: Spring2::new(SpringConfig::CURSOR, (0.0, 0.0)),
            pointer: None,
            contact_focus: ContactFocus::default(),
            missing_field: None,
            modal: None,
            logs_panel: LogsPanel::new(),
            log_buffer,
            toast: None,
            background: AssetStatus::Pending,
            hero_image: AssetStatus::Pending,
            should_quit: false,
            dirty: true,
            input_handler: InputHandler::default(),
            screen,
            last_tick: None,
        }
    }

    /// First frame: start the entrance animations
    pub fn mount(&mut self, now: Instant) {
        self.page.mount(now);
        self.last_tick = Some(now);
        self.sync_targets(now);
    }

    pub fn screen(&self) -> Rect {
        self.screen
    }

    /// Rows of the screen showing the page (everything but the status line)
    pub fn viewport(&self) -> Rect {
        Rect::new(0, 0, self.screen.width, page_viewport(self.screen.height))
    }

    pub fn resize(&mut self, width: u16, height: u16, now: Instant) {
        self.screen = Rect::new(0, 0, width, height);
        self.page.resize(width, page_viewport(height));
        self.page.observe_viewport(now);
        self.sync_targets(now);
        self.dirty = true;
    }

    // ─────────────────────────────────────────────────────────────────────
    // Input plumbing
    // ─────────────────────────────────────────────────────────────────────

    pub fn handle_key_press(&mut self, key: crossterm::event::KeyCode) -> bool {
        self.input_handler.handle_key_press(key)
    }

    pub fn handle_key_release(&mut self, key: crossterm::event::KeyCode) {
        self.input_handler.handle_key_release(key);
    }

    pub fn reset_keys(&mut self) {
        self.input_handler.reset();
    }

    // ─────────────────────────────────────────────────────────────────────
    // Pointer
    // ─────────────────────────────────────────────────────────────────────

    pub fn pointer_moved(&mut self, x: u16, y: u16, now: Instant) {
        self.trail.on_pointer_move_at(x, y, now);
        self.hover.pointer_moved(x, y);

        let at = (x as f64, y as f64);
        if self.pointer.is_none() {
            self.cursor.snap_to(at);
        } else {
            self.cursor.set_target(at);
        }
        self.pointer = Some((x, y));
        self.dirty = true;
    }

    /// Pointer left the terminal (focus lost)
    pub fn pointer_left(&mut self) {
        self.hover.pointer_left();
        self.pointer = None;
        self.dirty = true;
    }

    /// Left click at a screen cell
    pub fn click(&mut self, x: u16, y: u16, now: Instant) {
        match self.hover.target_at(x, y).copied() {
            Some(target) => self.activate(target, now),
            None => {
                // Clicks on the backdrop dismiss the dialog
                if self.page.active_modal().is_some()
                    && !contains(dialog_layout(self.screen).dialog, x, y)
                {
                    self.cancel_contact(now);
                }
            }
        }
    }

    /// Run what a target does when clicked (or chosen from the keyboard)
    pub fn activate(&mut self, target: Target, now: Instant) {
        // The open dialog shields the page underneath
        if self.page.active_modal().is_some() && !target.is_modal() {
            return;
        }
        tracing::debug!(?target, "Activated");
        if let Some(owner) = target.opens_modal() {
            self.open_contact(owner, now);
            return;
        }
        match target {
            Target::Brand => self.jump_to(Anchor::Top, now),
            Target::NavLink(anchor) => self.jump_to(anchor, now),
            Target::ModalField(field) => self.contact_focus = ContactFocus::Field(field),
            Target::ModalCancel => self.cancel_contact(now),
            Target::ModalSend => self.submit_contact(now),
            Target::StartProject | Target::LearnMore | Target::GetStarted => {}
        }
        self.dirty = true;
    }

    // ─────────────────────────────────────────────────────────────────────
    // Page
    // ─────────────────────────────────────────────────────────────────────

    pub fn scroll_by(&mut self, rows: i32, now: Instant) {
        if self.page.active_modal().is_some() {
            return;
        }
        self.page.scroll_by(rows);
        self.after_scroll(now);
    }

    pub fn page_down(&mut self, now: Instant) {
        if self.page.active_modal().is_some() {
            return;
        }
        self.page.page_down();
        self.after_scroll(now);
    }

    pub fn page_up(&mut self, now: Instant) {
        if self.page.active_modal().is_some() {
            return;
        }
        self.page.page_up();
        self.after_scroll(now);
    }

    pub fn scroll_to_bottom(&mut self, now: Instant) {
        if self.page.active_modal().is_some() {
            return;
        }
        self.page.scroll_to_bottom();
        self.after_scroll(now);
    }

    pub fn jump_to(&mut self, anchor: Anchor, now: Instant) {
        if self.page.active_modal().is_some() {
            return;
        }
        self.page.jump_to(anchor);
        self.after_scroll(now);
    }

    fn after_scroll(&mut self, now: Instant) {
        self.page.observe_viewport(now);
        self.sync_targets(now);
        self.dirty = true;
    }

    /// Name of the section under the top of the viewport
    pub fn current_section(&self) -> &'static str {
        let layout = self.page.layout();
        let row = self.page.scroll_offset() + NAV_HEIGHT;
        [
            (layout.footer, "Contact"),
            (layout.testimonials, "Testimonials"),
            (layout.services, "Services"),
            (layout.work, "Work"),
        ]
        .into_iter()
        .find(|(rect, _)| row >= rect.y)
        .map(|(_, name)| name)
        .unwrap_or("Home")
    }

    /// Scroll position as a percentage of the scrollable range
    pub fn scroll_percent(&self) -> u16 {
        let max = self.page.layout().max_scroll();
        if max == 0 {
            return 100;
        }
        (self.page.scroll_offset() as u32 * 100 / max as u32) as u16
    }

    // ─────────────────────────────────────────────────────────────────────
    // Contact dialog
    // ─────────────────────────────────────────────────────────────────────

    pub fn open_contact(&mut self, owner: ModalOwner, now: Instant) {
        if self.page.open_modal(owner) {
            tracing::info!(?owner, "Contact dialog opened");
            self.contact_focus = ContactFocus::default();
            self.missing_field = None;
            self.input_handler.reset();
            self.sync_targets(now);
            self.dirty = true;
        }
    }

    pub fn cancel_contact(&mut self, now: Instant) {
        let Some(owner) = self.page.active_modal() else {
            return;
        };
        if self.page.modal_mut(owner).cancel() {
            tracing::debug!(?owner, "Contact dialog dismissed");
        }
        self.missing_field = None;
        self.input_handler.reset();
        self.sync_targets(now);
        self.dirty = true;
    }

    /// Submit the open form, or point at the first empty required field
    pub fn submit_contact(&mut self, now: Instant) {
        let Some(owner) = self.page.active_modal() else {
            return;
        };
        let modal = self.page.modal_mut(owner);

        if let Some(field) = modal.form().first_missing() {
            self.missing_field = Some(field);
            self.contact_focus = ContactFocus::Field(field);
            self.dirty = true;
            return;
        }

        match modal.submit(now) {
            Ok(_) => {
                self.missing_field = None;
                self.sync_targets(now);
            }
            Err(e) => tracing::warn!(?owner, error = %e, "Contact submit refused"),
        }
        self.dirty = true;
    }

    pub fn type_char(&mut self, field: Field, ch: char) {
        if let Some(owner) = self.page.active_modal() {
            let typed = self.page.modal_mut(owner).insert_char(field, ch);
            if typed && self.missing_field == Some(field) {
                self.missing_field = None;
            }
            self.dirty = true;
        }
    }

    pub fn backspace(&mut self, field: Field) {
        if let Some(owner) = self.page.active_modal() {
            self.page.modal_mut(owner).backspace(field);
            self.dirty = true;
        }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Frame clock
    // ─────────────────────────────────────────────────────────────────────

    /// Advance every animation to `now`
    pub fn tick(&mut self, now: Instant) {
        let dt = self
            .last_tick
            .map(|t| now.saturating_duration_since(t))
            .unwrap_or_default();
        self.last_tick = Some(now);
        self.cursor.step(dt.min(MAX_SPRING_STEP));

        if !self.page.tick(now).is_empty() {
            self.contact_focus = ContactFocus::default();
            self.missing_field = None;
            self.dirty = true;
        }

        if self.toast.as_ref().is_some_and(|t| t.is_expired(now)) {
            self.toast = None;
            self.dirty = true;
        }

        self.page.observe_viewport(now);
        self.sync_targets(now);
    }

    /// Whether the next tick must redraw even without input
    pub fn is_animating(&self, now: Instant) -> bool {
        self.page.is_animating(now)
            || self.trail.is_animating(now)
            || !self.cursor.is_settled()
            || self.toast.is_some()
    }

    pub fn show_toast(&mut self, message: impl Into<String>, now: Instant) {
        self.toast = Some(Toast::new(message, now));
        self.dirty = true;
    }

    /// Rebuild the hover registry for what is on screen right now.
    ///
    /// An open contact dialog covers everything else, so only its controls
    /// are registered then. Otherwise page buttons go in first and the fixed
    /// nav bar on top of them.
    pub fn sync_targets(&mut self, now: Instant) {
        self.hover.unregister_where(|_| true);

        if let Some(owner) = self.page.active_modal() {
            if !self.page.modal(owner).is_submitted() {
                let dialog = dialog_layout(self.screen);
                for (field, rect) in Field::ALL.into_iter().zip(dialog.fields) {
                    self.hover.register(Target::ModalField(field), rect);
                }
                self.hover.register(Target::ModalCancel, dialog.cancel);
                self.hover.register(Target::ModalSend, dialog.send);
            }
            return;
        }

        let layout = self.page.layout();
        let scroll = self.page.scroll_offset();
        let viewport = layout.viewport_height;
        let page_targets = [
            (Target::LearnMore, layout.learn_more),
            (Target::GetStarted, layout.get_started),
        ];
        for (target, rect) in page_targets {
            // Page row to screen row; skip anything off screen or under the nav
            let Some(y) = rect.y.checked_sub(scroll) else {
                continue;
            };
            if y >= NAV_HEIGHT && y < viewport {
                self.hover.register(target, Rect { y, ..rect });
            }
        }

        if self.page.nav_state(now).opacity > 0.0 {
            let nav = NavLayout::compute(self.screen.width);
            for (target, rect) in nav.targets() {
                self.hover.register(target, rect);
            }
        }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Background events
    // ─────────────────────────────────────────────────────────────────────

    pub fn handle_site_event(&mut self, event: SiteEvent, now: Instant) {
        match event {
            SiteEvent::AssetLoaded { slot, status } => self.asset_loaded(slot, status, now),
            SiteEvent::Demo(step) => self.apply_demo(step, now),
        }
    }

    fn asset_loaded(&mut self, slot: AssetSlot, status: AssetStatus, now: Instant) {
        match &status {
            AssetStatus::Loaded { via_fallback, .. } if *via_fallback => {
                self.show_toast(format!("{} loaded from fallback", slot.label()), now);
            }
            AssetStatus::Failed => {
                self.show_toast(format!("✗ {} unavailable", slot.label()), now);
            }
            _ => {}
        }
        match slot {
            AssetSlot::Background => self.background = status,
            AssetSlot::HeroImage => self.hero_image = status,
        }
        self.dirty = true;
    }

    /// Apply one scripted step through the same paths as real input
    pub fn apply_demo(&mut self, step: DemoStep, now: Instant) {
        match step {
            DemoStep::PointerTo { x, y } => self.pointer_moved(x, y, now),
            DemoStep::Scroll(rows) => self.scroll_by(rows, now),
            DemoStep::JumpTo(anchor) => self.jump_to(anchor, now),
            DemoStep::OpenContact(owner) => self.open_contact(owner, now),
            DemoStep::Fill(field, value) => {
                if let Some(owner) = self.page.active_modal() {
                    self.page.modal_mut(owner).edit(field, &value);
                    self.contact_focus = ContactFocus::Field(field);
                    self.dirty = true;
                }
            }
            DemoStep::Submit => self.submit_contact(now),
        }
    }
}

fn page_viewport(screen_height: u16) -> u16 {
    screen_height.saturating_sub(1)
}

fn contains(rect: Rect, x: u16, y: u16) -> bool {
    x >= rect.x && x < rect.right() && y >= rect.y && y < rect.bottom()
}
