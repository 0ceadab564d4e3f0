// TUI module - Terminal User Interface
//
// This module runs the page in the terminal using ratatui. It handles:
// - Terminal initialization and cleanup
// - Event loop (keyboard, mouse, focus, frame ticks)
// - Rendering the page and its overlays
// - Receiving asset loads and demo steps from background tasks

pub mod app;
pub mod canvas;
pub mod components;
pub mod input;
pub mod layout;
pub mod modal;
pub mod scroll;
pub mod views;

use crate::config::Config;
use crate::events::SiteEvent;
use crate::logging::LogBuffer;
use crate::site::{Anchor, ModalOwner};
use anyhow::{Context, Result};
use app::App;
use crossterm::{
    event::{
        self, DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture,
        Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
        MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use modal::{contact_input, ContactAction, ModalAction};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;

/// Rows scrolled per mouse wheel notch
const WHEEL_ROWS: i32 = 3;

/// Run the TUI
///
/// Sets up the terminal, runs the event loop, and restores the terminal
/// when done, even if the loop failed.
pub async fn run_tui(
    config: Config,
    log_buffer: LogBuffer,
    mut event_rx: mpsc::Receiver<SiteEvent>,
) -> Result<()> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(
        stdout,
        EnterAlternateScreen,
        EnableMouseCapture,
        EnableFocusChange
    )
    .context("Failed to setup terminal")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
    terminal.hide_cursor().context("Failed to hide cursor")?;

    let size = terminal.size().context("Failed to read terminal size")?;
    let mut app = App::new(&config, log_buffer, size.width, size.height);
    let frame = Duration::from_millis(config.motion.frame_ms);

    let result = run_event_loop(&mut terminal, &mut app, &mut event_rx, frame).await;

    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        DisableFocusChange
    )
    .context("Failed to restore terminal")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    result
}

/// Main event loop
///
/// Waits on three sources with tokio::select!:
/// 1. Terminal input (keys, mouse, focus, resize)
/// 2. The frame tick (animations advance here)
/// 3. Site events (asset loads, demo steps)
///
/// A frame is only drawn when something changed or an animation is running.
async fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    event_rx: &mut mpsc::Receiver<SiteEvent>,
    frame: Duration,
) -> Result<()> {
    let mut tick_interval = tokio::time::interval(frame);
    tick_interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

    app.mount(Instant::now());

    loop {
        if app.dirty {
            let now = Instant::now();
            terminal
                .draw(|f| views::draw(f, app, now))
                .context("Failed to draw terminal")?;
            app.dirty = false;
        }

        tokio::select! {
            _ = async {
                if event::poll(Duration::from_millis(10)).unwrap_or(false) {
                    match event::read() {
                        Ok(Event::Key(key_event)) => handle_key_event(app, key_event),
                        Ok(Event::Mouse(mouse_event)) => handle_mouse_event(app, mouse_event),
                        Ok(Event::Resize(width, height)) => {
                            app.resize(width, height, Instant::now())
                        }
                        Ok(Event::FocusLost) => app.pointer_left(),
                        Ok(Event::FocusGained) => app.dirty = true,
                        _ => {}
                    }
                }
            } => {}

            _ = tick_interval.tick() => {
                let now = Instant::now();
                app.tick(now);
                if app.is_animating(now) {
                    app.dirty = true;
                }
            }

            Some(site_event) = event_rx.recv() => {
                app.handle_site_event(site_event, Instant::now());
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Handle keyboard input
/// Layered dispatch: Overlay → Contact dialog → Global → Page
fn handle_key_event(app: &mut App, key_event: KeyEvent) {
    app.dirty = true;

    // Layer 1: help / logs capture all input when open
    if handle_modal_input(app, &key_event) {
        return;
    }

    // Layer 2: an open contact dialog takes every key as text or control
    if handle_contact_input(app, &key_event) {
        return;
    }

    // Layer 3: global keys
    if handle_global_keys(app, &key_event) {
        return;
    }

    // Layer 4: page navigation (InputHandler debounces and repeats)
    if key_event.kind == KeyEventKind::Release {
        app.handle_key_release(key_event.code);
        return;
    }
    let key = key_event.code;
    if !app.handle_key_press(key) {
        return;
    }

    let now = Instant::now();
    match key {
        KeyCode::Up | KeyCode::Char('k') => app.scroll_by(-1, now),
        KeyCode::Down | KeyCode::Char('j') => app.scroll_by(1, now),
        KeyCode::PageUp => app.page_up(now),
        KeyCode::PageDown | KeyCode::Char(' ') => app.page_down(now),
        KeyCode::Home | KeyCode::Char('g') => app.jump_to(Anchor::Top, now),
        KeyCode::End | KeyCode::Char('G') => app.scroll_to_bottom(now),
        KeyCode::Char(c @ '1'..='3') => {
            let index = c as usize - '1' as usize;
            if let Some(anchor) = Anchor::nav(index) {
                app.jump_to(anchor, now);
            }
        }
        KeyCode::Char('c') => app.open_contact(ModalOwner::Nav, now),
        _ => {}
    }
}

fn handle_modal_input(app: &mut App, key_event: &KeyEvent) -> bool {
    let Some(modal) = app.modal else {
        return false;
    };

    // Keep InputHandler in sync or keys stay "pressed" after the overlay closes
    if key_event.kind == KeyEventKind::Release {
        app.handle_key_release(key_event.code);
        return true;
    }
    if key_event.kind != KeyEventKind::Press {
        return true;
    }
    if is_ctrl_c(key_event) {
        app.should_quit = true;
        return true;
    }

    match modal.handle_input(key_event.code) {
        ModalAction::None => {}
        ModalAction::Close => {
            app.modal = None;
            app.reset_keys();
        }
        ModalAction::ScrollUp => app.logs_panel.scroll.scroll_up(),
        ModalAction::ScrollDown => app.logs_panel.scroll.scroll_down(),
        ModalAction::PageUp => app.logs_panel.scroll.page_up(),
        ModalAction::PageDown => app.logs_panel.scroll.page_down(),
        ModalAction::ScrollTop => app.logs_panel.scroll.scroll_to_top(),
        ModalAction::ScrollBottom => app.logs_panel.scroll.scroll_to_bottom(),
    }

    true
}

/// Typing is not debounced; every press lands in the form
fn handle_contact_input(app: &mut App, key_event: &KeyEvent) -> bool {
    let Some(owner) = app.page.active_modal() else {
        return false;
    };
    if key_event.kind != KeyEventKind::Press {
        return true;
    }
    if is_ctrl_c(key_event) {
        app.should_quit = true;
        return true;
    }

    let submitted = app.page.modal(owner).is_submitted();
    let now = Instant::now();
    match contact_input(app.contact_focus, key_event.code, key_event.modifiers, submitted) {
        ContactAction::None => {}
        ContactAction::Focus(focus) => app.contact_focus = focus,
        ContactAction::Insert(field, ch) => app.type_char(field, ch),
        ContactAction::Backspace(field) => app.backspace(field),
        ContactAction::Cancel => app.cancel_contact(now),
        ContactAction::Submit => app.submit_contact(now),
    }
    true
}

fn handle_global_keys(app: &mut App, key_event: &KeyEvent) -> bool {
    if key_event.kind != KeyEventKind::Press {
        return false;
    }
    if is_ctrl_c(key_event) {
        app.should_quit = true;
        return true;
    }

    let key = key_event.code;
    match key {
        KeyCode::Char('q') | KeyCode::Char('Q') => {
            if app.handle_key_press(key) {
                app.should_quit = true;
            }
            true
        }
        KeyCode::Char('?') => {
            if app.handle_key_press(key) {
                app.modal = Some(modal::Modal::Help);
            }
            true
        }
        KeyCode::Char('L') => {
            if app.handle_key_press(key) {
                app.logs_panel.scroll.scroll_to_bottom();
                app.modal = Some(modal::Modal::Logs);
            }
            true
        }
        _ => false,
    }
}

fn handle_mouse_event(app: &mut App, mouse_event: MouseEvent) {
    let now = Instant::now();
    let (x, y) = (mouse_event.column, mouse_event.row);

    // Overlays take the wheel; the page stays put underneath
    if let Some(modal::Modal::Logs) = app.modal {
        match mouse_event.kind {
            MouseEventKind::ScrollUp => app.logs_panel.scroll.scroll_up(),
            MouseEventKind::ScrollDown => app.logs_panel.scroll.scroll_down(),
            _ => {}
        }
    }

    match mouse_event.kind {
        MouseEventKind::Moved | MouseEventKind::Drag(_) => app.pointer_moved(x, y, now),
        MouseEventKind::ScrollUp if app.modal.is_none() => app.scroll_by(-WHEEL_ROWS, now),
        MouseEventKind::ScrollDown if app.modal.is_none() => app.scroll_by(WHEEL_ROWS, now),
        MouseEventKind::Down(MouseButton::Left) => {
            if app.modal.take().is_some() {
                // Any click dismisses help / logs
                app.dirty = true;
            } else {
                app.click(x, y, now);
            }
        }
        _ => {}
    }
}

fn is_ctrl_c(key_event: &KeyEvent) -> bool {
    key_event.modifiers.contains(KeyModifiers::CONTROL) && key_event.code == KeyCode::Char('c')
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::Field;
    use crossterm::event::KeyEventState;

    fn app() -> App {
        let mut app = App::new(&Config::default(), LogBuffer::new(), 100, 30);
        app.mount(Instant::now());
        app
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn release(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn digits_jump_to_sections() {
        let mut app = app();
        handle_key_event(&mut app, press(KeyCode::Char('2')));
        assert_eq!(app.page.scroll_offset(), app.page.layout().services.y);
    }

    #[test]
    fn typing_q_in_the_form_does_not_quit() {
        let mut app = app();
        handle_key_event(&mut app, press(KeyCode::Char('c')));
        assert_eq!(app.page.active_modal(), Some(ModalOwner::Nav));

        for ch in "qq".chars() {
            handle_key_event(&mut app, press(KeyCode::Char(ch)));
        }
        assert!(!app.should_quit);
        assert_eq!(app.page.modal(ModalOwner::Nav).form().get(Field::Name), "qq");

        handle_key_event(&mut app, press(KeyCode::Esc));
        assert_eq!(app.page.active_modal(), None);
        assert!(!app.should_quit);
    }

    #[test]
    fn help_overlay_absorbs_keys() {
        let mut app = app();
        handle_key_event(&mut app, press(KeyCode::Char('?')));
        assert!(app.modal.is_some());

        handle_key_event(&mut app, press(KeyCode::Char('2')));
        assert_eq!(app.page.scroll_offset(), 0);

        handle_key_event(&mut app, release(KeyCode::Char('?')));
        handle_key_event(&mut app, press(KeyCode::Esc));
        assert!(app.modal.is_none());
        assert!(!app.should_quit);
    }

    #[test]
    fn ctrl_c_quits_from_anywhere() {
        let mut app = app();
        handle_key_event(&mut app, press(KeyCode::Char('c')));
        handle_key_event(
            &mut app,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        );
        assert!(app.should_quit);
    }

    #[test]
    fn wheel_scrolls_page() {
        let mut app = app();
        handle_mouse_event(
            &mut app,
            MouseEvent {
                kind: MouseEventKind::ScrollDown,
                column: 10,
                row: 10,
                modifiers: KeyModifiers::NONE,
            },
        );
        assert_eq!(app.page.scroll_offset(), WHEEL_ROWS as u16);
    }
}
