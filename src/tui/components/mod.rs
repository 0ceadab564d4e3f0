// Components module - reusable UI building blocks
//
// - Nav bar: brand, section links, START A PROJECT
// - Status bar: section, scroll position, image status, key hints
// - Cursor: pointer trail and spring ring
// - Logs panel: captured tracing output
// - Toast: transient notices

pub mod cursor;
pub mod logs_panel;
pub mod nav_bar;
pub mod scrollbar;
pub mod status_bar;
pub mod toast;

pub use toast::Toast;

use crate::tui::app::App;
use ratatui::{layout::Rect, Frame};

/// Render the status bar (convenience wrapper)
pub fn render_status(f: &mut Frame, area: Rect, app: &App) {
    status_bar::render(f, area, app);
}
