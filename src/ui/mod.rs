//! User interface module.
//!
//! This module handles all UI rendering using the `ratatui` library, including:
//! - Frame layout (navigation bar, page, log panel, footer)
//! - Theme management
//! - Widget components (celebration effect, styling)
//! - Page rendering (home, projects, skills, certifications, contact)

type Frame<'a> = ratatui::Frame<'a>;

mod render;
mod theme;
mod widgets;

pub const CELEBRATION_TICKS: u16 = widgets::celebration::DURATION_TICKS;

pub use render::render;
pub use theme::Theme;
pub use widgets::celebration::Celebration;
