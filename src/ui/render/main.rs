use super::{certifications, contact, home, projects, skills, Frame};
use crate::state::{Page, Session};
use ratatui::layout::Rect;

/// Render main widget according to the current page.
///
pub fn main(frame: &mut Frame, size: Rect, session: &mut Session) {
    match session.current_page() {
        Page::Home => home::home(frame, size, session),
        Page::Projects => projects::projects(frame, size, session),
        Page::Skills => skills::skills(frame, size, session),
        Page::Certifications => certifications::certifications(frame, size, session),
        Page::Contact => contact::contact(frame, size, session),
    }
}
