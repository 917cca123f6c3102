use super::{footer, log, main, nav, Frame};
use crate::state::Session;
use ratatui::layout::{Constraint, Direction, Layout};

const NAV_HEIGHT: u16 = 3;
const LOG_HEIGHT: u16 = 8;

/// Render the whole frame: navigation bar, current page, optional log panel
/// and footer, with the celebration drawn over everything.
///
pub fn all(frame: &mut Frame, session: &mut Session) {
    let mut constraints = vec![Constraint::Length(NAV_HEIGHT), Constraint::Min(0)];
    if session.is_log_visible() {
        constraints.push(Constraint::Length(LOG_HEIGHT));
    }
    constraints.push(Constraint::Length(footer::footer_height(
        session,
        frame.size().width,
    )));

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(frame.size());

    nav(frame, rows[0], session);
    main(frame, rows[1], session);
    if session.is_log_visible() {
        log(frame, rows[2], session);
    }
    footer(frame, rows[rows.len() - 1], session);

    if let Some(celebration) = session.celebration() {
        frame.render_widget(celebration, frame.size());
    }
}
