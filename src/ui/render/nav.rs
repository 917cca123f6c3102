use super::Frame;
use crate::state::{Page, Session};
use crate::ui::widgets::styling;
use crate::ui::Theme;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Render the navigation bar: one button per page, the current one
/// highlighted. Button areas are recorded on the session for mouse clicks.
///
pub fn nav(frame: &mut Frame, size: Rect, session: &mut Session) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(
            Page::ALL
                .iter()
                .map(|_| Constraint::Ratio(1, Page::ALL.len() as u32))
                .collect::<Vec<_>>(),
        )
        .split(size);

    let theme = session.theme().clone();
    let current = session.current_page();
    let mut buttons = Vec::with_capacity(Page::ALL.len());

    for (page, area) in Page::ALL.iter().zip(columns.iter()) {
        let is_current = *page == current;
        let (border_style, text_style) = if is_current {
            (
                styling::active_block_border_style(&theme),
                styling::active_button_style(&theme),
            )
        } else {
            (
                styling::normal_block_border_style(&theme),
                styling::normal_text_style(&theme),
            )
        };

        let label = button_label(*page, area.width.saturating_sub(2), &theme, text_style);
        let button = Paragraph::new(label)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).border_style(border_style));
        frame.render_widget(button, *area);
        buttons.push((*page, *area));
    }

    session.set_nav_buttons(buttons);
}

/// Return the button text for a page. The number prefix and padding are
/// dropped when the button is too narrow for them, so the label itself stays
/// whole for as long as it fits.
///
fn button_label(page: Page, width: u16, theme: &Theme, style: Style) -> Line<'static> {
    let label = page.label();
    let width = usize::from(width);
    let len = label.chars().count();
    if len + 4 <= width {
        Line::from(vec![
            Span::styled(format!("{} ", page.index() + 1), styling::muted_text_style(theme)),
            Span::styled(format!(" {} ", label), style),
        ])
    } else if len + 2 <= width {
        Line::from(Span::styled(format!(" {} ", label), style))
    } else {
        Line::from(Span::styled(label, style))
    }
}
