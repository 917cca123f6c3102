use super::{
    item_lines, item_rows, page_heading, scroll_window, tag_lines, tag_rows, wrapped_height,
    Frame, HEADING_HEIGHT,
};
use crate::content::certifications::{HIGHLIGHT, LEARNING_PATH, TIMELINE};
use crate::state::Session;
use crate::ui::widgets::styling;
use crate::ui::Theme;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use std::rc::Rc;

/// Rows per timeline entry: name, status and a blank row.
const MILESTONE_ROWS: u16 = 3;

/// Render the certifications page: highlighted certificate, learning path
/// and timeline.
///
pub fn certifications(frame: &mut Frame, size: Rect, session: &mut Session) {
    let theme = session.theme().clone();
    let heights = [
        HEADING_HEIGHT,
        credentials_height(size.width),
        // No blank row after the last entry.
        2 + TIMELINE.len() as u16 * MILESTONE_ROWS - 1,
    ];
    let window = scroll_window(size, &heights, session.scroll_offset());
    session.set_scroll_offset(window.first);

    for (section, area) in window.areas.iter().copied() {
        match section {
            0 => frame.render_widget(
                page_heading(
                    "Certifications & Learning",
                    "Credentials earned and in progress",
                    &theme,
                ),
                area,
            ),
            1 => credentials(frame, area, &theme),
            _ => timeline(frame, area, &theme),
        }
    }
}

fn credential_columns(size: Rect) -> Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(size)
}

/// Return the rows of the highlight and learning path row: the taller of the
/// two blocks, borders included.
///
fn credentials_height(width: u16) -> u16 {
    let columns = credential_columns(Rect::new(0, 0, width, 1));
    let highlight = tag_rows(&HIGHLIGHT, columns[0].width.saturating_sub(2));
    let learning_width = columns[1].width.saturating_sub(2);
    let learning =
        wrapped_height(LEARNING_PATH.body, learning_width) + item_rows(&LEARNING_PATH, learning_width);
    highlight.max(learning) + 2
}

fn credentials(frame: &mut Frame, size: Rect, theme: &Theme) {
    let columns = credential_columns(size);

    let highlight = Paragraph::new(tag_lines(&HIGHLIGHT, theme))
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(Span::styled(HIGHLIGHT.title, styling::banner_style(theme)))
                .borders(Borders::ALL)
                .border_style(styling::active_block_border_style(theme)),
        );
    frame.render_widget(highlight, columns[0]);

    let mut learning = vec![Line::from(Span::styled(
        LEARNING_PATH.body,
        styling::normal_text_style(theme),
    ))];
    learning.extend(item_lines(&LEARNING_PATH, theme));
    let learning = Paragraph::new(learning).wrap(Wrap { trim: true }).block(
        Block::default()
            .title(Span::styled(LEARNING_PATH.title, styling::heading_style(theme)))
            .borders(Borders::ALL)
            .border_style(styling::normal_block_border_style(theme)),
    );
    frame.render_widget(learning, columns[1]);
}

fn status_style(status: &str, theme: &Theme) -> Style {
    match status {
        "Completed" => styling::success_style(theme),
        "In Progress" => Style::default().fg(theme.warning.to_color()),
        _ => styling::muted_text_style(theme),
    }
}

fn timeline(frame: &mut Frame, size: Rect, theme: &Theme) {
    let mut lines = Vec::new();
    for milestone in TIMELINE.iter() {
        lines.push(Line::from(vec![
            Span::styled(format!("{}  ", milestone.year), styling::stat_value_style(theme)),
            Span::styled("● ", status_style(milestone.status, theme)),
            Span::styled(milestone.name, styling::normal_text_style(theme)),
        ]));
        lines.push(Line::from(Span::styled(
            format!("       {}", milestone.status),
            status_style(milestone.status, theme),
        )));
        lines.push(Line::from(""));
    }
    lines.pop();

    let timeline = Paragraph::new(lines).block(
        Block::default()
            .title(Span::styled(
                "Certification Timeline",
                styling::active_block_title_style(),
            ))
            .borders(Borders::ALL)
            .border_style(styling::normal_block_border_style(theme)),
    );
    frame.render_widget(timeline, size);
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{render_to_lines, render_to_string};
    use crate::content::certifications::TIMELINE;
    use crate::state::{Page, Session};

    fn certifications_session() -> Session {
        let mut session = Session::default();
        session.navigate(Page::Certifications);
        session
    }

    #[test]
    fn test_highlight_and_learning_path() {
        let mut session = certifications_session();
        let screen = render_to_string(&mut session, 140, 50);
        assert!(screen.contains("Databricks Data Engineer Associate"));
        assert!(screen.contains("Status: Active"));
        assert!(screen.contains("Currently preparing for:"));
        assert!(screen.contains("AWS Certified Data Analytics"));
    }

    #[test]
    fn test_whole_timeline_reachable_on_standard_terminal() {
        let mut session = certifications_session();
        session.scroll_down();
        let screen = render_to_string(&mut session, 80, 24);
        for milestone in TIMELINE.iter() {
            assert!(
                screen.contains(&format!("● {}", milestone.name)),
                "missing {}",
                milestone.name
            );
        }
        assert!(screen.contains("Certification Timeline"));
    }

    #[test]
    fn test_timeline_in_chronological_order() {
        let mut session = certifications_session();
        let lines = render_to_lines(&mut session, 140, 50);
        let rows: Vec<usize> = TIMELINE
            .iter()
            .map(|milestone| {
                lines
                    .iter()
                    .position(|line| line.contains(&format!("● {}", milestone.name)))
                    .unwrap()
            })
            .collect();
        assert!(rows.windows(2).all(|pair| pair[0] < pair[1]));
        assert!(lines.iter().any(|line| line.contains("In Progress")));
    }
}
