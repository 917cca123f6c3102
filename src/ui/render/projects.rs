use super::{page_heading, reveal, scroll_window, wrapped_height, Frame, HEADING_HEIGHT};
use crate::content::projects::{ClientProjects, CLIENTS, EMPLOYER, ROLE_LINE};
use crate::state::Session;
use crate::ui::widgets::styling;
use crate::ui::Theme;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

const BANNER_HEIGHT: u16 = 4;

/// Indent of a project bullet.
const BULLET: &str = "    • ";

/// Indent and label of the technology line.
const TECHNOLOGIES: &str = "    Technologies: ";

/// Sections before the first client.
const LEADING_SECTIONS: usize = 2;

/// Render the projects page: employer banner and collapsible client sections.
/// The page scrolls to keep the selected client in view.
///
pub fn projects(frame: &mut Frame, size: Rect, session: &mut Session) {
    let theme = session.theme().clone();
    let sections = session.client_sections().clone();

    let mut heights = vec![HEADING_HEIGHT, BANNER_HEIGHT];
    heights.extend(
        CLIENTS
            .iter()
            .enumerate()
            .map(|(index, entry)| client_height(entry, sections.is_expanded(index), size.width)),
    );
    let first = reveal(
        size.height,
        &heights,
        session.scroll_offset(),
        LEADING_SECTIONS + sections.selected(),
    );
    let window = scroll_window(size, &heights, first);
    session.set_scroll_offset(window.first);

    for (section, area) in window.areas.iter().copied() {
        match section {
            0 => frame.render_widget(
                page_heading(
                    "Professional Experience",
                    "Client engagements and delivered work",
                    &theme,
                ),
                area,
            ),
            1 => banner(frame, area, &theme),
            _ => {
                let index = section - LEADING_SECTIONS;
                let lines = client_lines(
                    &CLIENTS[index],
                    sections.is_expanded(index),
                    index == sections.selected(),
                    &theme,
                );
                frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), area);
            }
        }
    }
}

fn banner(frame: &mut Frame, size: Rect, theme: &Theme) {
    let banner = Paragraph::new(vec![
        Line::from(Span::styled(EMPLOYER, styling::heading_style(theme))),
        Line::from(Span::styled(ROLE_LINE, styling::normal_text_style(theme))),
    ])
    .block(
        Block::default()
            .title(Span::styled("Clients", styling::active_block_title_style()))
            .borders(Borders::ALL)
            .border_style(styling::active_block_border_style(theme)),
    );
    frame.render_widget(banner, size);
}

fn header_text(entry: &ClientProjects, expanded: bool) -> (String, String) {
    let marker = if expanded { "▾" } else { "▸" };
    (
        format!("{} {} {}", marker, entry.icon, entry.name),
        format!("  ({} projects)", entry.projects.len()),
    )
}

/// Return the rows a client section takes at the given width: header,
/// projects and technologies when expanded, and a blank row.
///
fn client_height(entry: &ClientProjects, expanded: bool, width: u16) -> u16 {
    let (name, count) = header_text(entry, expanded);
    let mut rows = wrapped_height(&format!("{}{}", name, count), width) + 1;
    if expanded {
        let bullet_width = width.saturating_sub(BULLET.chars().count() as u16);
        rows += entry
            .projects
            .iter()
            .map(|project| wrapped_height(project, bullet_width))
            .sum::<u16>();
        rows += wrapped_height(
            entry.client.technologies(),
            width.saturating_sub(TECHNOLOGIES.chars().count() as u16),
        );
    }
    rows
}

fn client_lines(
    entry: &ClientProjects,
    expanded: bool,
    selected: bool,
    theme: &Theme,
) -> Vec<Line<'static>> {
    let (name, count) = header_text(entry, expanded);
    let header_style = if selected {
        styling::active_button_style(theme)
    } else {
        styling::heading_style(theme)
    };
    let mut lines = vec![Line::from(vec![
        Span::styled(name, header_style),
        Span::styled(count, styling::muted_text_style(theme)),
    ])];
    if expanded {
        for project in entry.projects.iter() {
            lines.push(Line::from(vec![
                Span::styled(BULLET, styling::muted_text_style(theme)),
                Span::styled(*project, styling::normal_text_style(theme)),
            ]));
        }
        lines.push(Line::from(vec![
            Span::styled(TECHNOLOGIES, styling::heading_style(theme)),
            Span::styled(
                entry.client.technologies(),
                styling::normal_text_style(theme),
            ),
        ]));
    }
    lines.push(Line::from(""));
    lines
}
