use super::{page_heading, pill_lines, scroll_window, Frame, HEADING_HEIGHT};
use crate::content::skills::{PROFICIENCY, SKILL_GROUPS};
use crate::content::{Skill, SkillGroup};
use crate::state::Session;
use crate::ui::widgets::styling;
use crate::ui::Theme;
use ratatui::{
    layout::Rect,
    style::Style,
    text::Span,
    widgets::{Block, Borders, Gauge, Paragraph},
};

/// Rows per proficiency bar when there is room for a gap below each.
const SPACED_BAR_ROWS: u16 = 2;

/// Render the skills page: proficiency bars first, then the skill groups as
/// pills. Bars lose their gaps when the page is too short to show them with
/// the heading.
///
pub fn skills(frame: &mut Frame, size: Rect, session: &mut Session) {
    let theme = session.theme().clone();
    let bar_rows = if HEADING_HEIGHT + proficiency_height(SPACED_BAR_ROWS) <= size.height {
        SPACED_BAR_ROWS
    } else {
        1
    };

    let mut heights = vec![HEADING_HEIGHT, proficiency_height(bar_rows)];
    heights.extend(
        SKILL_GROUPS
            .iter()
            .map(|group| group_height(group, size.width, &theme)),
    );
    let window = scroll_window(size, &heights, session.scroll_offset());
    session.set_scroll_offset(window.first);

    for (section, area) in window.areas.iter().copied() {
        match section {
            0 => frame.render_widget(
                page_heading(
                    "Technical Skills",
                    "Tools and technologies used across client engagements",
                    &theme,
                ),
                area,
            ),
            1 => proficiency(frame, area, bar_rows, &theme),
            index => group_pills(frame, area, &SKILL_GROUPS[index - 2], &theme),
        }
    }
}

fn proficiency_height(bar_rows: u16) -> u16 {
    // No gap after the last bar.
    2 + PROFICIENCY.len() as u16 * bar_rows - (bar_rows - 1)
}

fn group_height(group: &SkillGroup, width: u16, theme: &Theme) -> u16 {
    2 + pill_lines(group.items, width.saturating_sub(2), theme).len() as u16
}

fn group_pills(frame: &mut Frame, size: Rect, group: &SkillGroup, theme: &Theme) {
    let pills = Paragraph::new(pill_lines(group.items, size.width.saturating_sub(2), theme))
        .block(
            Block::default()
                .title(Span::styled(group.title, styling::heading_style(theme)))
                .borders(Borders::ALL)
                .border_style(styling::normal_block_border_style(theme)),
        );
    frame.render_widget(pills, size);
}

fn proficiency(frame: &mut Frame, size: Rect, bar_rows: u16, theme: &Theme) {
    let block = Block::default()
        .title(Span::styled(
            "Skill Proficiency",
            styling::active_block_title_style(),
        ))
        .borders(Borders::ALL)
        .border_style(styling::active_block_border_style(theme));
    let inner = block.inner(size);
    frame.render_widget(block, size);

    for (index, skill) in PROFICIENCY.iter().enumerate() {
        let y = inner.y + index as u16 * bar_rows;
        if y >= inner.bottom() {
            break;
        }
        let area = Rect::new(inner.x + 1, y, inner.width.saturating_sub(2), 1);
        frame.render_widget(skill_bar(skill, theme), area);
    }
}

fn skill_bar(skill: &Skill, theme: &Theme) -> Gauge<'static> {
    Gauge::default()
        .gauge_style(
            Style::default()
                .fg(theme.primary.to_color())
                .bg(theme.highlight_bg.to_color()),
        )
        .ratio(skill.fill_ratio())
        .label(Span::styled(
            format!("{} {}%", skill.name, skill.level),
            styling::active_button_style(theme),
        ))
}
