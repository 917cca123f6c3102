use super::{pill_lines, scroll_window, tag_lines, tag_rows, wrapped_height, Frame};
use crate::config::hotkeys::{format_hotkey_display, HotkeyAction};
use crate::content::{
    profile::{
        CLIENT_BADGES, EMAIL_LINK, EMPLOYER_LINE, HEADLINE, HIGHLIGHTS, PROFILE_CARD, PROFILE_LINK,
        STATS, SUMMARY,
    },
    ContentBlock,
};
use crate::state::Session;
use crate::ui::widgets::styling;
use crate::ui::Theme;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use std::rc::Rc;

const STATS_HEIGHT: u16 = 4;

/// Render the home page: hero, statistics, client badges and highlights.
///
pub fn home(frame: &mut Frame, size: Rect, session: &mut Session) {
    let theme = session.theme().clone();
    let heights = [
        hero_height(size.width),
        STATS_HEIGHT,
        2 + pill_lines(&CLIENT_BADGES, size.width.saturating_sub(2), &theme).len() as u16,
        highlights_height(size.width),
    ];
    let window = scroll_window(size, &heights, session.scroll_offset());
    session.set_scroll_offset(window.first);

    for (section, area) in window.areas.iter().copied() {
        match section {
            0 => hero(frame, area, session),
            1 => stats(frame, area, &theme),
            2 => clients(frame, area, &theme),
            _ => highlights(frame, area, &theme),
        }
    }
}

fn hero_columns(size: Rect) -> Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(62), Constraint::Percentage(38)])
        .split(size)
}

/// Return the rows the hero needs: the taller of the intro and the profile
/// card, plus borders. The intro has two blank rows and the link row besides
/// its wrapped text.
///
fn hero_height(width: u16) -> u16 {
    let columns = hero_columns(Rect::new(0, 0, width, 1));
    let intro_width = columns[0].width.saturating_sub(2);
    let intro = [HEADLINE, EMPLOYER_LINE, SUMMARY]
        .iter()
        .map(|text| wrapped_height(text, intro_width))
        .sum::<u16>()
        + 3;
    let card = tag_rows(&PROFILE_CARD, columns[1].width.saturating_sub(2));
    intro.max(card) + 2
}

fn hero(frame: &mut Frame, size: Rect, session: &Session) {
    let theme = session.theme();
    let columns = hero_columns(size);

    let home_keys = &session.hotkeys().home;
    let link_hint = |action: HotkeyAction, label: &'static str| {
        let key = home_keys
            .get(&action)
            .map(format_hotkey_display)
            .unwrap_or_default();
        vec![
            Span::styled(format!(" {} ", label), styling::active_button_style(theme)),
            Span::styled(format!(" ({})   ", key), styling::muted_text_style(theme)),
        ]
    };
    let mut links = link_hint(HotkeyAction::OpenEmail, EMAIL_LINK.label);
    links.extend(link_hint(HotkeyAction::OpenProfile, PROFILE_LINK.label));

    let text = vec![
        Line::from(Span::styled(HEADLINE, styling::banner_style(theme))),
        Line::from(Span::styled(EMPLOYER_LINE, styling::heading_style(theme))),
        Line::from(""),
        Line::from(Span::styled(SUMMARY, styling::normal_text_style(theme))),
        Line::from(""),
        Line::from(links),
    ];
    let intro = Paragraph::new(text)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(styling::active_block_border_style(theme)),
        );
    frame.render_widget(intro, columns[0]);

    let card = Paragraph::new(tag_lines(&PROFILE_CARD, theme))
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(Span::styled(
                    PROFILE_CARD.title,
                    styling::active_block_title_style(),
                ))
                .borders(Borders::ALL)
                .border_style(styling::normal_block_border_style(theme)),
        );
    frame.render_widget(card, columns[1]);
}

fn stats(frame: &mut Frame, size: Rect, theme: &Theme) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(
            STATS
                .iter()
                .map(|_| Constraint::Ratio(1, STATS.len() as u32))
                .collect::<Vec<_>>(),
        )
        .split(size);

    for (stat, area) in STATS.iter().zip(columns.iter()) {
        let tile = Paragraph::new(vec![
            Line::from(Span::styled(stat.value, styling::stat_value_style(theme))),
            Line::from(Span::styled(stat.caption, styling::muted_text_style(theme))),
        ])
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(styling::normal_block_border_style(theme)),
        );
        frame.render_widget(tile, *area);
    }
}

fn clients(frame: &mut Frame, size: Rect, theme: &Theme) {
    let badges = Paragraph::new(pill_lines(
        &CLIENT_BADGES,
        size.width.saturating_sub(2),
        theme,
    ))
    .block(
        Block::default()
            .title(Span::styled("Trusted by", styling::heading_style(theme)))
            .borders(Borders::ALL)
            .border_style(styling::normal_block_border_style(theme)),
    );
    frame.render_widget(badges, size);
}

fn highlight_columns(inner: Rect) -> Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .margin(1)
        .split(inner)
}

/// Return the rows the highlights need: the taller card column plus the
/// border and margin around it.
///
fn highlights_height(width: u16) -> u16 {
    let columns = highlight_columns(Rect::new(0, 0, width.saturating_sub(2), 100));
    let tallest = HIGHLIGHTS
        .iter()
        .zip(columns.iter())
        .map(|(cards, area)| {
            cards
                .iter()
                .map(|card| {
                    wrapped_height(card.title, area.width) + wrapped_height(card.body, area.width) + 1
                })
                .sum::<u16>()
        })
        .max()
        .unwrap_or(0);
    tallest + 4
}

fn highlights(frame: &mut Frame, size: Rect, theme: &Theme) {
    let block = Block::default()
        .title(Span::styled(
            "Recent Highlights",
            styling::active_block_title_style(),
        ))
        .borders(Borders::ALL)
        .border_style(styling::normal_block_border_style(theme));
    let inner = block.inner(size);
    frame.render_widget(block, size);

    for (cards, area) in HIGHLIGHTS.iter().zip(highlight_columns(inner).iter()) {
        let lines: Vec<Line> = cards.iter().flat_map(|card| card_lines(card, theme)).collect();
        let column = Paragraph::new(lines).wrap(Wrap { trim: true });
        frame.render_widget(column, *area);
    }
}

fn card_lines(card: &ContentBlock, theme: &Theme) -> Vec<Line<'static>> {
    vec![
        Line::from(Span::styled(card.title, styling::heading_style(theme))),
        Line::from(Span::styled(card.body, styling::normal_text_style(theme))),
        Line::from(""),
    ]
}
