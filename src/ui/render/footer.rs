use super::Frame;
use crate::config::hotkeys::{build_footer_text, format_hotkey_display, HotkeyAction};
use crate::config::PageHotkeys;
use crate::content::contact::{COPYRIGHT_LINE, FOOTER_CONTACT_LINE};
use crate::state::{Page, Session};
use crate::ui::widgets::styling;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Columns kept free for the version on the right of the first hint line.
const VERSION_WIDTH: u16 = 10;

/// Rows above the hint lines: the top border and the two site lines.
const SITE_ROWS: u16 = 3;

/// Format the hotkeys available on a page as a display string.
///
fn format_hotkeys_for_page(page: Page, hotkeys: &PageHotkeys) -> String {
    let page_text = match page {
        Page::Home => build_footer_text(
            &hotkeys.home,
            &[
                (HotkeyAction::OpenEmail, "copy email", None),
                (HotkeyAction::OpenProfile, "copy profile link", None),
            ],
        ),
        Page::Projects => build_footer_text(
            &hotkeys.projects,
            &[
                (
                    HotkeyAction::NextClient,
                    "select client",
                    Some(HotkeyAction::PrevClient),
                ),
                (HotkeyAction::ToggleClient, "expand/collapse", None),
            ],
        ),
        Page::Contact => build_footer_text(
            &hotkeys.contact,
            &[(HotkeyAction::EditForm, "edit form", None)],
        ),
        Page::Skills | Page::Certifications => String::new(),
    };

    let mut parts = Vec::new();
    if let (Some(first), Some(last)) = (
        hotkeys.global.get(&HotkeyAction::GoHome),
        hotkeys.global.get(&HotkeyAction::GoContact),
    ) {
        parts.push(format!(
            " {}-{}: pages",
            format_hotkey_display(first),
            format_hotkey_display(last)
        ));
    }
    if !page_text.is_empty() {
        parts.push(page_text);
    }
    // The projects page reuses the scroll keys for client selection.
    if page != Page::Projects {
        let scroll_text = build_footer_text(
            &hotkeys.global,
            &[(
                HotkeyAction::ScrollDown,
                "scroll",
                Some(HotkeyAction::ScrollUp),
            )],
        );
        if !scroll_text.is_empty() {
            parts.push(scroll_text);
        }
    }
    let global_text = build_footer_text(
        &hotkeys.global,
        &[
            (
                HotkeyAction::PrevPage,
                "prev/next page",
                Some(HotkeyAction::NextPage),
            ),
            (HotkeyAction::ToggleLog, "log", None),
            (HotkeyAction::Quit, "quit", None),
        ],
    );
    if !global_text.is_empty() {
        parts.push(global_text);
    }
    parts.join(",")
}

fn format_hotkeys_for_editing(hotkeys: &PageHotkeys) -> String {
    format!(
        " Type to edit,{}",
        build_footer_text(
            &hotkeys.form_editing,
            &[
                (
                    HotkeyAction::NextField,
                    "next/prev field",
                    Some(HotkeyAction::PrevField),
                ),
                (HotkeyAction::SubmitForm, "send", None),
                (HotkeyAction::StopEditing, "stop editing", None),
            ],
        )
    )
}

/// Split the hint text into lines of at most `width` columns, after a mode
/// label of `label_width` columns. Hints are only broken between entries;
/// continuation lines are indented to line up with the first.
///
fn wrap_hints(hints: &str, label_width: usize, width: usize) -> Vec<String> {
    let entries: Vec<&str> = hints.split(',').collect();
    let mut lines = Vec::new();
    let mut line = String::new();
    let mut used = label_width;
    for (index, entry) in entries.iter().enumerate() {
        let entry = if index + 1 < entries.len() {
            format!("{},", entry)
        } else {
            entry.to_string()
        };
        let len = entry.chars().count();
        if !line.is_empty() && used + len > width {
            lines.push(std::mem::take(&mut line));
            used = label_width;
        }
        used += len;
        line.push_str(&entry);
    }
    if !line.is_empty() || lines.is_empty() {
        lines.push(line);
    }
    lines
}

/// Return the mode label and the wrapped hint lines for the current state.
///
fn controls(session: &Session, width: u16) -> (String, Vec<String>) {
    let (mode, hints) = if session.is_editing() {
        ("EDIT:".to_string(), format_hotkeys_for_editing(session.hotkeys()))
    } else {
        (
            format!("{}:", session.current_page().label().to_uppercase()),
            format_hotkeys_for_page(session.current_page(), session.hotkeys()),
        )
    };
    let width = usize::from(width.saturating_sub(VERSION_WIDTH));
    let lines = wrap_hints(&hints, mode.chars().count(), width);
    (mode, lines)
}

/// Return the rows the footer needs at the given terminal width.
///
pub fn footer_height(session: &Session, width: u16) -> u16 {
    let (_, lines) = controls(session, width);
    let status_rows = u16::from(session.status_message().is_some());
    SITE_ROWS + lines.len() as u16 + status_rows
}

/// Render footer widget: site lines, mode, hotkey hints, status and version.
///
pub fn footer(frame: &mut Frame, size: Rect, session: &Session) {
    let theme = session.theme();
    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(styling::normal_block_border_style(theme));
    let inner = block.inner(size);
    frame.render_widget(block, size);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(inner);

    frame.render_widget(
        Paragraph::new(Span::styled(COPYRIGHT_LINE, styling::normal_text_style(theme)))
            .alignment(Alignment::Center),
        rows[0],
    );
    frame.render_widget(
        Paragraph::new(Span::styled(
            FOOTER_CONTACT_LINE,
            styling::muted_text_style(theme),
        ))
        .alignment(Alignment::Center),
        rows[1],
    );

    let (mode, hint_lines) = controls(session, size.width);
    let mode_bg = if session.is_editing() {
        theme.warning.to_color()
    } else {
        theme.primary.to_color()
    };
    let hint_style = Style::default().fg(theme.warning.to_color());
    let indent = " ".repeat(mode.chars().count());

    let mut lines = Vec::with_capacity(hint_lines.len() + 1);
    for (index, hints) in hint_lines.into_iter().enumerate() {
        let lead = if index == 0 {
            Span::styled(
                mode.clone(),
                Style::default()
                    .fg(theme.highlight_fg.to_color())
                    .bg(mode_bg)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            Span::raw(indent.clone())
        };
        lines.push(Line::from(vec![lead, Span::styled(hints, hint_style)]));
    }
    if let Some(status) = session.status_message() {
        lines.push(Line::from(Span::styled(
            format!("{} {}", indent, status),
            Style::default().fg(theme.info.to_color()),
        )));
    }

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(VERSION_WIDTH)])
        .split(rows[2]);
    frame.render_widget(Paragraph::new(lines), columns[0]);
    frame.render_widget(
        Paragraph::new(Span::styled(
            format!("v{}", env!("CARGO_PKG_VERSION")),
            styling::muted_text_style(theme),
        ))
        .alignment(Alignment::Right),
        columns[1],
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::render::test_support::render_to_string;

    #[test]
    fn test_page_hints_include_global_keys() {
        let hints = format_hotkeys_for_page(Page::Skills, &PageHotkeys::default());
        assert!(hints.starts_with(" 1-5: pages"));
        assert!(hints.contains("h/l: prev/next page"));
        assert!(hints.contains("q: quit"));
    }

    #[test]
    fn test_projects_hints() {
        let hints = format_hotkeys_for_page(Page::Projects, &PageHotkeys::default());
        assert!(hints.contains("j/k: select client"));
        assert!(hints.contains("Enter: expand/collapse"));
    }

    #[test]
    fn test_editing_hints() {
        let hints = format_hotkeys_for_editing(&PageHotkeys::default());
        assert!(hints.contains("Tab/Shift+Tab: next/prev field"));
        assert!(hints.contains("Ctrl+s: send"));
        assert!(hints.contains("Esc: stop editing"));
    }

    #[test]
    fn test_scroll_hint_except_on_projects() {
        let hotkeys = PageHotkeys::default();
        assert!(format_hotkeys_for_page(Page::Skills, &hotkeys).contains("j/k: scroll"));
        assert!(!format_hotkeys_for_page(Page::Projects, &hotkeys).contains("scroll"));
    }

    #[test]
    fn test_wrap_hints_breaks_between_entries() {
        let lines = wrap_hints(" 1-5: pages, d: log, q: quit", 5, 21);
        assert_eq!(lines, vec![" 1-5: pages,", " d: log, q: quit"]);
        assert_eq!(wrap_hints(" q: quit", 5, 80), vec![" q: quit"]);
    }

    #[test]
    fn test_hints_are_complete_on_narrow_terminals() {
        for page in Page::ALL {
            let mut session = Session::default();
            session.navigate(page);
            let screen = render_to_string(&mut session, 80, 24);
            assert!(screen.contains("q: quit"), "{:?} hides quit", page);
            assert!(screen.contains("h/l: prev/next page"), "{:?}", page);
            assert!(screen.contains("v1.0.0"));
        }

        let mut session = Session::default();
        session.navigate(Page::Contact);
        session.start_editing();
        let screen = render_to_string(&mut session, 80, 24);
        assert!(screen.contains("Tab/Shift+Tab: next/prev field"));
        assert!(screen.contains("Esc: stop editing"));
    }

    #[test]
    fn test_footer_height_grows_with_wrapped_hints() {
        let mut session = Session::default();
        assert_eq!(footer_height(&session, 140), SITE_ROWS + 1);
        assert_eq!(footer_height(&session, 80), SITE_ROWS + 2);
        session.set_status_message("Copied");
        assert_eq!(footer_height(&session, 140), SITE_ROWS + 2);
    }

    #[test]
    fn test_footer_shows_mode_and_status() {
        let mut session = Session::default();
        session.navigate(Page::Contact);
        assert!(render_to_string(&mut session, 140, 50).contains("CONTACT:"));
        session.start_editing();
        assert!(render_to_string(&mut session, 140, 50).contains("EDIT:"));

        session.stop_editing();
        session.set_status_message("Copied to clipboard");
        assert!(render_to_string(&mut session, 140, 50).contains("Copied to clipboard"));
    }
}
