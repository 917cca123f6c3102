use super::Frame;
use crate::state::Session;
use crate::ui::widgets::styling;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};

pub const LOG_TITLE: &str = "Log (d: hide)";

/// Render log widget with the most recent entries that fit.
///
pub fn log(frame: &mut Frame, size: Rect, session: &Session) {
    let theme = session.theme();
    let capacity = size.height.saturating_sub(2) as usize;
    let items: Vec<ListItem> = session
        .recent_log_entries(capacity)
        .into_iter()
        .map(|entry| {
            let style = if entry.contains(" ERROR ") || entry.contains(" WARN ") {
                styling::error_style(theme)
            } else {
                styling::normal_text_style(theme)
            };
            ListItem::new(Line::from(Span::styled(entry, style)))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title(Span::styled(LOG_TITLE, styling::active_block_title_style()))
            .borders(Borders::ALL)
            .border_style(styling::normal_block_border_style(theme)),
    );
    frame.render_widget(list, size);
}

#[cfg(test)]
mod tests {
    use super::super::test_support::render_to_string;
    use crate::config::PageHotkeys;
    use crate::logger::{log_buffer, push_entry};
    use crate::state::Session;
    use crate::ui::Theme;

    #[test]
    fn test_log_shows_newest_entries() {
        let buffer = log_buffer();
        for i in 0..20 {
            push_entry(&buffer, format!("entry-{:02}", i));
        }
        let mut session = Session::new(Theme::default(), PageHotkeys::default(), buffer);
        session.toggle_log();
        let screen = render_to_string(&mut session, 140, 50);
        assert!(screen.contains("entry-19"));
        assert!(!screen.contains("entry-00"));
    }
}
