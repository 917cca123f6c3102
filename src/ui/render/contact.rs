use super::{
    item_lines, item_rows, page_heading, reveal, scroll_window, tag_lines, tag_rows,
    wrapped_height, Frame, HEADING_HEIGHT,
};
use crate::content::contact::{AVAILABILITY, CONTACT_INFO, CURRENT_ROLE, SENT_MESSAGE};
use crate::state::{ContactField, ContactForm, FormOutcome, Session};
use crate::ui::widgets::styling;
use crate::ui::Theme;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

const REQUIRED_FIELDS: [ContactField; 3] = [
    ContactField::Name,
    ContactField::Email,
    ContactField::Message,
];

const INPUT_HEIGHT: u16 = 3;
const MESSAGE_HEIGHT: u16 = 5;

/// Sections before the first form field.
const LEADING_SECTIONS: usize = 1;

/// Render the contact page: the message form followed by contact details.
///
/// The outcome of the last submission stays on the bottom row while the rest
/// of the page scrolls. During editing the page follows the focused field.
///
pub fn contact(frame: &mut Frame, size: Rect, session: &mut Session) {
    let theme = session.theme().clone();
    let editing = session.is_editing();

    let outcome = outcome_span(session.contact_form().outcome(), &theme);
    let outcome_height = wrapped_height(&outcome.content, size.width).min(size.height);
    let page = Rect {
        height: size.height - outcome_height,
        ..size
    };
    let status = Rect {
        y: page.bottom(),
        height: outcome_height,
        ..size
    };

    let heights = section_heights(size.width);
    let mut first = session.scroll_offset();
    if editing {
        let focused = session.contact_form().focused();
        let field = ContactField::ALL
            .iter()
            .position(|field| *field == focused)
            .unwrap_or(0);
        first = reveal(page.height, &heights, first, LEADING_SECTIONS + field);
    }
    let window = scroll_window(page, &heights, first);
    session.set_scroll_offset(window.first);

    for (section, area) in window.areas.iter().copied() {
        match section {
            0 => frame.render_widget(
                page_heading(
                    "Get In Touch",
                    "Have a project in mind or want to discuss data engineering opportunities?",
                    &theme,
                ),
                area,
            ),
            1..=5 => field(
                frame,
                area,
                ContactField::ALL[section - LEADING_SECTIONS],
                session.contact_form_mut(),
                editing,
                &theme,
            ),
            6 => details(frame, area, &theme),
            7 => role(frame, area, &theme),
            _ => availability(frame, area, &theme),
        }
    }

    frame.render_widget(
        Paragraph::new(Line::from(outcome)).wrap(Wrap { trim: true }),
        status,
    );
}

/// Return the rows of each section: heading, the five form fields, then the
/// three detail blocks.
///
fn section_heights(width: u16) -> Vec<u16> {
    let inner = width.saturating_sub(2);
    let role_rows = wrapped_height(CURRENT_ROLE.body, inner)
        + CURRENT_ROLE
            .items
            .iter()
            .map(|item| wrapped_height(item, inner))
            .sum::<u16>();
    vec![
        HEADING_HEIGHT,
        INPUT_HEIGHT,
        INPUT_HEIGHT,
        INPUT_HEIGHT,
        MESSAGE_HEIGHT,
        INPUT_HEIGHT,
        tag_rows(&CONTACT_INFO, inner) + 2,
        role_rows + 2,
        item_rows(&AVAILABILITY, inner) + 2,
    ]
}

fn outcome_span(outcome: &FormOutcome, theme: &Theme) -> Span<'static> {
    match outcome {
        FormOutcome::Sent => Span::styled(SENT_MESSAGE, styling::success_style(theme)),
        FormOutcome::Rejected(error) => Span::styled(error.to_string(), styling::error_style(theme)),
        FormOutcome::Unsubmitted => Span::styled(
            "Fields marked * are required",
            styling::muted_text_style(theme),
        ),
    }
}

/// Return the block around a form field, highlighted when it has focus.
///
fn field_block(field: ContactField, focused: bool, editing: bool, theme: &Theme) -> Block<'static> {
    let title = if REQUIRED_FIELDS.contains(&field) {
        format!("{} *", field.label())
    } else {
        field.label().to_string()
    };
    let (border_style, title_style) = match (focused, editing) {
        (true, true) => (
            styling::active_block_border_style(theme),
            styling::active_block_title_style().fg(theme.primary.to_color()),
        ),
        (true, false) => (
            styling::active_block_border_style(theme),
            styling::active_block_title_style(),
        ),
        _ => (
            styling::normal_block_border_style(theme),
            styling::normal_text_style(theme),
        ),
    };
    Block::default()
        .title(Span::styled(title, title_style))
        .borders(Borders::ALL)
        .border_style(border_style)
}

fn field(
    frame: &mut Frame,
    area: Rect,
    field: ContactField,
    form: &mut ContactForm,
    editing: bool,
    theme: &Theme,
) {
    let focused = form.focused() == field;
    let value = match field {
        ContactField::Name => form.name(),
        ContactField::Email => form.email(),
        ContactField::Company => form.company(),
        ContactField::Message => return message(frame, area, form, focused && editing, theme),
        ContactField::Send => return send_button(frame, area, focused, theme),
    };

    if focused && editing && area.height > 2 {
        let width = value.chars().count() as u16;
        let x = (area.x + 1 + width).min(area.right().saturating_sub(2));
        frame.set_cursor(x, area.y + 1);
    }
    let input = Paragraph::new(Span::styled(
        value.to_string(),
        styling::normal_text_style(theme),
    ))
    .block(field_block(field, focused, editing, theme));
    frame.render_widget(input, area);
}

fn message(frame: &mut Frame, area: Rect, form: &mut ContactForm, active: bool, theme: &Theme) {
    let focused = form.focused() == ContactField::Message;
    let textarea = form.message_textarea();
    textarea.set_block(field_block(ContactField::Message, focused, active, theme));
    textarea.set_style(styling::normal_text_style(theme));
    textarea.set_cursor_line_style(Style::default());
    if active {
        textarea.set_cursor_style(Style::default().add_modifier(Modifier::REVERSED));
    } else {
        textarea.set_cursor_style(Style::default());
    }
    frame.render_widget(textarea.widget(), area);
}

fn send_button(frame: &mut Frame, area: Rect, focused: bool, theme: &Theme) {
    let (text_style, border_style) = if focused {
        (
            styling::active_button_style(theme),
            styling::active_block_border_style(theme),
        )
    } else {
        (
            styling::normal_text_style(theme),
            styling::normal_block_border_style(theme),
        )
    };
    let send = Paragraph::new(Span::styled(
        format!(" {} ", ContactField::Send.label()),
        text_style,
    ))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style),
    );
    frame.render_widget(send, area);
}

fn details(frame: &mut Frame, area: Rect, theme: &Theme) {
    let details = Paragraph::new(tag_lines(&CONTACT_INFO, theme))
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(Span::styled(CONTACT_INFO.title, styling::heading_style(theme)))
                .borders(Borders::ALL)
                .border_style(styling::normal_block_border_style(theme)),
        );
    frame.render_widget(details, area);
}

fn role(frame: &mut Frame, area: Rect, theme: &Theme) {
    let mut lines = vec![Line::from(Span::styled(
        CURRENT_ROLE.body,
        styling::normal_text_style(theme),
    ))];
    lines.extend(
        CURRENT_ROLE
            .items
            .iter()
            .map(|item| Line::from(Span::styled(*item, styling::muted_text_style(theme)))),
    );
    let role = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
        Block::default()
            .title(Span::styled(CURRENT_ROLE.title, styling::heading_style(theme)))
            .borders(Borders::ALL)
            .border_style(styling::normal_block_border_style(theme)),
    );
    frame.render_widget(role, area);
}

fn availability(frame: &mut Frame, area: Rect, theme: &Theme) {
    let availability = Paragraph::new(item_lines(&AVAILABILITY, theme))
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(Span::styled(AVAILABILITY.title, styling::heading_style(theme)))
                .borders(Borders::ALL)
                .border_style(styling::normal_block_border_style(theme)),
        );
    frame.render_widget(availability, area);
}
