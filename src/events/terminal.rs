use crate::config::hotkeys::{get_action_for_event, get_action_for_form_editing, HotkeyAction};
use crate::content::profile::{Link, EMAIL_LINK, PROFILE_LINK};
use crate::error::AppError;
use crate::state::{ContactField, Page, Session};
use anyhow::Result;
use clipboard::{ClipboardContext, ClipboardProvider};
use crossterm::{
    event,
    event::{
        Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton,
        MouseEventKind,
    },
};
use log::*;
use std::{sync::mpsc, thread, time::Duration};

/// Specify terminal event poll rate in milliseconds.
///
const TICK_RATE_IN_MS: u64 = 60;

/// Specify different terminal event types.
///
#[derive(Debug)]
pub enum Event<I> {
    Input(I),
    Click(u16, u16),
    Tick,
}

/// Specify struct for managing terminal events channel.
///
pub struct Handler {
    rx: mpsc::Receiver<Event<KeyEvent>>,
    _tx: mpsc::Sender<Event<KeyEvent>>,
}

impl Handler {
    /// Return new instance after spawning new input polling thread.
    ///
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        let tx_clone = tx.clone();
        thread::spawn(move || loop {
            let tick_rate = Duration::from_millis(TICK_RATE_IN_MS);
            match event::poll(tick_rate) {
                Ok(true) => match event::read() {
                    Ok(CrosstermEvent::Key(key)) => {
                        if tx_clone.send(Event::Input(key)).is_err() {
                            break;
                        }
                    }
                    Ok(CrosstermEvent::Mouse(mouse)) => {
                        if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
                            if tx_clone.send(Event::Click(mouse.column, mouse.row)).is_err() {
                                break;
                            }
                        }
                    }
                    Ok(_) => {}
                    Err(e) => warn!("Failed to read terminal event: {}", e),
                },
                Ok(false) => {}
                Err(e) => warn!("Failed to poll terminal events: {}", e),
            }
            if tx_clone.send(Event::Tick).is_err() {
                break;
            }
        });
        Handler { rx, _tx: tx }
    }

    /// Receive next terminal event and handle it accordingly. Returns result
    /// with value true if should continue or false if exit was requested.
    ///
    pub fn handle_next(&self, session: &mut Session) -> Result<bool> {
        match self.rx.recv()? {
            Event::Input(event) => Ok(handle_key(event, session)),
            Event::Click(column, row) => {
                if let Some(page) = session.click(column, row) {
                    debug!("Processing click on '{}' button...", page.label());
                }
                Ok(true)
            }
            Event::Tick => {
                session.on_tick();
                Ok(true)
            }
        }
    }
}

/// Apply one key press to the session. Returns false if exit was requested.
///
pub fn handle_key(event: KeyEvent, session: &mut Session) -> bool {
    if event.kind != KeyEventKind::Press {
        return true;
    }
    if event.code == KeyCode::Char('c') && event.modifiers.contains(KeyModifiers::CONTROL) {
        debug!("Processing exit terminal event '{:?}'...", event);
        return false;
    }

    if session.is_editing() {
        handle_form_key(event, session);
        return true;
    }

    match get_action_for_event(&event, session.current_page(), session.hotkeys()) {
        Some(action) => handle_action(action, session),
        None => {
            handle_unbound_key(event, session);
            true
        }
    }
}

/// Arrow keys mirror the default letter bindings; space also toggles a
/// client section.
///
fn handle_unbound_key(event: KeyEvent, session: &mut Session) {
    match (event.code, session.current_page()) {
        (KeyCode::Left, _) => session.navigate_prev(),
        (KeyCode::Right, _) => session.navigate_next(),
        (KeyCode::Down, Page::Projects) => session.client_sections_mut().select_next(),
        (KeyCode::Up, Page::Projects) => session.client_sections_mut().select_prev(),
        (KeyCode::Down, _) => session.scroll_down(),
        (KeyCode::Up, _) => session.scroll_up(),
        (KeyCode::Char(' '), Page::Projects) => session.client_sections_mut().toggle_selected(),
        _ => {}
    }
}

fn handle_action(action: HotkeyAction, session: &mut Session) -> bool {
    if let Some(page) = action.target_page() {
        session.navigate(page);
        return true;
    }
    match action {
        HotkeyAction::Quit => {
            debug!("Processing quit action...");
            return false;
        }
        HotkeyAction::NextPage => session.navigate_next(),
        HotkeyAction::PrevPage => session.navigate_prev(),
        HotkeyAction::ScrollDown => session.scroll_down(),
        HotkeyAction::ScrollUp => session.scroll_up(),
        HotkeyAction::ToggleLog => session.toggle_log(),
        HotkeyAction::OpenEmail => open_link(&EMAIL_LINK, session),
        HotkeyAction::OpenProfile => open_link(&PROFILE_LINK, session),
        HotkeyAction::NextClient => session.client_sections_mut().select_next(),
        HotkeyAction::PrevClient => session.client_sections_mut().select_prev(),
        HotkeyAction::ToggleClient => session.client_sections_mut().toggle_selected(),
        HotkeyAction::EditForm => session.start_editing(),
        HotkeyAction::GoHome
        | HotkeyAction::GoProjects
        | HotkeyAction::GoSkills
        | HotkeyAction::GoCertifications
        | HotkeyAction::GoContact => {}
        HotkeyAction::NextField
        | HotkeyAction::PrevField
        | HotkeyAction::SubmitForm
        | HotkeyAction::StopEditing => {
            debug!("Ignoring form action {:?} outside the form", action);
        }
    }
    true
}

fn handle_form_key(event: KeyEvent, session: &mut Session) {
    if let Some(action) = get_action_for_form_editing(&event, session.hotkeys()) {
        match action {
            HotkeyAction::NextField => session.contact_form_mut().focus_next(),
            HotkeyAction::PrevField => session.contact_form_mut().focus_prev(),
            HotkeyAction::SubmitForm => submit(session),
            HotkeyAction::StopEditing => session.stop_editing(),
            _ => {}
        }
        return;
    }

    let focused = session.contact_form().focused();
    if event.code == KeyCode::Enter && focused == ContactField::Send {
        submit(session);
        return;
    }

    let form = session.contact_form_mut();
    match event.code {
        KeyCode::Enter if focused.is_single_line() => form.focus_next(),
        _ if focused == ContactField::Message => form.message_input(event),
        KeyCode::Char(c)
            if !event
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            form.add_char(c)
        }
        KeyCode::Backspace => form.remove_char(),
        _ => {}
    }
}

fn submit(session: &mut Session) {
    if session.submit_contact_form().is_ok() {
        session.stop_editing();
    }
}

/// Hand a link target to the system clipboard and report the result.
///
fn open_link(link: &Link, session: &mut Session) {
    match copy_to_clipboard(link.target) {
        Ok(()) => {
            info!("Copied '{}' to clipboard", link.target);
            session.set_status_message(format!("{} copied to clipboard: {}", link.label, link.target));
        }
        Err(e) => {
            warn!("{}", e);
            session.set_status_message(format!("{}: {}", link.label, link.target));
        }
    }
}

fn copy_to_clipboard(contents: &str) -> Result<(), AppError> {
    let mut ctx: ClipboardContext =
        ClipboardProvider::new().map_err(|e| AppError::Clipboard(e.to_string()))?;
    ctx.set_contents(contents.to_string())
        .map_err(|e| AppError::Clipboard(e.to_string()))
}
