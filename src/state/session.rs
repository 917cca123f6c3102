use crate::config::PageHotkeys;
use crate::logger::{log_buffer, LogBuffer};
use crate::ui::{Celebration, Theme};
use log::*;
use rand::Rng;
use ratatui::layout::Rect;

use super::error::FormError;
use super::form::ContactForm;
use super::navigation::{ClientSections, Focus, Page, Router};

/// Houses everything one user session can change: the selected page, input
/// focus, the contact form of the current visit, and UI chrome. Each session
/// owns its own instance; nothing here is shared across sessions.
///
pub struct Session {
    router: Router,
    focus: Focus,
    contact_form: ContactForm,
    client_sections: ClientSections,
    scroll_offset: usize,
    theme: Theme,
    hotkeys: PageHotkeys,
    log_entries: LogBuffer,
    log_visible: bool,
    status_message: Option<String>,
    celebration: Option<Celebration>,
    nav_buttons: Vec<(Page, Rect)>,
}

impl Default for Session {
    fn default() -> Session {
        Session::new(Theme::default(), PageHotkeys::default(), log_buffer())
    }
}

impl Session {
    /// Return a session on the home page.
    ///
    pub fn new(theme: Theme, hotkeys: PageHotkeys, log_entries: LogBuffer) -> Session {
        Session {
            router: Router::default(),
            focus: Focus::Navigation,
            contact_form: ContactForm::default(),
            client_sections: ClientSections::default(),
            scroll_offset: 0,
            theme,
            hotkeys,
            log_entries,
            log_visible: false,
            status_message: None,
            celebration: None,
            nav_buttons: vec![],
        }
    }

    pub fn current_page(&self) -> Page {
        self.router.current_page()
    }

    /// Select a page. Leaving the contact page discards the form; entering
    /// it starts a fresh one. Selecting the current page changes nothing.
    ///
    pub fn navigate(&mut self, page: Page) {
        let Some(previous) = self.router.set_page(page) else {
            return;
        };
        debug!("Navigating from {:?} to {:?}...", previous, page);
        if previous == Page::Contact || page == Page::Contact {
            self.contact_form = ContactForm::default();
        }
        self.focus = Focus::Navigation;
        self.status_message = None;
        self.scroll_offset = 0;
    }

    pub fn navigate_next(&mut self) {
        self.navigate(self.current_page().next());
    }

    pub fn navigate_prev(&mut self) {
        self.navigate(self.current_page().prev());
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn is_editing(&self) -> bool {
        self.focus == Focus::FormEditing
    }

    /// Give key input to the contact form. Ignored on other pages.
    ///
    pub fn start_editing(&mut self) {
        if self.current_page() == Page::Contact {
            self.focus = Focus::FormEditing;
        }
    }

    pub fn stop_editing(&mut self) {
        self.focus = Focus::Navigation;
    }

    pub fn contact_form(&self) -> &ContactForm {
        &self.contact_form
    }

    pub fn contact_form_mut(&mut self) -> &mut ContactForm {
        &mut self.contact_form
    }

    /// Submit the contact form. Nothing is transmitted; a valid form only
    /// produces the acknowledgment and the celebration.
    ///
    pub fn submit_contact_form(&mut self) -> Result<(), FormError> {
        self.submit_contact_form_with(&mut rand::thread_rng())
    }

    pub fn submit_contact_form_with<R: Rng>(&mut self, rng: &mut R) -> Result<(), FormError> {
        match self.contact_form.submit() {
            Ok(()) => {
                info!(
                    "Contact form accepted from '{}' <{}>",
                    self.contact_form.name().trim(),
                    self.contact_form.email().trim()
                );
                self.start_celebration(rng);
                Ok(())
            }
            Err(error) => {
                warn!(
                    "Contact form rejected, missing: {:?}",
                    error.missing_fields()
                );
                Err(error)
            }
        }
    }

    fn start_celebration<R: Rng>(&mut self, rng: &mut R) {
        let palette = [
            self.theme.primary.to_color(),
            self.theme.secondary.to_color(),
            self.theme.accent.to_color(),
            self.theme.success.to_color(),
            self.theme.warning.to_color(),
        ];
        self.celebration = Some(Celebration::new(rng, &palette));
    }

    pub fn celebration(&self) -> Option<&Celebration> {
        self.celebration.as_ref()
    }

    /// Advance time-based effects by one tick.
    ///
    pub fn on_tick(&mut self) {
        if let Some(celebration) = self.celebration.as_mut() {
            if !celebration.tick() {
                self.celebration = None;
            }
        }
    }

    pub fn client_sections(&self) -> &ClientSections {
        &self.client_sections
    }

    pub fn client_sections_mut(&mut self) -> &mut ClientSections {
        &mut self.client_sections
    }

    /// Return the index of the first page section in view. Every page opens
    /// scrolled to the top.
    ///
    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    /// Store the scroll position the renderer settled on. Rendering clamps
    /// the offset to the sections the page actually has.
    ///
    pub fn set_scroll_offset(&mut self, offset: usize) {
        self.scroll_offset = offset;
    }

    pub fn scroll_down(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_add(1);
    }

    pub fn scroll_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(1);
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn hotkeys(&self) -> &PageHotkeys {
        &self.hotkeys
    }

    pub fn toggle_log(&mut self) {
        self.log_visible = !self.log_visible;
    }

    pub fn is_log_visible(&self) -> bool {
        self.log_visible
    }

    /// Return the most recent log entries, oldest first.
    ///
    pub fn recent_log_entries(&self, limit: usize) -> Vec<String> {
        match self.log_entries.lock() {
            Ok(entries) => entries
                .iter()
                .skip(entries.len().saturating_sub(limit))
                .cloned()
                .collect(),
            Err(_) => vec![],
        }
    }

    pub fn status_message(&self) -> Option<&str> {
        self.status_message.as_deref()
    }

    pub fn set_status_message(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Remember where the navigation buttons were drawn, for mouse clicks.
    ///
    pub fn set_nav_buttons(&mut self, buttons: Vec<(Page, Rect)>) {
        self.nav_buttons = buttons;
    }

    /// Navigate to the page whose button contains the given cell, if any.
    ///
    pub fn click(&mut self, column: u16, row: u16) -> Option<Page> {
        let page = self
            .nav_buttons
            .iter()
            .find(|(_, area)| {
                column >= area.x && column < area.right() && row >= area.y && row < area.bottom()
            })
            .map(|(page, _)| *page)?;
        self.navigate(page);
        Some(page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logger::push_entry;
    use crate::state::{ContactField, FormOutcome};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn fill(session: &mut Session, name: &str, email: &str, message: &str) {
        let form = session.contact_form_mut();
        form.set_field(ContactField::Name, name);
        form.set_field(ContactField::Email, email);
        form.set_field(ContactField::Message, message);
    }

    #[test]
    fn test_session_starts_at_home() {
        let session = Session::default();
        assert_eq!(session.current_page(), Page::Home);
        assert_eq!(session.focus(), Focus::Navigation);
        assert!(session.celebration().is_none());
    }

    #[test]
    fn test_navigate_next_and_prev() {
        let mut session = Session::default();
        session.navigate_next();
        assert_eq!(session.current_page(), Page::Projects);
        session.navigate_prev();
        session.navigate_prev();
        assert_eq!(session.current_page(), Page::Contact);
    }

    #[test]
    fn test_sessions_are_isolated() {
        let mut first = Session::default();
        let second = Session::default();
        first.navigate(Page::Contact);
        fill(&mut first, "A", "a@b.com", "hello");
        assert_eq!(second.current_page(), Page::Home);
        assert!(second.contact_form().name().is_empty());
    }

    #[test]
    fn test_revisiting_contact_resets_form() {
        let mut session = Session::default();
        session.navigate(Page::Contact);
        fill(&mut session, "A", "a@b.com", "");
        let mut rng = StdRng::seed_from_u64(1);
        assert!(session.submit_contact_form_with(&mut rng).is_err());

        session.navigate(Page::Contact);
        assert_eq!(session.contact_form().name(), "A");

        session.navigate(Page::Skills);
        session.navigate(Page::Contact);
        assert!(session.contact_form().name().is_empty());
        assert_eq!(
            session.contact_form().outcome(),
            &FormOutcome::Unsubmitted
        );
    }

    #[test]
    fn test_rejected_submit_stays_on_contact() {
        let mut session = Session::default();
        session.navigate(Page::Contact);
        session.start_editing();
        let mut rng = StdRng::seed_from_u64(1);
        assert!(session.submit_contact_form_with(&mut rng).is_err());
        assert_eq!(session.current_page(), Page::Contact);
        assert!(session.is_editing());
        assert!(session.celebration().is_none());
    }

    #[test]
    fn test_sent_submit_celebrates_until_finished() {
        let mut session = Session::default();
        session.navigate(Page::Contact);
        fill(&mut session, "A", "a@b.com", "hello");
        let mut rng = StdRng::seed_from_u64(1);
        assert!(session.submit_contact_form_with(&mut rng).is_ok());
        assert!(session.celebration().is_some());
        for _ in 0..crate::ui::CELEBRATION_TICKS {
            session.on_tick();
        }
        assert!(session.celebration().is_none());
        assert_eq!(session.contact_form().outcome(), &FormOutcome::Sent);
    }

    #[test]
    fn test_editing_only_on_contact_page() {
        let mut session = Session::default();
        session.start_editing();
        assert!(!session.is_editing());
        session.navigate(Page::Contact);
        session.start_editing();
        assert!(session.is_editing());
        session.navigate(Page::Home);
        assert!(!session.is_editing());
    }

    #[test]
    fn test_click_hits_nav_buttons() {
        let mut session = Session::default();
        session.set_nav_buttons(vec![
            (Page::Home, Rect::new(0, 0, 10, 3)),
            (Page::Projects, Rect::new(10, 0, 10, 3)),
        ]);
        assert_eq!(session.click(12, 1), Some(Page::Projects));
        assert_eq!(session.current_page(), Page::Projects);
        assert_eq!(session.click(12, 5), None);
        assert_eq!(session.current_page(), Page::Projects);
    }

    #[test]
    fn test_recent_log_entries() {
        let buffer = log_buffer();
        for i in 0..5 {
            push_entry(&buffer, format!("line {}", i));
        }
        let session = Session::new(Theme::default(), PageHotkeys::default(), buffer);
        assert_eq!(session.recent_log_entries(2), vec!["line 3", "line 4"]);
        assert_eq!(session.recent_log_entries(10).len(), 5);
    }

    #[test]
    fn test_scroll_offset_resets_on_navigation() {
        let mut session = Session::default();
        session.scroll_up();
        assert_eq!(session.scroll_offset(), 0);
        session.scroll_down();
        session.scroll_down();
        assert_eq!(session.scroll_offset(), 2);
        session.navigate(Page::Home);
        assert_eq!(session.scroll_offset(), 2);
        session.navigate(Page::Skills);
        assert_eq!(session.scroll_offset(), 0);
    }

    #[test]
    fn test_navigation_clears_status_message() {
        let mut session = Session::default();
        session.set_status_message("Copied");
        assert_eq!(session.status_message(), Some("Copied"));
        session.navigate(Page::Skills);
        assert!(session.status_message().is_none());
    }
}
