//! Navigation-related state types.
//!
//! This module contains the page identifier, the router that owns the current
//! page, input focus, and the expand/collapse state of the client sections.

use crate::content::projects::CLIENTS;

/// Specifying the different pages.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Page {
    Home,
    Projects,
    Skills,
    Certifications,
    Contact,
}

impl Page {
    /// Pages in navigation bar order.
    pub const ALL: [Page; 5] = [
        Page::Home,
        Page::Projects,
        Page::Skills,
        Page::Certifications,
        Page::Contact,
    ];

    /// Return the navigation bar label.
    ///
    pub fn label(&self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Projects => "Projects",
            Page::Skills => "Skills",
            Page::Certifications => "Certifications",
            Page::Contact => "Contact",
        }
    }

    /// Return the position in the navigation bar.
    ///
    pub fn index(&self) -> usize {
        match self {
            Page::Home => 0,
            Page::Projects => 1,
            Page::Skills => 2,
            Page::Certifications => 3,
            Page::Contact => 4,
        }
    }

    /// Return the page to the right, wrapping around.
    ///
    pub fn next(&self) -> Page {
        Page::ALL[(self.index() + 1) % Page::ALL.len()]
    }

    /// Return the page to the left, wrapping around.
    ///
    pub fn prev(&self) -> Page {
        Page::ALL[(self.index() + Page::ALL.len() - 1) % Page::ALL.len()]
    }
}

/// Owns the currently selected page of one session.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Router {
    current: Page,
}

impl Default for Router {
    fn default() -> Self {
        Router {
            current: Page::Home,
        }
    }
}

impl Router {
    /// Select a page. Returns the previously selected page when it changed.
    ///
    pub fn set_page(&mut self, page: Page) -> Option<Page> {
        if self.current == page {
            return None;
        }
        let previous = self.current;
        self.current = page;
        Some(previous)
    }

    pub fn current_page(&self) -> Page {
        self.current
    }
}

/// Specifying where key input goes.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Focus {
    Navigation,
    FormEditing,
}

/// Selection and expansion of the collapsible client sections.
///
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct ClientSections {
    selected: usize,
    expanded: Vec<bool>,
}

impl Default for ClientSections {
    fn default() -> Self {
        ClientSections {
            selected: 0,
            expanded: vec![false; CLIENTS.len()],
        }
    }
}

impl ClientSections {
    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn is_expanded(&self, index: usize) -> bool {
        self.expanded.get(index).copied().unwrap_or(false)
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.expanded.len() {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Expand the selected section if collapsed, collapse it otherwise.
    ///
    pub fn toggle_selected(&mut self) {
        if let Some(expanded) = self.expanded.get_mut(self.selected) {
            *expanded = !*expanded;
        }
    }
}
