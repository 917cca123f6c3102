//! Hotkey configuration management.
//!
//! This module defines the hotkey system for the application, including action types,
//! hotkey bindings, and default configurations per page.

use crate::state::Page;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;

/// Represents all possible actions that can be bound to hotkeys.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HotkeyAction {
    // Navigation bar actions, available on every page
    GoHome,
    GoProjects,
    GoSkills,
    GoCertifications,
    GoContact,
    NextPage,
    PrevPage,
    ScrollDown,
    ScrollUp,
    ToggleLog,
    Quit,

    // Home page actions
    OpenEmail,
    OpenProfile,

    // Projects page actions
    NextClient,
    PrevClient,
    ToggleClient,

    // Contact page actions
    EditForm,

    // Form editing mode actions
    NextField,
    PrevField,
    SubmitForm,
    StopEditing,
}

impl HotkeyAction {
    /// Return the page a navigation action selects, if any.
    ///
    pub fn target_page(&self) -> Option<Page> {
        match self {
            HotkeyAction::GoHome => Some(Page::Home),
            HotkeyAction::GoProjects => Some(Page::Projects),
            HotkeyAction::GoSkills => Some(Page::Skills),
            HotkeyAction::GoCertifications => Some(Page::Certifications),
            HotkeyAction::GoContact => Some(Page::Contact),
            _ => None,
        }
    }
}

/// Represents a key combination (KeyCode + modifiers).
///
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Hotkey {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl Hotkey {
    fn plain(code: KeyCode) -> Self {
        Hotkey {
            code,
            modifiers: KeyModifiers::empty(),
        }
    }

    fn char(c: char) -> Self {
        Self::plain(KeyCode::Char(c))
    }

    fn ctrl(c: char) -> Self {
        Hotkey {
            code: KeyCode::Char(c),
            modifiers: KeyModifiers::CONTROL,
        }
    }
}

/// Custom serialization for Hotkey.
///
impl Serialize for Hotkey {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::SerializeStruct;
        let field_count = if matches!(self.code, KeyCode::Char(_)) {
            3
        } else {
            2
        };
        let mut state = serializer.serialize_struct("Hotkey", field_count)?;
        state.serialize_field("code", &KeyCodeSerde::from(self.code))?;
        if let KeyCode::Char(c) = self.code {
            state.serialize_field("char", &c)?;
        }
        state.serialize_field("modifiers", &KeyModifiersSerde::from(self.modifiers))?;
        state.end()
    }
}

/// Custom deserialization for Hotkey.
///
impl<'de> Deserialize<'de> for Hotkey {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct HotkeyHelper {
            code: KeyCodeSerde,
            #[serde(default)]
            char: Option<char>,
            #[serde(default)]
            modifiers: KeyModifiersSerde,
        }

        let helper = HotkeyHelper::deserialize(deserializer)?;
        let code = match helper.code {
            KeyCodeSerde::Char => match helper.char {
                Some(c) => KeyCode::Char(c),
                None => {
                    return Err(serde::de::Error::custom(
                        "Char key code requires 'char' field",
                    ))
                }
            },
            KeyCodeSerde::Esc => KeyCode::Esc,
            KeyCodeSerde::Enter => KeyCode::Enter,
            KeyCodeSerde::Backspace => KeyCode::Backspace,
            KeyCodeSerde::Tab => KeyCode::Tab,
            KeyCodeSerde::BackTab => KeyCode::BackTab,
            KeyCodeSerde::Up => KeyCode::Up,
            KeyCodeSerde::Down => KeyCode::Down,
            KeyCodeSerde::Left => KeyCode::Left,
            KeyCodeSerde::Right => KeyCode::Right,
        };
        Ok(Hotkey {
            code,
            modifiers: helper.modifiers.into(),
        })
    }
}

/// Helper enum for serializing KeyCode.
///
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
enum KeyCodeSerde {
    Char,
    Esc,
    Enter,
    Backspace,
    Tab,
    BackTab,
    Up,
    Down,
    Left,
    Right,
}

impl From<KeyCode> for KeyCodeSerde {
    fn from(code: KeyCode) -> Self {
        match code {
            KeyCode::Esc => KeyCodeSerde::Esc,
            KeyCode::Enter => KeyCodeSerde::Enter,
            KeyCode::Backspace => KeyCodeSerde::Backspace,
            KeyCode::Tab => KeyCodeSerde::Tab,
            KeyCode::BackTab => KeyCodeSerde::BackTab,
            KeyCode::Up => KeyCodeSerde::Up,
            KeyCode::Down => KeyCodeSerde::Down,
            KeyCode::Left => KeyCodeSerde::Left,
            KeyCode::Right => KeyCodeSerde::Right,
            _ => KeyCodeSerde::Char, // Fallback for unsupported keys
        }
    }
}

/// Helper struct for serializing KeyModifiers.
///
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct KeyModifiersSerde {
    #[serde(default)]
    control: bool,
    #[serde(default)]
    shift: bool,
    #[serde(default)]
    alt: bool,
}

impl From<KeyModifiers> for KeyModifiersSerde {
    fn from(modifiers: KeyModifiers) -> Self {
        KeyModifiersSerde {
            control: modifiers.contains(KeyModifiers::CONTROL),
            shift: modifiers.contains(KeyModifiers::SHIFT),
            alt: modifiers.contains(KeyModifiers::ALT),
        }
    }
}

impl From<KeyModifiersSerde> for KeyModifiers {
    fn from(serde: KeyModifiersSerde) -> Self {
        let mut result = KeyModifiers::empty();
        if serde.control {
            result |= KeyModifiers::CONTROL;
        }
        if serde.shift {
            result |= KeyModifiers::SHIFT;
        }
        if serde.alt {
            result |= KeyModifiers::ALT;
        }
        result
    }
}

pub type Bindings = HashMap<HotkeyAction, Hotkey>;

/// Maps hotkey actions to their key bindings, grouped by where they apply.
///
/// `global` bindings apply on every page unless a page group binds the same
/// key. `form_editing` replaces everything else while a contact form field
/// has input focus.
///
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageHotkeys {
    pub global: Bindings,
    pub home: Bindings,
    pub projects: Bindings,
    pub contact: Bindings,
    pub form_editing: Bindings,
}

impl Default for PageHotkeys {
    fn default() -> Self {
        default_hotkeys()
    }
}

impl PageHotkeys {
    /// Return the bindings specific to the given page.
    ///
    pub fn for_page(&self, page: Page) -> Option<&Bindings> {
        match page {
            Page::Home => Some(&self.home),
            Page::Projects => Some(&self.projects),
            Page::Contact => Some(&self.contact),
            Page::Skills | Page::Certifications => None,
        }
    }
}

/// Returns default hotkey mappings for all pages.
///
pub fn default_hotkeys() -> PageHotkeys {
    let global = HashMap::from([
        (HotkeyAction::GoHome, Hotkey::char('1')),
        (HotkeyAction::GoProjects, Hotkey::char('2')),
        (HotkeyAction::GoSkills, Hotkey::char('3')),
        (HotkeyAction::GoCertifications, Hotkey::char('4')),
        (HotkeyAction::GoContact, Hotkey::char('5')),
        (HotkeyAction::NextPage, Hotkey::char('l')),
        (HotkeyAction::PrevPage, Hotkey::char('h')),
        (HotkeyAction::ScrollDown, Hotkey::char('j')),
        (HotkeyAction::ScrollUp, Hotkey::char('k')),
        (HotkeyAction::ToggleLog, Hotkey::char('d')),
        (HotkeyAction::Quit, Hotkey::char('q')),
    ]);

    let home = HashMap::from([
        (HotkeyAction::OpenEmail, Hotkey::char('e')),
        (HotkeyAction::OpenProfile, Hotkey::char('i')),
    ]);

    let projects = HashMap::from([
        (HotkeyAction::NextClient, Hotkey::char('j')),
        (HotkeyAction::PrevClient, Hotkey::char('k')),
        (HotkeyAction::ToggleClient, Hotkey::plain(KeyCode::Enter)),
    ]);

    let contact = HashMap::from([(HotkeyAction::EditForm, Hotkey::plain(KeyCode::Enter))]);

    let form_editing = HashMap::from([
        (HotkeyAction::NextField, Hotkey::plain(KeyCode::Tab)),
        (HotkeyAction::PrevField, Hotkey::plain(KeyCode::BackTab)),
        (HotkeyAction::SubmitForm, Hotkey::ctrl('s')),
        (HotkeyAction::StopEditing, Hotkey::plain(KeyCode::Esc)),
    ]);

    PageHotkeys {
        global,
        home,
        projects,
        contact,
        form_editing,
    }
}

/// Checks if a KeyEvent matches a Hotkey.
///
/// Terminals report BackTab with or without SHIFT, so SHIFT is ignored for it.
///
pub fn matches_hotkey(event: &KeyEvent, hotkey: &Hotkey) -> bool {
    if event.code != hotkey.code {
        return false;
    }
    if event.code == KeyCode::BackTab {
        return event.modifiers - KeyModifiers::SHIFT == hotkey.modifiers - KeyModifiers::SHIFT;
    }
    event.modifiers == hotkey.modifiers
}

fn find_action(event: &KeyEvent, bindings: &Bindings) -> Option<HotkeyAction> {
    bindings
        .iter()
        .find(|(_, hotkey)| matches_hotkey(event, hotkey))
        .map(|(action, _)| *action)
}

/// Gets the action for a KeyEvent on a specific page. Page bindings take
/// precedence over global ones.
///
pub fn get_action_for_event(
    event: &KeyEvent,
    page: Page,
    hotkeys: &PageHotkeys,
) -> Option<HotkeyAction> {
    hotkeys
        .for_page(page)
        .and_then(|bindings| find_action(event, bindings))
        .or_else(|| find_action(event, &hotkeys.global))
}

/// Gets the action for a KeyEvent while a form field is being edited.
///
pub fn get_action_for_form_editing(event: &KeyEvent, hotkeys: &PageHotkeys) -> Option<HotkeyAction> {
    find_action(event, &hotkeys.form_editing)
}

/// Builds a footer text string from hotkey configurations.
/// Takes a list of tuples: (action, description, optional_second_action_for_paired_keys)
///
pub fn build_footer_text(
    hotkeys: &Bindings,
    actions: &[(HotkeyAction, &str, Option<HotkeyAction>)],
) -> String {
    let mut parts = Vec::new();

    for (action, description, paired_action) in actions {
        let Some(hotkey) = hotkeys.get(action) else {
            continue;
        };
        match paired_action.and_then(|paired| hotkeys.get(&paired)) {
            Some(paired_hotkey) => parts.push(format!(
                " {}/{}: {}",
                format_hotkey_display(hotkey),
                format_hotkey_display(paired_hotkey),
                description
            )),
            None => parts.push(format!(
                " {}: {}",
                format_hotkey_display(hotkey),
                description
            )),
        }
    }

    parts.join(",")
}

/// Formats a hotkey for display in the footer.
///
pub fn format_hotkey_display(hotkey: &Hotkey) -> String {
    let mut parts = Vec::new();
    if hotkey.modifiers.contains(KeyModifiers::CONTROL) {
        parts.push("Ctrl");
    }
    if hotkey.modifiers.contains(KeyModifiers::SHIFT) {
        parts.push("Shift");
    }
    if hotkey.modifiers.contains(KeyModifiers::ALT) {
        parts.push("Alt");
    }

    let key_str = match &hotkey.code {
        KeyCode::Char(' ') => "Space".to_string(),
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Esc => "Esc".to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Backspace => "Backspace".to_string(),
        KeyCode::Tab => "Tab".to_string(),
        KeyCode::BackTab => "Shift+Tab".to_string(),
        KeyCode::Up => "Up".to_string(),
        KeyCode::Down => "Down".to_string(),
        KeyCode::Left => "Left".to_string(),
        KeyCode::Right => "Right".to_string(),
        _ => "Unknown".to_string(),
    };

    if parts.is_empty() {
        key_str
    } else {
        format!("{}+{}", parts.join("+"), key_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn test_matches_hotkey() {
        let hotkey = Hotkey::char('j');
        assert!(matches_hotkey(
            &key(KeyCode::Char('j'), KeyModifiers::NONE),
            &hotkey
        ));
        assert!(!matches_hotkey(
            &key(KeyCode::Char('k'), KeyModifiers::NONE),
            &hotkey
        ));
        assert!(!matches_hotkey(
            &key(KeyCode::Char('j'), KeyModifiers::CONTROL),
            &hotkey
        ));
    }

    #[test]
    fn test_back_tab_ignores_shift() {
        let hotkey = Hotkey::plain(KeyCode::BackTab);
        assert!(matches_hotkey(
            &key(KeyCode::BackTab, KeyModifiers::SHIFT),
            &hotkey
        ));
        assert!(matches_hotkey(
            &key(KeyCode::BackTab, KeyModifiers::NONE),
            &hotkey
        ));
    }

    #[test]
    fn test_get_action_for_event_uses_global_bindings() {
        let hotkeys = default_hotkeys();
        let event = key(KeyCode::Char('3'), KeyModifiers::NONE);
        for page in Page::ALL {
            assert_eq!(
                get_action_for_event(&event, page, &hotkeys),
                Some(HotkeyAction::GoSkills)
            );
        }
    }

    #[test]
    fn test_get_action_for_event_prefers_page_bindings() {
        let hotkeys = default_hotkeys();
        let enter = key(KeyCode::Enter, KeyModifiers::NONE);
        assert_eq!(
            get_action_for_event(&enter, Page::Projects, &hotkeys),
            Some(HotkeyAction::ToggleClient)
        );
        assert_eq!(
            get_action_for_event(&enter, Page::Contact, &hotkeys),
            Some(HotkeyAction::EditForm)
        );
        assert_eq!(get_action_for_event(&enter, Page::Skills, &hotkeys), None);

        let email = key(KeyCode::Char('e'), KeyModifiers::NONE);
        assert_eq!(
            get_action_for_event(&email, Page::Home, &hotkeys),
            Some(HotkeyAction::OpenEmail)
        );
        assert_eq!(get_action_for_event(&email, Page::Skills, &hotkeys), None);
    }

    #[test]
    fn test_projects_bindings_shadow_scroll_keys() {
        let hotkeys = default_hotkeys();
        let down = key(KeyCode::Char('j'), KeyModifiers::NONE);
        assert_eq!(
            get_action_for_event(&down, Page::Projects, &hotkeys),
            Some(HotkeyAction::NextClient)
        );
        for page in [Page::Home, Page::Skills, Page::Certifications, Page::Contact] {
            assert_eq!(
                get_action_for_event(&down, page, &hotkeys),
                Some(HotkeyAction::ScrollDown)
            );
        }
    }

    #[test]
    fn test_form_editing_bindings() {
        let hotkeys = default_hotkeys();
        assert_eq!(
            get_action_for_form_editing(&key(KeyCode::Char('s'), KeyModifiers::CONTROL), &hotkeys),
            Some(HotkeyAction::SubmitForm)
        );
        assert_eq!(
            get_action_for_form_editing(&key(KeyCode::Char('s'), KeyModifiers::NONE), &hotkeys),
            None
        );
    }

    #[test]
    fn test_navigation_actions_target_pages() {
        assert_eq!(HotkeyAction::GoContact.target_page(), Some(Page::Contact));
        assert_eq!(HotkeyAction::Quit.target_page(), None);
    }

    #[test]
    fn test_build_footer_text() {
        let hotkeys = default_hotkeys();
        let text = build_footer_text(
            &hotkeys.projects,
            &[
                (
                    HotkeyAction::NextClient,
                    "select client",
                    Some(HotkeyAction::PrevClient),
                ),
                (HotkeyAction::ToggleClient, "expand", None),
                (HotkeyAction::OpenEmail, "not bound here", None),
            ],
        );
        assert_eq!(text, " j/k: select client, Enter: expand");
    }

    #[test]
    fn test_format_hotkey_display() {
        assert_eq!(format_hotkey_display(&Hotkey::ctrl('s')), "Ctrl+s");
        assert_eq!(format_hotkey_display(&Hotkey::char(' ')), "Space");
        assert_eq!(format_hotkey_display(&Hotkey::plain(KeyCode::Tab)), "Tab");
    }

    #[test]
    fn test_hotkey_serialization() {
        let hotkey = Hotkey::ctrl('s');
        let serialized = serde_yaml::to_string(&hotkey).unwrap();
        assert!(serialized.contains("s"));
        let deserialized: Hotkey = serde_yaml::from_str(&serialized).unwrap();
        assert_eq!(hotkey, deserialized);

        let tab = Hotkey::plain(KeyCode::BackTab);
        let serialized = serde_yaml::to_string(&tab).unwrap();
        let deserialized: Hotkey = serde_yaml::from_str(&serialized).unwrap();
        assert_eq!(tab, deserialized);
    }

    #[test]
    fn test_char_hotkey_requires_char_field() {
        let result: Result<Hotkey, _> = serde_yaml::from_str("code: Char\n");
        assert!(result.is_err());
    }
}
