//! Contact form state.
//!
//! This module contains the contact form fields, input focus within the form,
//! and the submission state machine.

use super::error::FormError;
use crossterm::event::KeyEvent;
use tui_textarea::TextArea;

/// Specifying the contact form fields, in focus order.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ContactField {
    Name,
    Email,
    Company,
    Message,
    /// The "Send Message" button.
    Send,
}

impl ContactField {
    pub const ALL: [ContactField; 5] = [
        ContactField::Name,
        ContactField::Email,
        ContactField::Company,
        ContactField::Message,
        ContactField::Send,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ContactField::Name => "Name",
            ContactField::Email => "Email",
            ContactField::Company => "Company",
            ContactField::Message => "Message",
            ContactField::Send => "Send Message",
        }
    }

    fn index(&self) -> usize {
        match self {
            ContactField::Name => 0,
            ContactField::Email => 1,
            ContactField::Company => 2,
            ContactField::Message => 3,
            ContactField::Send => 4,
        }
    }

    pub fn next(&self) -> ContactField {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(&self) -> ContactField {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// Whether a single-line text field (as opposed to the message area or
    /// the send button).
    ///
    pub fn is_single_line(&self) -> bool {
        matches!(
            self,
            ContactField::Name | ContactField::Email | ContactField::Company
        )
    }
}

/// Specifying the result of the last submission.
///
/// `Unsubmitted` is the initial state. A submission moves to `Sent` or
/// `Rejected`; editing any field afterwards moves back to `Unsubmitted`.
///
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum FormOutcome {
    Unsubmitted,
    Sent,
    Rejected(FormError),
}

/// Check the required fields. Values are only checked for emptiness after
/// trimming; the company field is never consulted.
///
pub fn check_required(name: &str, email: &str, message: &str) -> Result<(), FormError> {
    let missing: Vec<ContactField> = [
        (ContactField::Name, name),
        (ContactField::Email, email),
        (ContactField::Message, message),
    ]
    .iter()
    .filter(|(_, value)| value.trim().is_empty())
    .map(|(field, _)| *field)
    .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(FormError::MissingFields(missing))
    }
}

/// Pure submission transition from the current field values.
///
pub fn transition(name: &str, email: &str, message: &str) -> FormOutcome {
    match check_required(name, email, message) {
        Ok(()) => FormOutcome::Sent,
        Err(error) => FormOutcome::Rejected(error),
    }
}

/// Houses the transient contact form of one visit to the contact page.
///
pub struct ContactForm {
    name: String,
    email: String,
    company: String,
    message: TextArea<'static>,
    focused: ContactField,
    outcome: FormOutcome,
}

impl Default for ContactForm {
    fn default() -> Self {
        ContactForm {
            name: String::new(),
            email: String::new(),
            company: String::new(),
            message: TextArea::default(),
            focused: ContactField::Name,
            outcome: FormOutcome::Unsubmitted,
        }
    }
}

impl ContactForm {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn company(&self) -> &str {
        &self.company
    }

    /// Return the message text with lines joined by newlines.
    ///
    pub fn message(&self) -> String {
        self.message.lines().join("\n")
    }

    /// Get message textarea (mutable), for rendering.
    ///
    pub fn message_textarea(&mut self) -> &mut TextArea<'static> {
        &mut self.message
    }

    pub fn focused(&self) -> ContactField {
        self.focused
    }

    pub fn outcome(&self) -> &FormOutcome {
        &self.outcome
    }

    pub fn focus(&mut self, field: ContactField) {
        self.focused = field;
    }

    pub fn focus_next(&mut self) {
        self.focused = self.focused.next();
    }

    pub fn focus_prev(&mut self) {
        self.focused = self.focused.prev();
    }

    fn field_mut(&mut self, field: ContactField) -> Option<&mut String> {
        match field {
            ContactField::Name => Some(&mut self.name),
            ContactField::Email => Some(&mut self.email),
            ContactField::Company => Some(&mut self.company),
            ContactField::Message | ContactField::Send => None,
        }
    }

    /// Any edit clears the previous submission result.
    ///
    fn touch(&mut self) {
        self.outcome = FormOutcome::Unsubmitted;
    }

    /// Add a character to the focused field.
    ///
    pub fn add_char(&mut self, c: char) {
        if self.focused == ContactField::Message {
            self.message.insert_char(c);
            self.touch();
        } else if let Some(value) = self.field_mut(self.focused) {
            value.push(c);
            self.touch();
        }
    }

    /// Remove the last character of the focused field.
    ///
    pub fn remove_char(&mut self) {
        if self.focused == ContactField::Message {
            self.message.delete_char();
            self.touch();
        } else if let Some(value) = self.field_mut(self.focused) {
            value.pop();
            self.touch();
        }
    }

    /// Forward a raw key to the message area (newlines, cursor movement).
    ///
    pub fn message_input(&mut self, key: KeyEvent) {
        if self.message.input(key) {
            self.touch();
        }
    }

    /// Replace a field's value.
    ///
    pub fn set_field(&mut self, field: ContactField, value: &str) {
        if field == ContactField::Message {
            self.message = TextArea::from(value.lines().map(str::to_string).collect::<Vec<_>>());
            self.touch();
        } else if let Some(current) = self.field_mut(field) {
            *current = value.to_string();
            self.touch();
        }
    }

    /// Validate the fields and record the outcome. Field values are kept in
    /// both cases.
    ///
    pub fn submit(&mut self) -> Result<(), FormError> {
        self.outcome = transition(&self.name, &self.email, &self.message());
        match &self.outcome {
            FormOutcome::Rejected(error) => Err(error.clone()),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fake::faker::company::en::CompanyName;
    use fake::faker::internet::en::SafeEmail;
    use fake::faker::lorem::en::Sentence;
    use fake::faker::name::en::Name;
    use fake::Fake;

    fn filled_form(name: &str, email: &str, company: &str, message: &str) -> ContactForm {
        let mut form = ContactForm::default();
        form.set_field(ContactField::Name, name);
        form.set_field(ContactField::Email, email);
        form.set_field(ContactField::Company, company);
        form.set_field(ContactField::Message, message);
        form
    }

    #[test]
    fn test_new_form_is_unsubmitted() {
        let form = ContactForm::default();
        assert_eq!(form.outcome(), &FormOutcome::Unsubmitted);
        assert_eq!(form.focused(), ContactField::Name);
        assert!(form.name().is_empty());
        assert!(form.message().is_empty());
    }

    #[test]
    fn test_empty_name_is_rejected() {
        let mut form = filled_form("", "x@y.com", "", "hi");
        let error = form.submit().unwrap_err();
        assert_eq!(error.missing_fields(), &[ContactField::Name]);
        assert!(matches!(form.outcome(), FormOutcome::Rejected(_)));
        // Entered data survives the rejection
        assert_eq!(form.email(), "x@y.com");
        assert_eq!(form.message(), "hi");
    }

    #[test]
    fn test_complete_form_is_sent() {
        let mut form = filled_form("A", "a@b.com", "", "hello");
        assert!(form.submit().is_ok());
        assert_eq!(form.outcome(), &FormOutcome::Sent);
        assert_eq!(form.name(), "A");
    }

    #[test]
    fn test_whitespace_only_counts_as_empty() {
        assert_eq!(
            check_required("  ", "\t", "\n"),
            Err(FormError::MissingFields(vec![
                ContactField::Name,
                ContactField::Email,
                ContactField::Message
            ]))
        );
    }

    #[test]
    fn test_email_format_is_not_checked() {
        assert_eq!(transition("A", "not an email", "hello"), FormOutcome::Sent);
    }

    #[test]
    fn test_company_never_affects_outcome() {
        for _ in 0..20 {
            let name: String = Name().fake();
            let email: String = SafeEmail().fake();
            let message: String = Sentence(3..8).fake();
            let company: String = CompanyName().fake();

            let with_company = filled_form(&name, &email, &company, &message).submit();
            let without_company = filled_form(&name, &email, "", &message).submit();
            assert_eq!(with_company, without_company);
            assert!(with_company.is_ok());

            let rejected_with = filled_form("", &email, &company, &message).submit();
            let rejected_without = filled_form("", &email, "", &message).submit();
            assert_eq!(rejected_with, rejected_without);
            assert!(rejected_with.is_err());
        }
    }

    #[test]
    fn test_editing_after_submit_resets_outcome() {
        let mut form = filled_form("A", "a@b.com", "", "hello");
        form.submit().unwrap();
        form.focus(ContactField::Company);
        form.add_char('X');
        assert_eq!(form.outcome(), &FormOutcome::Unsubmitted);
        assert_eq!(form.company(), "X");
    }

    #[test]
    fn test_typing_goes_to_focused_field() {
        let mut form = ContactForm::default();
        for c in "Ann".chars() {
            form.add_char(c);
        }
        form.focus_next();
        for c in "ann@example.com".chars() {
            form.add_char(c);
        }
        form.remove_char();
        form.focus(ContactField::Message);
        for c in "hey".chars() {
            form.add_char(c);
        }
        assert_eq!(form.name(), "Ann");
        assert_eq!(form.email(), "ann@example.co");
        assert_eq!(form.message(), "hey");
    }

    #[test]
    fn test_send_button_ignores_typing() {
        let mut form = ContactForm::default();
        form.focus(ContactField::Send);
        form.add_char('z');
        form.remove_char();
        assert!(form.name().is_empty());
        assert!(form.message().is_empty());
    }

    #[test]
    fn test_focus_cycles_through_fields() {
        let mut form = ContactForm::default();
        for expected in [
            ContactField::Email,
            ContactField::Company,
            ContactField::Message,
            ContactField::Send,
            ContactField::Name,
        ] {
            form.focus_next();
            assert_eq!(form.focused(), expected);
        }
        form.focus_prev();
        assert_eq!(form.focused(), ContactField::Send);
    }
}
