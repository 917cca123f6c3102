//! Contact form error types.

use super::form::ContactField;

/// Errors that can occur when submitting the contact form.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    /// One or more required fields are empty
    #[error("Please fill in all required fields (Name, Email, Message)")]
    MissingFields(Vec<ContactField>),
}

impl FormError {
    /// Return the required fields that were left empty.
    ///
    pub fn missing_fields(&self) -> &[ContactField] {
        match self {
            FormError::MissingFields(fields) => fields,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_error_names_required_fields() {
        let error = FormError::MissingFields(vec![ContactField::Name]);
        let message = error.to_string();
        assert!(message.contains("Name"));
        assert!(message.contains("Email"));
        assert!(message.contains("Message"));
        assert_eq!(error.missing_fields(), &[ContactField::Name]);
    }
}
