//! Application state management module.
//!
//! This module contains the per-session state of the application, including:
//! - `Session`, which owns everything a user interaction can change
//! - Navigation types (Page, Router, Focus, client sections)
//! - Contact form types and the submission state machine
//! - Form error handling

mod error;
mod form;
mod navigation;
mod session;

pub use error::FormError;
pub use form::{check_required, transition, ContactField, ContactForm, FormOutcome};
pub use navigation::{ClientSections, Focus, Page, Router};
pub use session::Session;
