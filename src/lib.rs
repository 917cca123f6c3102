//! A terminal portfolio: profile, projects, skills, certifications and a
//! contact form, navigated from a five-button bar.

pub mod app;
pub mod config;
pub mod content;
pub mod error;
pub mod events;
pub mod logger;
pub mod state;
pub mod ui;
