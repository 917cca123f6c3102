//! Reusable UI widget components.
//!
//! This module contains the celebration effect and styling utilities.

pub mod celebration;
pub mod styling;
