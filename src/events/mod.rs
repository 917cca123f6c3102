//! Event handling module.
//!
//! Terminal events (key presses, mouse clicks and ticks) are polled on a
//! helper thread and applied to the session one at a time.

pub mod terminal;
