//! Event handling module.
//!
//! This module contains handlers for different types of events:
//! - Camera events: capture requests served by the camera worker thread
//! - Terminal events: user input and terminal interactions

pub mod camera;
pub mod terminal;
