//! Reusable UI widget components.
//!
//! This module contains styling utilities shared by the screen renderers.

pub mod styling;
