//! Application state management module.
//!
//! This module contains the core state management for the application,
//! including:
//! - Main `State` struct that holds all application data
//! - Navigation types (`Screen`, `Action`)
//! - Editor form state (`HomeForm`, `FormField`)
//! - Per-visit checklist state (`ChecklistState`, `ChecklistItem`)

mod checklist;
mod form;
mod navigation;
mod state_impl;

pub use checklist::{ChecklistItem, ChecklistState};
pub use form::{FormField, HomeForm};
pub use navigation::{Action, Screen};
pub use state_impl::{Alert, State};
