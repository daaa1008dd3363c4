//! Navigation-related state types.
//!
//! This module contains the screen tagged union and the action set consumed
//! by the top-level reducer.

use crate::model::HomeDraft;

/// Specifying the different screens.
///
/// The record back-references live inside their owning variant, so at most
/// one of them exists at a time and only while its screen is active.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Screen {
    /// Home card list.
    List,
    /// Add/edit form; `editing` holds the target record id in edit mode and
    /// is `None` in create mode.
    Editor { editing: Option<String> },
    /// Inspection checklist for one record.
    Checklist { selected: String },
}

/// Specifying the actions accepted by the top-level reducer.
///
#[derive(Debug, Clone)]
pub enum Action {
    OpenAddHome,
    OpenEditHome(String),
    OpenChecklist(String),
    GoToList,
    SaveHome(HomeDraft),
}

impl Screen {
    /// Return the record id being edited, if the editor is open in edit mode.
    ///
    pub fn editing_id(&self) -> Option<&str> {
        match self {
            Screen::Editor { editing: Some(id) } => Some(id),
            _ => None,
        }
    }

    /// Return the record id open in the checklist, if any.
    ///
    pub fn selected_id(&self) -> Option<&str> {
        match self {
            Screen::Checklist { selected } => Some(selected),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_screen_variants() {
        assert_eq!(Screen::List, Screen::List);
        assert_ne!(Screen::List, Screen::Editor { editing: None });
        assert_eq!(
            Screen::Checklist {
                selected: "home-1".to_string()
            },
            Screen::Checklist {
                selected: "home-1".to_string()
            }
        );
    }

    #[test]
    fn test_editing_id() {
        assert_eq!(Screen::List.editing_id(), None);
        assert_eq!(Screen::Editor { editing: None }.editing_id(), None);
        let screen = Screen::Editor {
            editing: Some("home-1".to_string()),
        };
        assert_eq!(screen.editing_id(), Some("home-1"));
    }

    #[test]
    fn test_selected_id() {
        assert_eq!(Screen::List.selected_id(), None);
        assert_eq!(Screen::Editor { editing: None }.selected_id(), None);
        let screen = Screen::Checklist {
            selected: "home-2".to_string(),
        };
        assert_eq!(screen.selected_id(), Some("home-2"));
    }
}
