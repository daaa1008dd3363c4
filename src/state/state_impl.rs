use crate::app::CameraRequestSender;
use crate::camera::CaptureOptions;
use crate::events::camera::Request as CameraRequest;
use crate::model::{HomeDraft, HomeRecord};
use crate::ui::Theme;
use log::*;
use ratatui::widgets::ListState;

use super::checklist::{ChecklistItem, ChecklistState};
use super::form::HomeForm;
use super::navigation::{Action, Screen};

/// A dismissable user-facing notification.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub title: String,
    pub message: String,
}

/// Houses data representative of application state.
///
/// The records collection is owned here for the lifetime of the process and
/// mutated only through `dispatch`, so every transition runs to completion
/// before the next render observes it.
pub struct State {
    camera_sender: Option<CameraRequestSender>,
    homes: Vec<HomeRecord>,
    screen: Screen,
    form: HomeForm,
    checklist: ChecklistState,
    checklist_cursor: usize,
    homes_list_state: ListState,
    id_seq: u64,
    alert: Option<Alert>,
    show_log: bool,
    theme: Theme,
    display_name: String,
}

/// Defines default application state: list screen, no records, no
/// back-references.
///
impl Default for State {
    fn default() -> State {
        State {
            camera_sender: None,
            homes: vec![],
            screen: Screen::List,
            form: HomeForm::default(),
            checklist: ChecklistState::default(),
            checklist_cursor: 0,
            homes_list_state: ListState::default(),
            id_seq: 0,
            alert: None,
            show_log: false,
            theme: Theme::default(),
            display_name: String::new(),
        }
    }
}

impl State {
    /// Return a new instance holding the camera request sender and the
    /// display preferences from configuration.
    ///
    pub fn new(
        camera_sender: CameraRequestSender,
        display_name: String,
        theme: Theme,
    ) -> State {
        State {
            camera_sender: Some(camera_sender),
            display_name,
            theme,
            ..State::default()
        }
    }

    /// Return a reference to the current theme.
    ///
    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Return the configured display name for the list-screen greeting.
    ///
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Return the current screen.
    ///
    pub fn current_screen(&self) -> &Screen {
        &self.screen
    }

    /// Return the ordered records collection, newest first.
    ///
    pub fn homes(&self) -> &[HomeRecord] {
        &self.homes
    }

    /// Apply one action to the state. This is the single entry point for
    /// screen transitions and record mutations.
    ///
    pub fn dispatch(&mut self, action: Action) -> &mut Self {
        debug!("Dispatching action '{:?}'...", action);
        match action {
            Action::OpenAddHome => {
                self.form = HomeForm::with_initial(None);
                self.screen = Screen::Editor { editing: None };
            }
            Action::OpenEditHome(id) => {
                let initial = self.home_by_id(&id).map(HomeRecord::to_draft);
                if initial.is_none() {
                    warn!("No record found for id '{}'; editor opens empty.", id);
                }
                self.form = HomeForm::with_initial(initial);
                self.screen = Screen::Editor { editing: Some(id) };
            }
            Action::OpenChecklist(id) => {
                // Reset the flags only when the target identity changes.
                if self.screen.selected_id() != Some(id.as_str()) {
                    self.checklist = ChecklistState::default();
                    self.checklist_cursor = 0;
                }
                self.screen = Screen::Checklist { selected: id };
            }
            Action::GoToList => {
                self.leave_to_list();
            }
            Action::SaveHome(draft) => {
                self.save_home(draft);
                self.leave_to_list();
            }
        }
        self
    }

    /// Clear transient screen state and return to the list.
    ///
    fn leave_to_list(&mut self) {
        self.form = HomeForm::default();
        self.checklist = ChecklistState::default();
        self.checklist_cursor = 0;
        self.screen = Screen::List;
        self.clamp_list_selection();
    }

    /// Replace the edited record's fields in place, or prepend a new record
    /// with a fresh id when no record is being edited.
    ///
    fn save_home(&mut self, draft: HomeDraft) {
        if let Screen::Editor { editing: Some(id) } = &self.screen {
            if let Some(record) = self.homes.iter_mut().find(|home| &home.id == id) {
                record.apply_draft(draft);
                return;
            }
            warn!("Edited record '{}' vanished; saving as a new record.", id);
        }
        let id = self.next_home_id();
        info!("Saving new record '{}'...", id);
        self.homes.insert(0, HomeRecord::from_draft(id, draft));
        self.homes_list_state.select(Some(0));
    }

    /// Synthesize a fresh opaque record id. A monotonic counter guarantees
    /// per-process uniqueness; the random suffix keeps the string opaque.
    ///
    fn next_home_id(&mut self) -> String {
        self.id_seq += 1;
        format!("home-{}-{:04x}", self.id_seq, rand::random::<u16>())
    }

    /// Look up a record by id, degrading to `None` on a miss.
    ///
    fn home_by_id(&self, id: &str) -> Option<&HomeRecord> {
        self.homes.iter().find(|home| home.id == id)
    }

    /// Return the record currently being edited, if any.
    ///
    pub fn editing_home(&self) -> Option<&HomeRecord> {
        self.screen.editing_id().and_then(|id| self.home_by_id(id))
    }

    /// Return the record currently open in the checklist, if any.
    ///
    pub fn selected_home(&self) -> Option<&HomeRecord> {
        self.screen
            .selected_id()
            .and_then(|id| self.home_by_id(id))
    }

    /// Return a mutable reference to the editor form.
    ///
    pub fn form_mut(&mut self) -> &mut HomeForm {
        &mut self.form
    }

    /// Return the editor form.
    ///
    pub fn form(&self) -> &HomeForm {
        &self.form
    }

    /// Submit the editor form through the reducer.
    ///
    pub fn submit_form(&mut self) -> &mut Self {
        let draft = self.form.submit();
        self.dispatch(Action::SaveHome(draft))
    }

    /// Return the checklist flags for the current visit.
    ///
    pub fn checklist(&self) -> &ChecklistState {
        &self.checklist
    }

    /// Return the checklist cursor position.
    ///
    pub fn checklist_cursor(&self) -> usize {
        self.checklist_cursor
    }

    /// Move the checklist cursor down, wrapping around.
    ///
    pub fn next_check_item(&mut self) -> &mut Self {
        self.checklist_cursor = (self.checklist_cursor + 1) % ChecklistItem::ALL.len();
        self
    }

    /// Move the checklist cursor up, wrapping around.
    ///
    pub fn previous_check_item(&mut self) -> &mut Self {
        let len = ChecklistItem::ALL.len();
        self.checklist_cursor = (self.checklist_cursor + len - 1) % len;
        self
    }

    /// Toggle the checklist item under the cursor.
    ///
    pub fn toggle_current_check(&mut self) -> &mut Self {
        let item = ChecklistItem::ALL[self.checklist_cursor];
        self.checklist.toggle(item);
        self
    }

    /// Return the mutable list selection for the list screen.
    ///
    pub fn homes_list_state(&mut self) -> &mut ListState {
        &mut self.homes_list_state
    }

    /// Return the id of the record under the list cursor.
    ///
    pub fn current_home_id(&self) -> Option<String> {
        let index = self.homes_list_state.selected()?;
        self.homes.get(index).map(|home| home.id.clone())
    }

    /// Move the list cursor down.
    ///
    pub fn next_home_index(&mut self) -> &mut Self {
        if self.homes.is_empty() {
            self.homes_list_state.select(None);
            return self;
        }
        let next = match self.homes_list_state.selected() {
            Some(index) if index + 1 < self.homes.len() => index + 1,
            Some(index) => index,
            None => 0,
        };
        self.homes_list_state.select(Some(next));
        self
    }

    /// Move the list cursor up.
    ///
    pub fn previous_home_index(&mut self) -> &mut Self {
        if self.homes.is_empty() {
            self.homes_list_state.select(None);
            return self;
        }
        let previous = match self.homes_list_state.selected() {
            Some(index) if index > 0 => index - 1,
            Some(index) => index,
            None => 0,
        };
        self.homes_list_state.select(Some(previous));
        self
    }

    /// Keep the list selection inside the collection bounds.
    ///
    fn clamp_list_selection(&mut self) {
        match self.homes_list_state.selected() {
            Some(_) if self.homes.is_empty() => self.homes_list_state.select(None),
            Some(index) if index >= self.homes.len() => {
                self.homes_list_state.select(Some(self.homes.len() - 1))
            }
            None if !self.homes.is_empty() => self.homes_list_state.select(Some(0)),
            _ => {}
        }
    }

    /// Ask the camera worker for a capture attempt. The UI stays responsive;
    /// the outcome is applied back to this state by the worker.
    ///
    pub fn request_camera(&mut self) -> &mut Self {
        if let Some(sender) = &self.camera_sender {
            info!("Requesting camera capture...");
            if let Err(e) = sender.send(CameraRequest::Capture {
                options: CaptureOptions::default(),
            }) {
                error!("Failed to send camera request: {}", e);
            }
        }
        self
    }

    /// Raise a dismissable alert.
    ///
    pub fn set_alert(&mut self, title: &str, message: String) -> &mut Self {
        self.alert = Some(Alert {
            title: title.to_string(),
            message,
        });
        self
    }

    /// Dismiss the current alert, if any.
    ///
    pub fn clear_alert(&mut self) -> &mut Self {
        self.alert = None;
        self
    }

    /// Return the current alert, if any.
    ///
    pub fn alert(&self) -> Option<&Alert> {
        self.alert.as_ref()
    }

    /// Toggle the log pane.
    ///
    pub fn toggle_log(&mut self) -> &mut Self {
        self.show_log = !self.show_log;
        self
    }

    /// Return whether the log pane is visible.
    ///
    pub fn is_log_visible(&self) -> bool {
        self.show_log
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::RentType;
    use crate::state::FormField;

    fn draft_named(name: &str) -> HomeDraft {
        HomeDraft {
            name: name.to_string(),
            ..HomeDraft::default()
        }
    }

    fn state_with_homes(names: &[&str]) -> State {
        let mut state = State::default();
        for name in names.iter().rev() {
            state.dispatch(Action::OpenAddHome);
            state.dispatch(Action::SaveHome(draft_named(name)));
        }
        state
    }

    #[test]
    fn test_initial_state() {
        let state = State::default();
        assert_eq!(state.current_screen(), &Screen::List);
        assert!(state.homes().is_empty());
        assert!(state.editing_home().is_none());
        assert!(state.selected_home().is_none());
    }

    #[test]
    fn test_back_references_follow_their_owning_screen() {
        let mut state = state_with_homes(&["A"]);
        let id = state.homes()[0].id.clone();

        state.dispatch(Action::OpenAddHome);
        assert_eq!(state.current_screen(), &Screen::Editor { editing: None });
        assert!(state.current_screen().selected_id().is_none());

        state.dispatch(Action::OpenChecklist(id.clone()));
        assert_eq!(state.current_screen().selected_id(), Some(id.as_str()));
        assert!(state.current_screen().editing_id().is_none());

        state.dispatch(Action::OpenEditHome(id.clone()));
        assert_eq!(state.current_screen().editing_id(), Some(id.as_str()));
        assert!(state.current_screen().selected_id().is_none());

        state.dispatch(Action::GoToList);
        assert_eq!(state.current_screen(), &Screen::List);
        assert!(state.current_screen().editing_id().is_none());
        assert!(state.current_screen().selected_id().is_none());
    }

    #[test]
    fn test_save_in_create_mode_prepends_with_fresh_id() {
        let mut state = state_with_homes(&["First", "Second"]);
        let prior: Vec<String> = state.homes().iter().map(|h| h.id.clone()).collect();

        state.dispatch(Action::OpenAddHome);
        state.dispatch(Action::SaveHome(draft_named("Third")));

        assert_eq!(state.homes().len(), 3);
        assert_eq!(state.homes()[0].name, "Third");
        // Prior records keep their ids and relative order.
        let after: Vec<String> = state.homes()[1..].iter().map(|h| h.id.clone()).collect();
        assert_eq!(after, prior);
        // The new id is unique.
        assert!(!prior.contains(&state.homes()[0].id));
        assert_eq!(state.current_screen(), &Screen::List);
    }

    #[test]
    fn test_ids_are_unique_under_rapid_creation() {
        let mut state = State::default();
        for i in 0..50 {
            state.dispatch(Action::OpenAddHome);
            state.dispatch(Action::SaveHome(draft_named(&format!("H{}", i))));
        }
        let mut ids: Vec<&str> = state.homes().iter().map(|h| h.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 50);
    }

    #[test]
    fn test_save_in_edit_mode_replaces_in_place() {
        let mut state = state_with_homes(&["First", "Second"]);
        let id = state.homes()[1].id.clone();

        state.dispatch(Action::OpenEditHome(id.clone()));
        assert_eq!(state.editing_home().map(|h| h.name.as_str()), Some("Second"));

        state.dispatch(Action::SaveHome(HomeDraft {
            name: "Updated".to_string(),
            rent_type: RentType::Jeonse,
            ..HomeDraft::default()
        }));

        assert_eq!(state.homes().len(), 2);
        assert_eq!(state.homes()[0].name, "First");
        assert_eq!(state.homes()[1].id, id);
        assert_eq!(state.homes()[1].name, "Updated");
        assert_eq!(state.homes()[1].rent_type, RentType::Jeonse);
        assert_eq!(state.current_screen(), &Screen::List);
    }

    #[test]
    fn test_open_edit_with_unknown_id_opens_empty_form() {
        let mut state = state_with_homes(&["A"]);
        state.dispatch(Action::OpenEditHome("home-missing".to_string()));
        assert!(state.editing_home().is_none());
        assert_eq!(state.form().draft(), &HomeDraft::default());
    }

    #[test]
    fn test_open_edit_seeds_form_from_record() {
        let mut state = State::default();
        state.dispatch(Action::OpenAddHome);
        state
            .form_mut()
            .set_field(FormField::Name, "Sunrise Villa")
            .set_field(FormField::Deposit, "5000");
        state.submit_form();
        let id = state.homes()[0].id.clone();

        state.dispatch(Action::OpenEditHome(id));
        assert_eq!(state.form().draft().name, "Sunrise Villa");
        assert_eq!(state.form().draft().deposit, "5000");
    }

    #[test]
    fn test_submit_form_applies_trim_and_name_default() {
        let mut state = State::default();
        state.dispatch(Action::OpenAddHome);
        state
            .form_mut()
            .set_field(FormField::Name, "   ")
            .set_field(FormField::Location, "  Mapo-gu ");
        state.submit_form();
        assert_eq!(state.homes()[0].name, "home");
        assert_eq!(state.homes()[0].location, "Mapo-gu");
    }

    #[test]
    fn test_checklist_resets_when_target_changes() {
        let mut state = state_with_homes(&["A", "B"]);
        let first = state.homes()[0].id.clone();
        let second = state.homes()[1].id.clone();

        state.dispatch(Action::OpenChecklist(first.clone()));
        state.toggle_current_check();
        assert!(state.checklist().mold);

        // Same target again: flags survive.
        state.dispatch(Action::OpenChecklist(first));
        assert!(state.checklist().mold);

        // Different target: back to defaults.
        state.dispatch(Action::OpenChecklist(second));
        assert_eq!(state.checklist(), &ChecklistState::default());
    }

    #[test]
    fn test_checklist_is_ephemeral_across_visits() {
        let mut state = state_with_homes(&["A"]);
        let id = state.homes()[0].id.clone();

        state.dispatch(Action::OpenChecklist(id.clone()));
        state.toggle_current_check();
        state.dispatch(Action::GoToList);
        state.dispatch(Action::OpenChecklist(id));
        assert_eq!(state.checklist(), &ChecklistState::default());
    }

    #[test]
    fn test_checklist_cursor_wraps() {
        let mut state = State::default();
        state.previous_check_item();
        assert_eq!(state.checklist_cursor(), 3);
        state.next_check_item();
        assert_eq!(state.checklist_cursor(), 0);
    }

    #[test]
    fn test_list_cursor_bounds() {
        let mut state = state_with_homes(&["A", "B"]);
        state.next_home_index();
        state.next_home_index();
        state.next_home_index();
        assert_eq!(state.homes_list_state().selected(), Some(1));
        state.previous_home_index();
        state.previous_home_index();
        state.previous_home_index();
        assert_eq!(state.homes_list_state().selected(), Some(0));
    }

    #[test]
    fn test_list_cursor_on_empty_collection() {
        let mut state = State::default();
        state.next_home_index();
        assert_eq!(state.homes_list_state().selected(), None);
        assert_eq!(state.current_home_id(), None);
    }

    #[test]
    fn test_end_to_end_add_home() {
        let mut state = State::default();
        state.dispatch(Action::OpenAddHome);
        state.dispatch(Action::SaveHome(HomeDraft {
            name: "Sunrise Villa".to_string(),
            rent_type: RentType::Monthly,
            ..HomeDraft::default()
        }));
        assert_eq!(state.homes().len(), 1);
        assert_eq!(state.homes()[0].name, "Sunrise Villa");
        assert_eq!(state.current_screen(), &Screen::List);
    }

    #[test]
    fn test_alert_lifecycle() {
        let mut state = State::default();
        assert!(state.alert().is_none());
        state.set_alert("Camera launch failed", "Unable to open the camera.".to_string());
        assert_eq!(
            state.alert().map(|a| a.title.as_str()),
            Some("Camera launch failed")
        );
        state.clear_alert();
        assert!(state.alert().is_none());
    }

    #[test]
    fn test_delete_gesture_never_removes_saved_records() {
        let mut state = state_with_homes(&["Keep me"]);
        let id = state.homes()[0].id.clone();
        state.dispatch(Action::OpenEditHome(id));
        state.form_mut().reset();
        assert_eq!(state.form().draft(), &HomeDraft::default());
        assert_eq!(state.homes().len(), 1);
        assert_eq!(state.homes()[0].name, "Keep me");
    }
}
