//! Terminal event handling.
//!
//! A polling thread forwards key events over a channel; `handle_next` routes
//! them into reducer actions according to the active screen.

use crate::model::RentType;
use crate::state::{Action, FormField, Screen, State};
use anyhow::Result;
use crossterm::{
    event,
    event::{Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
};
use log::*;
use std::{sync::mpsc, thread, time::Duration};

/// Specify terminal event poll rate in milliseconds.
///
const TICK_RATE_IN_MS: u64 = 60;

/// Specify different terminal event types.
///
#[derive(Debug)]
pub enum Event<I> {
    Input(I),
    Tick,
}

/// Specify struct for managing terminal events channel.
///
pub struct Handler {
    rx: mpsc::Receiver<Event<KeyEvent>>,
    _tx: mpsc::Sender<Event<KeyEvent>>,
}

impl Handler {
    /// Return new instance after spawning new input polling thread.
    ///
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        let tx_clone = tx.clone();
        thread::spawn(move || loop {
            let tick_rate = Duration::from_millis(TICK_RATE_IN_MS);
            match event::poll(tick_rate) {
                Ok(true) => {
                    if let Ok(CrosstermEvent::Key(key)) = event::read() {
                        if tx_clone.send(Event::Input(key)).is_err() {
                            break;
                        }
                    }
                }
                Ok(false) => {
                    if tx_clone.send(Event::Tick).is_err() {
                        break;
                    }
                }
                Err(e) => {
                    error!("Failed to poll terminal events: {}", e);
                    break;
                }
            }
        });
        Handler { rx, _tx: tx }
    }

    /// Receive next terminal event and handle it accordingly. Returns result
    /// with value true if should continue or false if exit was requested.
    ///
    pub fn handle_next(&self, state: &mut State) -> Result<bool> {
        match self.rx.recv()? {
            Event::Input(key) => Ok(handle_key(state, key)),
            Event::Tick => Ok(true),
        }
    }
}

/// Route one key event into state mutations. Returns false when an exit was
/// requested.
///
fn handle_key(state: &mut State, key: KeyEvent) -> bool {
    if key.kind == KeyEventKind::Release {
        return true;
    }

    // Global bindings first.
    match key {
        KeyEvent {
            code: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
            ..
        } => {
            debug!("Processing exit terminal event '{:?}'...", key);
            return false;
        }
        KeyEvent {
            code: KeyCode::Char('l'),
            modifiers: KeyModifiers::CONTROL,
            ..
        } => {
            state.toggle_log();
            return true;
        }
        _ => {}
    }

    // An open alert swallows everything until dismissed.
    if state.alert().is_some() {
        if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(_)) {
            state.clear_alert();
        }
        return true;
    }

    match state.current_screen().clone() {
        Screen::List => handle_list_key(state, key),
        Screen::Editor { .. } => handle_editor_key(state, key),
        Screen::Checklist { .. } => handle_checklist_key(state, key),
    }
}

/// Handle keys on the home card list.
///
fn handle_list_key(state: &mut State, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('q') => return false,
        KeyCode::Char('a') => {
            state.dispatch(Action::OpenAddHome);
        }
        KeyCode::Char('e') => {
            if let Some(id) = state.current_home_id() {
                state.dispatch(Action::OpenEditHome(id));
            }
        }
        KeyCode::Enter => {
            if let Some(id) = state.current_home_id() {
                state.dispatch(Action::OpenChecklist(id));
            }
        }
        KeyCode::Char('j') | KeyCode::Down => {
            state.next_home_index();
        }
        KeyCode::Char('k') | KeyCode::Up => {
            state.previous_home_index();
        }
        _ => {}
    }
    true
}

/// Handle keys on the add/edit form. Characters go to the focused field, so
/// save and clear live behind control modifiers.
///
fn handle_editor_key(state: &mut State, key: KeyEvent) -> bool {
    match key {
        KeyEvent {
            code: KeyCode::Char('s'),
            modifiers: KeyModifiers::CONTROL,
            ..
        } => {
            state.submit_form();
        }
        KeyEvent {
            code: KeyCode::Char('d'),
            modifiers: KeyModifiers::CONTROL,
            ..
        } => {
            // The "delete" gesture clears the draft; saved records stay.
            state.form_mut().reset();
        }
        KeyEvent {
            code: KeyCode::Esc, ..
        } => {
            state.dispatch(Action::GoToList);
        }
        KeyEvent {
            code: KeyCode::Tab, ..
        }
        | KeyEvent {
            code: KeyCode::Down,
            ..
        } => {
            state.form_mut().focus_next();
        }
        KeyEvent {
            code: KeyCode::BackTab,
            ..
        }
        | KeyEvent {
            code: KeyCode::Up, ..
        } => {
            state.form_mut().focus_previous();
        }
        KeyEvent {
            code: KeyCode::Enter,
            ..
        } => {
            state.form_mut().focus_next();
        }
        KeyEvent {
            code: KeyCode::Char('u'),
            modifiers: KeyModifiers::CONTROL,
            ..
        } => {
            let focus = state.form().focus();
            state.form_mut().set_field(focus, "");
        }
        KeyEvent {
            code: KeyCode::Left,
            ..
        } if state.form().focus() == FormField::RentType => {
            state.form_mut().set_rent_type(RentType::Jeonse);
        }
        KeyEvent {
            code: KeyCode::Right,
            ..
        } if state.form().focus() == FormField::RentType => {
            state.form_mut().set_rent_type(RentType::Monthly);
        }
        KeyEvent {
            code: KeyCode::Char(' '),
            ..
        } if state.form().focus() == FormField::RentType => {
            state.form_mut().toggle_rent_type();
        }
        KeyEvent {
            code: KeyCode::Backspace,
            ..
        } => {
            state.form_mut().backspace();
        }
        KeyEvent {
            code: KeyCode::Char(c),
            modifiers: KeyModifiers::NONE | KeyModifiers::SHIFT,
            ..
        } => {
            state.form_mut().insert_char(c);
        }
        _ => {}
    }
    true
}

/// Handle keys on the inspection checklist.
///
fn handle_checklist_key(state: &mut State, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Esc | KeyCode::Char('s') => {
            // "Save" on the checklist just returns to the list; the flags
            // are ephemeral per visit.
            state.dispatch(Action::GoToList);
        }
        KeyCode::Char('c') => {
            state.request_camera();
        }
        KeyCode::Enter | KeyCode::Char(' ') => {
            state.toggle_current_check();
        }
        KeyCode::Char('j') | KeyCode::Down => {
            state.next_check_item();
        }
        KeyCode::Char('k') | KeyCode::Up => {
            state.previous_check_item();
        }
        _ => {}
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{HomeDraft, RentType};

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn state_with_one_home() -> State {
        let mut state = State::default();
        state.dispatch(Action::OpenAddHome);
        state.dispatch(Action::SaveHome(HomeDraft {
            name: "Sunrise Villa".to_string(),
            ..HomeDraft::default()
        }));
        state
    }

    #[test]
    fn test_ctrl_c_requests_exit_from_any_screen() {
        let mut state = state_with_one_home();
        assert!(!handle_key(&mut state, ctrl('c')));
        state.dispatch(Action::OpenAddHome);
        assert!(!handle_key(&mut state, ctrl('c')));
    }

    #[test]
    fn test_list_add_and_save_round_trip() {
        let mut state = State::default();
        assert!(handle_key(&mut state, press(KeyCode::Char('a'))));
        assert!(matches!(state.current_screen(), Screen::Editor { editing: None }));
        for c in "Loft".chars() {
            handle_key(&mut state, press(KeyCode::Char(c)));
        }
        handle_key(&mut state, ctrl('s'));
        assert_eq!(state.current_screen(), &Screen::List);
        assert_eq!(state.homes()[0].name, "Loft");
    }

    #[test]
    fn test_list_enter_opens_checklist_for_cursor_home() {
        let mut state = state_with_one_home();
        let id = state.homes()[0].id.clone();
        handle_key(&mut state, press(KeyCode::Enter));
        assert_eq!(state.current_screen().selected_id(), Some(id.as_str()));
    }

    #[test]
    fn test_editor_rent_type_toggle_binding() {
        let mut state = State::default();
        state.dispatch(Action::OpenAddHome);
        handle_key(&mut state, press(KeyCode::Tab));
        handle_key(&mut state, press(KeyCode::Tab));
        assert_eq!(state.form().focus(), FormField::RentType);
        handle_key(&mut state, press(KeyCode::Left));
        assert_eq!(state.form().draft().rent_type, RentType::Jeonse);
        // Space toggles only while the rent-type field is focused.
        handle_key(&mut state, press(KeyCode::Tab));
        handle_key(&mut state, press(KeyCode::Char(' ')));
        assert_eq!(state.form().draft().rent_type, RentType::Jeonse);
        assert_eq!(state.form().draft().deposit, " ");
    }

    #[test]
    fn test_editor_ctrl_u_clears_focused_field_only() {
        let mut state = State::default();
        state.dispatch(Action::OpenAddHome);
        for c in "Loft".chars() {
            handle_key(&mut state, press(KeyCode::Char(c)));
        }
        handle_key(&mut state, press(KeyCode::Tab));
        handle_key(&mut state, press(KeyCode::Char('x')));
        handle_key(&mut state, ctrl('u'));
        assert_eq!(state.form().draft().name, "Loft");
        assert_eq!(state.form().draft().location, "");
    }

    #[test]
    fn test_checklist_space_toggles_cursor_item() {
        let mut state = state_with_one_home();
        handle_key(&mut state, press(KeyCode::Enter));
        handle_key(&mut state, press(KeyCode::Char(' ')));
        assert!(state.checklist().mold);
        handle_key(&mut state, press(KeyCode::Char('j')));
        handle_key(&mut state, press(KeyCode::Char(' ')));
        assert!(state.checklist().floor);
    }

    #[test]
    fn test_alert_swallows_keys_until_dismissed() {
        let mut state = state_with_one_home();
        state.set_alert("Camera launch failed", "Unable to open the camera.".to_string());
        handle_key(&mut state, press(KeyCode::Char('a')));
        // The keypress dismissed the alert instead of opening the editor.
        assert!(state.alert().is_none());
        assert_eq!(state.current_screen(), &Screen::List);
    }

    #[test]
    fn test_editor_escape_returns_to_list_without_saving() {
        let mut state = State::default();
        handle_key(&mut state, press(KeyCode::Char('a')));
        handle_key(&mut state, press(KeyCode::Char('x')));
        handle_key(&mut state, press(KeyCode::Esc));
        assert_eq!(state.current_screen(), &Screen::List);
        assert!(state.homes().is_empty());
    }
}
