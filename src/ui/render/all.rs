use super::{footer, log, main, Frame};
use crate::state::State;
use ratatui::layout::{Constraint, Direction, Layout};

/// Render the whole frame: the active screen, an optional log pane, and the
/// key-hint footer.
///
pub fn all(frame: &mut Frame, state: &mut State) {
    let size = frame.size();

    let constraints = if state.is_log_visible() {
        vec![
            Constraint::Min(0),
            Constraint::Length(10),
            Constraint::Length(1),
        ]
    } else {
        vec![Constraint::Min(0), Constraint::Length(1)]
    };
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(size);

    main(frame, rows[0], state);
    if state.is_log_visible() {
        log(frame, rows[1], state);
    }
    footer(frame, rows[rows.len() - 1], state);
}
