use super::Frame;
use crate::state::{Screen, State};
use crate::ui::widgets::styling;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
};

/// Render the key-hint footer for the active screen.
///
pub fn footer(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.theme();

    if state.alert().is_some() {
        let line = Line::styled(" Press any key to dismiss", styling::warning_style(theme));
        frame.render_widget(Paragraph::new(line), size);
        return;
    }

    let hints = match state.current_screen() {
        Screen::List => " j/k: move  a: add  e: edit  Enter: checklist  q: quit",
        Screen::Editor { .. } => {
            " Tab: next field  \u{2190}/\u{2192}: rent type  Ctrl-S: save  Ctrl-D: clear  Esc: back"
        }
        Screen::Checklist { .. } => " j/k: move  Space: toggle  c: camera  s/Esc: save & back",
    };

    let line = Line::from(vec![
        Span::styled(hints, styling::label_style(theme)),
        Span::styled("  Ctrl-L: log  Ctrl-C: quit", styling::muted_text_style(theme)),
    ]);
    frame.render_widget(Paragraph::new(line), size);
}
