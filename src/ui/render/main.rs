use super::{checklist, editor, list, Frame};
use crate::state::{Screen, State};
use crate::ui::widgets::styling;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

/// Render main widget according to state.
///
pub fn main(frame: &mut Frame, size: Rect, state: &mut State) {
    match state.current_screen() {
        Screen::List => {
            list::list(frame, size, state);
        }
        Screen::Editor { .. } => {
            editor::editor(frame, size, state);
        }
        Screen::Checklist { .. } => {
            checklist::checklist(frame, size, state);
        }
    }

    // Alerts render on top of everything.
    if state.alert().is_some() {
        render_alert(frame, size, state);
    }
}

fn render_alert(frame: &mut Frame, size: Rect, state: &State) {
    let Some(alert) = state.alert() else {
        return;
    };
    let theme = state.theme();
    let popup_area = centered_rect(60, 25, size);

    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .title(Span::styled(alert.title.clone(), styling::error_style(theme)))
        .borders(Borders::ALL)
        .border_style(styling::error_style(theme))
        .style(styling::surface_style(theme));

    let text = vec![
        Line::from(""),
        Line::styled(alert.message.clone(), styling::normal_text_style(theme)),
        Line::from(""),
        Line::styled("Press any key to dismiss", styling::muted_text_style(theme)),
    ];
    let paragraph = Paragraph::new(text)
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, popup_area);
}

/// Return a rect centered within `r` occupying the given percentages.
///
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
