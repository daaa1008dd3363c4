use super::Frame;
use crate::state::{ChecklistItem, State};
use crate::ui::widgets::styling;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Render the inspection checklist for the selected record.
///
pub fn checklist(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.theme();

    // Defensive: the reference degrades to nothing when the record vanished.
    let (title, location) = match state.selected_home() {
        Some(home) => (home.name.clone(), home.location.clone()),
        None => ("Home not found".to_string(), String::new()),
    };

    let block = Block::default()
        .title(Span::styled(title, styling::active_block_title_style()))
        .borders(Borders::ALL)
        .border_style(styling::normal_block_border_style(theme));
    frame.render_widget(block, size);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(1),
            Constraint::Length(ChecklistItem::ALL.len() as u16 + 1),
            Constraint::Min(0),
        ])
        .margin(1)
        .split(size);

    let location_text = vec![
        Line::styled("Location", styling::label_style(theme)),
        Line::styled(
            if location.is_empty() {
                "-".to_string()
            } else {
                location
            },
            styling::normal_text_style(theme),
        ),
    ];
    frame.render_widget(Paragraph::new(location_text), rows[0]);

    frame.render_widget(
        Paragraph::new(Line::styled("Check List", styling::label_style(theme))),
        rows[1],
    );

    let items: Vec<Line> = ChecklistItem::ALL
        .iter()
        .enumerate()
        .map(|(index, item)| check_row(state, index, *item))
        .collect();
    frame.render_widget(Paragraph::new(items), rows[2]);
}

/// Build one checklist row with its checkbox and cursor highlight.
///
fn check_row(state: &State, index: usize, item: ChecklistItem) -> Line<'static> {
    let theme = state.theme();
    let checked = state.checklist().is_checked(item);
    let box_span = if checked {
        Span::styled("[x] ", styling::checked_style(theme))
    } else {
        Span::styled("[ ] ", styling::muted_text_style(theme))
    };
    let label_style = if state.checklist_cursor() == index {
        styling::current_list_item_style(theme)
    } else {
        styling::normal_text_style(theme)
    };
    Line::from(vec![box_span, Span::styled(item.label().to_string(), label_style)])
}
