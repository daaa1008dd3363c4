use super::Frame;
use crate::model::{HomeRecord, RentType};
use crate::state::State;
use crate::ui::widgets::styling;
use chrono::Timelike;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

/// Render the home card list with its greeting header.
///
pub fn list(frame: &mut Frame, size: Rect, state: &mut State) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .margin(1)
        .split(size);

    render_greeting(frame, rows[0], state);

    if state.homes().is_empty() {
        render_empty_state(frame, rows[1], state);
    } else {
        render_cards(frame, rows[1], state);
    }
}

fn render_greeting(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.theme();
    let text = vec![
        Line::styled(format!("{},", greeting()), styling::banner_style(theme)),
        Line::styled(state.display_name().to_string(), styling::banner_style(theme)),
    ];
    frame.render_widget(Paragraph::new(text), size);
}

/// Pick the greeting for the current local hour.
///
fn greeting() -> &'static str {
    match chrono::Local::now().hour() {
        5..=11 => "Good Morning",
        12..=17 => "Good Afternoon",
        _ => "Good Evening",
    }
}

fn render_empty_state(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.theme();
    let text = vec![
        Line::from(""),
        Line::styled("No homes added yet", styling::normal_text_style(theme)),
        Line::styled(
            "Press 'a' to add your first home!",
            styling::muted_text_style(theme),
        ),
    ];
    let paragraph = Paragraph::new(text).alignment(Alignment::Center);
    frame.render_widget(paragraph, size);
}

fn render_cards(frame: &mut Frame, size: Rect, state: &mut State) {
    let theme = state.theme().clone();
    let items: Vec<ListItem> = state.homes().iter().map(|home| card(home, &theme)).collect();

    let block = Block::default()
        .title(Span::styled("Homes", styling::active_block_title_style()))
        .borders(Borders::ALL)
        .border_style(styling::normal_block_border_style(&theme));

    let list = List::new(items)
        .block(block)
        .highlight_style(styling::current_list_item_style(&theme));

    frame.render_stateful_widget(list, size, state.homes_list_state());
}

/// Build one two-line card for a record.
///
fn card(home: &HomeRecord, theme: &crate::ui::Theme) -> ListItem<'static> {
    let terms = match home.rent_type {
        RentType::Jeonse => format!("Jeonse · deposit {}", dash_if_empty(&home.deposit)),
        RentType::Monthly => format!(
            "Monthly · {} / {}",
            dash_if_empty(&home.deposit),
            dash_if_empty(&home.monthly_rent)
        ),
    };
    ListItem::new(vec![
        Line::styled(home.name.clone(), styling::normal_text_style(theme)),
        Line::from(vec![
            Span::styled(terms, styling::label_style(theme)),
            Span::raw("  "),
            Span::styled(
                dash_if_empty(&home.location),
                styling::muted_text_style(theme),
            ),
        ]),
    ])
}

fn dash_if_empty(value: &str) -> String {
    if value.is_empty() {
        "-".to_string()
    } else {
        value.to_string()
    }
}
