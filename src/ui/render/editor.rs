use super::Frame;
use crate::model::RentType;
use crate::state::{FormField, Screen, State};
use crate::ui::widgets::styling;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Render the add/edit form.
///
pub fn editor(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.theme();
    let title = if let Some(home) = state.editing_home() {
        format!("Edit Home \u{00b7} {}", home.name)
    } else if matches!(state.current_screen(), Screen::Editor { editing: Some(_) }) {
        "Edit Home".to_string()
    } else {
        "Add Home".to_string()
    };

    let block = Block::default()
        .title(Span::styled(title, styling::active_block_title_style()))
        .borders(Borders::ALL)
        .border_style(styling::normal_block_border_style(theme));
    frame.render_widget(block, size);

    let mut constraints: Vec<Constraint> = FormField::ALL
        .iter()
        .map(|_| Constraint::Length(3))
        .collect();
    constraints.push(Constraint::Min(0));
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .margin(1)
        .split(size);

    for (index, field) in FormField::ALL.iter().enumerate() {
        match field {
            FormField::RentType => render_rent_type(frame, rows[index], state),
            _ => render_text_field(frame, rows[index], state, *field),
        }
    }
}

fn render_text_field(frame: &mut Frame, size: Rect, state: &State, field: FormField) {
    let theme = state.theme();
    let focused = state.form().focus() == field;
    let draft = state.form().draft();
    let value = match field {
        FormField::Name => &draft.name,
        FormField::Location => &draft.location,
        FormField::Deposit => &draft.deposit,
        FormField::MonthlyRent => &draft.monthly_rent,
        FormField::MaintenanceFee => &draft.maintenance_fee,
        FormField::DueDate => &draft.due_date,
        FormField::BrokerPhone => &draft.broker_phone,
        FormField::RentType => return,
    };

    let block = Block::default()
        .title(field.label())
        .borders(Borders::ALL)
        .border_style(if focused {
            styling::active_block_border_style(theme)
        } else {
            styling::normal_block_border_style(theme)
        });

    let shown = if focused {
        // Trailing cursor marker on the focused field.
        format!("{}\u{2588}", value)
    } else {
        value.clone()
    };
    let paragraph = Paragraph::new(shown)
        .block(block)
        .style(styling::normal_text_style(theme));
    frame.render_widget(paragraph, size);
}

fn render_rent_type(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.theme();
    let focused = state.form().focus() == FormField::RentType;
    let rent_type = state.form().draft().rent_type;

    let block = Block::default()
        .title(FormField::RentType.label())
        .borders(Borders::ALL)
        .border_style(if focused {
            styling::active_block_border_style(theme)
        } else {
            styling::normal_block_border_style(theme)
        });

    let button = |label: &'static str, active: bool| {
        if active {
            Span::styled(format!("[{}]", label), styling::accent_style(theme))
        } else {
            Span::styled(format!(" {} ", label), styling::muted_text_style(theme))
        }
    };
    let line = Line::from(vec![
        button(RentType::Jeonse.label(), rent_type == RentType::Jeonse),
        Span::raw("  "),
        button(RentType::Monthly.label(), rent_type == RentType::Monthly),
    ]);
    frame.render_widget(Paragraph::new(line).block(block), size);
}
