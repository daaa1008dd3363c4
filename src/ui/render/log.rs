use super::Frame;
use crate::state::State;
use crate::ui::widgets::styling;
use ratatui::{
    layout::Rect,
    widgets::{Block, Borders},
};
use tui_logger::TuiLoggerWidget;

/// Render the log pane.
///
pub fn log(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.theme();
    let widget = TuiLoggerWidget::default()
        .block(
            Block::default()
                .title("Log")
                .borders(Borders::ALL)
                .border_style(styling::normal_block_border_style(theme)),
        )
        .style_error(styling::error_style(theme))
        .style_warn(styling::warning_style(theme))
        .style_info(styling::normal_text_style(theme))
        .style_debug(styling::muted_text_style(theme))
        .style_trace(styling::muted_text_style(theme));
    frame.render_widget(widget, size);
}
