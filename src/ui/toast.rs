use crate::app::state::AppState;
use crate::ui::layout::toast_area;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use unicode_width::UnicodeWidthStr;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let toast = &state.toast;
    if !toast.visible {
        return;
    }

    let width = toast.message.width() as u16 + 4;
    let popup = toast_area(area, width, 3);
    let style = Theme::toast(toast.is_error());

    frame.render_widget(Clear, popup);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(style)
        .style(style);
    let paragraph = Paragraph::new(Line::from(toast.message.as_str()))
        .alignment(Alignment::Center)
        .block(block);
    frame.render_widget(paragraph, popup);
}
