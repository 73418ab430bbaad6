use ratatui::{
    Frame,
    layout::Alignment,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use super::state::NotificationState;
use crate::widgets::popup::{centered_popup, clear_area};

const MIN_WIDTH: u16 = 24;
const HEIGHT: u16 = 5;

/// Render the modal notification popup, if one is showing.
pub fn render_notification(frame: &mut Frame, state: &NotificationState) {
    let Some(notification) = state.current() else {
        return;
    };

    let width = (notification.message.width() as u16 + 6).max(MIN_WIDTH);
    let area = centered_popup(frame.area(), width, HEIGHT);
    clear_area(frame, area);

    let body = vec![
        Line::from(Span::styled(
            notification.message.clone(),
            Style::default().fg(Color::White),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Press any key",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let popup = Paragraph::new(body).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Notice ")
            .border_style(Style::default().fg(Color::Yellow)),
    );

    frame.render_widget(popup, area);
}
