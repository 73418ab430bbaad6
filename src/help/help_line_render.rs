//! Help line rendering
//!
//! This module handles rendering of the help line at the bottom of the screen.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    widgets::Paragraph,
};

use crate::app::{App, Focus};

/// Render the help line (bottom of screen)
pub fn render_line(app: &App, frame: &mut Frame, area: Rect) {
    let help_text = match app.focus {
        Focus::SearchBar => " Enter: Search | Esc/Tab: View Document | Ctrl+C: Quit",
        Focus::Content => {
            if app.search.has_matches() {
                " /: Search | n/N: Next/Prev Match | j/k: Scroll | g/G: Top/Bottom | q: Quit"
            } else {
                " /: Search | j/k: Scroll | g/G: Top/Bottom | h/l: Pan | q: Quit"
            }
        }
    };

    let help = Paragraph::new(help_text).style(Style::default().fg(Color::DarkGray));

    frame.render_widget(help, area);
}
