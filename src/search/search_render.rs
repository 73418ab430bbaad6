//! Search bar rendering
//!
//! The search bar sits below the content pane: the term input with a
//! match counter, then the Prev/Next/Search controls.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::app::{App, Focus};

// Search bar display constants
pub const SEARCH_BAR_HEIGHT: u16 = 3;
const BUTTON_WIDTH: u16 = 10;

/// Render the search bar and its controls, recording their regions for
/// mouse hit-testing.
pub fn render_bar(app: &mut App, frame: &mut Frame, area: Rect) {
    let chunks = Layout::horizontal([
        Constraint::Min(16),
        Constraint::Length(BUTTON_WIDTH),
        Constraint::Length(BUTTON_WIDTH),
        Constraint::Length(BUTTON_WIDTH),
    ])
    .split(area);

    app.layout.search_input = chunks[0];
    app.layout.prev_button = chunks[1];
    app.layout.next_button = chunks[2];
    app.layout.search_button = chunks[3];

    // Build match count display for the right side
    let match_count = app.search.match_count_display();
    let match_count_style = if !app.search.has_matches() && !app.search.term().is_empty() {
        // No matches found - show in red
        Style::default().fg(Color::Red)
    } else {
        Style::default().fg(Color::Gray)
    };

    let border_color = if app.focus == Focus::SearchBar {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Search: ")
        .title_top(
            Line::from(Span::styled(format!(" {} ", match_count), match_count_style))
                .alignment(Alignment::Right),
        )
        .border_style(Style::default().fg(border_color));

    let inner_area = block.inner(chunks[0]);
    frame.render_widget(block, chunks[0]);

    let search_textarea = app.search.search_textarea_mut();
    search_textarea.set_style(Style::default().fg(Color::White));
    search_textarea.set_cursor_line_style(Style::default());
    frame.render_widget(&*search_textarea, inner_area);

    let navigable = app.search.has_matches();
    render_button(frame, chunks[1], "< Prev", navigable);
    render_button(frame, chunks[2], "Next >", navigable);
    render_button(frame, chunks[3], "Search", true);
}

fn render_button(frame: &mut Frame, area: Rect, label: &str, enabled: bool) {
    let label_style = if enabled {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let button = Paragraph::new(label)
        .alignment(Alignment::Center)
        .style(label_style)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
    frame.render_widget(button, area);
}

#[cfg(test)]
#[path = "search_render_tests.rs"]
mod search_render_tests;
