use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph},
};

use crate::app::{App, Focus};
use crate::document::{FlatDoc, RunKind, flatten};

/// Render the content pane and refresh the scroll bounds from the
/// flattened region.
pub fn render_pane(app: &mut App, frame: &mut Frame, area: Rect) {
    let border_color = if app.focus == Focus::Content {
        Color::Cyan
    } else {
        Color::DarkGray
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Document ")
        .border_style(Style::default().fg(border_color));
    let inner = block.inner(area);

    let flat = app
        .document
        .find_region(&app.region)
        .map(flatten)
        .unwrap_or_default();

    app.viewer_scroll.update_bounds(flat.line_count(), inner.height);
    app.viewer_scroll
        .update_h_bounds(flat.max_line_width(), inner.width);

    let content = Paragraph::new(flat_to_text(&flat))
        .block(block)
        .scroll((app.viewer_scroll.offset, app.viewer_scroll.h_offset));

    frame.render_widget(content, area);
}

fn flat_to_text(flat: &FlatDoc) -> Text<'static> {
    let lines: Vec<Line> = flat
        .lines
        .iter()
        .map(|line| {
            Line::from(
                line.runs
                    .iter()
                    .map(|run| Span::styled(run.text.clone(), run_style(run.kind)))
                    .collect::<Vec<_>>(),
            )
        })
        .collect();
    Text::from(lines)
}

fn run_style(kind: RunKind) -> Style {
    match kind {
        RunKind::Plain => Style::default().fg(Color::White),
        RunKind::Emphasis => Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
        RunKind::Marker { active: false } => Style::default().fg(Color::Black).bg(Color::Yellow),
        RunKind::Marker { active: true } => Style::default()
            .fg(Color::Black)
            .bg(Color::LightRed)
            .add_modifier(Modifier::BOLD),
    }
}

#[cfg(test)]
#[path = "viewer_render_tests.rs"]
mod viewer_render_tests;
