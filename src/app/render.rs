use ratatui::{
    Frame,
    layout::{Constraint, Layout},
};

use super::state::App;
use crate::notification::render_notification;
use crate::search::SEARCH_BAR_HEIGHT;

impl App {
    pub fn render(&mut self, frame: &mut Frame) {
        let layout = Layout::vertical([
            Constraint::Min(3),
            Constraint::Length(SEARCH_BAR_HEIGHT),
            Constraint::Length(1),
        ])
        .split(frame.area());

        self.layout.content = layout[0];
        self.layout.help_line = layout[2];

        crate::viewer::viewer_render::render_pane(self, frame, layout[0]);
        crate::search::render_bar(self, frame, layout[1]);
        crate::help::help_line_render::render_line(self, frame, layout[2]);

        render_notification(frame, &self.notification);
    }
}
