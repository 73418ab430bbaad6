use ratatui::style::{Modifier, Style};
use tui_textarea::TextArea;

use super::session::SearchSession;

/// Creates a TextArea configured for search input.
fn create_search_textarea() -> TextArea<'static> {
    let mut textarea = TextArea::default();
    textarea.set_cursor_line_style(Style::default());
    textarea.set_cursor_style(Style::default().add_modifier(Modifier::REVERSED));
    textarea
}

/// Manages the state of the search feature
pub struct SearchState {
    /// Search term text input
    search_textarea: TextArea<'static>,
    /// Navigation session from the most recent successful search
    session: Option<SearchSession>,
}

impl Default for SearchState {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchState {
    pub fn new() -> Self {
        Self {
            search_textarea: create_search_textarea(),
            session: None,
        }
    }

    /// Returns the current search term
    pub fn term(&self) -> &str {
        self.search_textarea
            .lines()
            .first()
            .map(|s| s.as_str())
            .unwrap_or("")
    }

    /// Returns a mutable reference to the search TextArea for input handling
    pub fn search_textarea_mut(&mut self) -> &mut TextArea<'static> {
        &mut self.search_textarea
    }

    pub fn session(&self) -> Option<&SearchSession> {
        self.session.as_ref()
    }

    pub fn session_mut(&mut self) -> Option<&mut SearchSession> {
        self.session.as_mut()
    }

    /// Install the session from a fresh search, replacing the old one.
    pub fn bind_session(&mut self, session: SearchSession) {
        self.session = Some(session);
    }

    pub fn has_matches(&self) -> bool {
        self.session.is_some()
    }

    /// Get match count display string "(current/total)"
    pub fn match_count_display(&self) -> String {
        match &self.session {
            None => "(0/0)".to_string(),
            Some(session) => format!("({}/{})", session.active() + 1, session.len()),
        }
    }
}

#[cfg(test)]
#[path = "search_state_tests.rs"]
mod search_state_tests;
