use ratatui::crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use std::io;

use super::mouse_click;
use super::state::{App, Focus};
use crate::layout::region_at;
use crate::search::search_events;

impl App {
    /// Handle events and update application state
    pub fn handle_events(&mut self) -> io::Result<()> {
        match event::read()? {
            // Check that it's a key press event to avoid duplicates
            Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                self.handle_key_event(key_event);
            }
            Event::Mouse(mouse_event) => {
                self.handle_mouse_event(mouse_event);
            }
            _ => {}
        }
        Ok(())
    }

    /// Handle key press events
    pub(crate) fn handle_key_event(&mut self, key: KeyEvent) {
        // The notification is modal: any key dismisses it, nothing else runs
        if self.notification.is_visible() {
            self.notification.dismiss();
            return;
        }

        // Ctrl+C: Exit application
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.focus {
            Focus::SearchBar => self.handle_search_bar_key(key),
            Focus::Content => self.handle_content_key(key),
        }
    }

    fn handle_search_bar_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => {
                search_events::trigger_search(self);
            }
            KeyCode::Esc | KeyCode::Tab => {
                self.focus = Focus::Content;
            }
            _ => {
                self.search.search_textarea_mut().input(key);
            }
        }
    }

    fn handle_content_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('/') | KeyCode::Tab => {
                self.focus = Focus::SearchBar;
            }
            KeyCode::Char('q') => {
                self.should_quit = true;
            }

            KeyCode::Char('n') => {
                search_events::next_match(self);
            }
            KeyCode::Char('N') => {
                search_events::previous_match(self);
            }

            KeyCode::Down | KeyCode::Char('j') => {
                self.viewer_scroll.scroll_down(self.scroll_step);
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.viewer_scroll.scroll_up(self.scroll_step);
            }
            KeyCode::Char('J') => {
                self.viewer_scroll.scroll_down(10);
            }
            KeyCode::Char('K') => {
                self.viewer_scroll.scroll_up(10);
            }
            KeyCode::PageDown => {
                self.viewer_scroll.page_down();
            }
            KeyCode::PageUp => {
                self.viewer_scroll.page_up();
            }

            KeyCode::Left | KeyCode::Char('h') => {
                self.viewer_scroll.scroll_left(1);
            }
            KeyCode::Right | KeyCode::Char('l') => {
                self.viewer_scroll.scroll_right(1);
            }
            KeyCode::Char('0') | KeyCode::Char('^') => {
                self.viewer_scroll.jump_to_left();
            }

            KeyCode::Home | KeyCode::Char('g') => {
                self.viewer_scroll.jump_to_top();
            }
            KeyCode::End | KeyCode::Char('G') => {
                self.viewer_scroll.jump_to_bottom();
            }

            _ => {}
        }
    }

    pub(crate) fn handle_mouse_event(&mut self, mouse: MouseEvent) {
        // The notification swallows clicks too
        if self.notification.is_visible() {
            if matches!(mouse.kind, MouseEventKind::Down(_)) {
                self.notification.dismiss();
            }
            return;
        }

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                let region = region_at(&self.layout, mouse.column, mouse.row);
                mouse_click::handle_click(self, region);
            }
            MouseEventKind::ScrollDown => {
                self.viewer_scroll.scroll_down(self.scroll_step);
            }
            MouseEventKind::ScrollUp => {
                self.viewer_scroll.scroll_up(self.scroll_step);
            }
            _ => {}
        }
    }
}

#[cfg(test)]
#[path = "events_tests.rs"]
mod events_tests;
