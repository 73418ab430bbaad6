use crate::config::Config;
use crate::document::Document;
use crate::error::DocviewError;
use crate::layout::LayoutRegions;
use crate::notification::NotificationState;
use crate::scroll::ScrollState;
use crate::search::SearchState;

/// Which pane has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    SearchBar,
    Content,
}

/// Application state
pub struct App {
    pub document: Document,
    /// Selector of the content region searches run against
    pub region: String,
    pub search: SearchState,
    pub viewer_scroll: ScrollState,
    pub notification: NotificationState,
    pub focus: Focus,
    pub layout: LayoutRegions,
    pub scroll_step: u16,
    pub should_quit: bool,
}

impl App {
    /// Create a new App instance from document markup.
    ///
    /// Fails when the markup does not parse or the configured region is
    /// not present, so both surface before the terminal is set up.
    pub fn new(markup: &str, config: &Config) -> Result<Self, DocviewError> {
        let document = Document::parse(markup)?;
        let region = config.viewer.region.clone();
        if document.find_region(&region).is_none() {
            return Err(DocviewError::RegionNotFound(region));
        }

        Ok(Self {
            document,
            region,
            search: SearchState::new(),
            viewer_scroll: ScrollState::new(),
            notification: NotificationState::new(),
            focus: Focus::SearchBar, // Start with the search input focused
            layout: LayoutRegions::default(),
            scroll_step: config.viewer.scroll_step,
            should_quit: false,
        })
    }

    /// Check if the application should quit
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }
}

#[cfg(test)]
#[path = "state_tests.rs"]
mod state_tests;
