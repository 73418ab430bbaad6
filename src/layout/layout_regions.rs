use ratatui::layout::Rect;

/// UI components a mouse position can land on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    Content,
    SearchInput,
    PrevButton,
    NextButton,
    SearchButton,
    HelpLine,
}

/// Rendered position of each UI component, refreshed every frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LayoutRegions {
    pub content: Rect,
    pub search_input: Rect,
    pub prev_button: Rect,
    pub next_button: Rect,
    pub search_button: Rect,
    pub help_line: Rect,
}
