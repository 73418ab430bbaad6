#[cfg(test)]
pub mod test_helpers {
    use crate::app::App;
    use crate::config::Config;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    pub const TEST_DOC: &str = "<html><body>\
<div id=\"live-contents\">\
<h1>Weekly archive</h1>\
<p>The cat sat on the mat</p>\
<p>Fish &amp; Chips on <b>Friday</b></p>\
<p>One dog barked twice</p>\
</div>\
<div id=\"sidebar\"><p>cat pictures</p></div>\
</body></html>";

    pub fn test_app(markup: &str) -> App {
        App::new(markup, &Config::default()).expect("test markup should build an app")
    }

    pub fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    pub fn key_with_mods(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    /// Put `term` in the search input and run the search trigger.
    pub fn run_search(app: &mut App, term: &str) {
        let textarea = app.search.search_textarea_mut();
        textarea.select_all();
        textarea.cut();
        textarea.insert_str(term);
        crate::search::search_events::trigger_search(app);
    }
}
