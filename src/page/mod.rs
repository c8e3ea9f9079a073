//! Page state and the behaviors that mutate it.
//!
//! `PageState` is owned by whoever renders the page (the HTTP handler, the
//! preview tool, a test) and passed down by reference. Every mutation happens
//! through the operations below; nothing here is global.

pub mod modal;
pub mod navigation;
pub mod reveal;
pub mod scroll;

use crate::content::timeline::{find_news, NewsRecord};
use crate::i18n::{Direction, Language};
use modal::NewsModal;
use scroll::ScrollObserver;

/// Local UI state of one page session.
#[derive(Debug, Clone, PartialEq)]
pub struct PageState {
    language: Language,
    scrolled: bool,
    menu_open: bool,
    modal: NewsModal,
}

impl PageState {
    pub fn new(language: Language) -> Self {
        Self {
            language,
            scrolled: false,
            menu_open: false,
            modal: NewsModal::default(),
        }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn direction(&self) -> Direction {
        self.language.direction()
    }

    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn modal(&self) -> &NewsModal {
        &self.modal
    }

    /// Switch to the other language. Closes the mobile menu.
    pub fn toggle_language(&mut self) {
        self.language = self.language.toggled();
        self.menu_open = false;
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    /// Update the scroll flag from a viewport offset.
    pub fn apply_scroll(&mut self, observer: &ScrollObserver, offset: f64) {
        self.scrolled = observer.is_scrolled(offset);
    }

    pub fn open_news(&mut self, record: &'static NewsRecord) {
        self.modal.open(record);
    }

    pub fn close_news(&mut self) {
        self.modal.close();
    }

    /// The state reached by the language toggle, leaving `self` untouched.
    pub fn with_language_toggled(&self) -> PageState {
        let mut next = self.clone();
        next.toggle_language();
        next
    }

    /// The state reached by the menu button.
    pub fn with_menu_toggled(&self) -> PageState {
        let mut next = self.clone();
        next.toggle_menu();
        next
    }

    /// The state reached by opening `record`.
    pub fn with_news(&self, record: &'static NewsRecord) -> PageState {
        let mut next = self.clone();
        next.open_news(record);
        next
    }

    /// The state reached by dismissing the news dialog.
    pub fn with_news_closed(&self) -> PageState {
        let mut next = self.clone();
        next.close_news();
        next
    }

    /// The state reached by following a section link: same page, menu closed.
    pub fn with_menu_closed(&self) -> PageState {
        let mut next = self.clone();
        next.close_menu();
        next
    }

    /// Query string (with leading `?`) that reproduces this state on reload.
    ///
    /// The scroll flag is not part of it; it is re-derived by the browser.
    pub fn query_string(&self) -> String {
        let mut query = format!("?lang={}", self.language.code());
        if self.menu_open {
            query.push_str("&menu=open");
        }
        if let Some(record) = self.modal.record() {
            query.push_str("&news=");
            query.push_str(record.slug);
        }
        query
    }

    /// Rebuild a state from query parameters.
    ///
    /// Unknown news slugs leave the dialog closed.
    pub fn from_params(language: Language, menu_open: bool, news: Option<&str>) -> Self {
        let mut state = PageState::new(language);
        state.menu_open = menu_open;
        if let Some(record) = news.and_then(find_news) {
            state.open_news(record);
        }
        state
    }
}

impl Default for PageState {
    fn default() -> Self {
        PageState::new(Language::canonical())
    }
}
