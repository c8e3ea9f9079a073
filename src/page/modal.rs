//! News dialog state.
//!
//! The dialog only ever holds a shared reference to a static record, so
//! opening and dismissing it can never alter the record itself.

use crate::content::timeline::NewsRecord;
use crate::i18n::Language;

/// Single news dialog instance of the page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewsModal {
    record: Option<&'static NewsRecord>,
}

/// Where a click inside the open dialog landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// The explicit close button
    CloseControl,
    /// The dimmed area around the content
    Backdrop,
    /// Anywhere inside the content panel
    Content,
}

/// Everything the dialog shows, resolved for one language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewsView {
    pub date: &'static str,
    pub title: &'static str,
    pub paragraphs: Vec<&'static str>,
    pub images: Vec<NewsImage>,
    pub close_label: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewsImage {
    pub url: &'static str,
    pub alt: String,
}

impl NewsModal {
    /// Open the dialog on `record`, replacing any record already shown.
    pub fn open(&mut self, record: &'static NewsRecord) {
        self.record = Some(record);
    }

    pub fn close(&mut self) {
        self.record = None;
    }

    pub fn is_open(&self) -> bool {
        self.record.is_some()
    }

    pub fn record(&self) -> Option<&'static NewsRecord> {
        self.record
    }

    /// Handle a click while open. Returns `true` if the dialog was dismissed.
    pub fn click(&mut self, target: ClickTarget) -> bool {
        if !self.is_open() {
            return false;
        }
        match target {
            ClickTarget::CloseControl | ClickTarget::Backdrop => {
                self.close();
                true
            }
            ClickTarget::Content => false,
        }
    }

    /// Resolve the dialog content for `language`; `None` while closed.
    pub fn view(&self, language: Language) -> Option<NewsView> {
        let record = self.record?;
        let text = record.text(language);
        let strings = language.strings();

        let images = record
            .images
            .iter()
            .copied()
            .enumerate()
            .map(|(i, url)| NewsImage {
                url,
                alt: strings.modal.photo_alt.replace("{n}", &(i + 1).to_string()),
            })
            .collect();

        Some(NewsView {
            date: record.date,
            title: text.title,
            paragraphs: text
                .body
                .split("\n\n")
                .map(str::trim)
                .filter(|p| !p.is_empty())
                .collect(),
            images,
            close_label: strings.modal.close,
        })
    }
}
