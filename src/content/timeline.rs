//! Construction timeline phases and the news attached to them.

use crate::i18n::{Language, NewsStrings};

pub const PHASE_COUNT: usize = 3;
pub const NEWS_COUNT: usize = 1;

/// How far along the track the connecting line is drawn, in percent.
pub const PROGRESS_LINE_PERCENT: u8 = 60;

/// Progress state of a timeline phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhaseStatus {
    Done,
    Active,
    Future,
}

impl PhaseStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PhaseStatus::Done => "done",
            PhaseStatus::Active => "active",
            PhaseStatus::Future => "future",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Phase {
    /// Year or quarter label (e.g., "Q4 2025")
    pub year: &'static str,
    pub status: PhaseStatus,
    /// Index into [`NEWS`] when the phase has a news dialog
    pub news: Option<usize>,
}

impl Phase {
    /// The news record attached to this phase, if any.
    pub fn news_record(&self) -> Option<&'static NewsRecord> {
        self.news.and_then(|index| NEWS.get(index))
    }
}

pub static PHASES: [Phase; PHASE_COUNT] = [
    Phase { year: "Q4 2025", status: PhaseStatus::Done, news: Some(0) },
    Phase { year: "2027", status: PhaseStatus::Active, news: None },
    Phase { year: "2030", status: PhaseStatus::Future, news: None },
];

/// A static news item shown in the timeline dialog.
///
/// Title and body live in the content dictionary under `news.<index>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewsRecord {
    /// URL-safe identifier used to open the dialog
    pub slug: &'static str,
    /// ISO date of the event
    pub date: &'static str,
    pub images: &'static [&'static str],
    index: usize,
}

impl NewsRecord {
    /// Localized title and body.
    pub fn text(&self, language: Language) -> &'static NewsStrings {
        &language.strings().news[self.index]
    }
}

pub static NEWS: [NewsRecord; NEWS_COUNT] = [NewsRecord {
    slug: "signing-ceremony",
    date: "2025-11-25",
    images: &[
        "https://i.postimg.cc/0NPrpbZ3/1.jpg",
        "https://i.postimg.cc/5tbjw6nf/Copy-of-DSC03633.jpg",
        "https://i.postimg.cc/xdnqKctr/Copy-of-DSC03740.jpg",
        "https://i.postimg.cc/YSMj1hbH/Copy-of-DSC03755.jpg",
    ],
    index: 0,
}];

/// Find a news record by slug.
pub fn find_news(slug: &str) -> Option<&'static NewsRecord> {
    NEWS.iter().find(|news| news.slug == slug)
}

/// Phases paired with their titles in `language`.
pub fn localized(language: Language) -> impl Iterator<Item = (&'static Phase, &'static str)> {
    PHASES
        .iter()
        .zip(language.strings().timeline.phases.iter().copied())
}
