//! Page metrics and observability module.
//!
//! This module tracks how the site is served: renders per language,
//! requests that fell back to the canonical language, and news dialog views.

use crate::i18n::Language;
use serde::Serialize;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::OnceLock;

/// Global page metrics singleton.
pub struct PageMetrics {
    /// Pages rendered in English
    english_renders: AtomicUsize,

    /// Pages rendered in Arabic
    arabic_renders: AtomicUsize,

    /// Requests carrying an unknown language code
    language_fallbacks: AtomicUsize,

    /// Pages rendered with the news dialog open
    news_views: AtomicUsize,
}

/// Process-wide counters
static METRICS: OnceLock<PageMetrics> = OnceLock::new();

impl PageMetrics {
    /// Get the global page metrics instance.
    pub fn global() -> &'static PageMetrics {
        METRICS.get_or_init(|| PageMetrics {
            english_renders: AtomicUsize::new(0),
            arabic_renders: AtomicUsize::new(0),
            language_fallbacks: AtomicUsize::new(0),
            news_views: AtomicUsize::new(0),
        })
    }

    /// Record a rendered page in `language`.
    pub fn record_render(&self, language: Language) {
        if language.is_rtl() {
            self.arabic_renders.fetch_add(1, Ordering::Relaxed);
        } else {
            self.english_renders.fetch_add(1, Ordering::Relaxed);
        }
    }

    /// Record a request whose language code was not recognised.
    pub fn record_language_fallback(&self) {
        self.language_fallbacks.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a page rendered with the news dialog open.
    pub fn record_news_view(&self) {
        self.news_views.fetch_add(1, Ordering::Relaxed);
    }

    pub fn english_renders(&self) -> usize {
        self.english_renders.load(Ordering::Relaxed)
    }

    pub fn arabic_renders(&self) -> usize {
        self.arabic_renders.load(Ordering::Relaxed)
    }

    pub fn language_fallbacks(&self) -> usize {
        self.language_fallbacks.load(Ordering::Relaxed)
    }

    pub fn news_views(&self) -> usize {
        self.news_views.load(Ordering::Relaxed)
    }

    /// Snapshot of every counter.
    pub fn report(&self) -> MetricsReport {
        let english = self.english_renders();
        let arabic = self.arabic_renders();
        let total_renders = english + arabic;
        let arabic_share = if total_renders > 0 {
            (arabic as f64 / total_renders as f64) * 100.0
        } else {
            0.0
        };

        MetricsReport {
            english_renders: english,
            arabic_renders: arabic,
            total_renders,
            arabic_share,
            language_fallbacks: self.language_fallbacks(),
            news_views: self.news_views(),
        }
    }

    /// Zero every counter.
    pub fn reset(&self) {
        self.english_renders.store(0, Ordering::Relaxed);
        self.arabic_renders.store(0, Ordering::Relaxed);
        self.language_fallbacks.store(0, Ordering::Relaxed);
        self.news_views.store(0, Ordering::Relaxed);
    }
}

/// Page metrics report.
#[derive(Debug, Clone, Serialize)]
pub struct MetricsReport {
    pub english_renders: usize,
    pub arabic_renders: usize,
    pub total_renders: usize,
    /// Percentage of renders served in Arabic (0-100)
    pub arabic_share: f64,
    pub language_fallbacks: usize,
    pub news_views: usize,
}

impl MetricsReport {
    /// Format the report as a human-readable string.
    pub fn format(&self) -> String {
        format!(
            "Page Metrics:\n\
             - Renders: {} (en: {}, ar: {}, {:.1}% Arabic)\n\
             - Language fallbacks: {}\n\
             - News dialog views: {}",
            self.total_renders,
            self.english_renders,
            self.arabic_renders,
            self.arabic_share,
            self.language_fallbacks,
            self.news_views,
        )
    }
}
