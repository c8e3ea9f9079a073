//! HTTP surface: the page, its assets, health and metrics.

use crate::config::Config;
use crate::i18n::{DictionaryValidator, Language, LanguageRegistry, PageMetrics};
use crate::page::PageState;
use crate::render::{self, assets};
use anyhow::{bail, Context, Result};
use axum::{
    extract::{Query, State},
    http::header,
    response::{Html, IntoResponse},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::{debug, info, warn};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
        }
    }
}

/// Query parameters of the page route.
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    pub lang: Option<String>,
    pub menu: Option<String>,
    pub news: Option<String>,
}

impl PageQuery {
    /// Rebuild the page state these parameters describe.
    ///
    /// An unknown or disabled language code falls back to the canonical
    /// language; the request is still served.
    pub fn to_state(&self, default_language: Language) -> PageState {
        let language = match self.lang.as_deref() {
            None | Some("") => default_language,
            Some(code) => match Language::from_code(code) {
                Ok(language) => language,
                Err(e) => {
                    warn!("{}, falling back to {}", e, Language::canonical().code());
                    PageMetrics::global().record_language_fallback();
                    Language::canonical()
                }
            },
        };

        let menu_open = self.menu.as_deref() == Some("open");
        let state = PageState::from_params(language, menu_open, self.news.as_deref());

        if let Some(slug) = self.news.as_deref() {
            if !state.modal().is_open() {
                debug!("Ignoring unknown news slug '{}'", slug);
            }
        }

        state
    }
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(page))
        .route("/health", get(|| async { "OK" }))
        .route("/metrics", get(metrics))
        .route("/assets/site.css", get(stylesheet))
        .route("/assets/site.js", get(script))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn page(State(state): State<AppState>, Query(query): Query<PageQuery>) -> Html<String> {
    let page_state = query.to_state(state.config.default_language);

    let metrics = PageMetrics::global();
    metrics.record_render(page_state.language());
    if page_state.modal().is_open() {
        metrics.record_news_view();
    }

    Html(render::render_page(&page_state, &state.config))
}

async fn metrics() -> impl IntoResponse {
    Json(PageMetrics::global().report())
}

async fn stylesheet() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/css; charset=utf-8")], assets::STYLESHEET)
}

async fn script(State(state): State<AppState>) -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/javascript; charset=utf-8")],
        assets::site_script(&state.config),
    )
}

/// Validate every enabled dictionary against the canonical one.
///
/// Errors abort; warnings are logged.
pub fn check_dictionaries() -> Result<()> {
    let canonical = Language::canonical();

    for config in LanguageRegistry::get().list_enabled() {
        if config.is_canonical {
            continue;
        }
        let language = Language::from_code(config.code)?;
        let report = DictionaryValidator::validate(canonical.strings(), language.strings());

        for warning in &report.warnings {
            warn!("[{}] {}", language.code(), warning);
        }
        if report.has_errors() {
            bail!(
                "Dictionary '{}' failed validation:\n{}",
                language.code(),
                report.errors.join("\n")
            );
        }
        info!(
            "Dictionary '{}' validated ({} warnings)",
            language.code(),
            report.warnings.len()
        );
    }

    Ok(())
}

/// Bind the listener and serve until the process stops.
pub async fn serve(config: Config) -> Result<()> {
    let address = config.socket_address();
    let app = create_router(AppState::new(config));

    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {}", address))?;
    info!("Everwin Industrial Park site listening on http://{}", address);

    axum::serve(listener, app).await.context("Server error")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn query(lang: Option<&str>, menu: Option<&str>, news: Option<&str>) -> PageQuery {
        PageQuery {
            lang: lang.map(String::from),
            menu: menu.map(String::from),
            news: news.map(String::from),
        }
    }

    #[test]
    fn test_query_defaults_to_configured_language() {
        let state = query(None, None, None).to_state(Language::ARABIC);
        assert_eq!(state.language(), Language::ARABIC);
        assert!(!state.is_menu_open());
        assert!(!state.modal().is_open());
    }

    #[test]
    fn test_query_full_state() {
        let state = query(Some("ar"), Some("open"), Some("signing-ceremony")).to_state(Language::ENGLISH);
        assert_eq!(state.language(), Language::ARABIC);
        assert!(state.is_menu_open());
        assert!(state.modal().is_open());
    }

    #[test]
    fn test_query_menu_requires_open() {
        let state = query(None, Some("yes"), None).to_state(Language::ENGLISH);
        assert!(!state.is_menu_open());
    }

    #[test]
    #[serial]
    fn test_unknown_language_falls_back_to_canonical() {
        let metrics = PageMetrics::global();
        metrics.reset();

        let state = query(Some("fr"), None, None).to_state(Language::ARABIC);
        assert_eq!(state.language(), Language::ENGLISH);
        assert_eq!(metrics.language_fallbacks(), 1);
    }

    #[test]
    fn test_query_state_roundtrip() {
        let original = query(Some("ar"), Some("open"), Some("signing-ceremony")).to_state(Language::ENGLISH);
        let qs = original.query_string();
        assert_eq!(qs, "?lang=ar&menu=open&news=signing-ceremony");
    }

    #[test]
    fn test_shipped_dictionaries_pass_validation() {
        assert!(check_dictionaries().is_ok());
    }
}
