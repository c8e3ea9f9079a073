//! Integration tests for the Everwin Industrial Park site
//!
//! These tests drive the HTTP router end to end (without binding a socket)
//! and check the page, asset, health and metrics routes together with the
//! rendering and locale modules behind them.

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use serial_test::serial;
use tempfile::TempDir;
use tower::ServiceExt;

use everwin_park::config::Config;
use everwin_park::i18n::{Language, PageMetrics, ARABIC_STRINGS, ENGLISH_STRINGS};
use everwin_park::page::PageState;
use everwin_park::render::{self, html::escape_html};
use everwin_park::server::{create_router, AppState};

// ==================== Test Helpers ====================

/// Create a router over a test config
fn test_router(config: Config) -> axum::Router {
    create_router(AppState::new(config))
}

/// Issue a GET request and return status, content type and body
async fn get(config: Config, uri: &str) -> (StatusCode, String, String) {
    let response = test_router(config)
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .expect("request failed");

    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("failed to read body");

    (status, content_type, String::from_utf8(bytes.to_vec()).expect("utf-8 body"))
}

// ==================== Page Route Tests ====================

#[tokio::test]
#[serial]
async fn test_root_serves_english_by_default() {
    let (status, content_type, body) = get(Config::default(), "/").await;

    assert_eq!(status, StatusCode::OK);
    assert!(content_type.starts_with("text/html"));
    assert!(body.contains("<html lang=\"en\" dir=\"ltr\""));
    assert!(body.contains(&escape_html(ENGLISH_STRINGS.hero.subtitle)));
}

#[tokio::test]
#[serial]
async fn test_arabic_page_is_right_to_left() {
    let (status, _, body) = get(Config::default(), "/?lang=ar").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("<html lang=\"ar\" dir=\"rtl\""));
    assert!(body.contains(ARABIC_STRINGS.nav.about));
    assert!(body.contains(ARABIC_STRINGS.brand.name));
    // The toggle leads back to English
    assert!(body.contains("href=\"?lang=en\" class=\"lang-toggle\""));
}

#[tokio::test]
#[serial]
async fn test_configured_default_language() {
    let config = Config {
        default_language: Language::ARABIC,
        ..Config::default()
    };
    let (_, _, body) = get(config, "/").await;
    assert!(body.contains("<html lang=\"ar\" dir=\"rtl\""));
}

#[tokio::test]
#[serial]
async fn test_unknown_language_falls_back_to_english() {
    PageMetrics::global().reset();

    let (status, _, body) = get(Config::default(), "/?lang=xx").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("<html lang=\"en\" dir=\"ltr\""));
    assert_eq!(PageMetrics::global().language_fallbacks(), 1);
}

#[tokio::test]
#[serial]
async fn test_menu_query_opens_mobile_menu() {
    let (_, _, closed) = get(Config::default(), "/?lang=en").await;
    let (_, _, open) = get(Config::default(), "/?lang=en&menu=open").await;

    assert!(!closed.contains("id=\"mobile-menu\""));
    assert!(open.contains("id=\"mobile-menu\""));
    // Toggling the language from the open menu closes it
    assert!(open.contains("href=\"?lang=ar\" class=\"lang-toggle"));
}

#[tokio::test]
#[serial]
async fn test_news_query_opens_dialog() {
    PageMetrics::global().reset();

    let (_, _, body) = get(Config::default(), "/?lang=ar&news=signing-ceremony").await;

    assert_eq!(body.matches("role=\"dialog\"").count(), 1);
    assert!(body.contains("aria-modal=\"true\""));
    assert!(body.contains("2025-11-25"));
    assert_eq!(PageMetrics::global().news_views(), 1);
}

#[tokio::test]
#[serial]
async fn test_unknown_news_slug_keeps_dialog_closed() {
    let (status, _, body) = get(Config::default(), "/?news=does-not-exist").await;

    assert_eq!(status, StatusCode::OK);
    assert!(!body.contains("role=\"dialog\""));
}

#[tokio::test]
#[serial]
async fn test_scene_disabled_keeps_gradient() {
    let config = Config {
        scene_enabled: false,
        ..Config::default()
    };
    let (_, _, body) = get(config, "/").await;

    assert!(!body.contains("<svg class=\"scene\""));
    assert!(body.contains("hero-gradient"));
}

// ==================== Asset Route Tests ====================

#[tokio::test]
async fn test_stylesheet_route() {
    let (status, content_type, body) = get(Config::default(), "/assets/site.css").await;

    assert_eq!(status, StatusCode::OK);
    assert!(content_type.starts_with("text/css"));
    assert!(body.contains(".nav-opaque"));
}

#[tokio::test]
async fn test_script_route_uses_config() {
    let config = Config {
        scroll_threshold: 80.0,
        header_offset: 120.0,
        ..Config::default()
    };
    let (status, content_type, body) = get(config, "/assets/site.js").await;

    assert_eq!(status, StatusCode::OK);
    assert!(content_type.starts_with("text/javascript"));
    assert!(body.contains("var SCROLL_THRESHOLD = 80;"));
    assert!(body.contains("var HEADER_OFFSET = 120;"));
}

// ==================== Health & Metrics Tests ====================

#[tokio::test]
async fn test_health_route() {
    let (status, _, body) = get(Config::default(), "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "OK");
}

#[tokio::test]
#[serial]
async fn test_metrics_route_counts_renders() {
    PageMetrics::global().reset();

    get(Config::default(), "/?lang=en").await;
    get(Config::default(), "/?lang=ar").await;
    get(Config::default(), "/?lang=ar").await;

    let (status, content_type, body) = get(Config::default(), "/metrics").await;
    assert_eq!(status, StatusCode::OK);
    assert!(content_type.starts_with("application/json"));

    let report: serde_json::Value = serde_json::from_str(&body).expect("metrics json");
    assert_eq!(report["english_renders"], 1);
    assert_eq!(report["arabic_renders"], 2);
    assert_eq!(report["total_renders"], 3);
    assert_eq!(report["language_fallbacks"], 0);
}

#[tokio::test]
async fn test_unknown_route_is_404() {
    let (status, _, _) = get(Config::default(), "/nope").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

// ==================== Preview Output Tests ====================

#[test]
fn test_save_page_creates_directories() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("nested/out/ar.html");

    let html = render::render_page(&PageState::new(Language::ARABIC), &Config::default());
    render::save_page(&path, &html).expect("save page");

    let written = std::fs::read_to_string(&path).expect("read back");
    assert_eq!(written, html);
    assert!(written.contains("dir=\"rtl\""));
}

#[test]
fn test_save_page_into_file_path_fails() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let blocker = temp_dir.path().join("blocker");
    std::fs::write(&blocker, "not a directory").unwrap();

    let result = render::save_page(&blocker.join("page.html"), "<html></html>");
    assert!(result.is_err());
}

// ==================== Locale Workflow Tests ====================

#[test]
fn test_toggle_workflow_switches_every_section() {
    let mut state = PageState::new(Language::ENGLISH);
    state.toggle_menu();
    state.toggle_language();

    assert!(!state.is_menu_open());
    let html = render::render_page(&state, &Config::default());

    for text in [
        ARABIC_STRINGS.hero.group,
        ARABIC_STRINGS.stats.labels[0],
        ARABIC_STRINGS.about.title,
        ARABIC_STRINGS.factories.title,
        ARABIC_STRINGS.timeline.title,
        ARABIC_STRINGS.dashboard.title,
        ARABIC_STRINGS.contact.title,
    ] {
        assert!(html.contains(&escape_html(text)), "missing {}", text);
    }
}
