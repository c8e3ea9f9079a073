//! In-page section navigation with a fixed-header allowance.

use crate::i18n::LanguageStrings;
use crate::page::PageState;
use std::str::FromStr;
use thiserror::Error;
use tracing::debug;

/// Space left above a section so the fixed navigation bar doesn't cover it.
pub const DEFAULT_HEADER_OFFSET: f64 = 100.0;

/// Sections reachable from the navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionId {
    About,
    Factories,
    Timeline,
    Contact,
}

impl SectionId {
    /// Navigation bar order.
    pub const ALL: [SectionId; 4] = [
        SectionId::About,
        SectionId::Factories,
        SectionId::Timeline,
        SectionId::Contact,
    ];

    /// Anchor id of the section element.
    pub fn as_str(&self) -> &'static str {
        match self {
            SectionId::About => "about",
            SectionId::Factories => "factories",
            SectionId::Timeline => "timeline",
            SectionId::Contact => "contact",
        }
    }

    pub fn label(&self, strings: &'static LanguageStrings) -> &'static str {
        match self {
            SectionId::About => strings.nav.about,
            SectionId::Factories => strings.nav.factories,
            SectionId::Timeline => strings.nav.timeline,
            SectionId::Contact => strings.nav.contact,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown section id: {0}")]
pub struct UnknownSection(pub String);

impl FromStr for SectionId {
    type Err = UnknownSection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SectionId::ALL
            .into_iter()
            .find(|section| section.as_str() == s)
            .ok_or_else(|| UnknownSection(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollBehavior {
    Smooth,
    Instant,
}

/// A scroll the viewport is asked to perform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollRequest {
    pub top: f64,
    pub behavior: ScrollBehavior,
}

/// What navigation needs from the browser viewport.
pub trait Viewport {
    /// Current vertical scroll offset.
    fn scroll_y(&self) -> f64;

    /// Top of the section relative to the viewport, or `None` if the element
    /// is not in the document.
    fn element_top(&self, section: SectionId) -> Option<f64>;

    fn scroll_to(&mut self, request: ScrollRequest);
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionNavigator {
    header_offset: f64,
}

impl SectionNavigator {
    pub fn new(header_offset: f64) -> Self {
        Self { header_offset }
    }

    pub fn header_offset(&self) -> f64 {
        self.header_offset
    }

    /// Absolute scroll position that puts a section just below the header.
    pub fn target_offset(&self, element_top: f64, scroll_y: f64) -> f64 {
        element_top + scroll_y - self.header_offset
    }

    /// Scroll smoothly to the section named `id`.
    ///
    /// The mobile menu is closed whether or not the section exists. Unknown
    /// ids and sections missing from the document are ignored.
    pub fn navigate(
        &self,
        state: &mut PageState,
        viewport: &mut impl Viewport,
        id: &str,
    ) -> Option<ScrollRequest> {
        state.close_menu();

        let section = match id.parse::<SectionId>() {
            Ok(section) => section,
            Err(e) => {
                debug!("Ignoring navigation: {}", e);
                return None;
            }
        };

        let Some(element_top) = viewport.element_top(section) else {
            debug!("Section '{}' not found in document", section.as_str());
            return None;
        };

        let request = ScrollRequest {
            top: self.target_offset(element_top, viewport.scroll_y()),
            behavior: ScrollBehavior::Smooth,
        };
        viewport.scroll_to(request);
        Some(request)
    }

    /// Logo link: smooth scroll back to the top.
    pub fn scroll_to_top(&self, state: &mut PageState, viewport: &mut impl Viewport) -> ScrollRequest {
        state.close_menu();
        let request = ScrollRequest {
            top: 0.0,
            behavior: ScrollBehavior::Smooth,
        };
        viewport.scroll_to(request);
        request
    }
}

impl Default for SectionNavigator {
    fn default() -> Self {
        Self::new(DEFAULT_HEADER_OFFSET)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::{Language, ENGLISH_STRINGS};
    use std::collections::HashMap;

    #[derive(Default)]
    struct MockViewport {
        scroll_y: f64,
        sections: HashMap<SectionId, f64>,
        requests: Vec<ScrollRequest>,
    }

    impl Viewport for MockViewport {
        fn scroll_y(&self) -> f64 {
            self.scroll_y
        }

        fn element_top(&self, section: SectionId) -> Option<f64> {
            self.sections.get(&section).copied()
        }

        fn scroll_to(&mut self, request: ScrollRequest) {
            self.requests.push(request);
        }
    }

    // ==================== Section Id Tests ====================

    #[test]
    fn test_parse_known_sections() {
        for section in SectionId::ALL {
            assert_eq!(section.as_str().parse::<SectionId>(), Ok(section));
        }
    }

    #[test]
    fn test_parse_unknown_section() {
        let err = "nonexistent".parse::<SectionId>().unwrap_err();
        assert_eq!(err, UnknownSection("nonexistent".to_string()));
        assert_eq!(err.to_string(), "unknown section id: nonexistent");
    }

    #[test]
    fn test_labels_come_from_dictionary() {
        assert_eq!(SectionId::About.label(&ENGLISH_STRINGS), ENGLISH_STRINGS.nav.about);
        assert_eq!(
            SectionId::Contact.label(Language::ARABIC.strings()),
            Language::ARABIC.strings().nav.contact
        );
    }

    // ==================== Navigation Tests ====================

    #[test]
    fn test_target_offset() {
        let navigator = SectionNavigator::default();
        assert_eq!(navigator.target_offset(800.0, 0.0), 700.0);
        assert_eq!(navigator.target_offset(250.0, 1200.0), 1350.0);
    }

    #[test]
    fn test_navigate_requests_smooth_scroll() {
        let mut viewport = MockViewport {
            scroll_y: 200.0,
            ..Default::default()
        };
        viewport.sections.insert(SectionId::About, 800.0);
        let mut state = PageState::default();

        let request = SectionNavigator::default()
            .navigate(&mut state, &mut viewport, "about")
            .unwrap();

        assert_eq!(request.top, 900.0);
        assert_eq!(request.behavior, ScrollBehavior::Smooth);
        assert_eq!(viewport.requests, vec![request]);
    }

    #[test]
    fn test_navigate_closes_menu() {
        let mut viewport = MockViewport::default();
        viewport.sections.insert(SectionId::Timeline, 400.0);
        let mut state = PageState::default();
        state.toggle_menu();

        SectionNavigator::default().navigate(&mut state, &mut viewport, "timeline");
        assert!(!state.is_menu_open());
    }

    #[test]
    fn test_navigate_unknown_id_is_noop() {
        let mut viewport = MockViewport::default();
        let mut state = PageState::default();

        let result = SectionNavigator::default().navigate(&mut state, &mut viewport, "nonexistent");
        assert!(result.is_none());
        assert!(viewport.requests.is_empty());
    }

    #[test]
    fn test_navigate_missing_element_is_noop() {
        let mut viewport = MockViewport::default();
        let mut state = PageState::default();

        let result = SectionNavigator::default().navigate(&mut state, &mut viewport, "contact");
        assert!(result.is_none());
        assert!(viewport.requests.is_empty());
    }

    #[test]
    fn test_client_script_matches_navigator() {
        use crate::config::Config;
        use crate::render::assets::site_script;

        let config = Config {
            header_offset: 72.0,
            ..Config::default()
        };
        let script = site_script(&config);
        let navigator = SectionNavigator::new(config.header_offset);

        // The browser computes the same target as the navigator
        assert!(script.contains("var HEADER_OFFSET = 72;"));
        assert!(script.contains(
            "var top = target.getBoundingClientRect().top + window.scrollY - HEADER_OFFSET;"
        ));
        assert_eq!(navigator.target_offset(300.0, 1000.0), 300.0 + 1000.0 - 72.0);

        // Menu closes before the scroll starts, as in `navigate`
        let handler = &script[script.find("[data-section], [data-scroll-top]").unwrap()..];
        assert!(handler.find("closeMenu();").unwrap() < handler.find("window.scrollTo").unwrap());
    }

    #[test]
    fn test_custom_header_offset() {
        let navigator = SectionNavigator::new(64.0);
        assert_eq!(navigator.header_offset(), 64.0);
        assert_eq!(navigator.target_offset(500.0, 0.0), 436.0);
    }

    #[test]
    fn test_scroll_to_top() {
        let mut viewport = MockViewport {
            scroll_y: 3000.0,
            ..Default::default()
        };
        let mut state = PageState::default();
        state.toggle_menu();

        let request = SectionNavigator::default().scroll_to_top(&mut state, &mut viewport);
        assert_eq!(request.top, 0.0);
        assert!(!state.is_menu_open());
        assert_eq!(viewport.requests.len(), 1);
    }
}
