//! Registry of the languages the site is published in, with their reading
//! direction and typography.

use std::sync::OnceLock;

/// Reading direction of a language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Left-to-right (English)
    Ltr,
    /// Right-to-left (Arabic)
    Rtl,
}

impl Direction {
    /// Value for the HTML `dir` attribute.
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Ltr => "ltr",
            Direction::Rtl => "rtl",
        }
    }

    /// Logical start edge for text alignment.
    pub fn text_align(&self) -> &'static str {
        match self {
            Direction::Ltr => "left",
            Direction::Rtl => "right",
        }
    }
}

/// A language the site is published in.
#[derive(Debug, Clone)]
pub struct LanguageConfig {
    /// ISO 639-1 code, also the value of the `lang` query parameter
    pub code: &'static str,

    /// Name in English
    pub name: &'static str,

    /// Name in the language itself, shown on the toggle
    pub native_name: &'static str,

    pub direction: Direction,

    /// Stylesheet class that selects the font stack
    pub font_class: &'static str,

    /// The dictionary is authored in this language; unknown codes fall back to it
    pub is_canonical: bool,

    pub enabled: bool,
}

/// The published languages, built once and shared for the process lifetime.
pub struct LanguageRegistry {
    languages: Vec<LanguageConfig>,
}

static REGISTRY: OnceLock<LanguageRegistry> = OnceLock::new();

impl LanguageRegistry {
    pub fn get() -> &'static LanguageRegistry {
        REGISTRY.get_or_init(|| LanguageRegistry {
            languages: published_languages(),
        })
    }

    /// Look up a language by code, enabled or not.
    pub fn get_by_code(&self, code: &str) -> Option<&LanguageConfig> {
        self.languages.iter().find(|lang| lang.code == code)
    }

    /// Enabled languages, in registry order.
    pub fn list_enabled(&self) -> Vec<&LanguageConfig> {
        self.languages.iter().filter(|lang| lang.enabled).collect()
    }

    pub fn list_all(&self) -> Vec<&LanguageConfig> {
        self.languages.iter().collect()
    }

    /// The language the dictionary is authored in.
    ///
    /// # Panics
    /// Panics unless exactly one registered language is canonical.
    pub fn canonical(&self) -> &LanguageConfig {
        let mut canonical = self.languages.iter().filter(|lang| lang.is_canonical);
        match (canonical.next(), canonical.next()) {
            (Some(lang), None) => lang,
            (None, _) => panic!("language registry has no canonical language"),
            (Some(_), Some(_)) => panic!("language registry has more than one canonical language"),
        }
    }

    /// The language the toggle switches to from `code`.
    ///
    /// With two published languages this is simply the other one. `None` if
    /// `code` is not enabled.
    pub fn counterpart(&self, code: &str) -> Option<&LanguageConfig> {
        if !self.is_enabled(code) {
            return None;
        }
        self.languages
            .iter()
            .find(|lang| lang.enabled && lang.code != code)
    }

    pub fn is_enabled(&self, code: &str) -> bool {
        matches!(self.get_by_code(code), Some(lang) if lang.enabled)
    }
}

fn published_languages() -> Vec<LanguageConfig> {
    vec![
        LanguageConfig {
            code: "en",
            name: "English",
            native_name: "English",
            direction: Direction::Ltr,
            font_class: "font-sans",
            is_canonical: true,
            enabled: true,
        },
        LanguageConfig {
            code: "ar",
            name: "Arabic",
            native_name: "العربية",
            direction: Direction::Rtl,
            font_class: "font-arabic",
            is_canonical: false,
            enabled: true,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_get_returns_singleton() {
        let registry1 = LanguageRegistry::get();
        let registry2 = LanguageRegistry::get();

        assert!(std::ptr::eq(registry1, registry2));
    }

    #[test]
    fn test_get_by_code_english() {
        let config = LanguageRegistry::get().get_by_code("en").unwrap();

        assert_eq!(config.code, "en");
        assert_eq!(config.name, "English");
        assert_eq!(config.direction, Direction::Ltr);
        assert_eq!(config.font_class, "font-sans");
        assert!(config.is_canonical);
        assert!(config.enabled);
    }

    #[test]
    fn test_get_by_code_arabic() {
        let config = LanguageRegistry::get().get_by_code("ar").unwrap();

        assert_eq!(config.code, "ar");
        assert_eq!(config.name, "Arabic");
        assert_eq!(config.native_name, "العربية");
        assert_eq!(config.direction, Direction::Rtl);
        assert_eq!(config.font_class, "font-arabic");
        assert!(!config.is_canonical);
        assert!(config.enabled);
    }

    #[test]
    fn test_get_by_code_nonexistent() {
        assert!(LanguageRegistry::get().get_by_code("fr").is_none());
    }

    #[test]
    fn test_list_enabled_contains_english_and_arabic() {
        let enabled = LanguageRegistry::get().list_enabled();

        assert_eq!(enabled.len(), 2);
        assert_eq!(enabled[0].code, "en");
        assert_eq!(enabled[1].code, "ar");
        assert_eq!(LanguageRegistry::get().list_all().len(), 2);
    }

    #[test]
    fn test_canonical_returns_english() {
        let canonical = LanguageRegistry::get().canonical();
        assert_eq!(canonical.code, "en");
    }

    #[test]
    fn test_counterpart_flips_between_languages() {
        let registry = LanguageRegistry::get();
        assert_eq!(registry.counterpart("en").unwrap().code, "ar");
        assert_eq!(registry.counterpart("ar").unwrap().code, "en");
        assert!(registry.counterpart("fr").is_none());
    }

    #[test]
    fn test_is_enabled() {
        let registry = LanguageRegistry::get();
        assert!(registry.is_enabled("en"));
        assert!(registry.is_enabled("ar"));
        assert!(!registry.is_enabled("es"));
    }

    // ==================== Direction Tests ====================

    #[test]
    fn test_direction_attribute_values() {
        assert_eq!(Direction::Ltr.as_str(), "ltr");
        assert_eq!(Direction::Rtl.as_str(), "rtl");
    }

    #[test]
    fn test_direction_text_align() {
        assert_eq!(Direction::Ltr.text_align(), "left");
        assert_eq!(Direction::Rtl.text_align(), "right");
    }
}
