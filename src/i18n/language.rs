//! A locale handle that can only name a published language.

use crate::i18n::strings::{ARABIC_STRINGS, ENGLISH_STRINGS};
use crate::i18n::{Direction, LanguageConfig, LanguageRegistry, LanguageStrings};
use anyhow::{bail, Result};

/// A published language. Construct it with `from_code` or one of the
/// constants; everything else about the locale is read from the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Language {
    code: &'static str,
}

impl Language {
    pub const ENGLISH: Language = Language { code: "en" };

    /// Arabic, laid out right-to-left.
    pub const ARABIC: Language = Language { code: "ar" };

    /// Parse a `lang` code. Fails for codes the registry lacks and for
    /// languages that are registered but switched off.
    pub fn from_code(code: &str) -> Result<Language> {
        match LanguageRegistry::get().get_by_code(code) {
            None => bail!("Unknown language code: '{}'", code),
            Some(config) if !config.enabled => bail!("Language '{}' is switched off", code),
            Some(config) => Ok(Language { code: config.code }),
        }
    }

    /// The language the dictionary is authored in.
    pub fn canonical() -> Language {
        Language {
            code: LanguageRegistry::get().canonical().code,
        }
    }

    pub fn code(&self) -> &'static str {
        self.code
    }

    /// Registry entry for this language.
    pub fn config(&self) -> &'static LanguageConfig {
        let registry = LanguageRegistry::get();
        registry
            .get_by_code(self.code)
            .unwrap_or_else(|| registry.canonical())
    }

    pub fn name(&self) -> &'static str {
        self.config().name
    }

    /// Name as written in the language itself, e.g. "العربية".
    pub fn native_name(&self) -> &'static str {
        self.config().native_name
    }

    pub fn is_canonical(&self) -> bool {
        self.config().is_canonical
    }

    /// Reading direction of documents in this language.
    pub fn direction(&self) -> Direction {
        self.config().direction
    }

    /// Whether the document is laid out right-to-left.
    pub fn is_rtl(&self) -> bool {
        self.direction() == Direction::Rtl
    }

    /// CSS class selecting the font convention for this language.
    pub fn font_class(&self) -> &'static str {
        self.config().font_class
    }

    /// The language a toggle switches to.
    ///
    /// Toggling twice always returns the original language.
    pub fn toggled(&self) -> Language {
        LanguageRegistry::get()
            .counterpart(self.code)
            .map(|config| Language { code: config.code })
            .unwrap_or(*self)
    }

    /// The content dictionary for this language.
    pub fn strings(&self) -> &'static LanguageStrings {
        match self.code {
            "ar" => &ARABIC_STRINGS,
            _ => &ENGLISH_STRINGS,
        }
    }

    /// Resolve a dictionary field path (e.g. `"nav.about"`) for this language.
    pub fn text(&self, path: &str) -> Option<&'static str> {
        self.strings().lookup(path)
    }
}

impl Default for Language {
    fn default() -> Self {
        Language::canonical()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Constants ====================

    #[test]
    fn test_english_is_the_canonical_constant() {
        assert_eq!(Language::ENGLISH.code(), "en");
        assert_eq!(Language::ENGLISH.name(), "English");
        assert!(Language::ENGLISH.is_canonical());
    }

    #[test]
    fn test_arabic_constant() {
        let arabic = Language::ARABIC;
        assert_eq!(arabic.code(), "ar");
        assert_eq!(arabic.name(), "Arabic");
        assert_eq!(arabic.native_name(), "العربية");
        assert!(!arabic.is_canonical());
    }

    // ==================== Parsing ====================

    #[test]
    fn test_from_code_arabic() {
        let language = Language::from_code("ar").expect("Should succeed");
        assert_eq!(language, Language::ARABIC);
    }

    #[test]
    fn test_from_code_rejects_unpublished_codes() {
        let err = Language::from_code("fr").unwrap_err();
        assert!(err.to_string().contains("'fr'"));
        assert!(Language::from_code("").is_err());
        assert!(Language::from_code("EN").is_err());
    }

    #[test]
    fn test_canonical_and_default_are_english() {
        assert_eq!(Language::canonical(), Language::ENGLISH);
        assert_eq!(Language::default(), Language::ENGLISH);
    }

    // ==================== Direction Tests ====================

    #[test]
    fn test_arabic_is_rtl() {
        assert!(Language::ARABIC.is_rtl());
        assert_eq!(Language::ARABIC.direction().as_str(), "rtl");
        assert_eq!(Language::ARABIC.font_class(), "font-arabic");
    }

    #[test]
    fn test_english_is_ltr() {
        assert!(!Language::ENGLISH.is_rtl());
        assert_eq!(Language::ENGLISH.direction().as_str(), "ltr");
        assert_eq!(Language::ENGLISH.font_class(), "font-sans");
    }

    // ==================== Toggle Tests ====================

    #[test]
    fn test_toggle_flips_language() {
        assert_eq!(Language::ENGLISH.toggled(), Language::ARABIC);
        assert_eq!(Language::ARABIC.toggled(), Language::ENGLISH);
    }

    #[test]
    fn test_toggle_twice_restores_language_and_direction() {
        for lang in [Language::ENGLISH, Language::ARABIC] {
            let back = lang.toggled().toggled();
            assert_eq!(back, lang);
            assert_eq!(back.direction(), lang.direction());
        }
    }

    // ==================== Dictionary Access Tests ====================

    #[test]
    fn test_strings_follow_language() {
        assert_eq!(Language::ENGLISH.strings().nav.about, "Overview");
        assert_eq!(Language::ARABIC.strings().nav.about, "نبذة عامة");
    }

    #[test]
    fn test_text_lookup_by_path() {
        assert_eq!(Language::ENGLISH.text("hero.title_lead"), Some("Everwin"));
        assert_eq!(Language::ARABIC.text("hero.title_lead"), Some("إيفروين"));
        assert_eq!(Language::ENGLISH.text("hero.missing"), None);
    }
}
