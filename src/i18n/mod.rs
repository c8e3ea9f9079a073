//! Internationalization (i18n) module for the bilingual site.
//!
//! Everything that depends on the active locale lives here: the registry of
//! published languages, the `Language` handle with its reading direction,
//! the content dictionary every visible string resolves through, the
//! dictionary validator, and the page metrics.
//!
//! # Architecture
//!
//! - `registry`: Single source of truth for supported languages and their metadata
//! - `language`: Type-safe Language handle (direction, toggle, dictionary access)
//! - `strings`: The content dictionary, one `LanguageStrings` per language
//! - `validator`: Dictionary completeness and consistency checks
//! - `metrics`: Render counters per language
//!
//! # Example
//!
//! ```rust,ignore
//! use everwin_park::i18n::Language;
//!
//! let arabic = Language::from_code("ar")?;
//! assert!(arabic.is_rtl());
//! assert_eq!(arabic.toggled(), Language::ENGLISH);
//! let heading = arabic.strings().about.title;
//! ```

mod language;
mod metrics;
mod registry;
pub(crate) mod strings;
mod validator;

pub use language::Language;
pub use metrics::{MetricsReport, PageMetrics};
pub use registry::{Direction, LanguageConfig, LanguageRegistry};
pub use strings::{LanguageStrings, NewsStrings, ARABIC_STRINGS, ENGLISH_STRINGS};
pub use validator::{DictionaryValidator, ValidationReport};
