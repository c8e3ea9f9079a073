//! Dictionary quality validation module.
//!
//! This module checks a translated dictionary against the canonical one:
//! every field path must exist in both, no field may be empty, placeholders
//! must survive translation, and numbers are expected to carry over.

use crate::i18n::LanguageStrings;
use regex::Regex;
use std::collections::HashMap;
use std::sync::OnceLock;

/// Validation report containing errors and warnings about a dictionary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    /// Defects that make the dictionary unusable (missing or empty fields,
    /// broken placeholders)
    pub errors: Vec<String>,

    /// Non-critical differences worth a look (e.g. numbers spelled out)
    pub warnings: Vec<String>,
}

impl ValidationReport {
    /// An empty report.
    pub fn new() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// True when a dictionary cannot be served
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// True when something looks off but rendering still works
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Neither errors nor warnings.
    pub fn is_clean(&self) -> bool {
        !self.has_errors() && !self.has_warnings()
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::new()
    }
}

/// Validator for dictionary completeness and consistency.
pub struct DictionaryValidator;

static PLACEHOLDER_REGEX: OnceLock<Regex> = OnceLock::new();
static NUMBER_REGEX: OnceLock<Regex> = OnceLock::new();

impl DictionaryValidator {
    /// Validate `translated` against the `canonical` dictionary.
    ///
    /// Errors:
    /// - a field path present in one dictionary but not the other
    /// - an empty (or whitespace-only) field in either dictionary
    /// - a `{placeholder}` set that differs between the two
    ///
    /// Warnings:
    /// - a field whose numbers differ (e.g. "3rd" translated to a word)
    pub fn validate(canonical: &LanguageStrings, translated: &LanguageStrings) -> ValidationReport {
        Self::validate_entries(&canonical.entries(), &translated.entries())
    }

    /// Validate two flattened `(path, value)` lists.
    pub fn validate_entries(
        canonical: &[(String, &str)],
        translated: &[(String, &str)],
    ) -> ValidationReport {
        let mut report = ValidationReport::new();

        let translated_by_path: HashMap<&str, &str> = translated
            .iter()
            .map(|(path, value)| (path.as_str(), *value))
            .collect();
        let canonical_by_path: HashMap<&str, &str> = canonical
            .iter()
            .map(|(path, value)| (path.as_str(), *value))
            .collect();

        for (path, original) in canonical {
            if original.trim().is_empty() {
                report.errors.push(format!("Empty canonical field: {}", path));
            }

            let Some(value) = translated_by_path.get(path.as_str()) else {
                report.errors.push(format!("Missing translated field: {}", path));
                continue;
            };

            if value.trim().is_empty() {
                report.errors.push(format!("Empty translated field: {}", path));
                continue;
            }

            let orig_placeholders = Self::extract_placeholders(original);
            let trans_placeholders = Self::extract_placeholders(value);
            if orig_placeholders != trans_placeholders {
                report.errors.push(format!(
                    "Placeholder mismatch in {}: original has {:?}, translation has {:?}",
                    path, orig_placeholders, trans_placeholders
                ));
            }

            let orig_numbers = Self::extract_numbers(original);
            let trans_numbers = Self::extract_numbers(value);
            if orig_numbers != trans_numbers {
                report.warnings.push(format!(
                    "Number mismatch in {}: original has {:?}, translation has {:?}",
                    path, orig_numbers, trans_numbers
                ));
            }
        }

        for (path, _) in translated {
            if !canonical_by_path.contains_key(path.as_str()) {
                report.errors.push(format!("Unexpected translated field: {}", path));
            }
        }

        report
    }

    /// Extract all `{name}` placeholders, sorted
    fn extract_placeholders(text: &str) -> Vec<String> {
        let regex = PLACEHOLDER_REGEX.get_or_init(|| Regex::new(r"\{([a-z_]+)\}").unwrap());

        let mut found: Vec<String> = regex
            .find_iter(text)
            .map(|m| m.as_str().to_string())
            .collect();
        found.sort();
        found
    }

    /// Extract all ASCII digit runs (decimals included), sorted
    fn extract_numbers(text: &str) -> Vec<String> {
        let regex = NUMBER_REGEX.get_or_init(|| Regex::new(r"\d+(?:\.\d+)?").unwrap());

        let mut found: Vec<String> = regex
            .find_iter(text)
            .map(|m| m.as_str().to_string())
            .collect();
        found.sort();
        found
    }
}
