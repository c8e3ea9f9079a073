use crate::i18n::Language;
use crate::page::navigation::DEFAULT_HEADER_OFFSET;
use crate::page::scroll::DEFAULT_SCROLL_THRESHOLD;
use anyhow::{bail, Context, Result};
use std::str::FromStr;

#[derive(Debug, Clone)]
pub struct Config {
    // Server
    pub port: u16,
    pub bind_address: String,

    // Locale
    pub default_language: Language,

    // Page behavior
    pub scroll_threshold: f64,
    pub header_offset: f64,
    pub scene_enabled: bool,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable source.
    ///
    /// Unset variables take their defaults; set but malformed ones are errors.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let default_language = match lookup("DEFAULT_LANGUAGE") {
            Some(code) => Language::from_code(code.trim())
                .context("DEFAULT_LANGUAGE is not a supported language")?,
            None => Language::canonical(),
        };

        let scroll_threshold = parse_or(&lookup, "SCROLL_THRESHOLD", DEFAULT_SCROLL_THRESHOLD)?;
        if !scroll_threshold.is_finite() || scroll_threshold < 0.0 {
            bail!("SCROLL_THRESHOLD must be a non-negative number, got {}", scroll_threshold);
        }

        let header_offset = parse_or(&lookup, "HEADER_OFFSET", DEFAULT_HEADER_OFFSET)?;
        if !header_offset.is_finite() {
            bail!("HEADER_OFFSET must be a finite number");
        }

        Ok(Self {
            // Server
            port: parse_or(&lookup, "PORT", 8080)?,
            bind_address: lookup("BIND_ADDRESS").unwrap_or_else(|| "0.0.0.0".to_string()),

            default_language,

            // Page behavior
            scroll_threshold,
            header_offset,
            scene_enabled: match lookup("SCENE_ENABLED") {
                Some(value) => parse_flag(&value)
                    .with_context(|| format!("SCENE_ENABLED must be a boolean, got '{}'", value))?,
                None => true,
            },
        })
    }

    /// `host:port` to bind the HTTP listener to.
    pub fn socket_address(&self) -> String {
        format!("{}:{}", self.bind_address, self.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            bind_address: "0.0.0.0".to_string(),
            default_language: Language::canonical(),
            scroll_threshold: DEFAULT_SCROLL_THRESHOLD,
            header_offset: DEFAULT_HEADER_OFFSET,
            scene_enabled: true,
        }
    }
}

fn parse_or<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("Invalid {}: '{}'", key, raw)),
        None => Ok(default),
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
