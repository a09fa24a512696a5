//! Supported languages and locale negotiation

use fluent_langneg::{negotiate_languages, LanguageIdentifier, NegotiationStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Language errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LanguageError {
    /// Code is well-formed but not a supported language
    #[error("Unsupported language: {0:?}")]
    Unsupported(String),

    /// Code is not a valid BCP 47 language tag
    #[error("Invalid language tag: {0:?}")]
    InvalidTag(String),
}

/// Result type for language operations
pub type Result<T> = std::result::Result<T, LanguageError>;

/// Languages the UI ships translations for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// English
    #[default]
    En,
    /// Vietnamese
    Vi,
}

impl Language {
    /// All supported languages
    pub const ALL: [Language; 2] = [Language::En, Language::Vi];

    /// Fallback when nothing else matches
    pub const FALLBACK: Language = Language::En;

    /// ISO 639-1 code
    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Vi => "vi",
        }
    }

    /// Name of the language in that language
    pub fn native_name(&self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Vi => "Tiếng Việt",
        }
    }

    /// Language identifier for negotiation
    pub fn langid(&self) -> LanguageIdentifier {
        self.code().parse().unwrap_or_default()
    }

    /// Parse an exact supported code (`"en"`, `"vi"`); case-insensitive
    pub fn from_code(code: &str) -> Option<Language> {
        Language::ALL.into_iter().find(|lang| lang.code().eq_ignore_ascii_case(code.trim()))
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = LanguageError;

    fn from_str(s: &str) -> Result<Self> {
        Language::from_code(s).ok_or_else(|| LanguageError::Unsupported(s.to_string()))
    }
}

/// Pick the supported language closest to a device locale
///
/// Only the language subtag is considered (`vi-VN` matches `vi`). Returns
/// `None` when the locale is malformed or no supported language matches.
pub fn negotiate(locale: &str) -> Option<Language> {
    let requested: LanguageIdentifier = match locale.replace('_', "-").parse() {
        Ok(langid) => langid,
        Err(_) => {
            tracing::debug!(locale, "ignoring malformed device locale");
            return None;
        }
    };

    let available: Vec<LanguageIdentifier> = Language::ALL.iter().map(Language::langid).collect();
    let matched = negotiate_languages(
        &[requested],
        &available,
        None,
        NegotiationStrategy::Lookup,
    );

    let language = matched
        .first()
        .and_then(|langid| Language::from_code(langid.language.as_str()));
    tracing::trace!(locale, ?language, "negotiated device locale");
    language
}

/// Resolve the UI language from a saved code and a device locale
///
/// A saved supported code wins, then the device locale, then English.
pub fn detect(saved: Option<&str>, device_locale: Option<&str>) -> Language {
    saved
        .and_then(Language::from_code)
        .or_else(|| device_locale.and_then(negotiate))
        .unwrap_or(Language::FALLBACK)
}

/// Validate a language tag and map it to a supported language
pub fn parse_tag(tag: &str) -> Result<Language> {
    let langid: LanguageIdentifier =
        tag.parse().map_err(|_| LanguageError::InvalidTag(tag.to_string()))?;
    Language::from_code(langid.language.as_str())
        .ok_or_else(|| LanguageError::Unsupported(tag.to_string()))
}
