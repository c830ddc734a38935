//! Display language selection, message lookup and locale-aware formatting.
//!
//! Two locales are supported. Arabic is the default; English backs it up
//! whenever an Arabic string is missing.

mod ar;
mod en;
pub mod format;
pub mod keys;

use serde::{Deserialize, Serialize};

pub use format::{format_date, format_number};
pub use keys::MessageKey;

/// Name of the cookie holding the preferred locale code.
pub const LOCALE_COOKIE: &str = "lang";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    En,
    Ar,
}

pub const DEFAULT_LOCALE: Locale = Locale::Ar;

pub const SUPPORTED_LOCALES: [Locale; 2] = [Locale::En, Locale::Ar];

impl Locale {
    pub fn code(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Ar => "ar",
        }
    }

    pub fn from_code(code: &str) -> Option<Locale> {
        SUPPORTED_LOCALES.into_iter().find(|l| l.code() == code)
    }

    /// Locale for a request given its cookie value; anything unsupported
    /// selects the default.
    pub fn from_cookie(value: Option<&str>) -> Locale {
        value.and_then(Locale::from_code).unwrap_or(DEFAULT_LOCALE)
    }

    /// Text direction for the layout.
    pub fn is_rtl(self) -> bool {
        self == Locale::Ar
    }

    fn table(self) -> fn(MessageKey) -> Option<&'static str> {
        match self {
            Locale::En => en::lookup,
            Locale::Ar => ar::lookup,
        }
    }

    /// The locale consulted when this one lacks a string.
    fn fallback(self) -> Option<Locale> {
        match self {
            Locale::Ar => Some(Locale::En),
            Locale::En => None,
        }
    }
}

/// Resolve `key` for `locale`.
///
/// Falls back to English when the Arabic table lacks the key, then to the
/// key's own dotted path. Never fails.
pub fn translate(locale: Locale, key: MessageKey) -> &'static str {
    locale
        .table()(key)
        .or_else(|| locale.fallback().and_then(|f| f.table()(key)))
        .unwrap_or_else(|| key.as_str())
}

/// Resolve a dotted path that arrived as a string. Unknown paths come back
/// unchanged.
pub fn translate_path(locale: Locale, path: &str) -> String {
    match MessageKey::from_path(path) {
        Some(key) => translate(locale, key).to_string(),
        None => path.to_string(),
    }
}

/// Every message resolved for `locale`, keyed by dotted path.
pub fn messages(locale: Locale) -> Vec<(&'static str, &'static str)> {
    MessageKey::ALL
        .iter()
        .map(|key| (key.as_str(), translate(locale, *key)))
        .collect()
}
