//! Report languages and translation lookup
//!
//! Every user-visible string in the generated document comes from the
//! tables in [`tables`]. Lookups never fail: a key missing from the
//! requested language falls back to Turkish, then to the key itself.

pub mod tables;

use chrono::{NaiveDate, NaiveDateTime};
use lazy_static::lazy_static;
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Tr,
    En,
}

impl Language {
    /// Effective report language for a stored value.
    ///
    /// Only the exact codes `"tr"` and `"en"` are recognized; anything else,
    /// including a missing value, renders in Turkish.
    pub fn resolve(stored: Option<&str>) -> Self {
        match stored {
            Some("en") => Language::En,
            Some("tr") => Language::Tr,
            _ => Language::default(),
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Language::Tr => "tr",
            Language::En => "en",
        }
    }

    /// Calendar date pattern used on the cover page
    pub fn date_format(&self) -> &'static str {
        match self {
            Language::Tr => "%d.%m.%Y",
            Language::En => "%Y-%m-%d",
        }
    }

    /// Date and time-of-day pattern used in the appendix
    pub fn datetime_format(&self) -> &'static str {
        match self {
            Language::Tr => "%d.%m.%Y %H:%M",
            Language::En => "%Y-%m-%d %H:%M",
        }
    }

    pub fn format_date(&self, date: NaiveDate) -> String {
        date.format(self.date_format()).to_string()
    }

    pub fn format_datetime(&self, timestamp: NaiveDateTime) -> String {
        timestamp.format(self.datetime_format()).to_string()
    }

    fn table(&self) -> &'static HashMap<&'static str, &'static str> {
        match self {
            Language::Tr => &TR_TABLE,
            Language::En => &EN_TABLE,
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

lazy_static! {
    static ref TR_TABLE: HashMap<&'static str, &'static str> =
        tables::TR.iter().copied().collect();

    static ref EN_TABLE: HashMap<&'static str, &'static str> =
        tables::EN.iter().copied().collect();

    static ref PLACEHOLDER: Regex = Regex::new(r"\{([a-z_]+)\}").unwrap();
}

/// Localized string for `key`, falling back to Turkish, then to `key` itself
pub fn get_translation<'a>(key: &'a str, lang: Language) -> &'a str {
    lang.table()
        .get(key)
        .or_else(|| Language::default().table().get(key))
        .copied()
        .unwrap_or(key)
}

/// Ordered table-of-contents labels for `lang`
pub fn toc_items(lang: Language) -> &'static [&'static str] {
    match lang {
        Language::Tr => &tables::TR_TOC,
        Language::En => &tables::EN_TOC,
    }
}

/// Substitute `{name}` placeholders in `template`.
///
/// Placeholders without a matching value are left as written.
pub fn fill_template(template: &str, values: &[(&str, &str)]) -> String {
    PLACEHOLDER
        .replace_all(template, |caps: &Captures| {
            values
                .iter()
                .find(|(name, _)| *name == &caps[1])
                .map(|(_, value)| value.to_string())
                .unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}

/// Look up `key` and fill its placeholders in one step
pub fn translate_with(key: &str, lang: Language, values: &[(&str, &str)]) -> String {
    fill_template(get_translation(key, lang), values)
}
