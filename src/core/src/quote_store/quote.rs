use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error_handling::types::QuoteError;

/// A single quote record.
///
/// Only `text` and `category` are required. The optional fields are left out
/// of the JSON form entirely when they are not set, so files written by this
/// crate look like the ones users hand-write: `{"text": .., "category": ..}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    pub text: String,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    /// Milliseconds since the Unix epoch.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<i64>,
}

impl Quote {
    pub fn new<T: Into<String>, C: Into<String>>(text: T, category: C) -> Self {
        Self {
            text: text.into(),
            category: category.into(),
            id: None,
            author: None,
            timestamp: None,
        }
    }

    pub fn with_author<A: Into<String>>(mut self, author: A) -> Self {
        self.author = Some(author.into());
        self
    }

    /// Checks the required fields and returns the quote with `text`,
    /// `category` and `author` trimmed. A blank author is dropped.
    pub fn validated(self) -> Result<Self, QuoteError> {
        let text = self.text.trim();
        if text.is_empty() {
            return Err(QuoteError::Validation("text".into()));
        }
        let category = self.category.trim();
        if category.is_empty() {
            return Err(QuoteError::Validation("category".into()));
        }
        let author = self
            .author
            .as_deref()
            .map(str::trim)
            .filter(|a| !a.is_empty())
            .map(str::to_string);
        Ok(Self {
            text: text.to_string(),
            category: category.to_string(),
            id: self.id,
            author,
            timestamp: self.timestamp,
        })
    }

    pub fn in_category(&self, category: &str) -> bool {
        self.category.trim().to_lowercase() == category.trim().to_lowercase()
    }

    /// The text used to detect duplicates, see [`normalize_text`].
    pub fn normalized_text(&self) -> String {
        normalize_text(&self.text)
    }
}

impl fmt::Display for Quote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\"", self.text)?;
        if let Some(ref author) = self.author {
            write!(f, " ({})", author)?;
        }
        write!(f, " - {}", self.category)
    }
}

fn whitespace() -> &'static Regex {
    static WHITESPACE: OnceLock<Regex> = OnceLock::new();
    WHITESPACE.get_or_init(|| Regex::new(r"\s+").expect("whitespace pattern is valid"))
}

/// Lowercases `text`, trims it, and collapses every whitespace run to a
/// single space.
pub fn normalize_text(text: &str) -> String {
    whitespace()
        .replace_all(text.trim(), " ")
        .to_lowercase()
}

/// The category restriction applied when listing or picking quotes.
///
/// The textual forms `""` and `"all"` (in any case) mean [`CategoryFilter::All`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Category(String),
}

impl CategoryFilter {
    pub const ALL: &'static str = "all";

    pub fn parse(value: &str) -> Self {
        let value = value.trim();
        if value.is_empty() || value.eq_ignore_ascii_case(Self::ALL) {
            CategoryFilter::All
        } else {
            CategoryFilter::Category(value.to_string())
        }
    }

    pub fn matches(&self, quote: &Quote) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Category(name) => quote.in_category(name),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            CategoryFilter::All => Self::ALL,
            CategoryFilter::Category(name) => name,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, CategoryFilter::All)
    }
}

impl FromStr for CategoryFilter {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(CategoryFilter::parse(s))
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
