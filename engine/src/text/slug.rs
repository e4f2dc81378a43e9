use crate::text::diacritics::remove_diacritics;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;
use thiserror::Error;

pub const DEFAULT_SEPARATOR: &str = "-";

static DISALLOWED: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^a-z0-9\s-]").unwrap());
static DEFAULT: Lazy<Separator> = Lazy::new(|| Separator::new(DEFAULT_SEPARATOR).unwrap());

#[derive(Error, Debug)]
pub enum SeparatorError {
    #[error("slug separator must not be empty")]
    Empty,
    #[error("could not compile separator pattern: {0}")]
    Pattern(#[from] regex::Error),
}

/// The token used to join the words of a slug.
///
/// The separator is matched literally: regex metacharacters in it carry no special meaning.
#[derive(Clone)]
pub struct Separator {
    token: String,
    runs: Regex,
}

impl Separator {
    pub fn new(token: &str) -> Result<Self, SeparatorError> {
        if token.is_empty() {
            tracing::trace!("rejecting empty slug separator");
            return Err(SeparatorError::Empty);
        }

        let runs = Regex::new(&format!("(?:{})+", regex::escape(token)))?;
        Ok(Self {
            token: token.to_string(),
            runs,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.token
    }

    /// Strips every character of the separator from both ends, not just whole copies of it.
    fn trim<'a>(&self, slug: &'a str) -> &'a str {
        slug.trim_matches(|c| self.token.contains(c))
    }
}

impl Default for Separator {
    fn default() -> Self {
        (*DEFAULT).clone()
    }
}

impl PartialEq for Separator {
    fn eq(&self, other: &Self) -> bool {
        self.token == other.token
    }
}

impl Eq for Separator {}

impl fmt::Debug for Separator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Separator").field(&self.token).finish()
    }
}

/// Slug generation settings, typically deserialized from a host application's configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SlugOptions {
    pub separator: String,
}

impl Default for SlugOptions {
    fn default() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR.to_string(),
        }
    }
}

impl SlugOptions {
    pub fn separator(&self) -> Result<Separator, SeparatorError> {
        Separator::new(&self.separator)
    }
}

/// Turns free text into a lowercase ASCII slug joined with `-`.
///
/// # Example
/// ```
/// use vnslug::text::to_slug;
///
/// assert_eq!(to_slug("Việt Nam 2024!"), "viet-nam-2024");
/// assert_eq!(to_slug("   multiple   spaces  "), "multiple-spaces");
/// assert_eq!(to_slug("!!!"), "");
/// ```
pub fn to_slug(input: &str) -> String {
    to_slug_with(input, &DEFAULT)
}

/// Turns free text into a lowercase ASCII slug joined with `separator`.
///
/// Only Vietnamese diacritics are folded. Any other non-ASCII letter is dropped rather than
/// transliterated. The result never starts or ends with the separator and never repeats it.
///
/// # Example
/// ```
/// use vnslug::text::{to_slug_with, Separator};
///
/// let underscore = Separator::new("_").unwrap();
/// assert_eq!(to_slug_with("Đà Nẵng", &underscore), "da_nang");
/// ```
pub fn to_slug_with(input: &str, separator: &Separator) -> String {
    if input.trim().is_empty() {
        return String::new();
    }

    let lowered = input.to_lowercase();
    let folded = remove_diacritics(&lowered);
    let filtered = DISALLOWED.replace_all(&folded, "");

    let joined = filtered
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(separator.as_str());
    let collapsed = separator.runs.replace_all(&joined, separator.as_str());

    separator.trim(&collapsed).to_string()
}
