use std::borrow::Cow;
use unicode_normalization::UnicodeNormalization;

/// Decomposes `input` (NFD) and drops every code point outside of ASCII.
///
/// Combining marks split off by the decomposition are dropped with the rest, so accented Latin
/// letters from any language degrade to their base letter. Scripts without an ASCII base letter
/// disappear entirely. Blank or already-ASCII input is borrowed back as-is.
///
/// # Example
/// ```
/// use vnslug::text::strip_non_ascii;
///
/// assert_eq!(strip_non_ascii("Crème brûlée"), "Creme brulee");
/// assert_eq!(strip_non_ascii("Tiếng Việt"), "Tieng Viet");
/// ```
pub fn strip_non_ascii(input: &str) -> Cow<'_, str> {
    if input.is_ascii() || input.trim().is_empty() {
        return Cow::Borrowed(input);
    }

    Cow::Owned(input.nfd().filter(char::is_ascii).collect())
}
