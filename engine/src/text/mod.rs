pub mod ascii;
pub mod diacritics;
pub mod normalizer;
pub mod slug;

pub use ascii::strip_non_ascii;
pub use diacritics::remove_diacritics;
pub use slug::{to_slug, to_slug_with, Separator, SeparatorError, SlugOptions, DEFAULT_SEPARATOR};

pub type DefaultTextNormalizer = normalizer::SlugNormalizer;
