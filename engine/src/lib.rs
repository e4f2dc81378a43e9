//! Slug generation for Vietnamese (and other) free text, plus an FST-backed index that resolves
//! slugs back to the ids of the resources they were generated from.
//!
//! ```
//! use vnslug::text::{remove_diacritics, strip_non_ascii, to_slug};
//!
//! assert_eq!(remove_diacritics("Việt Nam"), "Viet Nam");
//! assert_eq!(strip_non_ascii("Ñoño"), "Nono");
//! assert_eq!(to_slug("Việt Nam 2024!"), "viet-nam-2024");
//! ```

pub mod index;
pub mod text;

pub use index::{
    BuildError, LevenshteinAutomatonBuilder, LoadError, Matches, SlugIndex, SlugIndexBuilder,
    SlugIndexStorage, SlugMatch,
};
pub use text::normalizer::TextNormalizer;
pub use text::{remove_diacritics, strip_non_ascii, to_slug, to_slug_with, Separator, SlugOptions};

/// Alias for a storage built with the default slug normalizer.
pub type DefaultSlugIndexStorage = SlugIndexStorage<text::DefaultTextNormalizer>;
