use crate::text::slug::{to_slug_with, Separator};
use crate::text::{remove_diacritics, strip_non_ascii};

/// Strategy used to turn both indexed titles and queries into comparable keys.
pub trait TextNormalizer {
    fn normalize(&self, text: &str) -> String;
}

#[derive(Default)]
pub struct NoopNormalizer;

impl TextNormalizer for NoopNormalizer {
    fn normalize(&self, text: &str) -> String {
        text.to_string()
    }
}

#[derive(Default)]
pub struct LowercaseNormalizer;

impl TextNormalizer for LowercaseNormalizer {
    fn normalize(&self, text: &str) -> String {
        text.to_lowercase()
    }
}

/// Folds Vietnamese accented letters, leaving everything else (including case) alone.
#[derive(Default)]
pub struct VietnameseNormalizer;

impl TextNormalizer for VietnameseNormalizer {
    fn normalize(&self, text: &str) -> String {
        remove_diacritics(text).into_owned()
    }
}

/// Reduces text to ASCII by decomposing it and dropping everything else.
#[derive(Default)]
pub struct AsciiNormalizer;

impl TextNormalizer for AsciiNormalizer {
    fn normalize(&self, text: &str) -> String {
        strip_non_ascii(text).into_owned()
    }
}

#[derive(Default, Clone, Debug)]
pub struct SlugNormalizer {
    separator: Separator,
}

impl SlugNormalizer {
    pub fn new(separator: Separator) -> Self {
        Self { separator }
    }

    pub fn separator(&self) -> &Separator {
        &self.separator
    }
}

impl TextNormalizer for SlugNormalizer {
    fn normalize(&self, text: &str) -> String {
        to_slug_with(text, &self.separator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_normalizers() {
        assert_eq!(NoopNormalizer.normalize("Hà Nội"), "Hà Nội");
        assert_eq!(LowercaseNormalizer.normalize("HÀ NỘI"), "hà nội");
        assert_eq!(VietnameseNormalizer.normalize("HÀ NỘI"), "HA NOI");
        assert_eq!(AsciiNormalizer.normalize("Crème Đà"), "Creme a");
    }

    #[test]
    fn test_slug_normalizer() -> Result<(), Box<dyn std::error::Error>> {
        assert_eq!(SlugNormalizer::default().normalize("Hà Nội"), "ha-noi");

        let normalizer = SlugNormalizer::new(Separator::new("_")?);
        assert_eq!(normalizer.separator().as_str(), "_");
        assert_eq!(normalizer.normalize("Đà Nẵng"), "da_nang");
        Ok(())
    }
}
