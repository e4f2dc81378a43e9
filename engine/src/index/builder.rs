use crate::index::storage::{SlugIndexStorage, GROUP_TAG};
use crate::text::{normalizer::TextNormalizer, DefaultTextNormalizer};
use fst::Map;
use itertools::Itertools;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BuildError {
    #[error("could not build FST: {0}")]
    BuildFst(#[from] fst::Error),
    #[error("id {0} has the 64th bit set, which is reserved")]
    ReservedId(u64),
}

pub struct SlugIndexBuilder<TN>
where
    TN: TextNormalizer,
{
    normalizer: TN,
}

impl Default for SlugIndexBuilder<DefaultTextNormalizer> {
    fn default() -> Self {
        Self {
            normalizer: DefaultTextNormalizer::default(),
        }
    }
}

impl<TN> SlugIndexBuilder<TN>
where
    TN: TextNormalizer,
{
    pub fn with_text_normalizer<T: TextNormalizer>(self, normalizer: T) -> SlugIndexBuilder<T> {
        SlugIndexBuilder { normalizer }
    }

    /// Builds an index from `(title, id)` pairs.
    ///
    /// Titles are normalized and sorted here. Titles sharing a key keep all of their ids; titles
    /// that normalize to nothing are skipped.
    ///
    /// # Example
    /// ```
    /// use vnslug::SlugIndexBuilder;
    ///
    /// let storage = SlugIndexBuilder::default().build(vec!(
    ///     ("Hà Nội", 2),
    ///     ("Đà Nẵng", 1),
    /// )).unwrap();
    /// let index = storage.to_index().unwrap();
    /// assert_eq!(index.resolve("ha noi"), vec!(2));
    /// ```
    pub fn build<I, S>(self, entries: I) -> Result<SlugIndexStorage<TN>, BuildError>
    where
        S: AsRef<str>,
        I: IntoIterator<Item = (S, u64)>,
    {
        let normalizer = &self.normalizer;
        let entries = entries
            .into_iter()
            .filter_map(|(title, id)| {
                let title: &str = title.as_ref();
                let key = normalizer.normalize(title);
                if key.is_empty() {
                    tracing::debug!(title, id, "skipping title without a slug");
                    None
                } else {
                    Some((key, id))
                }
            })
            .sorted_by(|a, b| a.0.cmp(&b.0))
            .collect_vec();

        self.build_without_preprocessing(entries.iter().map(|(key, id)| (key.as_str(), *id)))
    }

    /// Builds an index from `(key, id)` pairs that are already normalized and sorted.
    ///
    /// Unsorted keys make the FST builder fail. Repeated keys are fine as long as they're adjacent.
    pub fn build_without_preprocessing<'a, I>(
        self,
        entries: I,
    ) -> Result<SlugIndexStorage<TN>, BuildError>
    where
        I: IntoIterator<Item = (&'a str, u64)>,
    {
        let mut groups: Vec<Vec<u64>> = Vec::new();
        let mut values: Vec<(&str, u64)> = Vec::new();
        let mut entry_count = 0usize;

        let grouped = entries.into_iter().group_by(|(key, _)| *key);
        for (key, group) in &grouped {
            let mut ids = group.map(|(_, id)| id).collect_vec();
            entry_count += ids.len();

            if let Some(&id) = ids.iter().find(|&&id| id & GROUP_TAG != 0) {
                return Err(BuildError::ReservedId(id));
            }

            let value = if ids.len() == 1 {
                ids[0]
            } else {
                ids.sort_unstable();
                groups.push(ids);
                (groups.len() - 1) as u64 | GROUP_TAG
            };
            values.push((key, value));
        }

        let map = Map::from_iter(values.iter().copied())?;
        tracing::debug!(
            entries = entry_count,
            keys = values.len(),
            groups = groups.len(),
            "built slug index"
        );

        Ok(SlugIndexStorage::new(map.into_fst().into_inner(), groups))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::normalizer::NoopNormalizer;

    type TestResult = Result<(), Box<dyn std::error::Error>>;

    #[test]
    fn test_build() -> TestResult {
        let storage = SlugIndexBuilder::default().build(vec![("Foo Bar", 1), ("Bar", 0)])?;
        let keys = storage
            .to_index()?
            .map
            .stream()
            .into_str_vec()?;
        assert_eq!(
            keys,
            vec![("bar".to_string(), 0), ("foo-bar".to_string(), 1)]
        );
        Ok(())
    }

    #[test]
    fn test_build_skips_empty_slugs() -> TestResult {
        let storage = SlugIndexBuilder::default().build(vec![("!!!", 1), ("   ", 2), ("ok", 3)])?;
        assert_eq!(storage.to_index()?.len(), 1);
        Ok(())
    }

    #[test]
    fn test_build_rejects_reserved_ids() {
        let result = SlugIndexBuilder::default().build(vec![("foo", GROUP_TAG | 5)]);
        assert!(matches!(result, Err(BuildError::ReservedId(id)) if id == GROUP_TAG | 5));

        let result = SlugIndexBuilder::default().build(vec![("foo", 1), ("foo", GROUP_TAG)]);
        assert!(matches!(result, Err(BuildError::ReservedId(_))));
    }

    #[test]
    fn test_build_without_preprocessing_requires_sorted_keys() {
        let result = SlugIndexBuilder::default()
            .with_text_normalizer(NoopNormalizer)
            .build_without_preprocessing(vec![("foo", 1), ("bar", 2)]);
        assert!(matches!(result, Err(BuildError::BuildFst(_))));
    }
}
