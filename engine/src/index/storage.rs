use crate::index::SlugIndex;
use crate::text::normalizer::TextNormalizer;
use fst::{Map, Streamer};
use std::marker::PhantomData;
use thiserror::Error;

/// FST values with this bit set point into `SlugIndexStorage::groups` instead of being an id.
pub(crate) const GROUP_TAG: u64 = 1 << 63;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("could not read FST: {0}")]
    ReadFst(#[from] fst::Error),
    #[error("key '{0}' points to id group {1}, but only {2} groups are stored")]
    MissingGroup(String, u64, usize),
}

/// Owned data backing a `SlugIndex`.
///
/// NOTE: this struct is serializable (with the `serde` feature), so an index can be built once
/// and shipped to wherever slugs need resolving.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(bound = ""))]
pub struct SlugIndexStorage<TN> {
    fst_data: Vec<u8>,
    groups: Vec<Vec<u64>>,
    #[cfg_attr(feature = "serde", serde(skip))]
    _normalizer: PhantomData<TN>,
}

impl<TN> SlugIndexStorage<TN>
where
    TN: TextNormalizer,
{
    pub(crate) fn new(fst_data: Vec<u8>, groups: Vec<Vec<u64>>) -> Self {
        Self {
            fst_data,
            groups,
            _normalizer: PhantomData,
        }
    }

    /// Opens a query view that normalizes queries with `normalizer`.
    ///
    /// The normalizer should be configured the same way as the one the index was built with,
    /// otherwise queries won't line up with the stored keys.
    pub fn to_index_with(&self, normalizer: TN) -> Result<SlugIndex<'_, TN>, LoadError> {
        let map = Map::new(self.fst_data.as_slice())?;
        self.check_groups(&map)?;
        Ok(SlugIndex {
            map,
            groups: &self.groups,
            normalizer,
        })
    }

    fn check_groups(&self, map: &Map<&[u8]>) -> Result<(), LoadError> {
        let mut stream = map.stream();
        while let Some((key, value)) = stream.next() {
            if value & GROUP_TAG == 0 {
                continue;
            }
            let group = value ^ GROUP_TAG;
            if group as usize >= self.groups.len() {
                return Err(LoadError::MissingGroup(
                    String::from_utf8_lossy(key).into_owned(),
                    group,
                    self.groups.len(),
                ));
            }
        }
        Ok(())
    }
}

impl<TN> SlugIndexStorage<TN>
where
    TN: TextNormalizer + Default,
{
    pub fn to_index(&self) -> Result<SlugIndex<'_, TN>, LoadError> {
        self.to_index_with(TN::default())
    }
}
