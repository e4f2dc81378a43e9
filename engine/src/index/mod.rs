use crate::index::storage::GROUP_TAG;
use crate::text::normalizer::TextNormalizer;
use fst::automaton::Automaton;
use fst::{IntoStreamer, Map, Streamer};

pub mod builder;
pub mod storage;

pub use builder::{BuildError, SlugIndexBuilder};
pub use levenshtein_automata::{Distance as LevenshteinDistance, LevenshteinAutomatonBuilder};
pub use storage::{LoadError, SlugIndexStorage};

/// A key found by a query, together with one of the ids stored under it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SlugMatch {
    pub slug: String,
    pub id: u64,
}

/// Iterator over the matches of a single query, in key order.
///
/// A key holding several ids yields one `SlugMatch` per id, in ascending id order.
pub struct Matches<'a, A>
where
    A: Automaton,
{
    stream: fst::map::Stream<'a, A>,
    groups: &'a [Vec<u64>],
    pending: Option<(String, std::slice::Iter<'a, u64>)>,
}

impl<'a, A> Iterator for Matches<'a, A>
where
    A: Automaton,
{
    type Item = SlugMatch;

    fn next(&mut self) -> Option<SlugMatch> {
        loop {
            if let Some((slug, ids)) = &mut self.pending {
                if let Some(&id) = ids.next() {
                    return Some(SlugMatch {
                        slug: slug.clone(),
                        id,
                    });
                }
                self.pending = None;
            }

            let (key, value) = self.stream.next()?;
            // keys always come from a `String`, so they're valid UTF-8
            let slug = String::from_utf8_lossy(key).into_owned();
            if value & GROUP_TAG == 0 {
                return Some(SlugMatch { slug, id: value });
            }

            // group indexes are checked when the storage is opened
            let ids = self.groups.get((value ^ GROUP_TAG) as usize)?;
            self.pending = Some((slug, ids.iter()));
        }
    }
}

struct LevenshteinAutomaton(levenshtein_automata::DFA);

impl Automaton for LevenshteinAutomaton {
    type State = u32;

    fn start(&self) -> u32 {
        self.0.initial_state()
    }

    fn is_match(&self, state: &u32) -> bool {
        matches!(self.0.distance(*state), LevenshteinDistance::Exact(_))
    }

    fn can_match(&self, state: &u32) -> bool {
        *state != levenshtein_automata::SINK_STATE
    }

    fn accept(&self, state: &u32, byte: u8) -> u32 {
        self.0.transition(*state, byte)
    }
}

/// Matches exactly one owned key. `fst::automaton::Str` would borrow the normalized query, which
/// doesn't outlive the call that produced it.
struct KeyAutomaton(String);

impl Automaton for KeyAutomaton {
    type State = Option<usize>;

    fn start(&self) -> Option<usize> {
        Some(0)
    }

    fn is_match(&self, pos: &Option<usize>) -> bool {
        *pos == Some(self.0.len())
    }

    fn can_match(&self, pos: &Option<usize>) -> bool {
        pos.is_some()
    }

    fn accept(&self, pos: &Option<usize>, byte: u8) -> Option<usize> {
        let pos = (*pos)?;
        if self.0.as_bytes().get(pos) == Some(&byte) {
            Some(pos + 1)
        } else {
            None
        }
    }
}

/// Read-only view over a `SlugIndexStorage`, resolving free text to the ids stored under its slug.
///
/// Every query goes through the same `TextNormalizer` as the indexed titles, so `"Đà Nẵng"`,
/// `"da nang"` and `"da-nang"` all land on the same key with the default normalizer.
pub struct SlugIndex<'s, TN>
where
    TN: TextNormalizer,
{
    map: Map<&'s [u8]>,
    groups: &'s [Vec<u64>],
    normalizer: TN,
}

impl<'s, TN> SlugIndex<'s, TN>
where
    TN: TextNormalizer,
{
    fn search<A, F>(&self, query: &str, automaton_factory: F) -> Matches<'_, A>
    where
        A: Automaton,
        F: FnOnce(String) -> A,
    {
        let automaton = automaton_factory(self.normalizer.normalize(query));
        Matches {
            stream: self.map.search(automaton).into_stream(),
            groups: self.groups,
            pending: None,
        }
    }

    pub fn normalizer(&self) -> &TN {
        &self.normalizer
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.len() == 0
    }

    /// Matches the key equal to the normalized `query`.
    ///
    /// # Example
    /// ```
    /// use vnslug::{SlugIndexBuilder, SlugMatch};
    ///
    /// let storage = SlugIndexBuilder::default().build(vec!(
    ///     ("Hà Nội", 1),
    ///     ("Hà Nội mới", 2),
    /// )).unwrap();
    /// let index = storage.to_index().unwrap();
    ///
    /// let mut matches = index.exact_match("HÀ NỘI");
    /// assert_eq!(matches.next(), Some(SlugMatch { slug: "ha-noi".to_string(), id: 1 }));
    /// assert_eq!(matches.next(), None);
    /// ```
    pub fn exact_match(&self, query: &str) -> Matches<'_, impl Automaton> {
        self.search(query, KeyAutomaton)
    }

    /// Matches every key starting with the normalized `query`.
    pub fn starts_with(&self, query: &str) -> Matches<'_, impl Automaton> {
        self.search(query, |key| KeyAutomaton(key).starts_with())
    }

    /// Matches every key within the builder's edit distance of the normalized `query`.
    ///
    /// # Example
    /// ```
    /// use vnslug::{LevenshteinAutomatonBuilder, SlugIndexBuilder};
    ///
    /// let storage = SlugIndexBuilder::default().build(vec!(("Đà Nẵng", 1))).unwrap();
    /// let index = storage.to_index().unwrap();
    /// let one_typo = LevenshteinAutomatonBuilder::new(1, false);
    ///
    /// let ids: Vec<u64> = index.fuzzy_match(&one_typo, "Da Nag").map(|m| m.id).collect();
    /// assert_eq!(ids, vec!(1));
    /// ```
    pub fn fuzzy_match(
        &self,
        builder: &LevenshteinAutomatonBuilder,
        query: &str,
    ) -> Matches<'_, impl Automaton> {
        self.search(query, |key| LevenshteinAutomaton(builder.build_dfa(&key)))
    }

    /// Matches every key with a prefix within the builder's edit distance of the normalized `query`.
    pub fn fuzzy_starts_with(
        &self,
        builder: &LevenshteinAutomatonBuilder,
        query: &str,
    ) -> Matches<'_, impl Automaton> {
        self.search(query, |key| LevenshteinAutomaton(builder.build_prefix_dfa(&key)))
    }

    /// Returns the ids stored under the slug of `query`, in ascending order.
    pub fn resolve(&self, query: &str) -> Vec<u64> {
        self.exact_match(query).map(|m| m.id).collect()
    }
}
