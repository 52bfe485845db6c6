use std::{io::BufRead, path::Path};

use super::{
    normalize::normalize,
    table::LogProbTable,
    tagger::HmmTagger,
    trainer::accumulate,
    State,
};
use crate::{
    error::Result,
    params::Params,
    quark::{Quark, StringTable},
    Dataset,
};

/// Outgoing transitions of one source state, as `(destination id, ln p)` sorted by id.
pub(crate) type Edges = Vec<(usize, f64)>;

/// A trained first-order HMM: transition and emission log-probabilities.
///
/// Immutable once built; decoders only borrow it, so it can be shared across
/// threads freely.
#[derive(Debug, Clone)]
pub struct HmmModel {
    tags: Quark,
    transitions: LogProbTable<State, String>,
    emissions: LogProbTable<String, String>,
    /// Indexed by tag id, with the `Start` row stored last at `tags.len()`.
    edges: Vec<Edges>,
}

impl HmmModel {
    pub fn new(transitions: LogProbTable<State, String>, emissions: LogProbTable<String, String>) -> Self {
        let tags: Quark = transitions
            .rows()
            .flat_map(|(src, row)| src.tag().into_iter().chain(row.keys().map(String::as_str)))
            .chain(emissions.sources().map(String::as_str))
            .collect();
        let L = tags.len();
        let mut edges = vec![Edges::default(); L + 1];
        for (src, row) in transitions.rows() {
            let i = match src {
                State::Start => Some(L),
                State::Tag(t) => tags.to_id(t),
            };
            if let Some(i) = i {
                edges[i] = row.iter().filter_map(|(dst, &p)| tags.to_id(dst).map(|j| (j, p))).collect();
            }
        }
        Self { tags, transitions, emissions, edges }
    }

    /// Counts, then normalizes, transitions and emissions of `ds`.
    pub fn train(ds: &Dataset) -> Self {
        let counts = accumulate(ds);
        let model = Self::new(normalize(counts.transitions), normalize(counts.emissions));
        log::info!(
            "trained model (tags: {}, sentences: {}, tokens: {})",
            model.num_tags(),
            ds.len(),
            ds.total_items()
        );
        model
    }

    pub fn from_readers<T: BufRead, W: BufRead>(tags: T, words: W) -> Result<Self> {
        Ok(Self::train(&Dataset::from_readers(tags, words)?))
    }

    pub fn from_paths<P: AsRef<Path>, Q: AsRef<Path>>(tags: P, words: Q) -> Result<Self> {
        Ok(Self::train(&Dataset::from_paths(tags, words)?))
    }

    /// `None` when `src -> dst` was never observed.
    pub fn transition_log_prob(&self, src: &State, dst: &str) -> Option<f64> {
        self.transitions.get(src, dst)
    }

    /// `None` when `tag` never emitted `word`, including tags that emitted nothing.
    /// The word is case-folded before lookup.
    pub fn emission_log_prob(&self, tag: &str, word: &str) -> Option<f64> {
        self.emissions.get(tag, word.to_lowercase().as_str())
    }

    pub fn tags(&self) -> &Quark {
        &self.tags
    }

    pub fn num_tags(&self) -> usize {
        self.tags.len()
    }

    pub fn transitions(&self) -> &LogProbTable<State, String> {
        &self.transitions
    }

    pub fn emissions(&self) -> &LogProbTable<String, String> {
        &self.emissions
    }

    pub fn tagger(&self) -> HmmTagger<'_> {
        HmmTagger::new(self, Params::default())
    }

    pub fn tagger_with(&self, params: Params) -> HmmTagger<'_> {
        HmmTagger::new(self, params)
    }

    /// Id of the `Start` row in [`edges`](Self::edges).
    pub(crate) fn start_id(&self) -> usize {
        self.tags.len()
    }

    pub(crate) fn edges(&self) -> &[Edges] {
        &self.edges
    }

    /// Emission lookup by tag id; `word` must already be lowercased.
    pub(crate) fn emission_by_id(&self, tag: usize, word: &str) -> Option<f64> {
        self.tags.to_str(tag).and_then(|t| self.emissions.get(t, word))
    }
}
