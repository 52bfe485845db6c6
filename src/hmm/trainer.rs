use std::time::Instant;

use super::{table::CountTable, State};
use crate::Dataset;

/// Raw frequencies gathered from a tagged corpus.
#[derive(Debug, Default, Clone)]
pub struct Counts {
    /// `State -> tag -> count`, including the sentence-initial `Start` row.
    pub transitions: CountTable<State, String>,
    /// `tag -> lowercased word -> count`.
    pub emissions: CountTable<String, String>,
}

/// Tallies transitions and emissions over every sentence of `ds`.
///
/// Each sentence starts from [`State::Start`]; there is no end-of-sentence symbol.
pub fn accumulate(ds: &Dataset) -> Counts {
    let begin = Instant::now();
    let mut counts = Counts::default();
    for seq in ds {
        let mut prev = State::Start;
        for (tag, word) in seq.iter() {
            /* Transition: prev -> tag. */
            counts.transitions.increment(prev, tag.to_string());
            /* Emission: tag -> word. */
            counts.emissions.increment(tag.to_string(), word.to_string());
            prev = State::Tag(tag.to_string());
        }
    }
    log::info!(
        "counted {} transitions, {} emissions over {} tags, time cost: {:?}",
        counts.transitions.num_entries(),
        counts.emissions.num_entries(),
        counts.emissions.len(),
        begin.elapsed()
    );
    counts
}
