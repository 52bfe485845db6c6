use std::iter::zip;

use super::{context::HmmContext, model::HmmModel, State};
use crate::{error::Result, params::Params, quark::StringTable};

/// Best tag sequence for an observation sequence, with its joint log-probability.
#[derive(Debug, Clone, PartialEq)]
pub struct Path {
    pub tags: Vec<String>,
    pub score: f64,
}

pub trait Tagger {
    /// Most likely tag sequence for `words`, one tag per word.
    fn viterbi<S: AsRef<str>>(&self, words: &[S]) -> Result<Path>;

    /// Joint log-probability of tagging `words` with `tags`, or `None` if the path
    /// uses a transition the model never saw.
    fn score<S: AsRef<str>, T: AsRef<str>>(&self, words: &[S], tags: &[T]) -> Option<f64>;

    fn tag<S: AsRef<str>>(&self, words: &[S]) -> Result<Vec<String>> {
        Ok(self.viterbi(words)?.tags)
    }

    /// Splits `sentence` on whitespace and tags the tokens.
    fn tag_sentence(&self, sentence: &str) -> Result<Vec<String>> {
        let words: Vec<&str> = sentence.split_whitespace().collect();
        self.tag(&words)
    }
}

/// Viterbi decoder over a borrowed [`HmmModel`].
///
/// Holds no mutable state, so one tagger (or many) can decode on several threads
/// at once.
#[derive(Debug, Clone)]
pub struct HmmTagger<'a> {
    model: &'a HmmModel,
    params: Params,
}

impl<'a> HmmTagger<'a> {
    pub fn new(model: &'a HmmModel, params: Params) -> Self {
        Self { model, params }
    }

    pub fn model(&self) -> &'a HmmModel {
        self.model
    }

    pub fn params(&self) -> &Params {
        &self.params
    }

    /// Builds the decode lattice for `words` with the emission term of every
    /// (position, tag) cell filled in.
    fn context<S: AsRef<str>>(&self, words: &[S]) -> HmmContext {
        let L = self.model.num_tags();
        let mut ctx = HmmContext::new(L, words.len());
        for (t, word) in words.iter().enumerate() {
            let word = word.as_ref().to_lowercase();
            for l in 0..L {
                ctx.state[L * t + l] = self
                    .model
                    .emission_by_id(l, &word)
                    .unwrap_or(self.params.unseen_penalty);
            }
        }
        ctx
    }
}

impl Tagger for HmmTagger<'_> {
    fn viterbi<S: AsRef<str>>(&self, words: &[S]) -> Result<Path> {
        let mut ctx = self.context(words);
        let mut labels = vec![0; ctx.num_items()];
        let score = ctx.viterbi(self.model.edges(), &mut labels)?;
        let tags: Vec<String> = labels
            .iter()
            .map(|&l| self.model.tags().to_str(l).unwrap_or_default().to_string())
            .collect();
        log::debug!("viterbi: {} words, score = {score}, tags: {:?}", words.len(), tags);
        Ok(Path { tags, score })
    }

    fn score<S: AsRef<str>, T: AsRef<str>>(&self, words: &[S], tags: &[T]) -> Option<f64> {
        if words.len() != tags.len() {
            return None;
        }
        let mut prev = State::Start;
        let mut score = 0.0;
        for (word, tag) in zip(words, tags) {
            let tag = tag.as_ref();
            score += self.model.transition_log_prob(&prev, tag)?;
            score += self
                .model
                .emission_log_prob(tag, word.as_ref())
                .unwrap_or(self.params.unseen_penalty);
            prev = State::from(tag);
        }
        Some(score)
    }
}
