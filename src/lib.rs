//! Part-of-speech tagging with a first-order Hidden Markov Model.
//!
//! Train a model from parallel tag/word corpora, then decode sentences with
//! the Viterbi algorithm:
//!
//! ```
//! use postagger::{HmmModel, Tagger};
//!
//! let model = HmmModel::from_readers("NOUN VERB".as_bytes(), "dog runs".as_bytes()).unwrap();
//! let tags = model.tagger().tag_sentence("Dog runs").unwrap();
//! assert_eq!(tags, ["NOUN", "VERB"]);
//! ```

pub mod dataset;
pub mod error;
pub mod evaluation;
pub mod hmm;
pub mod params;
pub mod quark;

pub use dataset::{Dataset, Sequence};
pub use error::{Error, IngestionError, Result};
pub use evaluation::{evaluate, Accuracy, Evaluation};
pub use hmm::{
    model::HmmModel,
    tagger::{HmmTagger, Path, Tagger},
    State,
};
pub use params::Params;
