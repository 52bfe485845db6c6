use std::{collections::BTreeMap, fmt::Display, iter::zip};

use serde::Serialize;

use crate::{
    error::{Error, Result},
    hmm::tagger::Tagger,
    Dataset,
};

/// Label-wise performance values.
#[derive(Debug, Default, Clone, Serialize)]
pub struct LabelMeasure {
    /// Number of correct predictions.
    pub num_correct: usize,
    /** Number of occurrences of the label in the gold-standard data. */
    pub num_observation: usize,
    /** Number of predictions. */
    pub num_prediction: usize,
}

impl LabelMeasure {
    pub fn precision(&self) -> f64 {
        if self.num_prediction > 0 {
            self.num_correct as f64 / self.num_prediction as f64
        } else {
            0.0
        }
    }

    pub fn recall(&self) -> f64 {
        if self.num_observation > 0 {
            self.num_correct as f64 / self.num_observation as f64
        } else {
            0.0
        }
    }

    pub fn fmeasure(&self) -> f64 {
        let (p, r) = (self.precision(), self.recall());
        if p + r > 0.0 {
            p * r * 2.0 / (p + r)
        } else {
            0.0
        }
    }
}

/// Token-level accuracy summary.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Accuracy {
    pub correct: usize,
    pub wrong: usize,
    /// `100 * correct / (correct + wrong)`, or 0 when nothing was compared.
    pub percent_correct: f64,
}

impl Display for Accuracy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Correct: {}, Wrong: {}, Percent correct: {:.4}", self.correct, self.wrong, self.percent_correct)
    }
}

/// Running comparison of predicted against gold tag sequences.
#[derive(Debug, Default, Clone, Serialize)]
pub struct Evaluation {
    /** Label-wise counts, keyed by tag. */
    tbl: BTreeMap<String, LabelMeasure>,

    /** Number of correctly predicted items. */
    item_total_correct: usize,
    /** Total number of items. */
    item_total_num: usize,

    /** Number of correctly predicted sentences. */
    inst_total_correct: usize,
    /** Total number of sentences. */
    inst_total_num: usize,
}

impl Evaluation {
    /// Compares one predicted sentence against its gold tags, position by position.
    pub fn accumulate<R: AsRef<str>, P: AsRef<str>>(&mut self, reference: &[R], prediction: &[P]) -> Result<()> {
        if reference.len() != prediction.len() {
            return Err(Error::LengthMismatch { expected: reference.len(), actual: prediction.len() });
        }
        let mut matched = 0;
        for (r, p) in zip(reference, prediction) {
            let (r, p) = (r.as_ref(), p.as_ref());
            self.tbl.entry(r.to_string()).or_default().num_observation += 1;
            self.tbl.entry(p.to_string()).or_default().num_prediction += 1;
            if r == p {
                self.tbl.entry(r.to_string()).or_default().num_correct += 1;
                matched += 1;
            }
        }
        self.item_total_correct += matched;
        self.item_total_num += reference.len();

        if matched == reference.len() {
            self.inst_total_correct += 1;
        }
        self.inst_total_num += 1;
        Ok(())
    }

    /// Counts every gold tag of a sentence the tagger could not decode as wrong.
    pub fn accumulate_failure<R: AsRef<str>>(&mut self, reference: &[R]) {
        for r in reference {
            self.tbl.entry(r.as_ref().to_string()).or_default().num_observation += 1;
        }
        self.item_total_num += reference.len();
        self.inst_total_num += 1;
    }

    pub fn accuracy(&self) -> Accuracy {
        let correct = self.item_total_correct;
        let wrong = self.item_total_num - correct;
        let percent_correct = if self.item_total_num > 0 {
            100.0 * correct as f64 / self.item_total_num as f64
        } else {
            0.0
        };
        Accuracy { correct, wrong, percent_correct }
    }

    /// Fraction of sentences tagged without a single error.
    pub fn sequence_accuracy(&self) -> f64 {
        if self.inst_total_num > 0 {
            self.inst_total_correct as f64 / self.inst_total_num as f64
        } else {
            0.0
        }
    }

    pub fn label(&self, tag: &str) -> Option<&LabelMeasure> {
        self.tbl.get(tag)
    }

    /// Macro-averaged (precision, recall, F1) over labels present in the gold data.
    pub fn macro_average(&self) -> (f64, f64, f64) {
        let observed: Vec<&LabelMeasure> = self.tbl.values().filter(|x| x.num_observation > 0).collect();
        if observed.is_empty() {
            return (0.0, 0.0, 0.0);
        }
        let n = observed.len() as f64;
        let sum = observed
            .iter()
            .fold((0.0, 0.0, 0.0), |(p, r, f), x| (p + x.precision(), r + x.recall(), f + x.fmeasure()));
        (sum.0 / n, sum.1 / n, sum.2 / n)
    }
}

impl Display for Evaluation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Performance by label (#match, #model, #ref) (precision, recall, F1):")?;
        for (label, lev) in &self.tbl {
            if lev.num_observation == 0 {
                writeln!(f, "\t{}: ({}, {}, {}) (******, ******, ******)", label, lev.num_correct, lev.num_prediction, lev.num_observation)?;
            } else {
                writeln!(
                    f,
                    "\t{}: ({}, {}, {}) ({:.4}, {:.4}, {:.4})",
                    label,
                    lev.num_correct,
                    lev.num_prediction,
                    lev.num_observation,
                    lev.precision(),
                    lev.recall(),
                    lev.fmeasure()
                )?;
            }
        }
        let (p, r, f1) = self.macro_average();
        writeln!(f, "Macro-average precision, recall, F1: ({:.4}, {:.4}, {:.4})", p, r, f1)?;
        writeln!(f, "Item accuracy: {}", self.accuracy())?;
        write!(f, "Sequence accuracy: {}/{} => {:.4}", self.inst_total_correct, self.inst_total_num, self.sequence_accuracy())
    }
}

/// Tags every sentence of `ds` and scores the output against its gold tags.
///
/// A sentence the tagger cannot decode is logged and counted as entirely wrong.
pub fn evaluate<T: Tagger>(tagger: &T, ds: &Dataset) -> Result<Evaluation> {
    let mut evaluation = Evaluation::default();
    for (i, seq) in ds.iter().enumerate() {
        match tagger.tag(&seq.words) {
            Ok(prediction) => evaluation.accumulate(&seq.tags, &prediction)?,
            Err(e) if e.is_undecodable() => {
                log::warn!("sentence {}: {e}", i + 1);
                evaluation.accumulate_failure(&seq.tags);
            }
            Err(e) => return Err(e),
        }
    }
    log::info!("evaluated {} sentences: {}", evaluation.inst_total_num, evaluation.accuracy());
    Ok(evaluation)
}
