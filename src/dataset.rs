use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use crate::error::{IngestionError, Result};

/// One training sentence: a tag per word, positionally aligned.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Sequence {
    pub tags: Vec<String>,
    /// Lowercased tokens.
    pub words: Vec<String>,
}

impl Sequence {
    pub fn push(&mut self, tag: &str, word: &str) {
        self.tags.push(tag.to_string());
        self.words.push(word.to_lowercase());
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.tags.iter().map(AsRef::as_ref).zip(self.words.iter().map(AsRef::as_ref))
    }
}

/// Parallel tag and word corpora, one sentence per line.
#[derive(Debug, Default, Clone)]
pub struct Dataset {
    pub seqs: Vec<Sequence>,
}

impl Dataset {
    /// Reads line `i` of `tags` as the tagging of line `i` of `words`.
    ///
    /// Both streams must have the same number of lines, and every aligned pair of
    /// lines the same number of whitespace-separated tokens.
    pub fn from_readers<T: BufRead, W: BufRead>(tags: T, words: W) -> Result<Self> {
        let mut tag_lines = tags.lines();
        let mut word_lines = words.lines();
        let mut ds = Dataset::default();
        let (mut n_tags, mut n_words) = (0, 0);
        loop {
            let tag_line = tag_lines.next().transpose()?;
            let word_line = word_lines.next().transpose()?;
            n_tags += tag_line.is_some() as usize;
            n_words += word_line.is_some() as usize;
            let (tag_line, word_line) = match (tag_line, word_line) {
                (Some(t), Some(w)) => (t, w),
                (None, None) => break,
                _ => {
                    // count what is left so the error reports both totals
                    n_tags += tag_lines.by_ref().count();
                    n_words += word_lines.by_ref().count();
                    return Err(IngestionError::LineCountMismatch { tags: n_tags, words: n_words }.into());
                }
            };
            let line_tags: Vec<&str> = tag_line.split_whitespace().collect();
            let line_words: Vec<&str> = word_line.split_whitespace().collect();
            if line_tags.len() != line_words.len() {
                return Err(IngestionError::TokenCountMismatch {
                    line: n_tags,
                    tags: line_tags.len(),
                    words: line_words.len(),
                }
                .into());
            }
            let mut seq = Sequence::default();
            for (tag, word) in line_tags.into_iter().zip(line_words) {
                seq.push(tag, word);
            }
            ds.seqs.push(seq);
        }
        log::info!("read {} sentences ({} tokens)", ds.len(), ds.total_items());
        Ok(ds)
    }

    pub fn from_paths<P: AsRef<Path>, Q: AsRef<Path>>(tags: P, words: Q) -> Result<Self> {
        log::info!("reading corpus: tags={:?}, words={:?}", tags.as_ref(), words.as_ref());
        let tags = BufReader::new(File::open(tags)?);
        let words = BufReader::new(File::open(words)?);
        Self::from_readers(tags, words)
    }

    /// Reads unlabelled sentences, one per line, split on whitespace.
    pub fn read_sentences<R: BufRead>(reader: R) -> Result<Vec<Vec<String>>> {
        let mut sentences = Vec::new();
        for line in reader.lines() {
            let line = line?;
            sentences.push(line.split_whitespace().map(str::to_string).collect());
        }
        Ok(sentences)
    }

    pub fn len(&self) -> usize {
        self.seqs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seqs.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Sequence> {
        self.seqs.iter()
    }

    pub fn max_length(&self) -> usize {
        self.seqs.iter().map(|x| x.len()).max().unwrap_or_default()
    }

    pub fn total_items(&self) -> usize {
        self.seqs.iter().map(|x| x.len()).sum()
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a Sequence;
    type IntoIter = std::slice::Iter<'a, Sequence>;

    fn into_iter(self) -> Self::IntoIter {
        self.seqs.iter()
    }
}
