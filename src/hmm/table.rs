use std::{borrow::Borrow, collections::BTreeMap};

/// Raw frequencies, `source -> destination -> count`.
#[derive(Debug, Clone, PartialEq)]
pub struct CountTable<S, D> {
    rows: BTreeMap<S, BTreeMap<D, u64>>,
}

impl<S, D> Default for CountTable<S, D> {
    fn default() -> Self {
        Self { rows: BTreeMap::new() }
    }
}

impl<S: Ord, D: Ord> CountTable<S, D> {
    pub fn increment(&mut self, src: S, dst: D) {
        *self.rows.entry(src).or_default().entry(dst).or_default() += 1;
    }

    pub fn get<P, Q>(&self, src: &P, dst: &Q) -> u64
    where
        S: Borrow<P>,
        D: Borrow<Q>,
        P: Ord + ?Sized,
        Q: Ord + ?Sized,
    {
        self.rows.get(src).and_then(|row| row.get(dst)).copied().unwrap_or_default()
    }

    /// Sum of all counts leaving `src`.
    pub fn total<P>(&self, src: &P) -> u64
    where
        S: Borrow<P>,
        P: Ord + ?Sized,
    {
        self.rows.get(src).map(|row| row.values().sum()).unwrap_or_default()
    }

    pub fn rows(&self) -> impl Iterator<Item = (&S, &BTreeMap<D, u64>)> {
        self.rows.iter()
    }

    pub fn into_rows(self) -> BTreeMap<S, BTreeMap<D, u64>> {
        self.rows
    }

    /// Number of source keys.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of distinct (source, destination) cells.
    pub fn num_entries(&self) -> usize {
        self.rows.values().map(BTreeMap::len).sum()
    }
}

/// Natural-log probabilities, `source -> destination -> ln p`.
///
/// Only produced by [`normalize`](super::normalize::normalize), so every row sums
/// to one in linear space.
#[derive(Debug, Clone, PartialEq)]
pub struct LogProbTable<S, D> {
    pub(crate) rows: BTreeMap<S, BTreeMap<D, f64>>,
}

impl<S, D> Default for LogProbTable<S, D> {
    fn default() -> Self {
        Self { rows: BTreeMap::new() }
    }
}

impl<S: Ord, D: Ord> LogProbTable<S, D> {
    /// `None` means the pair never occurred in training, which is not the same as
    /// an impossible (`-inf`) event.
    pub fn get<P, Q>(&self, src: &P, dst: &Q) -> Option<f64>
    where
        S: Borrow<P>,
        D: Borrow<Q>,
        P: Ord + ?Sized,
        Q: Ord + ?Sized,
    {
        self.rows.get(src).and_then(|row| row.get(dst)).copied()
    }

    pub fn row<P>(&self, src: &P) -> Option<&BTreeMap<D, f64>>
    where
        S: Borrow<P>,
        P: Ord + ?Sized,
    {
        self.rows.get(src)
    }

    pub fn rows(&self) -> impl Iterator<Item = (&S, &BTreeMap<D, f64>)> {
        self.rows.iter()
    }

    pub fn sources(&self) -> impl Iterator<Item = &S> {
        self.rows.keys()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
