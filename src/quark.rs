use std::collections::HashMap;

/// Two-way mapping between strings and dense ids.
pub trait StringTable {
    fn to_str(&self, id: usize) -> Option<&str>;
    fn to_id(&self, s: &str) -> Option<usize>;
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Tag catalog built at runtime from training data.
///
/// Ids follow lexicographic order of the strings, so iterating `0..len()` visits
/// tags in a stable, data-independent order.
#[derive(Debug, Default, Clone)]
pub struct Quark {
    v: Vec<String>,
    m: HashMap<String, usize>,
}

impl From<Vec<String>> for Quark {
    fn from(mut value: Vec<String>) -> Self {
        value.sort();
        value.dedup();
        let m = value.iter().enumerate().map(|(i, s)| (s.to_string(), i)).collect();
        Self { v: value, m }
    }
}

impl<S: AsRef<str>> FromIterator<S> for Quark {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::from(iter.into_iter().map(|s| s.as_ref().to_string()).collect::<Vec<_>>())
    }
}

impl StringTable for Quark {
    fn to_str(&self, id: usize) -> Option<&str> {
        self.v.get(id).map(|x| x.as_str())
    }

    fn to_id(&self, s: &str) -> Option<usize> {
        self.m.get(s).copied()
    }

    fn len(&self) -> usize {
        self.v.len()
    }
}

impl Quark {
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.v.iter().map(String::as_str)
    }
}
