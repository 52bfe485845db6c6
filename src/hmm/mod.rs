use std::fmt::Display;

pub mod context;
pub mod model;
pub mod normalize;
pub mod table;
pub mod tagger;
pub mod trainer;

/// Source state of a transition: the sentence start or a tag seen in training.
///
/// `Start` orders before every tag and is never a transition destination.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum State {
    Start,
    Tag(String),
}

impl State {
    pub fn tag(&self) -> Option<&str> {
        match self {
            Self::Start => None,
            Self::Tag(t) => Some(t.as_str()),
        }
    }
}

impl From<&str> for State {
    fn from(value: &str) -> Self {
        Self::Tag(value.to_string())
    }
}

impl Display for State {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Start => write!(f, "START"),
            Self::Tag(t) => write!(f, "{t}"),
        }
    }
}
