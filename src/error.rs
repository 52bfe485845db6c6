pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Failures while reading the parallel tag/word corpora.
///
/// Any of these aborts model construction; no partially trained model is exposed.
#[derive(Debug, thiserror::Error)]
pub enum IngestionError {
    #[error("failed to read corpus: {0}")]
    Io(#[from] std::io::Error),

    #[error("corpus line count mismatch: {tags} tag lines, {words} word lines")]
    LineCountMismatch { tags: usize, words: usize },

    #[error("line {line}: {tags} tags for {words} words")]
    TokenCountMismatch {
        line: usize,
        tags: usize,
        words: usize,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Ingestion(#[from] IngestionError),

    /// No active tag survived at `position`, so there is no path to reconstruct.
    #[error("undecodable sequence: no reachable tag at position {position}")]
    Undecodable { position: usize },

    #[error("length mismatch: expected {expected} tags, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("invalid parameter: {name}={value}")]
    InvalidParameter { name: String, value: String },

    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Ingestion(IngestionError::Io(e))
    }
}

impl Error {
    pub fn is_ingestion(&self) -> bool {
        matches!(self, Self::Ingestion(_))
    }

    pub fn is_undecodable(&self) -> bool {
        matches!(self, Self::Undecodable { .. })
    }
}
