use serde::{Deserialize, Serialize};

/// Position of a sentence within the indexed document, dense and 0-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SentenceId(pub usize);

impl SentenceId {
    pub fn new(id: usize) -> Self {
        SentenceId(id)
    }

    pub fn value(&self) -> usize {
        self.0
    }
}

impl From<usize> for SentenceId {
    fn from(id: usize) -> Self {
        SentenceId(id)
    }
}

/// Best-matching sentence for a query, with its cosine score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredSentence {
    pub id: SentenceId,
    pub score: f32,
    pub text: String,
}
