use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::analysis::token::Token;

/// Term dictionary mapping each distinct token to a dense 0-based index.
///
/// Built in one pass over all token sequences, in first-occurrence order,
/// and frozen afterwards: lookups never insert, so queries cannot grow the
/// vocabulary.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Vocabulary {
    index: HashMap<String, usize>,
    terms: Vec<String>,
}

impl Vocabulary {
    pub fn build(units: &[Vec<Token>]) -> Self {
        let mut vocabulary = Vocabulary::default();
        for unit in units {
            for token in unit {
                if !vocabulary.index.contains_key(&token.text) {
                    let id = vocabulary.terms.len();
                    vocabulary.index.insert(token.text.clone(), id);
                    vocabulary.terms.push(token.text.clone());
                }
            }
        }
        vocabulary
    }

    pub fn get(&self, term: &str) -> Option<usize> {
        self.index.get(term).copied()
    }

    pub fn term(&self, id: usize) -> Option<&str> {
        self.terms.get(id).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}
