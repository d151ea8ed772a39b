use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::error::Result;

/// Engine configuration.
///
/// Word lists here extend the built-in Spanish sets; they do not replace
/// them. All values are fixed once the `Engine` is constructed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Sentences at or below this length (in characters, after trimming)
    /// are not indexed.
    pub min_sentence_chars: usize,
    /// A best match is reported only when its cosine score strictly
    /// exceeds this value.
    pub score_threshold: f32,

    #[serde(default)]
    pub extra_stopwords: Vec<String>,
    #[serde(default)]
    pub extra_abbreviations: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            min_sentence_chars: 20,
            score_threshold: 0.2,
            extra_stopwords: Vec::new(),
            extra_abbreviations: Vec::new(),
        }
    }
}

impl Config {
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Config> {
        let raw = fs::read_to_string(path)?;
        let config = serde_json::from_str(&raw)?;
        Ok(config)
    }
}
