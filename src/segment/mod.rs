use std::collections::HashSet;

/// Splits raw document text into sentence candidates on the period
/// character, merging splits caused by known abbreviations.
///
/// The abbreviation check only looks at the single trailing word of the
/// previously accepted sentence, so an abbreviation earlier in a sentence
/// never suppresses a later split. Empty fragments are kept; callers filter
/// by length before indexing.
pub struct SentenceSegmenter {
    pub abbreviations: HashSet<String>,
}

impl SentenceSegmenter {
    /// Entries carry their trailing period, e.g. `"art."`.
    pub fn new(abbreviations: Vec<String>) -> Self {
        SentenceSegmenter {
            abbreviations: abbreviations.into_iter().collect(),
        }
    }

    pub fn spanish() -> Self {
        let abbreviations = vec!["art.", "arts.", "etc.", "sr.", "sra.", "dr."]
            .into_iter()
            .map(String::from)
            .collect();

        SentenceSegmenter::new(abbreviations)
    }

    pub fn with_extra(mut self, abbreviations: &[String]) -> Self {
        self.abbreviations.extend(abbreviations.iter().cloned());
        self
    }

    pub fn segment(&self, text: &str) -> Vec<String> {
        let mut sentences: Vec<String> = Vec::new();

        for (i, fragment) in text.split('.').enumerate() {
            let fragment = fragment.trim();

            if i > 0 {
                if let Some(prev) = sentences.last_mut() {
                    if self.ends_with_abbreviation(prev) {
                        prev.push_str(". ");
                        prev.push_str(fragment);
                        continue;
                    }
                }
            }

            sentences.push(fragment.to_string());
        }

        sentences
    }

    fn ends_with_abbreviation(&self, sentence: &str) -> bool {
        let sentence = sentence.trim();
        if sentence.is_empty() {
            return false;
        }
        let last_word = sentence.rsplit(' ').next().unwrap_or(sentence);
        let candidate = format!("{}.", last_word.to_lowercase());
        self.abbreviations.contains(&candidate)
    }
}
