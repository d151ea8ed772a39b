use std::collections::HashSet;

use crate::analysis::filter::TokenFilter;
use crate::analysis::token::Token;

pub struct StopWordFilter {
    pub stop_words: HashSet<String>,
}

impl StopWordFilter {
    pub fn new(stop_words: Vec<String>) -> Self {
        StopWordFilter {
            stop_words: stop_words.into_iter().collect(),
        }
    }

    pub fn spanish() -> Self {
        let words = vec![
            "el", "la", "de", "y", "que", "en", "a", "los", "se", "del", "las", "por", "un",
            "para", "con", "no", "una",
        ]
        .into_iter()
        .map(String::from)
        .collect();

        StopWordFilter::new(words)
    }

    pub fn with_extra(mut self, words: &[String]) -> Self {
        self.stop_words.extend(words.iter().cloned());
        self
    }
}

impl TokenFilter for StopWordFilter {
    fn filter(&self, tokens: Vec<Token>) -> Vec<Token> {
        tokens
            .into_iter()
            .filter(|token| !self.stop_words.contains(&token.text))
            .collect()
    }

    fn name(&self) -> &str {
        "stop_words"
    }

    fn clone_box(&self) -> Box<dyn TokenFilter> {
        Box::new(StopWordFilter {
            stop_words: self.stop_words.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token(text: &str, position: u32) -> Token {
        Token::new(text.to_string(), position, 0)
    }

    #[test]
    fn drops_spanish_stopwords_and_keeps_order() {
        let filter = StopWordFilter::spanish();
        let tokens = vec![token("el", 0), token("contrato", 1), token("de", 2), token("venta", 3)];
        let kept: Vec<String> = filter.filter(tokens).into_iter().map(|t| t.text).collect();
        assert_eq!(kept, vec!["contrato", "venta"]);
    }

    #[test]
    fn extra_words_extend_the_builtin_set() {
        let filter = StopWordFilter::spanish().with_extra(&["contrato".to_string()]);
        let tokens = vec![token("contrato", 0), token("venta", 1)];
        let kept: Vec<String> = filter.filter(tokens).into_iter().map(|t| t.text).collect();
        assert_eq!(kept, vec!["venta"]);
    }
}
