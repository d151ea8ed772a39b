use crate::analysis::filter::TokenFilter;
use crate::analysis::filters::stemmer::StemmerFilter;
use crate::analysis::filters::stopword::StopWordFilter;
use crate::analysis::token::Token;
use crate::analysis::tokenizer::{AlphabetTokenizer, Tokenizer};

/// Text analysis pipeline
pub struct Analyzer {
    pub tokenizer: Box<dyn Tokenizer>,
    pub filters: Vec<Box<dyn TokenFilter>>,
    pub name: String,
}

impl Analyzer {
    pub fn new(name: String, tokenizer: Box<dyn Tokenizer>) -> Self {
        Analyzer {
            tokenizer,
            filters: Vec::new(),
            name,
        }
    }

    pub fn add_filter(mut self, filter: Box<dyn TokenFilter>) -> Self {
        self.filters.push(filter);
        self
    }

    pub fn analyze(&self, text: &str) -> Vec<Token> {
        let mut tokens = self.tokenizer.tokenize(text);

        for filter in &self.filters {
            tokens = filter.filter(tokens);
        }

        tokens
    }

    /// Standard analyzer for Spanish: alphabet tokenizer, stopword
    /// removal, Snowball stemming.
    pub fn spanish() -> Self {
        Analyzer::spanish_with_extra_stopwords(&[])
    }

    pub fn spanish_with_extra_stopwords(extra: &[String]) -> Self {
        Analyzer::new(
            "spanish".to_string(),
            Box::new(AlphabetTokenizer::spanish()),
        )
        .add_filter(Box::new(StopWordFilter::spanish().with_extra(extra)))
        .add_filter(Box::new(StemmerFilter::spanish()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(tokens: &[Token]) -> Vec<String> {
        tokens.iter().map(|t| t.text.clone()).collect()
    }

    #[test]
    fn spanish_pipeline_lowercases_strips_stopwords_and_stems() {
        let analyzer = Analyzer::spanish();
        let tokens = analyzer.analyze("El vendedor entrega los productos.");
        let words = texts(&tokens);
        // Stopwords "el" and "los" are gone; three content stems remain.
        assert_eq!(words.len(), 3);
        assert!(!words.contains(&"el".to_string()));
        assert!(!words.contains(&"los".to_string()));
    }

    #[test]
    fn analysis_is_deterministic() {
        let analyzer = Analyzer::spanish();
        let a = analyzer.analyze("¿Cuál es el plazo de garantía?");
        let b = analyzer.analyze("¿Cuál es el plazo de garantía?");
        assert_eq!(a, b);
    }

    #[test]
    fn same_surface_forms_analyze_to_same_stems_anywhere() {
        let analyzer = Analyzer::spanish();
        let from_sentence = analyzer.analyze("La garantía cubre defectos.");
        let from_query = analyzer.analyze("garantía defectos");
        let sentence_stems = texts(&from_sentence);
        for token in &from_query {
            assert!(sentence_stems.contains(&token.text));
        }
    }

    #[test]
    fn stopword_only_text_analyzes_to_nothing() {
        let analyzer = Analyzer::spanish();
        assert!(analyzer.analyze("el la de y que en...").is_empty());
    }
}
