use crate::analysis::token::Token;

pub trait Tokenizer: Send + Sync {
    fn tokenize(&self, text: &str) -> Vec<Token>;

    fn name(&self) -> &str;

    fn clone_box(&self) -> Box<dyn Tokenizer>;
}

/// Tokenizer over a fixed letter alphabet.
///
/// The input is lowercased as a whole, then split into maximal runs of
/// allowed characters: ASCII `a-z` plus the extra letters. Everything else
/// (punctuation, digits, whitespace) acts as a separator, so tokenization
/// and symbol stripping happen in one pass.
#[derive(Clone)]
pub struct AlphabetTokenizer {
    pub extra_letters: Vec<char>,
    pub lowercase: bool,
}

impl AlphabetTokenizer {
    /// Alphabet for Spanish text: accented vowels and enne.
    pub fn spanish() -> Self {
        AlphabetTokenizer {
            extra_letters: vec!['á', 'é', 'í', 'ó', 'ú', 'ñ'],
            lowercase: true,
        }
    }

    fn is_word_char(&self, c: char) -> bool {
        c.is_ascii_lowercase() || self.extra_letters.contains(&c)
    }
}

impl Default for AlphabetTokenizer {
    fn default() -> Self {
        AlphabetTokenizer::spanish()
    }
}

impl Tokenizer for AlphabetTokenizer {
    fn tokenize(&self, text: &str) -> Vec<Token> {
        let source = if self.lowercase {
            text.to_lowercase()
        } else {
            text.to_string()
        };

        let mut tokens = Vec::new();
        let mut position = 0u32;
        let mut start: Option<usize> = None;

        for (idx, c) in source.char_indices() {
            if self.is_word_char(c) {
                if start.is_none() {
                    start = Some(idx);
                }
            } else if let Some(s) = start.take() {
                tokens.push(Token::new(source[s..idx].to_string(), position, s));
                position += 1;
            }
        }
        if let Some(s) = start {
            tokens.push(Token::new(source[s..].to_string(), position, s));
        }

        tokens
    }

    fn name(&self) -> &str {
        "alphabet"
    }

    fn clone_box(&self) -> Box<dyn Tokenizer> {
        Box::new(self.clone())
    }
}
