use unicode_segmentation::UnicodeSegmentation;

use crate::analysis::token::Token;

/// Standard Unicode tokenizer: splits on word boundaries, lowercases,
/// drops tokens over the length cap.
#[derive(Debug, Clone)]
pub struct StandardTokenizer {
    pub lowercase: bool,
    pub max_token_length: usize,
}

impl Default for StandardTokenizer {
    fn default() -> Self {
        StandardTokenizer {
            lowercase: true,
            max_token_length: 255,
        }
    }
}

impl StandardTokenizer {
    pub fn with_max_token_length(max_token_length: usize) -> Self {
        StandardTokenizer {
            lowercase: true,
            max_token_length,
        }
    }

    pub fn tokenize(&self, text: &str) -> Vec<Token> {
        let normalized = if self.lowercase {
            text.to_lowercase()
        } else {
            text.to_string()
        };

        let mut tokens = Vec::new();
        let mut position = 0u32;

        for (offset, word) in normalized.unicode_word_indices() {
            if word.len() > self.max_token_length {
                continue;
            }
            tokens.push(Token::new(word.to_string(), position, offset));
            position += 1;
        }

        tokens
    }

    /// Convenience for callers that only need the token texts.
    pub fn token_texts(&self, text: &str) -> Vec<String> {
        self.tokenize(text).into_iter().map(|t| t.text).collect()
    }
}
