use serde::{Serialize, Deserialize};

/// Token representation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub text: String,      // The token text, already case-normalized
    pub position: u32,     // Ordinal position in the source text
    pub offset: usize,     // Byte offset in the normalized text
}

impl Token {
    pub fn new(text: String, position: u32, offset: usize) -> Self {
        Token { text, position, offset }
    }
}
