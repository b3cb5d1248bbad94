use std::collections::HashMap;

use roaring::RoaringBitmap;

use crate::analysis::tokenizer::StandardTokenizer;
use crate::core::error::Result;
use crate::core::types::Corpus;
use crate::search::prefix::PrefixIndex;

/// Inverted index: token -> bitmap of record ids containing that token.
/// Carries an FST over the vocabulary for prefix queries.
pub struct InvertedIndex {
    postings: HashMap<String, RoaringBitmap>,
    prefix_index: PrefixIndex,
    doc_count: usize,
    total_tokens: usize,
}

impl InvertedIndex {
    /// Tokenize every record once and accumulate postings.
    pub fn build(corpus: &Corpus, tokenizer: &StandardTokenizer) -> Result<Self> {
        let mut postings: HashMap<String, RoaringBitmap> = HashMap::new();
        let mut total_tokens = 0;

        for record in corpus.iter() {
            let tokens = tokenizer.tokenize(&record.text);
            total_tokens += tokens.len();
            for token in tokens {
                postings.entry(token.text).or_default().insert(record.id.0);
            }
        }

        let prefix_index = PrefixIndex::build(postings.keys())?;

        Ok(InvertedIndex {
            postings,
            prefix_index,
            doc_count: corpus.len(),
            total_tokens,
        })
    }

    pub fn postings(&self, term: &str) -> Option<&RoaringBitmap> {
        self.postings.get(term)
    }

    /// Iterator over the term vocabulary.
    pub fn terms(&self) -> impl Iterator<Item = &String> {
        self.postings.keys()
    }

    /// Indexed terms starting with `prefix`, lexicographically ordered.
    pub fn prefix_terms(&self, prefix: &str) -> Vec<String> {
        self.prefix_index.search_prefix(prefix)
    }

    pub fn term_count(&self) -> usize {
        self.postings.len()
    }

    pub fn doc_count(&self) -> usize {
        self.doc_count
    }

    pub fn total_tokens(&self) -> usize {
        self.total_tokens
    }
}
