use roaring::RoaringBitmap;

use crate::analysis::tokenizer::StandardTokenizer;
use crate::core::config::Config;
use crate::core::error::{Error, ErrorKind, Result};
use crate::core::types::{Corpus, RecordId};
use crate::index::trie::Trie;
use crate::query::types::{Query, QueryKind};
use crate::search::{collect_ids, SearchEngine};

/// Character-trie strategy. Exact queries descend for each query token and
/// AND the terminal sets; prefix queries descend once and union the whole
/// subtree. Fuzzy is not serviceable here and is refused outright rather
/// than disguised as zero matches.
pub struct TrieEngine {
    tokenizer: StandardTokenizer,
    trie: Option<Trie>,
}

impl TrieEngine {
    pub fn new(config: &Config) -> Self {
        TrieEngine {
            tokenizer: StandardTokenizer::with_max_token_length(config.max_token_length),
            trie: None,
        }
    }

    fn trie(&self) -> Result<&Trie> {
        self.trie.as_ref().ok_or_else(|| {
            Error::new(
                ErrorKind::InvalidState,
                "trie queried before build".to_string(),
            )
        })
    }
}

impl SearchEngine for TrieEngine {
    fn name(&self) -> &'static str {
        "trie"
    }

    fn build(&mut self, corpus: &Corpus) -> Result<()> {
        let mut trie = Trie::new();
        for record in corpus.iter() {
            for token in self.tokenizer.tokenize(&record.text) {
                trie.insert(&token.text, record.id.0);
            }
        }
        self.trie = Some(trie);
        Ok(())
    }

    fn query(&self, _corpus: &Corpus, query: &Query, limit: usize) -> Result<Vec<RecordId>> {
        let trie = self.trie()?;

        let result = match query.kind {
            QueryKind::Exact => {
                let mut acc: Option<RoaringBitmap> = None;
                for token in self.tokenizer.token_texts(&query.raw) {
                    let Some(postings) = trie.exact(&token) else {
                        return Ok(Vec::new());
                    };
                    acc = Some(match acc {
                        None => postings.clone(),
                        Some(current) => current & postings,
                    });
                }
                acc.unwrap_or_default()
            }
            QueryKind::Prefix => trie.prefix(&query.raw),
            QueryKind::Fuzzy => {
                return Err(Error::new(
                    ErrorKind::UnsupportedQueryKind,
                    "trie engine does not support fuzzy queries".to_string(),
                ));
            }
        };

        Ok(collect_ids(&result, limit))
    }
}
