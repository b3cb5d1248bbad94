use roaring::RoaringBitmap;

use crate::analysis::tokenizer::StandardTokenizer;
use crate::core::config::Config;
use crate::core::error::{Error, ErrorKind, Result};
use crate::core::types::{Corpus, RecordId};
use crate::index::inverted::InvertedIndex;
use crate::query::types::{Query, QueryKind};
use crate::search::fuzzy::FuzzyAutomaton;
use crate::search::{collect_ids, SearchEngine};

/// Token-postings strategy. Exact queries intersect per-token postings
/// (AND semantics); prefix queries union the postings of every vocabulary
/// term carrying the prefix; fuzzy queries widen each token to vocabulary
/// terms within the configured edit distance before intersecting.
pub struct InvertedIndexEngine {
    tokenizer: StandardTokenizer,
    fuzzy_max_distance: u8,
    index: Option<InvertedIndex>,
}

impl InvertedIndexEngine {
    pub fn new(config: &Config) -> Self {
        InvertedIndexEngine {
            tokenizer: StandardTokenizer::with_max_token_length(config.max_token_length),
            fuzzy_max_distance: config.fuzzy_max_distance,
            index: None,
        }
    }

    fn index(&self) -> Result<&InvertedIndex> {
        self.index.as_ref().ok_or_else(|| {
            Error::new(
                ErrorKind::InvalidState,
                "inverted index queried before build".to_string(),
            )
        })
    }

    /// Postings for one fuzzy query token: exact postings unioned with the
    /// postings of every vocabulary term within the edit distance bound.
    fn fuzzy_postings(&self, index: &InvertedIndex, token: &str) -> RoaringBitmap {
        let mut expanded = RoaringBitmap::new();
        if let Some(postings) = index.postings(token) {
            expanded |= postings;
        }

        let mut automaton = FuzzyAutomaton::new(token, self.fuzzy_max_distance);
        automaton.build();
        for term in index.terms() {
            if term != token && automaton.matches(term) {
                if let Some(postings) = index.postings(term) {
                    expanded |= postings;
                }
            }
        }

        expanded
    }
}

impl SearchEngine for InvertedIndexEngine {
    fn name(&self) -> &'static str {
        "inverted"
    }

    fn build(&mut self, corpus: &Corpus) -> Result<()> {
        self.index = Some(InvertedIndex::build(corpus, &self.tokenizer)?);
        Ok(())
    }

    fn query(&self, _corpus: &Corpus, query: &Query, limit: usize) -> Result<Vec<RecordId>> {
        let index = self.index()?;

        let result = match query.kind {
            QueryKind::Exact => {
                let tokens = self.tokenizer.token_texts(&query.raw);
                intersect_all(tokens.iter().map(|t| index.postings(t).cloned()))
            }
            QueryKind::Prefix => {
                let mut out = RoaringBitmap::new();
                for term in index.prefix_terms(&query.raw) {
                    if let Some(postings) = index.postings(&term) {
                        out |= postings;
                    }
                }
                out
            }
            QueryKind::Fuzzy => {
                let tokens = self.tokenizer.token_texts(&query.raw);
                intersect_all(
                    tokens
                        .iter()
                        .map(|t| Some(self.fuzzy_postings(index, t))),
                )
            }
        };

        Ok(collect_ids(&result, limit))
    }
}

/// AND across per-token postings. A token with no postings, or no tokens at
/// all, yields the empty set.
fn intersect_all<I>(postings: I) -> RoaringBitmap
where
    I: Iterator<Item = Option<RoaringBitmap>>,
{
    let mut acc: Option<RoaringBitmap> = None;
    for set in postings {
        let Some(set) = set else {
            return RoaringBitmap::new();
        };
        acc = Some(match acc {
            None => set,
            Some(current) => current & set,
        });
        if acc.as_ref().is_some_and(|a| a.is_empty()) {
            break;
        }
    }
    acc.unwrap_or_default()
}
