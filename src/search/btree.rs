use roaring::RoaringBitmap;

use crate::analysis::tokenizer::StandardTokenizer;
use crate::core::config::Config;
use crate::core::error::{Error, ErrorKind, Result};
use crate::core::types::{Corpus, RecordId};
use crate::index::btree::BTree;
use crate::query::types::{Query, QueryKind};
use crate::search::{collect_ids, SearchEngine};

/// Ordered multi-way tree strategy. Exact queries do a keyed lookup per
/// token and AND the results; prefix queries run an ordered range scan over
/// the key space. Fuzzy is refused, same policy as the trie.
pub struct BTreeEngine {
    tokenizer: StandardTokenizer,
    min_degree: usize,
    tree: Option<BTree>,
}

impl BTreeEngine {
    pub fn new(config: &Config) -> Self {
        BTreeEngine {
            tokenizer: StandardTokenizer::with_max_token_length(config.max_token_length),
            min_degree: config.btree_min_degree,
            tree: None,
        }
    }

    fn tree(&self) -> Result<&BTree> {
        self.tree.as_ref().ok_or_else(|| {
            Error::new(
                ErrorKind::InvalidState,
                "btree queried before build".to_string(),
            )
        })
    }
}

impl SearchEngine for BTreeEngine {
    fn name(&self) -> &'static str {
        "btree"
    }

    fn build(&mut self, corpus: &Corpus) -> Result<()> {
        let mut tree = BTree::new(self.min_degree);
        for record in corpus.iter() {
            for token in self.tokenizer.tokenize(&record.text) {
                tree.insert(&token.text, record.id.0);
            }
        }
        self.tree = Some(tree);
        Ok(())
    }

    fn query(&self, _corpus: &Corpus, query: &Query, limit: usize) -> Result<Vec<RecordId>> {
        let tree = self.tree()?;

        let result = match query.kind {
            QueryKind::Exact => {
                let mut acc: Option<RoaringBitmap> = None;
                for token in self.tokenizer.token_texts(&query.raw) {
                    let Some(postings) = tree.get(&token) else {
                        return Ok(Vec::new());
                    };
                    acc = Some(match acc {
                        None => postings.clone(),
                        Some(current) => current & postings,
                    });
                }
                acc.unwrap_or_default()
            }
            QueryKind::Prefix => tree.prefix_scan(&query.raw),
            QueryKind::Fuzzy => {
                return Err(Error::new(
                    ErrorKind::UnsupportedQueryKind,
                    "btree engine does not support fuzzy queries".to_string(),
                ));
            }
        };

        Ok(collect_ids(&result, limit))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::Record;

    fn built_engine(texts: &[(u32, &str)]) -> (BTreeEngine, Corpus) {
        let corpus = Corpus::from_records(
            texts
                .iter()
                .map(|(id, t)| Record::new(RecordId(*id), t.to_string()))
                .collect(),
        );
        let config = Config {
            btree_min_degree: 2, // small nodes so tests exercise splits
            ..Config::default()
        };
        let mut engine = BTreeEngine::new(&config);
        engine.build(&corpus).unwrap();
        (engine, corpus)
    }

    #[test]
    fn exact_keyed_lookup() {
        let (engine, corpus) =
            built_engine(&[(1, "a funny book"), (2, "a boring read")]);
        let query = Query::parse("funny", QueryKind::Exact).unwrap();
        assert_eq!(engine.query(&corpus, &query, 10).unwrap(), vec![RecordId(1)]);
    }

    #[test]
    fn prefix_range_scan() {
        let (engine, corpus) =
            built_engine(&[(1, "a funny book"), (2, "a boring read")]);
        let query = Query::parse("bo", QueryKind::Prefix).unwrap();
        let ids = engine.query(&corpus, &query, 10).unwrap();
        assert_eq!(ids, vec![RecordId(1), RecordId(2)]);
    }

    #[test]
    fn fuzzy_is_unsupported() {
        let (engine, corpus) = built_engine(&[(1, "a funny book")]);
        let query = Query::parse("book", QueryKind::Fuzzy).unwrap();
        let err = engine.query(&corpus, &query, 10).unwrap_err();
        assert_eq!(err.kind, ErrorKind::UnsupportedQueryKind);
    }

    #[test]
    fn multi_token_exact_is_and() {
        let (engine, corpus) = built_engine(&[
            (1, "funny book"),
            (2, "funny movie"),
            (3, "boring book"),
        ]);
        let query = Query::parse("funny book", QueryKind::Exact).unwrap();
        assert_eq!(engine.query(&corpus, &query, 10).unwrap(), vec![RecordId(1)]);
    }
}
