pub mod btree;
pub mod fuzzy;
pub mod inverted;
pub mod linear;
pub mod prefix;
pub mod trie;

use roaring::RoaringBitmap;
use serde::{Serialize, Deserialize};

use crate::core::config::Config;
use crate::core::error::Result;
use crate::core::types::{Corpus, RecordId};
use crate::query::types::Query;

/// The capability every search strategy implements: build an internal
/// structure from a corpus, then answer queries against it.
pub trait SearchEngine {
    fn name(&self) -> &'static str;

    fn build(&mut self, corpus: &Corpus) -> Result<()>;

    /// Matching record ids in ascending order, truncated to `limit`.
    fn query(&self, corpus: &Corpus, query: &Query, limit: usize) -> Result<Vec<RecordId>>;
}

/// Closed set of strategies, so the harness iterates an exhaustive list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EngineKind {
    Linear,
    Inverted,
    Trie,
    BTree,
}

impl EngineKind {
    pub const ALL: [EngineKind; 4] = [
        EngineKind::Linear,
        EngineKind::Inverted,
        EngineKind::Trie,
        EngineKind::BTree,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            EngineKind::Linear => "linear",
            EngineKind::Inverted => "inverted",
            EngineKind::Trie => "trie",
            EngineKind::BTree => "btree",
        }
    }

    pub fn create(&self, config: &Config) -> Box<dyn SearchEngine> {
        match self {
            EngineKind::Linear => Box::new(linear::LinearScanEngine::new()),
            EngineKind::Inverted => Box::new(inverted::InvertedIndexEngine::new(config)),
            EngineKind::Trie => Box::new(trie::TrieEngine::new(config)),
            EngineKind::BTree => Box::new(btree::BTreeEngine::new(config)),
        }
    }
}

/// Bitmap iteration is ascending by id, which is the result ordering
/// every indexed engine promises.
pub(crate) fn collect_ids(bitmap: &RoaringBitmap, limit: usize) -> Vec<RecordId> {
    bitmap.iter().take(limit).map(RecordId).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::Config;

    #[test]
    fn engine_names_are_distinct() {
        let config = Config::default();
        let mut names: Vec<&str> = EngineKind::ALL
            .iter()
            .map(|kind| kind.create(&config).name())
            .collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), 4);
    }

    #[test]
    fn kind_and_engine_names_agree() {
        let config = Config::default();
        for kind in EngineKind::ALL {
            assert_eq!(kind.name(), kind.create(&config).name());
        }
    }

    #[test]
    fn collect_ids_truncates_in_order() {
        let mut bitmap = RoaringBitmap::new();
        for id in [9, 2, 5, 1] {
            bitmap.insert(id);
        }
        assert_eq!(
            collect_ids(&bitmap, 3),
            vec![RecordId(1), RecordId(2), RecordId(5)]
        );
    }
}
