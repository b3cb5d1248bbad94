pub mod btree;
pub mod inverted;
pub mod trie;
