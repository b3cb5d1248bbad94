use std::collections::HashMap;

use roaring::RoaringBitmap;

#[derive(Default)]
struct TrieNode {
    children: HashMap<char, TrieNode>,
    /// Present when a stored word ends here; the bitmap accumulates the
    /// ids of every record containing that word.
    postings: Option<RoaringBitmap>,
}

/// Character trie over word tokens with record-id sets at terminal nodes.
#[derive(Default)]
pub struct Trie {
    root: TrieNode,
    word_count: usize,
}

impl Trie {
    pub fn new() -> Self {
        Trie::default()
    }

    pub fn insert(&mut self, word: &str, record_id: u32) {
        let mut node = &mut self.root;
        for ch in word.chars() {
            node = node.children.entry(ch).or_default();
        }
        if node.postings.is_none() {
            self.word_count += 1;
        }
        node.postings
            .get_or_insert_with(RoaringBitmap::new)
            .insert(record_id);
    }

    /// Record ids for exactly `word`, or None if it was never stored.
    pub fn exact(&self, word: &str) -> Option<&RoaringBitmap> {
        self.descend(word).and_then(|node| node.postings.as_ref())
    }

    /// Union of the terminal sets in the subtree below `prefix`.
    pub fn prefix(&self, prefix: &str) -> RoaringBitmap {
        let mut out = RoaringBitmap::new();
        if let Some(node) = self.descend(prefix) {
            Self::collect(node, &mut out);
        }
        out
    }

    pub fn word_count(&self) -> usize {
        self.word_count
    }

    fn descend(&self, path: &str) -> Option<&TrieNode> {
        let mut node = &self.root;
        for ch in path.chars() {
            node = node.children.get(&ch)?;
        }
        Some(node)
    }

    fn collect(node: &TrieNode, out: &mut RoaringBitmap) {
        if let Some(postings) = &node.postings {
            *out |= postings;
        }
        for child in node.children.values() {
            Self::collect(child, out);
        }
    }
}
