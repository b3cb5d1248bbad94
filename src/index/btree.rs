use roaring::RoaringBitmap;

struct Node {
    keys: Vec<String>,
    values: Vec<RoaringBitmap>,
    children: Vec<Node>, // empty for leaves
}

impl Node {
    fn leaf() -> Self {
        Node {
            keys: Vec::new(),
            values: Vec::new(),
            children: Vec::new(),
        }
    }

    fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    fn find(&self, key: &str) -> std::result::Result<usize, usize> {
        self.keys.binary_search_by(|k| k.as_str().cmp(key))
    }
}

/// Balanced multi-way search tree keyed by token, each key holding the
/// bitmap of record ids containing that token. Insertion follows the
/// classic split-child scheme: a node reaching `2t-1` keys splits around
/// its median, and a root split grows the tree by one level.
pub struct BTree {
    root: Node,
    min_degree: usize, // `t`
    key_count: usize,
}

impl BTree {
    pub fn new(min_degree: usize) -> Self {
        BTree {
            root: Node::leaf(),
            min_degree: min_degree.max(2),
            key_count: 0,
        }
    }

    pub fn key_count(&self) -> usize {
        self.key_count
    }

    fn max_keys(&self) -> usize {
        2 * self.min_degree - 1
    }

    pub fn insert(&mut self, key: &str, record_id: u32) {
        // Existing key: just extend its bitmap, no structural change.
        if let Some(postings) = Self::find_mut(&mut self.root, key) {
            postings.insert(record_id);
            return;
        }

        if self.root.keys.len() == self.max_keys() {
            let old_root = std::mem::replace(&mut self.root, Node::leaf());
            self.root.children.push(old_root);
            Self::split_child(&mut self.root, 0, self.min_degree);
        }

        let t = self.min_degree;
        Self::insert_non_full(&mut self.root, key, record_id, t);
        self.key_count += 1;
    }

    pub fn get(&self, key: &str) -> Option<&RoaringBitmap> {
        let mut node = &self.root;
        loop {
            match node.find(key) {
                Ok(pos) => return Some(&node.values[pos]),
                Err(pos) => {
                    if node.is_leaf() {
                        return None;
                    }
                    node = &node.children[pos];
                }
            }
        }
    }

    /// Range scan from the first key >= `prefix` while keys still start
    /// with it, unioning their bitmaps.
    pub fn prefix_scan(&self, prefix: &str) -> RoaringBitmap {
        let mut out = RoaringBitmap::new();
        Self::collect_prefix(&self.root, prefix, &mut out);
        out
    }

    /// All keys in ascending order. Exposed for verification.
    pub fn keys_in_order(&self) -> Vec<String> {
        let mut out = Vec::with_capacity(self.key_count);
        Self::collect_keys(&self.root, &mut out);
        out
    }

    fn find_mut<'a>(node: &'a mut Node, key: &str) -> Option<&'a mut RoaringBitmap> {
        match node.find(key) {
            Ok(pos) => Some(&mut node.values[pos]),
            Err(pos) => {
                if node.is_leaf() {
                    None
                } else {
                    Self::find_mut(&mut node.children[pos], key)
                }
            }
        }
    }

    fn insert_non_full(node: &mut Node, key: &str, record_id: u32, t: usize) {
        match node.find(key) {
            Ok(pos) => {
                node.values[pos].insert(record_id);
            }
            Err(pos) if node.is_leaf() => {
                let mut postings = RoaringBitmap::new();
                postings.insert(record_id);
                node.keys.insert(pos, key.to_string());
                node.values.insert(pos, postings);
            }
            Err(mut pos) => {
                if node.children[pos].keys.len() == 2 * t - 1 {
                    Self::split_child(node, pos, t);
                    // The promoted median decides which side to descend.
                    match key.cmp(node.keys[pos].as_str()) {
                        std::cmp::Ordering::Greater => pos += 1,
                        std::cmp::Ordering::Equal => {
                            node.values[pos].insert(record_id);
                            return;
                        }
                        std::cmp::Ordering::Less => {}
                    }
                }
                Self::insert_non_full(&mut node.children[pos], key, record_id, t);
            }
        }
    }

    /// Split the full child at `index`, promoting its median into `parent`.
    fn split_child(parent: &mut Node, index: usize, t: usize) {
        let child = &mut parent.children[index];

        let median_key = child.keys.remove(t - 1);
        let median_value = child.values.remove(t - 1);

        let right = Node {
            keys: child.keys.split_off(t - 1),
            values: child.values.split_off(t - 1),
            children: if child.is_leaf() {
                Vec::new()
            } else {
                child.children.split_off(t)
            },
        };

        parent.keys.insert(index, median_key);
        parent.values.insert(index, median_value);
        parent.children.insert(index + 1, right);
    }

    fn collect_prefix(node: &Node, prefix: &str, out: &mut RoaringBitmap) {
        let start = node.keys.partition_point(|k| k.as_str() < prefix);
        for pos in start..node.keys.len() {
            if !node.is_leaf() {
                Self::collect_prefix(&node.children[pos], prefix, out);
            }
            if node.keys[pos].starts_with(prefix) {
                *out |= &node.values[pos];
            } else {
                // Keys are sorted; nothing past this point can match.
                return;
            }
        }
        if !node.is_leaf() {
            Self::collect_prefix(&node.children[node.keys.len()], prefix, out);
        }
    }

    fn collect_keys(node: &Node, out: &mut Vec<String>) {
        for pos in 0..node.keys.len() {
            if !node.is_leaf() {
                Self::collect_keys(&node.children[pos], out);
            }
            out.push(node.keys[pos].clone());
        }
        if !node.is_leaf() {
            Self::collect_keys(&node.children[node.keys.len()], out);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // min degree 2 keeps nodes tiny so splits happen early
    fn tree_with(words: &[&str]) -> BTree {
        let mut tree = BTree::new(2);
        for (i, word) in words.iter().enumerate() {
            tree.insert(word, i as u32);
        }
        tree
    }

    #[test]
    fn keys_stay_sorted_across_splits() {
        let words = [
            "mango", "apple", "zebra", "kiwi", "banana", "cherry", "fig", "grape", "lemon",
            "melon", "nectarine", "orange", "peach", "quince", "raspberry",
        ];
        let tree = tree_with(&words);

        let mut expected: Vec<String> = words.iter().map(|w| w.to_string()).collect();
        expected.sort();
        assert_eq!(tree.keys_in_order(), expected);
        assert_eq!(tree.key_count(), words.len());
    }

    #[test]
    fn get_after_splits() {
        let words = ["f", "b", "d", "a", "c", "e", "g", "h", "i", "j"];
        let tree = tree_with(&words);

        for (i, word) in words.iter().enumerate() {
            let ids: Vec<u32> = tree.get(word).unwrap().iter().collect();
            assert_eq!(ids, vec![i as u32]);
        }
        assert!(tree.get("z").is_none());
    }

    #[test]
    fn repeated_key_accumulates_ids() {
        let mut tree = BTree::new(2);
        tree.insert("book", 3);
        tree.insert("book", 1);
        tree.insert("book", 2);

        let ids: Vec<u32> = tree.get("book").unwrap().iter().collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(tree.key_count(), 1);
    }

    #[test]
    fn prefix_scan_unions_matching_keys() {
        let mut tree = BTree::new(2);
        tree.insert("book", 1);
        tree.insert("boring", 2);
        tree.insert("bound", 3);
        tree.insert("apple", 4);
        tree.insert("cat", 5);

        let ids: Vec<u32> = tree.prefix_scan("bo").iter().collect();
        assert_eq!(ids, vec![1, 2, 3]);

        assert!(tree.prefix_scan("zz").is_empty());
    }

    #[test]
    fn prefix_scan_survives_deep_trees() {
        let mut tree = BTree::new(2);
        // enough distinct keys to force several levels at t=2
        for i in 0..100u32 {
            tree.insert(&format!("key{:03}", i), i);
        }
        let hits = tree.prefix_scan("key04");
        let ids: Vec<u32> = hits.iter().collect();
        assert_eq!(ids, (40..50).collect::<Vec<u32>>());
    }

    #[test]
    fn empty_tree() {
        let tree = BTree::new(2);
        assert!(tree.get("anything").is_none());
        assert!(tree.prefix_scan("a").is_empty());
        assert_eq!(tree.key_count(), 0);
    }
}
