use fst::{IntoStreamer, Map, MapBuilder, Streamer};

use crate::core::error::Result;

/// FST over an index vocabulary, used to enumerate the terms carrying a
/// given prefix without walking the whole term dictionary.
pub struct PrefixIndex {
    fst: Map<Vec<u8>>,
}

impl PrefixIndex {
    /// Build from the vocabulary. Terms are deduplicated by the caller;
    /// the FST requires sorted input, so we sort here.
    pub fn build<'a, I>(terms: I) -> Result<Self>
    where
        I: Iterator<Item = &'a String>,
    {
        let mut sorted: Vec<&str> = terms.map(String::as_str).collect();
        sorted.sort_unstable();

        let mut builder = MapBuilder::memory();
        for (ord, term) in sorted.iter().enumerate() {
            builder.insert(term.as_bytes(), ord as u64)?;
        }

        Ok(PrefixIndex {
            fst: builder.into_map(),
        })
    }

    /// All indexed terms starting with `prefix`, in lexicographic order.
    pub fn search_prefix(&self, prefix: &str) -> Vec<String> {
        let mut results = Vec::new();
        let prefix_bytes = prefix.as_bytes();

        let mut stream = self.fst.range().ge(prefix_bytes).into_stream();
        while let Some((term_bytes, _ord)) = stream.next() {
            if !term_bytes.starts_with(prefix_bytes) {
                break;
            }
            if let Ok(term) = String::from_utf8(term_bytes.to_vec()) {
                results.push(term);
            }
        }

        results
    }

    pub fn len(&self) -> usize {
        self.fst.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fst.is_empty()
    }
}
