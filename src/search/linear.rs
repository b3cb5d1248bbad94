use crate::core::error::Result;
use crate::core::types::{Corpus, RecordId};
use crate::query::types::{Query, QueryKind};
use crate::search::SearchEngine;

/// Baseline strategy: no index at all. Every query re-scans the corpus in
/// order, so this engine sets the time and memory floor the index
/// structures are compared against.
#[derive(Default)]
pub struct LinearScanEngine;

impl LinearScanEngine {
    pub fn new() -> Self {
        LinearScanEngine
    }
}

impl SearchEngine for LinearScanEngine {
    fn name(&self) -> &'static str {
        "linear"
    }

    // Deliberately a no-op: the baseline must not pre-materialize anything.
    fn build(&mut self, _corpus: &Corpus) -> Result<()> {
        Ok(())
    }

    fn query(&self, corpus: &Corpus, query: &Query, limit: usize) -> Result<Vec<RecordId>> {
        let needle = query.raw.as_str();
        let mut matches = Vec::new();

        for record in corpus.iter() {
            if matches.len() >= limit {
                break;
            }
            let haystack = record.text.to_lowercase();
            let hit = match query.kind {
                // Exact and fuzzy both reduce to substring containment here.
                QueryKind::Exact | QueryKind::Fuzzy => haystack.contains(needle),
                QueryKind::Prefix => word_start_match(&haystack, needle),
            };
            if hit {
                matches.push(record.id);
            }
        }

        Ok(matches)
    }
}

/// Substring match restricted to word-start positions: the occurrence must
/// sit at the start of the text or right after a non-alphanumeric char.
fn word_start_match(haystack: &str, needle: &str) -> bool {
    let mut from = 0;
    while let Some(found) = haystack[from..].find(needle) {
        let at = from + found;
        let at_boundary = haystack[..at]
            .chars()
            .next_back()
            .is_none_or(|c| !c.is_alphanumeric());
        if at_boundary {
            return true;
        }
        match haystack[at..].chars().next() {
            Some(c) => from = at + c.len_utf8(),
            None => break,
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::Record;

    fn corpus() -> Corpus {
        Corpus::from_records(vec![
            Record::new(RecordId(1), "A funny book".to_string()),
            Record::new(RecordId(2), "a boring read".to_string()),
            Record::new(RecordId(3), "unfunny nonsense".to_string()),
        ])
    }

    fn run(raw: &str, kind: QueryKind, limit: usize) -> Vec<RecordId> {
        let engine = LinearScanEngine::new();
        let query = Query::parse(raw, kind).unwrap();
        engine.query(&corpus(), &query, limit).unwrap()
    }

    #[test]
    fn exact_is_case_insensitive_substring() {
        assert_eq!(run("FUNNY", QueryKind::Exact, 10), vec![RecordId(1), RecordId(3)]);
        assert_eq!(run("boring", QueryKind::Exact, 10), vec![RecordId(2)]);
        assert!(run("missing", QueryKind::Exact, 10).is_empty());
    }

    #[test]
    fn prefix_requires_word_start() {
        // "funny" occurs in record 3 only inside "unfunny"
        assert_eq!(run("funny", QueryKind::Prefix, 10), vec![RecordId(1)]);
        assert_eq!(run("bo", QueryKind::Prefix, 10), vec![RecordId(1), RecordId(2)]);
    }

    #[test]
    fn limit_truncates_in_corpus_order() {
        assert_eq!(run("a", QueryKind::Exact, 1), vec![RecordId(1)]);
    }

    #[test]
    fn word_start_boundaries() {
        assert!(word_start_match("a funny book", "funny"));
        assert!(word_start_match("well-written", "written"));
        assert!(!word_start_match("unfunny", "funny"));
        assert!(word_start_match("funny", "funny"));
    }
}
