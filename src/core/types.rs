use serde::{Serialize, Deserialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RecordId(pub u32);

impl RecordId {
    pub fn new(id: u32) -> Self {
        RecordId(id)
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

impl From<u32> for RecordId {
    fn from(id: u32) -> Self {
        RecordId(id)
    }
}

/// One searchable text record. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub id: RecordId,
    pub text: String,
}

impl Record {
    pub fn new(id: RecordId, text: String) -> Self {
        Record { id, text }
    }
}

/// Bounded, ordered set of records loaded for one benchmark run.
/// Records are kept in load order, which is ascending id order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Corpus {
    records: Vec<Record>,
}

impl Corpus {
    pub fn new() -> Self {
        Corpus { records: Vec::new() }
    }

    pub fn from_records(records: Vec<Record>) -> Self {
        Corpus { records }
    }

    pub fn push(&mut self, record: Record) {
        self.records.push(record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Lookup by id. Relies on the ascending-id load order.
    pub fn get(&self, id: RecordId) -> Option<&Record> {
        self.records
            .binary_search_by_key(&id, |r| r.id)
            .ok()
            .map(|pos| &self.records[pos])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corpus_get_by_id() {
        let corpus = Corpus::from_records(vec![
            Record::new(RecordId(0), "first".to_string()),
            Record::new(RecordId(3), "second".to_string()),
            Record::new(RecordId(7), "third".to_string()),
        ]);

        assert_eq!(corpus.len(), 3);
        assert_eq!(corpus.get(RecordId(3)).map(|r| r.text.as_str()), Some("second"));
        assert!(corpus.get(RecordId(4)).is_none());
    }

    #[test]
    fn empty_corpus() {
        let corpus = Corpus::new();
        assert!(corpus.is_empty());
        assert!(corpus.get(RecordId(0)).is_none());
    }
}
