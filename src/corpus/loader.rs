use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use serde_json::Value;

use crate::core::error::{Error, ErrorKind, Result};
use crate::core::types::{Corpus, Record, RecordId};

/// Read up to `limit` records from a JSON Lines dataset, taking `text_field`
/// as the searchable text. Record ids are the source line numbers.
///
/// A line that fails to parse is skipped with a warning; only an unreadable
/// file aborts the load.
pub fn load(path: &Path, limit: usize, text_field: &str) -> Result<Corpus> {
    let file = File::open(path).map_err(|e| {
        Error::new(
            ErrorKind::DatasetUnreadable,
            format!("cannot open dataset {}: {}", path.display(), e),
        )
    })?;
    let reader = BufReader::new(file);

    let mut corpus = Corpus::new();
    for (line_no, line) in reader.lines().enumerate() {
        if corpus.len() >= limit {
            break;
        }
        let line = line.map_err(|e| {
            Error::new(
                ErrorKind::DatasetUnreadable,
                format!("read failure at line {}: {}", line_no, e),
            )
        })?;
        if line.trim().is_empty() {
            continue;
        }
        match parse_entry(&line, line_no, text_field) {
            Ok(record) => corpus.push(record),
            Err(e) => eprintln!("Warning: skipping dataset line {}: {}", line_no, e),
        }
    }

    Ok(corpus)
}

fn parse_entry(line: &str, line_no: usize, text_field: &str) -> Result<Record> {
    let entry: Value = serde_json::from_str(line)
        .map_err(|e| Error::new(ErrorKind::CorruptRecord, format!("invalid JSON: {}", e)))?;

    let text = entry
        .get(text_field)
        .and_then(Value::as_str)
        .ok_or_else(|| {
            Error::new(
                ErrorKind::CorruptRecord,
                format!("missing text field '{}'", text_field),
            )
        })?;

    if text.trim().is_empty() {
        return Err(Error::new(
            ErrorKind::CorruptRecord,
            "empty text field".to_string(),
        ));
    }

    Ok(Record::new(RecordId(line_no as u32), text.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn dataset(lines: &[&str]) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        for line in lines {
            writeln!(file, "{}", line).unwrap();
        }
        file
    }

    #[test]
    fn loads_up_to_limit() {
        let file = dataset(&[
            r#"{"reviewText": "a funny book"}"#,
            r#"{"reviewText": "a boring read"}"#,
            r#"{"reviewText": "a great story"}"#,
        ]);

        let corpus = load(file.path(), 2, "reviewText").unwrap();
        assert_eq!(corpus.len(), 2);
        assert_eq!(corpus.records()[0].id, RecordId(0));
        assert_eq!(corpus.records()[1].text, "a boring read");
    }

    #[test]
    fn skips_corrupt_lines() {
        let file = dataset(&[
            r#"{"reviewText": "kept"}"#,
            r#"not json at all"#,
            r#"{"otherField": "no text"}"#,
            r#"{"reviewText": 42}"#,
            r#"{"reviewText": "also kept"}"#,
        ]);

        let corpus = load(file.path(), 10, "reviewText").unwrap();
        assert_eq!(corpus.len(), 2);
        // ids still track source line numbers across skips
        assert_eq!(corpus.records()[1].id, RecordId(4));
    }

    #[test]
    fn missing_file_is_dataset_unreadable() {
        let err = load(Path::new("/no/such/dataset.json"), 10, "reviewText").unwrap_err();
        assert_eq!(err.kind, ErrorKind::DatasetUnreadable);
    }

    #[test]
    fn empty_dataset_yields_empty_corpus() {
        let file = dataset(&[]);
        let corpus = load(file.path(), 10, "reviewText").unwrap();
        assert!(corpus.is_empty());
    }
}
