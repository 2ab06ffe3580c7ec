// src/dict.rs
//
// Dictionary provider: the built-in sample set plus a JSON loader for the
// record payloads the surrounding application ships. The engine itself never
// touches the filesystem; this module is the collaborator that does.

use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

use crate::core::types::DictionaryRecord;

/// The built-in sample dictionary: common Grade-2-style single-cell
/// contractions with fixed frequency weights, so the demo binaries and tests
/// have deterministic data without any file.
pub fn builtin_dictionary() -> Vec<DictionaryRecord> {
    let words: [(&str, &str, u64); 15] = [
        ("the", "2456", 1000),
        ("and", "12346", 900),
        ("for", "123456", 800),
        ("are", "12456", 750),
        ("as", "1246", 700),
        ("with", "23456", 650),
        ("his", "236", 600),
        ("they", "1456", 550),
        ("be", "23", 500),
        ("at", "1", 450),
        ("cat", "14", 100),
        ("dog", "145", 95),
        ("run", "1235", 90),
        ("jump", "245", 85),
        ("happy", "125", 80),
    ];
    words
        .into_iter()
        .map(|(word, pattern, frequency)| DictionaryRecord {
            word: word.to_string(),
            pattern: pattern.to_string(),
            frequency,
        })
        .collect()
}

/// Reads a JSON array of dictionary records. Decode failures surface as
/// `InvalidData` so callers only deal in `io::Error`.
pub fn load_records<R: Read>(reader: R) -> io::Result<Vec<DictionaryRecord>> {
    serde_json::from_reader(reader)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

pub fn load_records_from_path(path: &Path) -> io::Result<Vec<DictionaryRecord>> {
    let file = File::open(path)?;
    load_records(BufReader::new(file))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn builtin_set_is_well_formed() {
        let records = builtin_dictionary();
        assert_eq!(records.len(), 15);
        for r in &records {
            assert!(!r.word.is_empty());
            assert!(r.pattern.chars().all(|c| ('1'..='6').contains(&c)));
            assert!(r.frequency > 0);
        }
    }

    #[test]
    fn loads_legacy_json_payload() {
        let json = r#"[
            {"id": 1, "word": "run", "braillePattern": "1235", "frequency": 90, "language": "en"},
            {"word": "cat", "pattern": "14", "frequency": 100}
        ]"#;
        let records = load_records(json.as_bytes()).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].pattern, "1235");
        assert_eq!(records[1].word, "cat");
    }

    #[test]
    fn invalid_json_maps_to_invalid_data() {
        let err = load_records("not json".as_bytes()).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn loads_records_from_a_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"[{{"word": "dog", "pattern": "145", "frequency": 95}}]"#).unwrap();
        let records = load_records_from_path(file.path()).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].word, "dog");
    }

    #[test]
    fn missing_file_is_an_io_error() {
        assert!(load_records_from_path(Path::new("/nonexistent/dict.json")).is_err());
    }
}
