//! Puzzle storage behind the `PuzzleSource` boundary.

use rand::seq::SliceRandom;
use std::fs;
use std::path::Path;
use sudoku_session::{PuzzleRecord, PuzzleSource, SourceError};

/// In-memory store loaded once from a JSON array of puzzle records.
///
/// Each fetch is an independent uniform pick, the same contract the
/// original backing collection's random-sample query offered. An empty
/// store is allowed; fetches then report "nothing to serve" rather than an
/// error.
pub struct FileStore {
    records: Vec<PuzzleRecord>,
}

impl FileStore {
    /// Read and parse the store file. Records are not validated as Sudoku;
    /// the session loader rejects malformed ones at decode time.
    pub fn open(path: &Path) -> anyhow::Result<Self> {
        let raw = fs::read_to_string(path)?;
        let records: Vec<PuzzleRecord> = serde_json::from_str(&raw)?;
        Ok(Self { records })
    }

    pub fn from_records(records: Vec<PuzzleRecord>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl PuzzleSource for FileStore {
    fn fetch_one(&self) -> Result<Option<PuzzleRecord>, SourceError> {
        Ok(self.records.choose(&mut rand::thread_rng()).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(tag: char) -> PuzzleRecord {
        PuzzleRecord {
            question: tag.to_string().repeat(81),
            solution: tag.to_string().repeat(81),
        }
    }

    #[test]
    fn test_fetch_from_single_record_store() {
        let store = FileStore::from_records(vec![record('1')]);
        let fetched = store.fetch_one().unwrap().unwrap();
        assert_eq!(fetched, record('1'));
        // No caching or ordering: fetching again still works.
        assert!(store.fetch_one().unwrap().is_some());
    }

    #[test]
    fn test_fetch_from_empty_store() {
        let store = FileStore::from_records(Vec::new());
        assert!(store.is_empty());
        assert_eq!(store.fetch_one().unwrap(), None);
    }

    #[test]
    fn test_fetch_samples_all_records_eventually() {
        let store = FileStore::from_records(vec![record('1'), record('2'), record('3')]);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..200 {
            let rec = store.fetch_one().unwrap().unwrap();
            seen.insert(rec.question.chars().next().unwrap());
        }
        assert_eq!(seen.len(), 3);
    }

    #[test]
    fn test_store_json_shape() {
        let raw = r#"[{"question": "q", "solution": "s"}]"#;
        let records: Vec<PuzzleRecord> = serde_json::from_str(raw).unwrap();
        let store = FileStore::from_records(records);
        assert_eq!(store.len(), 1);
    }
}
