//! Index file reading.
//!
//! An index file is a JSON object describing one trained network. Only the
//! two year lists are extracted; any other fields are ignored.

use crate::models::IndexRecord;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Errors raised while reading an index file.
#[derive(Error, Debug)]
pub enum IndexError {
    #[error("Failed to read index file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid index file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// On-disk layout of an index file.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct IndexFile {
    years_to_train_network: Vec<i64>,
    years_to_evaluate_network: Vec<i64>,
}

impl From<IndexFile> for IndexRecord {
    fn from(file: IndexFile) -> Self {
        IndexRecord::new(file.years_to_train_network, file.years_to_evaluate_network)
    }
}

/// Read an index file and return its sorted year lists.
pub fn read_index_file(path: &Path) -> Result<IndexRecord, IndexError> {
    let content = fs::read_to_string(path).map_err(|source| IndexError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let record = parse_index(&content).map_err(|source| IndexError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(
        "Index file {}: train={:?} evaluate={:?}",
        path.display(),
        record.training_years,
        record.evaluation_years
    );

    Ok(record)
}

/// Parse index file content that is already in memory.
pub fn parse_index(content: &str) -> Result<IndexRecord, serde_json::Error> {
    let index: IndexFile = serde_json::from_str(content)?;
    Ok(index.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_sorts_years() {
        let record = parse_index(
            r#"{"yearsToTrainNetwork": [2020, 2019], "yearsToEvaluateNetwork": [2021]}"#,
        )
        .unwrap();
        assert_eq!(record.training_years, vec![2019, 2020]);
        assert_eq!(record.evaluation_years, vec![2021]);
    }

    #[test]
    fn test_parse_ignores_extra_fields() {
        let record = parse_index(
            r#"{
                "networkFileName": "net-1.zip",
                "yearsToTrainNetwork": [2018],
                "yearsToEvaluateNetwork": [2019, 2020],
                "accuracy": 0.75
            }"#,
        )
        .unwrap();
        assert_eq!(record.training_years, vec![2018]);
        assert_eq!(record.evaluation_years, vec![2019, 2020]);
    }

    #[test]
    fn test_parse_missing_training_years() {
        let err = parse_index(r#"{"yearsToEvaluateNetwork": [2021]}"#).unwrap_err();
        assert!(err.to_string().contains("yearsToTrainNetwork"));
    }

    #[test]
    fn test_parse_wrong_type() {
        let result = parse_index(
            r#"{"yearsToTrainNetwork": "2020", "yearsToEvaluateNetwork": [2021]}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_read_index_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("net.json");
        fs::write(
            &path,
            r#"{"yearsToTrainNetwork": [2017, 2016], "yearsToEvaluateNetwork": [2018]}"#,
        )
        .unwrap();

        let record = read_index_file(&path).unwrap();
        assert_eq!(record, IndexRecord::new(vec![2016, 2017], vec![2018]));
    }

    #[test]
    fn test_read_malformed_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "{ not json").unwrap();

        let err = read_index_file(&path).unwrap_err();
        assert!(matches!(err, IndexError::Parse { .. }));
        assert!(err.to_string().contains("broken.json"));
    }

    #[test]
    fn test_read_missing_file() {
        let dir = TempDir::new().unwrap();
        let err = read_index_file(&dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, IndexError::Io { .. }));
    }
}
