//! Data models for the network counter.
//!
//! This module contains the core data structures shared by the reader,
//! the aggregator and the report generator.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Years extracted from a single index file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexRecord {
    /// Years the network was trained on, sorted ascending.
    pub training_years: Vec<i64>,
    /// Years the network was evaluated against, sorted ascending.
    pub evaluation_years: Vec<i64>,
}

impl IndexRecord {
    /// Build a record from raw year lists, sorting each one.
    ///
    /// Duplicate years are kept.
    pub fn new(mut training_years: Vec<i64>, mut evaluation_years: Vec<i64>) -> Self {
        training_years.sort_unstable();
        evaluation_years.sort_unstable();
        Self {
            training_years,
            evaluation_years,
        }
    }
}

impl From<IndexRecord> for GroupKey {
    fn from(record: IndexRecord) -> Self {
        Self {
            training_years: YearList(record.training_years),
            evaluation_years: YearList(record.evaluation_years),
        }
    }
}

/// A sorted list of years, rendered as `[2019, 2020]`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct YearList(pub Vec<i64>);

impl fmt::Display for YearList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let years: Vec<String> = self.0.iter().map(|y| y.to_string()).collect();
        write!(f, "[{}]", years.join(", "))
    }
}

/// Pair of training and evaluation years used to group index files.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GroupKey {
    pub training_years: YearList,
    pub evaluation_years: YearList,
}

/// One row of the summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupRow {
    /// Number of index files in the group.
    pub count: usize,
    /// Sorted training years.
    pub training_years: YearList,
    /// Sorted evaluation years.
    pub evaluation_years: YearList,
}

impl GroupRow {
    pub fn new(key: GroupKey, count: usize) -> Self {
        Self {
            count,
            training_years: key.training_years,
            evaluation_years: key.evaluation_years,
        }
    }
}

/// Metadata about a run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMetadata {
    /// Directory the index files were read from.
    pub index_directory: String,
    /// When the report was generated.
    pub generated_at: DateTime<Utc>,
    /// Number of index files read.
    pub files_processed: usize,
    /// Time spent reading and grouping, in milliseconds.
    pub duration_ms: u64,
}

/// Complete report: metadata plus groups sorted by count.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    pub metadata: ReportMetadata,
    pub groups: Vec<GroupRow>,
}

impl Report {
    /// Sum of all group counts.
    pub fn total_count(&self) -> usize {
        self.groups.iter().map(|g| g.count).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_sorts_years() {
        let record = IndexRecord::new(vec![2020, 2019], vec![2022, 2021]);
        assert_eq!(record.training_years, vec![2019, 2020]);
        assert_eq!(record.evaluation_years, vec![2021, 2022]);
    }

    #[test]
    fn test_record_keeps_duplicates() {
        let record = IndexRecord::new(vec![2020, 2019, 2020], vec![]);
        assert_eq!(record.training_years, vec![2019, 2020, 2020]);
    }

    #[test]
    fn test_permuted_records_share_key() {
        let a = IndexRecord::new(vec![2020, 2019], vec![2021]);
        let b = IndexRecord::new(vec![2019, 2020], vec![2021]);
        assert_eq!(GroupKey::from(a), GroupKey::from(b));
    }

    #[test]
    fn test_year_list_display() {
        assert_eq!(YearList(vec![2019, 2020]).to_string(), "[2019, 2020]");
        assert_eq!(YearList(vec![2021]).to_string(), "[2021]");
        assert_eq!(YearList::default().to_string(), "[]");
    }
}
