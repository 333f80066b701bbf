//! Grouping of index records by training and evaluation years.
//!
//! Every record increments exactly one group, so the counts always sum to
//! the number of records added.

use crate::models::{GroupKey, GroupRow, IndexRecord};
use indexmap::IndexMap;
use std::time::{Duration, Instant};

/// Occurrence count per group, in first-encounter order.
pub type GroupCount = IndexMap<GroupKey, usize>;

/// Accumulates index records into group counts.
#[derive(Debug)]
pub struct Aggregator {
    counts: GroupCount,
    files_processed: usize,
    started: Instant,
}

impl Default for Aggregator {
    fn default() -> Self {
        Self::new()
    }
}

impl Aggregator {
    /// Create an empty aggregator; the elapsed-time clock starts now.
    pub fn new() -> Self {
        Self {
            counts: GroupCount::new(),
            files_processed: 0,
            started: Instant::now(),
        }
    }

    /// Count one record.
    pub fn add(&mut self, record: IndexRecord) {
        *self.counts.entry(GroupKey::from(record)).or_insert(0) += 1;
        self.files_processed += 1;
    }

    pub fn files_processed(&self) -> usize {
        self.files_processed
    }

    /// Stop the clock and return the accumulated counts.
    pub fn finish(self) -> Aggregation {
        Aggregation {
            counts: self.counts,
            files_processed: self.files_processed,
            elapsed: self.started.elapsed(),
        }
    }
}

/// Result of a completed aggregation.
#[derive(Debug, Clone)]
pub struct Aggregation {
    pub counts: GroupCount,
    pub files_processed: usize,
    pub elapsed: Duration,
}

impl Aggregation {
    /// Groups sorted by count, highest first. Equal counts keep encounter order.
    pub fn sorted_groups(&self) -> Vec<GroupRow> {
        sort_groups(&self.counts)
    }
}

/// Sort group counts descending; the sort is stable.
pub fn sort_groups(counts: &GroupCount) -> Vec<GroupRow> {
    let mut rows: Vec<GroupRow> = counts
        .iter()
        .map(|(key, count)| GroupRow::new(key.clone(), *count))
        .collect();

    rows.sort_by_key(|row| std::cmp::Reverse(row.count));
    rows
}
