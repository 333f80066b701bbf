//! Analysis modules.
//!
//! Grouping and counting of index records.

pub mod aggregator;

pub use aggregator::*;
