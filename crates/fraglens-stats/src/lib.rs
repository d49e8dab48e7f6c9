//! Statistical utilities for the Fraglens project.
//!
//! This crate provides the small set of statistics the analysis layer needs
//! to summarize judgments:
//!
//! - **Descriptive statistics**: min, max, mean, median, standard deviation
//! - **Frequency tables**: occurrence counts with stable most-common ordering
//!
//! # Modules
//!
//! - [`descriptive`]: Descriptive statistics for summarizing datasets
//! - [`frequency`]: Frequency counting for discrete values (e.g. mistake tags)
//!
//! # Examples
//!
//! ## Computing descriptive statistics
//!
//! ```
//! use fraglens_stats::descriptive::DescriptiveStats;
//!
//! let values = [60.0, 80.0, 100.0];
//! let stats = DescriptiveStats::new(values).unwrap();
//! assert_eq!(stats.mean, 80.0);
//! ```
//!
//! ## Counting frequencies
//!
//! ```
//! use fraglens_stats::frequency::FrequencyTable;
//!
//! let mut table = FrequencyTable::new();
//! table.add("isolated");
//! table.add("isolated");
//! table.add("no_trade");
//! assert_eq!(table.count(&"isolated"), 2);
//! ```

pub mod descriptive;
pub mod frequency;
