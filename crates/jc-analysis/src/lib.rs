//! # jc-analysis
//!
//! The financial aggregation and interval analysis engine.
//!
//! A pure function of (job snapshot, date range, filter): filters jobs by
//! interval overlap and assignment, reduces summary totals, and produces a
//! time-bucketed cumulative series for charting. Never mutates the
//! collections it reads.

pub mod filter;
pub mod intervals;
pub mod report;
pub mod summary;

pub use filter::{filter_jobs, DateRange, ReportFilter};
pub use intervals::bucket_boundaries;
pub use report::{run_report, AnalysisReport, IntervalPoint};
pub use summary::{summarize, Summary};
