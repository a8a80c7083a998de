//! Data models for the compensation engine.
//!
//! Contains the external input records ([`WorkInterval`], [`Project`]), the
//! reporting [`Period`], and the output statement types.

mod period;
mod project;
mod statement;
mod work_interval;

pub use period::Period;
pub use project::Project;
pub use statement::{BucketHours, MonthlyEarningsSummary, PayBucket, PayrollStatement};
pub use work_interval::WorkInterval;
