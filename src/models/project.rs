//! Project model.
//!
//! A project is the primary grouping for work intervals and carries the
//! payroll policy applied to its logs. Only domain essentials live here;
//! display concerns (colour tags, ordering) belong to the UI layer.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::PayrollConfig;

/// A project owning a set of work intervals.
///
/// # Example
///
/// ```
/// use compensation_engine::config::PayrollConfig;
/// use compensation_engine::models::Project;
/// use rust_decimal::Decimal;
/// use uuid::Uuid;
///
/// let project = Project {
///     id: Uuid::new_v4(),
///     name: "Client A".to_string(),
///     note: None,
///     is_archived: false,
///     payroll: PayrollConfig::standard(Decimal::new(8, 0)),
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Unique identifier, matched against [`WorkInterval::project_id`].
    ///
    /// [`WorkInterval::project_id`]: crate::models::WorkInterval::project_id
    pub id: Uuid,
    /// Display name.
    pub name: String,
    /// Optional memo.
    #[serde(default)]
    pub note: Option<String>,
    /// Archived projects are hidden by default in the UI; the engine still
    /// honours their policy when their logs appear in a month.
    #[serde(default)]
    pub is_archived: bool,
    /// Payroll policy bound to this project.
    pub payroll: PayrollConfig,
}
