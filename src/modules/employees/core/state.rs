// EmployeeView is the state of one employee after replaying its log.
//
// Boundaries
// - Derived and short lived. Recomputed on every read and before every write,
//   never stored.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Starting balance of every employee, and the balance a fresh log replays from.
pub const DEFAULT_LEAVE_BALANCE: i64 = 25;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeView {
    pub id: String,
    pub first_name: String,
    pub surname: String,
    #[serde(rename = "amount")]
    pub leave_balance: i64,
    pub version: u64,
    pub last_updated: DateTime<Utc>,
}
