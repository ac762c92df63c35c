// Employee event log records.
//
// Purpose
// - One closed enumeration of everything that can happen to an employee, so the
//   projector's match is exhaustive.
//
// Wire format
// - A flat record: `id`, `version`, `datetime`, a `type` tag and the kind's fields in
//   camelCase. Balances travel as `amount`.
// - A `type` this build does not know decodes to `Unrecognized`; replay skips it but
//   its version still counts.
//
// Versioning and evolution
// - Do not change the meaning of historical events. New kinds are new variants.

use crate::shared::infrastructure::event_store::Versioned;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EmployeeEvent {
    pub id: String,
    pub version: u64,
    pub datetime: DateTime<Utc>,
    #[serde(flatten)]
    pub kind: EmployeeEventKind,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(
    tag = "type",
    rename_all = "SCREAMING_SNAKE_CASE",
    rename_all_fields = "camelCase"
)]
pub enum EmployeeEventKind {
    EmployeeCreated {
        first_name: String,
        surname: String,
        #[serde(rename = "amount")]
        leave_balance: i64,
    },
    EmployeeUpdated {
        first_name: String,
        surname: String,
    },
    EmployeeDeleted {
        #[serde(rename = "amount")]
        leave_balance: i64,
    },
    LeaveRequested {
        amount: i64,
    },
    LeaveCancelled {
        amount: i64,
    },
    Snapshot {
        first_name: String,
        surname: String,
        #[serde(rename = "amount")]
        leave_balance: i64,
    },
    #[serde(other)]
    Unrecognized,
}

impl EmployeeEvent {
    pub fn new(
        id: impl Into<String>,
        version: u64,
        datetime: DateTime<Utc>,
        kind: EmployeeEventKind,
    ) -> Self {
        Self {
            id: id.into(),
            version,
            datetime,
            kind,
        }
    }

    pub fn is_snapshot(&self) -> bool {
        matches!(self.kind, EmployeeEventKind::Snapshot { .. })
    }
}

impl EmployeeEventKind {
    pub fn name(&self) -> &'static str {
        match self {
            EmployeeEventKind::EmployeeCreated { .. } => "EMPLOYEE_CREATED",
            EmployeeEventKind::EmployeeUpdated { .. } => "EMPLOYEE_UPDATED",
            EmployeeEventKind::EmployeeDeleted { .. } => "EMPLOYEE_DELETED",
            EmployeeEventKind::LeaveRequested { .. } => "LEAVE_REQUESTED",
            EmployeeEventKind::LeaveCancelled { .. } => "LEAVE_CANCELLED",
            EmployeeEventKind::Snapshot { .. } => "SNAPSHOT",
            EmployeeEventKind::Unrecognized => "UNRECOGNIZED",
        }
    }
}

impl Versioned for EmployeeEvent {
    fn stream_id(&self) -> &str {
        &self.id
    }

    fn version(&self) -> u64 {
        self.version
    }
}
