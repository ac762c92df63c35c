// Command data type for requesting or cancelling leave.
//
// - One command shape for both directions; `kind` picks the decider.
// - Transport names are REQUEST_LEAVE and CANCEL_LEAVE.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LeaveKind {
    #[serde(rename = "REQUEST_LEAVE")]
    Request,
    #[serde(rename = "CANCEL_LEAVE")]
    Cancel,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaveCommand {
    pub id: String,
    pub kind: LeaveKind,
    pub amount: i64,
}
