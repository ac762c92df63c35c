// Evolve function: fold one event into the replay state.
//
// Boundaries
// - No input or output. No side effects.
//
// Notes
// - Creation sets names only. The balance a log starts from is chosen by the
//   projector, not by the created event.
// - Deletion overwrites the balance; it does not subtract.
// - Requests and cancellations saturate at the i64 bounds.

use crate::modules::employees::core::events::{EmployeeEvent, EmployeeEventKind};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplayState {
    pub first_name: String,
    pub surname: String,
    pub leave_balance: i64,
}

impl ReplayState {
    pub fn blank(leave_balance: i64) -> Self {
        Self {
            first_name: String::new(),
            surname: String::new(),
            leave_balance,
        }
    }

    /// Seed a replay from a snapshot event; `None` for any other kind.
    pub fn from_snapshot(event: &EmployeeEvent) -> Option<Self> {
        match &event.kind {
            EmployeeEventKind::Snapshot {
                first_name,
                surname,
                leave_balance,
            } => Some(Self {
                first_name: first_name.clone(),
                surname: surname.clone(),
                leave_balance: *leave_balance,
            }),
            _ => None,
        }
    }
}

pub fn evolve(state: ReplayState, event: &EmployeeEvent) -> ReplayState {
    match &event.kind {
        EmployeeEventKind::EmployeeCreated {
            first_name,
            surname,
            ..
        }
        | EmployeeEventKind::EmployeeUpdated {
            first_name,
            surname,
        } => ReplayState {
            first_name: first_name.clone(),
            surname: surname.clone(),
            ..state
        },
        EmployeeEventKind::EmployeeDeleted { leave_balance } => ReplayState {
            leave_balance: *leave_balance,
            ..state
        },
        EmployeeEventKind::LeaveRequested { amount } => ReplayState {
            leave_balance: state.leave_balance.saturating_sub(*amount),
            ..state
        },
        EmployeeEventKind::LeaveCancelled { amount } => ReplayState {
            leave_balance: state.leave_balance.saturating_add(*amount),
            ..state
        },
        EmployeeEventKind::Snapshot { .. } => ReplayState::from_snapshot(event).unwrap_or(state),
        EmployeeEventKind::Unrecognized => state,
    }
}
