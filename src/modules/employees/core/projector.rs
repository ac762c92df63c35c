// Projector: rebuild an EmployeeView from an employee's event log.
//
// Algorithm
// - Drop unrecognized records, then order newest first by version.
// - Start from the newest snapshot and replay only what is newer, oldest first.
//   Without a snapshot, replay everything from blank names and the default balance.
// - `version` and `last_updated` come from the highest version in the unfiltered
//   input, so optimistic concurrency always sees the true head of the log.
//
// Boundaries
// - Pure. The input order does not matter.

use crate::modules::employees::core::events::{EmployeeEvent, EmployeeEventKind};
use crate::modules::employees::core::evolve::{evolve, ReplayState};
use crate::modules::employees::core::state::{EmployeeView, DEFAULT_LEAVE_BALANCE};

/// `None` only when `events` is empty.
pub fn project(events: &[EmployeeEvent], id: &str) -> Option<EmployeeView> {
    project_with_default(events, id, DEFAULT_LEAVE_BALANCE)
}

pub fn project_with_default(
    events: &[EmployeeEvent],
    id: &str,
    default_leave_balance: i64,
) -> Option<EmployeeView> {
    let head = events.iter().max_by_key(|event| event.version)?;

    let mut newest_first: Vec<&EmployeeEvent> = events
        .iter()
        .filter(|event| !matches!(event.kind, EmployeeEventKind::Unrecognized))
        .collect();
    newest_first.sort_by(|a, b| b.version.cmp(&a.version));

    let (seed, newer) = match newest_first
        .iter()
        .enumerate()
        .find_map(|(k, event)| ReplayState::from_snapshot(event).map(|seed| (seed, k)))
    {
        Some((seed, k)) => (seed, &newest_first[..k]),
        None => (ReplayState::blank(default_leave_balance), &newest_first[..]),
    };

    let state = newer
        .iter()
        .rev()
        .fold(seed, |state, event| evolve(state, event));

    Some(EmployeeView {
        id: id.to_string(),
        first_name: state.first_name,
        surname: state.surname,
        leave_balance: state.leave_balance,
        version: head.version,
        last_updated: head.datetime,
    })
}
