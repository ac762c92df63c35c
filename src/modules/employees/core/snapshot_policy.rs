// Snapshot cadence.
//
// The next write carries a snapshot unless one already sits within the first
// SNAPSHOT_WINDOW records of the prior log, read in the order the store lists
// them.

use crate::modules::employees::core::events::{EmployeeEvent, EmployeeEventKind};
use crate::modules::employees::core::state::EmployeeView;

pub const SNAPSHOT_WINDOW: usize = 9;

pub fn should_snapshot(prior_events: &[EmployeeEvent]) -> bool {
    !prior_events
        .iter()
        .take(SNAPSHOT_WINDOW)
        .any(EmployeeEvent::is_snapshot)
}

/// The snapshot paired with `event`: the post-write view's state, one version later.
pub fn snapshot_after(event: &EmployeeEvent, post_write: &EmployeeView) -> EmployeeEvent {
    EmployeeEvent::new(
        event.id.clone(),
        event.version + 1,
        event.datetime,
        EmployeeEventKind::Snapshot {
            first_name: post_write.first_name.clone(),
            surname: post_write.surname.clone(),
            leave_balance: post_write.leave_balance,
        },
    )
}
