// Event fixtures shared by unit tests.
//
// Each event is stamped one day after the previous version so the latest
// version also carries the latest timestamp.

use crate::modules::employees::core::events::{EmployeeEvent, EmployeeEventKind};
use crate::modules::employees::core::state::EmployeeView;
use chrono::{DateTime, Duration, TimeZone, Utc};

pub const EMPLOYEE_ID: &str = "f1e6930f-3294-43e8-8fab-1ed8736bab9a";

pub fn at(rfc3339: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(rfc3339)
        .unwrap()
        .with_timezone(&Utc)
}

pub fn stamp(version: u64) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 13, 35, 58).unwrap() + Duration::days(version as i64 - 1)
}

fn event(version: u64, kind: EmployeeEventKind) -> EmployeeEvent {
    EmployeeEvent::new(EMPLOYEE_ID, version, stamp(version), kind)
}

pub fn created(version: u64, first_name: &str, surname: &str, leave_balance: i64) -> EmployeeEvent {
    event(
        version,
        EmployeeEventKind::EmployeeCreated {
            first_name: first_name.into(),
            surname: surname.into(),
            leave_balance,
        },
    )
}

pub fn updated(version: u64, first_name: &str, surname: &str) -> EmployeeEvent {
    event(
        version,
        EmployeeEventKind::EmployeeUpdated {
            first_name: first_name.into(),
            surname: surname.into(),
        },
    )
}

pub fn deleted(version: u64) -> EmployeeEvent {
    event(version, EmployeeEventKind::EmployeeDeleted { leave_balance: 0 })
}

pub fn requested(version: u64, amount: i64) -> EmployeeEvent {
    event(version, EmployeeEventKind::LeaveRequested { amount })
}

pub fn cancelled(version: u64, amount: i64) -> EmployeeEvent {
    event(version, EmployeeEventKind::LeaveCancelled { amount })
}

pub fn snapshot(version: u64, first_name: &str, surname: &str, leave_balance: i64) -> EmployeeEvent {
    event(
        version,
        EmployeeEventKind::Snapshot {
            first_name: first_name.into(),
            surname: surname.into(),
            leave_balance,
        },
    )
}

pub fn unrecognized(version: u64) -> EmployeeEvent {
    event(version, EmployeeEventKind::Unrecognized)
}

pub fn employee_view(leave_balance: i64, version: u64) -> EmployeeView {
    EmployeeView {
        id: EMPLOYEE_ID.to_string(),
        first_name: "Lee".to_string(),
        surname: "Gilmore".to_string(),
        leave_balance,
        version,
        last_updated: stamp(version),
    }
}
