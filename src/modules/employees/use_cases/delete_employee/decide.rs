// Pure decision function for deleting an employee.
//
// Always accepted; the deleted event zeroes the balance.

use crate::modules::employees::core::events::{EmployeeEvent, EmployeeEventKind};
use crate::modules::employees::core::state::EmployeeView;
use crate::modules::employees::use_cases::commands::EmployeeCommand;
use crate::modules::employees::use_cases::decision::DecideError;
use chrono::{DateTime, Utc};

pub fn decide_delete(
    view: &EmployeeView,
    command: &EmployeeCommand,
    now: DateTime<Utc>,
) -> Result<EmployeeEvent, DecideError> {
    let EmployeeCommand::Delete(_) = command else {
        return Err(DecideError::InvalidCommand {
            expected: "DELETE_EMPLOYEE",
        });
    };

    Ok(EmployeeEvent::new(
        view.id.clone(),
        view.version + 1,
        now,
        EmployeeEventKind::EmployeeDeleted { leave_balance: 0 },
    ))
}
