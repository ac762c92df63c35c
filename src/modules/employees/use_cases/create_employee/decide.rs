// Pure decision function for creating an employee.
//
// - Rejects a non-positive entitlement.
// - Mints a fresh id and emits EMPLOYEE_CREATED at version 1 with the default
//   balance, whatever entitlement was asked for.

use crate::modules::employees::core::events::{EmployeeEvent, EmployeeEventKind};
use crate::modules::employees::core::state::DEFAULT_LEAVE_BALANCE;
use crate::modules::employees::use_cases::commands::EmployeeCommand;
use crate::modules::employees::use_cases::decision::DecideError;
use chrono::{DateTime, Utc};
use uuid::Uuid;

pub fn decide_create(
    command: &EmployeeCommand,
    now: DateTime<Utc>,
) -> Result<EmployeeEvent, DecideError> {
    let EmployeeCommand::Create(command) = command else {
        return Err(DecideError::InvalidCommand {
            expected: "CREATE_EMPLOYEE",
        });
    };

    if command.amount <= 0 {
        return Err(DecideError::NonPositiveEntitlement);
    }

    Ok(EmployeeEvent::new(
        Uuid::now_v7().to_string(),
        1,
        now,
        EmployeeEventKind::EmployeeCreated {
            first_name: command.first_name.clone(),
            surname: command.surname.clone(),
            leave_balance: DEFAULT_LEAVE_BALANCE,
        },
    ))
}
