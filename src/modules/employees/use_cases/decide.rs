// Route a command aimed at an existing employee to its decider.

use crate::modules::employees::core::events::EmployeeEvent;
use crate::modules::employees::core::state::EmployeeView;
use crate::modules::employees::use_cases::commands::EmployeeCommand;
use crate::modules::employees::use_cases::decision::DecideError;
use crate::modules::employees::use_cases::delete_employee::decide::decide_delete;
use crate::modules::employees::use_cases::update_employee::decide::decide_update;
use crate::modules::employees::use_cases::update_leave::command::{LeaveCommand, LeaveKind};
use crate::modules::employees::use_cases::update_leave::decide::{
    decide_cancel_leave, decide_request_leave,
};
use chrono::{DateTime, Utc};

pub fn decide(
    view: &EmployeeView,
    command: &EmployeeCommand,
    now: DateTime<Utc>,
) -> Result<EmployeeEvent, DecideError> {
    match command {
        EmployeeCommand::Update(_) => decide_update(view, command, now),
        EmployeeCommand::Delete(_) => decide_delete(view, command, now),
        EmployeeCommand::Leave(LeaveCommand {
            kind: LeaveKind::Request,
            ..
        }) => decide_request_leave(view, command, now),
        EmployeeCommand::Leave(LeaveCommand {
            kind: LeaveKind::Cancel,
            ..
        }) => decide_cancel_leave(view, command, now),
        EmployeeCommand::Create(_) => Err(DecideError::InvalidCommand {
            expected: "UPDATE_EMPLOYEE, DELETE_EMPLOYEE or leave",
        }),
    }
}
