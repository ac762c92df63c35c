// Every command the employee aggregate accepts.
//
// Deciders receive the whole enumeration and reject a variant that is not theirs
// with DecideError::InvalidCommand, so a wiring mistake upstream fails closed.

use crate::modules::employees::use_cases::create_employee::command::CreateEmployee;
use crate::modules::employees::use_cases::delete_employee::command::DeleteEmployee;
use crate::modules::employees::use_cases::update_employee::command::UpdateEmployee;
use crate::modules::employees::use_cases::update_leave::command::{LeaveCommand, LeaveKind};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmployeeCommand {
    Create(CreateEmployee),
    Update(UpdateEmployee),
    Delete(DeleteEmployee),
    Leave(LeaveCommand),
}

impl EmployeeCommand {
    pub fn name(&self) -> &'static str {
        match self {
            EmployeeCommand::Create(_) => "CREATE_EMPLOYEE",
            EmployeeCommand::Update(_) => "UPDATE_EMPLOYEE",
            EmployeeCommand::Delete(_) => "DELETE_EMPLOYEE",
            EmployeeCommand::Leave(LeaveCommand {
                kind: LeaveKind::Request,
                ..
            }) => "REQUEST_LEAVE",
            EmployeeCommand::Leave(LeaveCommand {
                kind: LeaveKind::Cancel,
                ..
            }) => "CANCEL_LEAVE",
        }
    }

    /// Target employee; creation has none until the decider mints one.
    pub fn employee_id(&self) -> Option<&str> {
        match self {
            EmployeeCommand::Create(_) => None,
            EmployeeCommand::Update(c) => Some(&c.id),
            EmployeeCommand::Delete(c) => Some(&c.id),
            EmployeeCommand::Leave(c) => Some(&c.id),
        }
    }
}

impl From<CreateEmployee> for EmployeeCommand {
    fn from(command: CreateEmployee) -> Self {
        EmployeeCommand::Create(command)
    }
}

impl From<UpdateEmployee> for EmployeeCommand {
    fn from(command: UpdateEmployee) -> Self {
        EmployeeCommand::Update(command)
    }
}

impl From<DeleteEmployee> for EmployeeCommand {
    fn from(command: DeleteEmployee) -> Self {
        EmployeeCommand::Delete(command)
    }
}

impl From<LeaveCommand> for EmployeeCommand {
    fn from(command: LeaveCommand) -> Self {
        EmployeeCommand::Leave(command)
    }
}
