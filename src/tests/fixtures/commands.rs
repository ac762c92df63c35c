// Command builders shared by unit tests.

use crate::modules::employees::use_cases::create_employee::command::CreateEmployee;
use crate::modules::employees::use_cases::update_leave::command::{LeaveCommand, LeaveKind};
use crate::tests::fixtures::events::EMPLOYEE_ID;

pub struct CreateEmployeeBuilder {
    inner: CreateEmployee,
}

impl Default for CreateEmployeeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl CreateEmployeeBuilder {
    pub fn new() -> Self {
        Self {
            inner: CreateEmployee {
                first_name: "Lee".to_string(),
                surname: "Gilmore".to_string(),
                amount: 25,
            },
        }
    }

    pub fn first_name(mut self, v: impl Into<String>) -> Self {
        self.inner.first_name = v.into();
        self
    }

    pub fn surname(mut self, v: impl Into<String>) -> Self {
        self.inner.surname = v.into();
        self
    }

    pub fn amount(mut self, v: i64) -> Self {
        self.inner.amount = v;
        self
    }

    pub fn build(self) -> CreateEmployee {
        self.inner
    }
}

pub struct LeaveCommandBuilder {
    inner: LeaveCommand,
}

#[allow(dead_code)]
impl LeaveCommandBuilder {
    pub fn request(amount: i64) -> Self {
        Self::of(LeaveKind::Request, amount)
    }

    pub fn cancel(amount: i64) -> Self {
        Self::of(LeaveKind::Cancel, amount)
    }

    fn of(kind: LeaveKind, amount: i64) -> Self {
        Self {
            inner: LeaveCommand {
                id: EMPLOYEE_ID.to_string(),
                kind,
                amount,
            },
        }
    }

    pub fn id(mut self, v: impl Into<String>) -> Self {
        self.inner.id = v.into();
        self
    }

    pub fn build(self) -> LeaveCommand {
        self.inner
    }
}

#[cfg(test)]
mod command_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn setters_override_the_defaults() {
        let command = CreateEmployeeBuilder::default()
            .first_name("Ada")
            .surname("Lovelace")
            .amount(3)
            .build();
        assert_eq!(command.first_name, "Ada");
        assert_eq!(command.surname, "Lovelace");
        assert_eq!(command.amount, 3);

        let leave = LeaveCommandBuilder::cancel(2).id("e-9").build();
        assert_eq!(leave.id, "e-9");
        assert_eq!(leave.kind, LeaveKind::Cancel);
        assert_eq!(leave.amount, 2);
    }
}
