// Pure decision function for replacing an employee's names.

use crate::modules::employees::core::events::{EmployeeEvent, EmployeeEventKind};
use crate::modules::employees::core::state::EmployeeView;
use crate::modules::employees::use_cases::commands::EmployeeCommand;
use crate::modules::employees::use_cases::decision::DecideError;
use chrono::{DateTime, Utc};

pub fn decide_update(
    view: &EmployeeView,
    command: &EmployeeCommand,
    now: DateTime<Utc>,
) -> Result<EmployeeEvent, DecideError> {
    let EmployeeCommand::Update(command) = command else {
        return Err(DecideError::InvalidCommand {
            expected: "UPDATE_EMPLOYEE",
        });
    };

    if command.first_name.is_empty() || command.surname.is_empty() {
        return Err(DecideError::BlankName);
    }

    Ok(EmployeeEvent::new(
        view.id.clone(),
        view.version + 1,
        now,
        EmployeeEventKind::EmployeeUpdated {
            first_name: command.first_name.clone(),
            surname: command.surname.clone(),
        },
    ))
}

#[cfg(test)]
mod employee_update_decide_tests {
    use super::*;
    use crate::modules::employees::use_cases::update_employee::command::UpdateEmployee;
    use crate::tests::fixtures::commands::LeaveCommandBuilder;
    use crate::tests::fixtures::events::{employee_view, stamp, EMPLOYEE_ID};
    use rstest::rstest;

    fn rename(first_name: &str, surname: &str) -> EmployeeCommand {
        UpdateEmployee {
            id: EMPLOYEE_ID.into(),
            first_name: first_name.into(),
            surname: surname.into(),
        }
        .into()
    }

    #[rstest]
    fn it_should_emit_the_update_at_the_next_version() {
        let view = employee_view(25, 3);
        let event = decide_update(&view, &rename("Leigh", "Gill"), stamp(4)).unwrap();
        assert_eq!(
            event,
            EmployeeEvent::new(
                EMPLOYEE_ID,
                4,
                stamp(4),
                EmployeeEventKind::EmployeeUpdated {
                    first_name: "Leigh".into(),
                    surname: "Gill".into(),
                }
            )
        );
    }

    #[rstest]
    #[case::blank_first_name("", "Gill")]
    #[case::blank_surname("Leigh", "")]
    fn it_should_reject_a_blank_name(#[case] first_name: &str, #[case] surname: &str) {
        let view = employee_view(25, 1);
        assert_eq!(
            decide_update(&view, &rename(first_name, surname), stamp(2)),
            Err(DecideError::BlankName)
        );
    }

    #[rstest]
    fn it_should_reject_any_other_command() {
        let view = employee_view(25, 1);
        let command: EmployeeCommand = LeaveCommandBuilder::request(1).build().into();
        assert_eq!(
            decide_update(&view, &command, stamp(2)),
            Err(DecideError::InvalidCommand {
                expected: "UPDATE_EMPLOYEE"
            })
        );
    }
}
