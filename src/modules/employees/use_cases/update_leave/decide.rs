// Pure decision functions for requesting and cancelling leave.
//
// Rules
// - A request needs a non-zero balance that covers the amount.
// - A cancellation needs a non-zero amount and a balance below the default.
//   A balance back at the default reads as "nothing outstanding", even when it got
//   there through earlier requests and cancellations.
// - A zero-amount request is accepted.
// - Neither may push the balance past what an i64 holds.

use crate::modules::employees::core::events::{EmployeeEvent, EmployeeEventKind};
use crate::modules::employees::core::state::{EmployeeView, DEFAULT_LEAVE_BALANCE};
use crate::modules::employees::use_cases::commands::EmployeeCommand;
use crate::modules::employees::use_cases::decision::DecideError;
use crate::modules::employees::use_cases::update_leave::command::{LeaveCommand, LeaveKind};
use chrono::{DateTime, Utc};

pub fn decide_request_leave(
    view: &EmployeeView,
    command: &EmployeeCommand,
    now: DateTime<Utc>,
) -> Result<EmployeeEvent, DecideError> {
    let EmployeeCommand::Leave(LeaveCommand {
        kind: LeaveKind::Request,
        amount,
        ..
    }) = command
    else {
        return Err(DecideError::InvalidCommand {
            expected: "REQUEST_LEAVE",
        });
    };

    if view.leave_balance == 0 {
        return Err(DecideError::NoRemainingLeave);
    }
    if view
        .leave_balance
        .checked_sub(*amount)
        .is_none_or(|remaining| remaining < 0)
    {
        return Err(DecideError::InsufficientLeave);
    }

    Ok(EmployeeEvent::new(
        view.id.clone(),
        view.version + 1,
        now,
        EmployeeEventKind::LeaveRequested { amount: *amount },
    ))
}

pub fn decide_cancel_leave(
    view: &EmployeeView,
    command: &EmployeeCommand,
    now: DateTime<Utc>,
) -> Result<EmployeeEvent, DecideError> {
    let EmployeeCommand::Leave(LeaveCommand {
        kind: LeaveKind::Cancel,
        amount,
        ..
    }) = command
    else {
        return Err(DecideError::InvalidCommand {
            expected: "CANCEL_LEAVE",
        });
    };

    if *amount == 0 {
        return Err(DecideError::ZeroCancellation);
    }
    // Compared with the default on purpose; outstanding requests are not tracked.
    if view.leave_balance == DEFAULT_LEAVE_BALANCE {
        return Err(DecideError::NoLeaveToCancel);
    }
    if view.leave_balance.checked_add(*amount).is_none() {
        return Err(DecideError::BalanceOutOfRange);
    }

    Ok(EmployeeEvent::new(
        view.id.clone(),
        view.version + 1,
        now,
        EmployeeEventKind::LeaveCancelled { amount: *amount },
    ))
}
