// Reasons a decider refuses a command.
//
// - InvalidCommand: the command was routed to the wrong decider. A wiring bug,
//   never a user error.
// - Every other variant is a business rule the current state violates.

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("invalid operation: expected a {expected} command")]
    InvalidCommand { expected: &'static str },

    #[error("leave entitlement should be 1 or more")]
    NonPositiveEntitlement,

    #[error("incorrect name")]
    BlankName,

    #[error("employee has no remaining leave")]
    NoRemainingLeave,

    #[error("employee does not have enough remaining leave for request")]
    InsufficientLeave,

    #[error("leave amount to cancel must be over 0")]
    ZeroCancellation,

    #[error("employee has no leave to cancel")]
    NoLeaveToCancel,

    #[error("leave amount takes the balance out of range")]
    BalanceOutOfRange,
}

impl DecideError {
    pub fn is_invariant_violation(&self) -> bool {
        !matches!(self, DecideError::InvalidCommand { .. })
    }
}
