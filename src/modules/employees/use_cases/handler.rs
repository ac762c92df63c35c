// Employee command handler orchestrates the read and write flows.
//
// Responsibilities
// - Load the employee's log and project the current view.
// - Call the matching decider with the current time.
// - Project the log plus the new event and check the view's shape.
// - Append the event, paired with a snapshot when the cadence asks for one,
//   conditioned on its version being free.
//
// Failures are logged and returned untouched. A conflict is not retried; the
// caller re-reads and resubmits.

use crate::modules::employees::core::events::EmployeeEvent;
use crate::modules::employees::core::projector::project;
use crate::modules::employees::core::schema::{validate_view, SchemaViolation};
use crate::modules::employees::core::snapshot_policy::{should_snapshot, snapshot_after};
use crate::modules::employees::core::state::EmployeeView;
use crate::modules::employees::use_cases::commands::EmployeeCommand;
use crate::modules::employees::use_cases::create_employee::command::CreateEmployee;
use crate::modules::employees::use_cases::create_employee::decide::decide_create;
use crate::modules::employees::use_cases::decide::decide;
use crate::modules::employees::use_cases::decision::DecideError;
use crate::modules::employees::use_cases::delete_employee::command::DeleteEmployee;
use crate::modules::employees::use_cases::update_employee::command::UpdateEmployee;
use crate::modules::employees::use_cases::update_leave::command::LeaveCommand;
use crate::shared::core::primitives::Clock;
use crate::shared::infrastructure::event_store::{EventStore, EventStoreError};
use std::iter;
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("invalid command: {0}")]
    InvalidCommand(DecideError),

    #[error("domain rejected: {0}")]
    InvariantViolation(DecideError),

    #[error("projected view is malformed: {0}")]
    SchemaViolation(#[from] SchemaViolation),

    #[error("concurrency conflict: {stream_id} already has version {version}")]
    ConcurrencyConflict { stream_id: String, version: u64 },

    #[error("employee {0} not found")]
    NotFound(String),

    #[error(transparent)]
    Store(EventStoreError),
}

impl From<DecideError> for ApplicationError {
    fn from(error: DecideError) -> Self {
        if error.is_invariant_violation() {
            ApplicationError::InvariantViolation(error)
        } else {
            ApplicationError::InvalidCommand(error)
        }
    }
}

impl From<EventStoreError> for ApplicationError {
    fn from(error: EventStoreError) -> Self {
        match error {
            EventStoreError::Conflict { stream_id, version } => {
                ApplicationError::ConcurrencyConflict { stream_id, version }
            }
            backend => ApplicationError::Store(backend),
        }
    }
}

fn project_existing(events: &[EmployeeEvent], id: &str) -> Result<EmployeeView, ApplicationError> {
    project(events, id).ok_or_else(|| ApplicationError::NotFound(id.to_string()))
}

fn log_failure(command: &'static str, error: &ApplicationError) {
    match error {
        ApplicationError::InvariantViolation(_)
        | ApplicationError::NotFound(_)
        | ApplicationError::ConcurrencyConflict { .. } => {
            tracing::warn!(command, %error, "command rejected")
        }
        _ => tracing::error!(command, %error, "command failed"),
    }
}

pub struct EmployeeHandler<TEventStore>
where
    TEventStore: EventStore<EmployeeEvent> + 'static,
{
    event_store: Arc<TEventStore>,
    clock: Arc<dyn Clock>,
}

impl<TEventStore> EmployeeHandler<TEventStore>
where
    TEventStore: EventStore<EmployeeEvent> + 'static,
{
    pub fn new(event_store: Arc<TEventStore>, clock: Arc<dyn Clock>) -> Self {
        Self { event_store, clock }
    }

    pub async fn create(&self, command: CreateEmployee) -> Result<EmployeeView, ApplicationError> {
        self.handle(command.into()).await
    }

    pub async fn update(&self, command: UpdateEmployee) -> Result<EmployeeView, ApplicationError> {
        self.handle(command.into()).await
    }

    pub async fn delete(&self, command: DeleteEmployee) -> Result<EmployeeView, ApplicationError> {
        self.handle(command.into()).await
    }

    pub async fn update_leave(&self, command: LeaveCommand) -> Result<EmployeeView, ApplicationError> {
        self.handle(command.into()).await
    }

    #[tracing::instrument(skip_all, fields(command = command.name(), employee_id = command.employee_id()))]
    pub async fn handle(&self, command: EmployeeCommand) -> Result<EmployeeView, ApplicationError> {
        let name = command.name();
        self.execute(command)
            .await
            .inspect(|view| tracing::info!(employee_id = %view.id, version = view.version, "command applied"))
            .inspect_err(|error| log_failure(name, error))
    }

    #[tracing::instrument(skip(self))]
    pub async fn get(&self, id: &str) -> Result<EmployeeView, ApplicationError> {
        self.read(id)
            .await
            .inspect_err(|error| log_failure("GET_EMPLOYEE", error))
    }

    async fn read(&self, id: &str) -> Result<EmployeeView, ApplicationError> {
        let events = self.event_store.list(id).await?;
        project_existing(&events, id)
    }

    async fn execute(&self, command: EmployeeCommand) -> Result<EmployeeView, ApplicationError> {
        let now = self.clock.now();

        let Some(id) = command.employee_id() else {
            let event = decide_create(&command, now)?;
            let created = project_existing(std::slice::from_ref(&event), &event.id)?;
            validate_view(&created)?;
            self.event_store.append(&event).await?;
            return Ok(created);
        };

        let prior = self.event_store.list(id).await?;
        let current = project_existing(&prior, id)?;
        let event = decide(&current, &command, now)?;

        let combined: Vec<EmployeeEvent> = prior.iter().cloned().chain(iter::once(event.clone())).collect();
        let next = project_existing(&combined, id)?;
        validate_view(&next)?;

        if should_snapshot(&prior) {
            let snapshot = snapshot_after(&event, &next);
            tracing::debug!(version = snapshot.version, "pairing snapshot with event");
            self.event_store.append_pair(&event, &snapshot).await?;
        } else {
            self.event_store.append(&event).await?;
        }
        Ok(next)
    }
}
