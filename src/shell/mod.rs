// Composition root for the employees bounded context.
//
// Responsibilities
// - Read config from environment.
// - Instantiate the event store and clock.
// - Wire them into the employee command handler and the HTTP router.

pub mod config;
pub mod http;
pub mod state;
