use crate::modules::employees::core::events::EmployeeEvent;
use crate::modules::employees::use_cases::handler::EmployeeHandler;
use crate::shared::core::primitives::Clock;
use crate::shared::infrastructure::event_store::in_memory::InMemoryEventStore;
use std::sync::Arc;

pub type EmployeeStore = InMemoryEventStore<EmployeeEvent>;

#[derive(Clone)]
pub struct AppState {
    pub employee_handler: Arc<EmployeeHandler<EmployeeStore>>,
    pub event_store: Arc<EmployeeStore>,
}

impl AppState {
    pub fn in_memory(table_name: impl Into<String>, clock: Arc<dyn Clock>) -> Self {
        Self::over(Arc::new(EmployeeStore::named(table_name)), clock)
    }

    pub fn over(event_store: Arc<EmployeeStore>, clock: Arc<dyn Clock>) -> Self {
        Self {
            employee_handler: Arc::new(EmployeeHandler::new(event_store.clone(), clock)),
            event_store,
        }
    }
}
