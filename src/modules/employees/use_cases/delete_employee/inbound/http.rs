use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};

use crate::modules::employees::use_cases::delete_employee::command::DeleteEmployee;
use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>, Path(id): Path<String>) -> impl IntoResponse {
    match state.employee_handler.delete(DeleteEmployee { id }).await {
        Ok(view) => Json(view).into_response(),
        Err(error) => error.into_response(),
    }
}
