use axum::{
    extract::rejection::JsonRejection, extract::State, http::StatusCode, response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::modules::employees::use_cases::create_employee::command::CreateEmployee;
use crate::shell::state::AppState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEmployeeBody {
    pub first_name: String,
    pub surname: String,
    pub amount: i64,
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<CreateEmployeeBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    let command = CreateEmployee {
        first_name: body.first_name,
        surname: body.surname,
        amount: body.amount,
    };

    match state.employee_handler.create(command).await {
        Ok(view) => (StatusCode::OK, Json(view)).into_response(),
        Err(error) => error.into_response(),
    }
}
