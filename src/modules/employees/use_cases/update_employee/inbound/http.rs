use axum::{
    extract::rejection::JsonRejection,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::modules::employees::use_cases::update_employee::command::UpdateEmployee;
use crate::shell::state::AppState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEmployeeBody {
    pub first_name: String,
    pub surname: String,
}

pub async fn handle(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<UpdateEmployeeBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    let command = UpdateEmployee {
        id,
        first_name: body.first_name,
        surname: body.surname,
    };

    match state.employee_handler.update(command).await {
        Ok(view) => Json(view).into_response(),
        Err(error) => error.into_response(),
    }
}
