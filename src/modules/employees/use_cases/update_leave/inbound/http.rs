use axum::{
    extract::rejection::JsonRejection,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::modules::employees::use_cases::update_leave::command::{LeaveCommand, LeaveKind};
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct LeaveRequestBody {
    #[serde(rename = "type")]
    pub kind: LeaveKind,
    pub amount: i64,
}

pub async fn handle(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<LeaveRequestBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    let command = LeaveCommand {
        id,
        kind: body.kind,
        amount: body.amount,
    };

    match state.employee_handler.update_leave(command).await {
        Ok(view) => Json(view).into_response(),
        Err(error) => error.into_response(),
    }
}
