use axum::{
    Json, Router,
    extract::State,
    routing::get,
};

use crate::{
    dto::status::{SetStatusRequest, StatusResponse},
    error::AppResult,
    response::{Ack, ErrorBody},
    services::status_service::{self, LEAVE_KEY},
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new().route("/leave", get(get_leave_status).post(set_leave_status))
}

#[utoipa::path(
    get,
    path = "/status/leave",
    responses(
        (status = 200, description = "Current leave status, \"none\" if never set", body = StatusResponse),
        (status = 500, description = "Store failure", body = ErrorBody),
    ),
    tag = "Status"
)]
pub async fn get_leave_status(State(state): State<AppState>) -> AppResult<Json<StatusResponse>> {
    let resp = status_service::get_status(&state, LEAVE_KEY).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/status/leave",
    request_body = SetStatusRequest,
    responses(
        (status = 200, description = "Status stored", body = Ack),
        (status = 500, description = "Store failure", body = ErrorBody),
    ),
    tag = "Status"
)]
pub async fn set_leave_status(
    State(state): State<AppState>,
    Json(payload): Json<SetStatusRequest>,
) -> AppResult<Json<Ack>> {
    let resp = status_service::set_status(&state, LEAVE_KEY, payload.status).await?;
    Ok(Json(resp))
}
