use axum::{
    Json, Router,
    extract::State,
    routing::get,
};

use crate::{
    dto::orders::{CreateOrderRequest, OrderCreated, OrderList},
    error::AppResult,
    response::ErrorBody,
    services::order_service,
    state::AppState,
};

pub fn route() -> Router<AppState> {
    Router::new().route("/", get(list_orders).post(create_order))
}

#[utoipa::path(
    get,
    path = "/orders",
    responses(
        (status = 200, description = "All orders, oldest first", body = OrderList),
        (status = 500, description = "Store failure", body = ErrorBody),
    ),
    tag = "Orders"
)]
pub async fn list_orders(State(state): State<AppState>) -> AppResult<Json<OrderList>> {
    let resp = order_service::list_orders(&state).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/orders",
    request_body = CreateOrderRequest,
    responses(
        (status = 200, description = "Order stored", body = OrderCreated),
        (status = 500, description = "Store failure", body = ErrorBody),
    ),
    tag = "Orders"
)]
pub async fn create_order(
    State(state): State<AppState>,
    Json(payload): Json<CreateOrderRequest>,
) -> AppResult<Json<OrderCreated>> {
    let resp = order_service::create_order(&state, payload).await?;
    Ok(Json(resp))
}
