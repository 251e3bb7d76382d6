use chrono::Utc;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{EntityTrait, QueryOrder, Set};
use serde_json::Value;

use crate::{
    dto::orders::{CreateOrderRequest, OrderCreated, OrderList},
    entity::orders::{ActiveModel, Column, Entity as Orders},
    error::AppResult,
    models::Order,
    state::AppState,
};

/// All orders, oldest first. Orders created within the same clock tick keep
/// insertion order through the id tiebreak.
pub async fn list_orders(state: &AppState) -> AppResult<OrderList> {
    let items = Orders::find()
        .order_by_asc(Column::CreatedAt)
        .order_by_asc(Column::Id)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(Order::from)
        .collect();
    Ok(OrderList { items })
}

pub async fn create_order(state: &AppState, payload: CreateOrderRequest) -> AppResult<OrderCreated> {
    let active = ActiveModel {
        id: NotSet,
        items: Set(to_text(payload.items)?),
        details: Set(to_text(payload.details)?),
        created_at: Set(Utc::now()),
    };

    let result = Orders::insert(active).exec(&state.orm).await?;
    tracing::info!(order_id = result.last_insert_id, "order created");

    Ok(OrderCreated {
        success: true,
        order_id: result.last_insert_id,
    })
}

fn to_text(value: Option<Value>) -> AppResult<Option<String>> {
    Ok(value.map(|v| serde_json::to_string(&v)).transpose()?)
}
