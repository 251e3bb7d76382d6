use sea_orm::EntityTrait;

use crate::{
    db::DbPool,
    dto::status::StatusResponse,
    entity::status::Entity as Status,
    error::AppResult,
    response::Ack,
    state::AppState,
};

pub const LEAVE_KEY: &str = "leave";

/// Returned in place of a value when the key has never been written.
pub const NONE_SENTINEL: &str = "none";

pub async fn get_status(state: &AppState, key: &str) -> AppResult<StatusResponse> {
    let row = Status::find_by_id(key.to_string()).one(&state.orm).await?;
    let status = match row {
        Some(row) => row.value,
        None => Some(NONE_SENTINEL.to_string()),
    };
    Ok(StatusResponse { status })
}

pub async fn set_status(state: &AppState, key: &str, value: Option<String>) -> AppResult<Ack> {
    upsert(&state.pool, key, value.as_deref()).await?;
    tracing::info!(key, value = value.as_deref().unwrap_or("<null>"), "status updated");
    Ok(Ack::ok())
}

// Single statement so concurrent writers cannot race between a read and a write.
async fn upsert(pool: &DbPool, key: &str, value: Option<&str>) -> AppResult<()> {
    sqlx::query(
        r#"
        INSERT INTO status (key, value)
        VALUES (?, ?)
        ON CONFLICT (key) DO UPDATE SET value = excluded.value
        "#,
    )
    .bind(key)
    .bind(value)
    .execute(pool)
    .await?;

    Ok(())
}
