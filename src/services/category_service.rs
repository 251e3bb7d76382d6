use sea_orm::ActiveValue::NotSet;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

use crate::{
    dto::categories::{CategoryList, CreateCategoryForm},
    entity::categories::{ActiveModel, Column, Entity as Categories},
    error::AppResult,
    models::Category,
    response::{Ack, CreateResponse},
    state::AppState,
};

pub async fn list_categories(state: &AppState) -> AppResult<CategoryList> {
    let items = Categories::find()
        .order_by_asc(Column::Id)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(Category::from)
        .collect();
    Ok(CategoryList { items })
}

/// Insert a category. The image, if any, is written before the insert and is
/// left on disk when the insert fails.
pub async fn create_category(
    state: &AppState,
    form: CreateCategoryForm,
) -> AppResult<CreateResponse> {
    let image = match &form.image {
        Some(upload) => Some(state.uploads.save(upload).await?.url),
        None => None,
    };

    let active = ActiveModel {
        id: NotSet,
        name: Set(form.name),
        image: Set(image.clone()),
    };

    match Categories::insert(active).exec(&state.orm).await {
        Ok(result) => {
            tracing::info!(id = result.last_insert_id, "category created");
            Ok(CreateResponse::created(result.last_insert_id, image))
        }
        Err(err) => {
            tracing::warn!(error = %err, "category insert rejected");
            Ok(CreateResponse::rejected(err.to_string()))
        }
    }
}

/// Delete by id. An id that does not parse as an integer cannot match a row,
/// so it is acknowledged without touching the store.
pub async fn delete_category(state: &AppState, id: &str) -> AppResult<Ack> {
    let Ok(id) = id.parse::<i64>() else {
        tracing::debug!(id, "category delete with non-numeric id");
        return Ok(Ack::ok());
    };
    let result = Categories::delete_by_id(id).exec(&state.orm).await?;
    tracing::debug!(id, rows = result.rows_affected, "category delete by id");
    Ok(Ack::ok())
}

pub async fn delete_category_by_name(state: &AppState, name: &str) -> AppResult<Ack> {
    let result = Categories::delete_many()
        .filter(Column::Name.eq(name))
        .exec(&state.orm)
        .await?;
    tracing::debug!(name, rows = result.rows_affected, "category delete by name");
    Ok(Ack::ok())
}
