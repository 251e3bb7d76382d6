use sea_orm::ActiveValue::NotSet;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

use crate::{
    dto::products::{CreateProductForm, ProductList, ProductQuery},
    entity::products::{ActiveModel, Column, Entity as Products},
    error::AppResult,
    models::Product,
    response::{Ack, CreateResponse},
    state::AppState,
};

pub async fn list_products(state: &AppState, query: ProductQuery) -> AppResult<ProductList> {
    let mut finder = Products::find();
    if let Some(category) = query.category.filter(|c| !c.is_empty()) {
        finder = finder.filter(Column::Category.eq(category));
    }

    let items = finder
        .order_by_asc(Column::Id)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(Product::from)
        .collect();
    Ok(ProductList { items })
}

pub async fn create_product(state: &AppState, form: CreateProductForm) -> AppResult<CreateResponse> {
    let image = match &form.image {
        Some(upload) => Some(state.uploads.save(upload).await?.url),
        None => None,
    };

    let active = ActiveModel {
        id: NotSet,
        name: Set(form.name),
        description: Set(form.description),
        price: Set(form.price),
        image: Set(image.clone()),
        category: Set(form.category),
    };

    match Products::insert(active).exec(&state.orm).await {
        Ok(result) => {
            tracing::info!(id = result.last_insert_id, "product created");
            Ok(CreateResponse::created(result.last_insert_id, image))
        }
        Err(err) => {
            tracing::warn!(error = %err, "product insert rejected");
            Ok(CreateResponse::rejected(err.to_string()))
        }
    }
}

/// Delete by id. An id that does not parse as an integer cannot match a row,
/// so it is acknowledged without touching the store.
pub async fn delete_product(state: &AppState, id: &str) -> AppResult<Ack> {
    let Ok(id) = id.parse::<i64>() else {
        tracing::debug!(id, "product delete with non-numeric id");
        return Ok(Ack::ok());
    };
    let result = Products::delete_by_id(id).exec(&state.orm).await?;
    tracing::debug!(id, rows = result.rows_affected, "product delete by id");
    Ok(Ack::ok())
}

pub async fn delete_product_by_name(state: &AppState, name: &str) -> AppResult<Ack> {
    let result = Products::delete_many()
        .filter(Column::Name.eq(name))
        .exec(&state.orm)
        .await?;
    tracing::debug!(name, rows = result.rows_affected, "product delete by name");
    Ok(Ack::ok())
}
