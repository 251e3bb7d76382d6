use axum::{
    Json, Router,
    extract::{Multipart, Path, State},
    routing::{delete, get},
};

use crate::{
    dto::categories::{CategoryList, CreateCategoryForm},
    error::AppResult,
    response::{Ack, CreateResponse, ErrorBody},
    routes::form::MultipartForm,
    services::category_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_categories).post(create_category))
        .route("/{id}", delete(delete_category))
        .route("/by-name/{name}", delete(delete_category_by_name))
}

#[utoipa::path(
    get,
    path = "/categories",
    responses(
        (status = 200, description = "All categories", body = CategoryList),
        (status = 500, description = "Store failure", body = ErrorBody),
    ),
    tag = "Categories"
)]
pub async fn list_categories(State(state): State<AppState>) -> AppResult<Json<CategoryList>> {
    let resp = category_service::list_categories(&state).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/categories",
    request_body(content = CreateCategoryForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Created, or rejected with success=false (e.g. duplicate name)", body = CreateResponse),
    ),
    tag = "Categories"
)]
pub async fn create_category(
    State(state): State<AppState>,
    multipart: Multipart,
) -> AppResult<Json<CreateResponse>> {
    let form = MultipartForm::parse(multipart).await?;
    let resp = category_service::create_category(&state, form.into()).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    delete,
    path = "/categories/{id}",
    params(
        ("id" = String, Path, description = "Category ID; anything that is not an integer matches nothing")
    ),
    responses(
        (status = 200, description = "Deleted (also when nothing matched)", body = Ack),
    ),
    tag = "Categories"
)]
pub async fn delete_category(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Ack>> {
    let resp = category_service::delete_category(&state, &id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    delete,
    path = "/categories/by-name/{name}",
    params(
        ("name" = String, Path, description = "Category name")
    ),
    responses(
        (status = 200, description = "Deleted (also when nothing matched)", body = Ack),
    ),
    tag = "Categories"
)]
pub async fn delete_category_by_name(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> AppResult<Json<Ack>> {
    let resp = category_service::delete_category_by_name(&state, &name).await?;
    Ok(Json(resp))
}
