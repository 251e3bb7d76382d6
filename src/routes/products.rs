use axum::{
    Json, Router,
    extract::{Multipart, Path, Query, State},
    routing::{delete, get},
};

use crate::{
    dto::products::{CreateProductForm, ProductList, ProductQuery},
    error::AppResult,
    response::{Ack, CreateResponse, ErrorBody},
    routes::form::MultipartForm,
    services::product_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_products).post(create_product))
        .route("/{id}", delete(delete_product))
        .route("/by-name/{name}", delete(delete_product_by_name))
}

#[utoipa::path(
    get,
    path = "/products",
    params(ProductQuery),
    responses(
        (status = 200, description = "Products, optionally filtered by category", body = ProductList),
        (status = 500, description = "Store failure", body = ErrorBody),
    ),
    tag = "Products"
)]
pub async fn list_products(
    State(state): State<AppState>,
    Query(query): Query<ProductQuery>,
) -> AppResult<Json<ProductList>> {
    let resp = product_service::list_products(&state, query).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/products",
    request_body(content = CreateProductForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Created, or rejected with success=false", body = CreateResponse),
    ),
    tag = "Products"
)]
pub async fn create_product(
    State(state): State<AppState>,
    multipart: Multipart,
) -> AppResult<Json<CreateResponse>> {
    let form = MultipartForm::parse(multipart).await?;
    let resp = product_service::create_product(&state, form.into()).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    delete,
    path = "/products/{id}",
    params(
        ("id" = String, Path, description = "Product ID; anything that is not an integer matches nothing")
    ),
    responses(
        (status = 200, description = "Deleted (also when nothing matched)", body = Ack),
    ),
    tag = "Products"
)]
pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Ack>> {
    let resp = product_service::delete_product(&state, &id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    delete,
    path = "/products/by-name/{name}",
    params(
        ("name" = String, Path, description = "Product name")
    ),
    responses(
        (status = 200, description = "Deleted (also when nothing matched)", body = Ack),
    ),
    tag = "Products"
)]
pub async fn delete_product_by_name(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> AppResult<Json<Ack>> {
    let resp = product_service::delete_product_by_name(&state, &name).await?;
    Ok(Json(resp))
}
