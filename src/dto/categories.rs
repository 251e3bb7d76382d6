use serde::Serialize;
use utoipa::ToSchema;

use crate::models::Category;
use crate::storage::ImageUpload;

/// Multipart body of `POST /categories`.
#[derive(Debug, ToSchema)]
pub struct CreateCategoryForm {
    pub name: Option<String>,
    #[schema(value_type = Option<String>, format = Binary)]
    pub image: Option<ImageUpload>,
}

#[derive(Serialize, ToSchema)]
#[serde(transparent)]
pub struct CategoryList {
    #[schema(value_type = Vec<Category>)]
    pub items: Vec<Category>,
}
