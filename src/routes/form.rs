use axum::extract::Multipart;
use std::collections::HashMap;

use crate::{
    dto::{categories::CreateCategoryForm, products::CreateProductForm},
    error::AppResult,
    storage::ImageUpload,
};

/// Form field that carries the uploaded file.
pub const IMAGE_FIELD: &str = "image";

/// Text fields and the optional image of a multipart create request.
#[derive(Debug, Default)]
pub struct MultipartForm {
    fields: HashMap<String, String>,
    image: Option<ImageUpload>,
}

impl MultipartForm {
    pub async fn parse(mut multipart: Multipart) -> AppResult<Self> {
        let mut form = MultipartForm::default();

        while let Some(field) = multipart.next_field().await? {
            let name = field.name().map(str::to_owned).unwrap_or_default();

            if name == IMAGE_FIELD {
                if let Some(original_filename) = field.file_name().map(str::to_owned) {
                    let bytes = field.bytes().await?;
                    // browsers send an empty part when no file was picked
                    if original_filename.is_empty() && bytes.is_empty() {
                        continue;
                    }
                    form.image = Some(ImageUpload {
                        original_filename,
                        bytes: bytes.to_vec(),
                    });
                    continue;
                }
            }

            if field.file_name().is_some() {
                continue;
            }
            let value = field.text().await?;
            form.fields.insert(name, value);
        }

        Ok(form)
    }

    pub fn text(&self, name: &str) -> Option<String> {
        self.fields.get(name).cloned()
    }
}

impl From<MultipartForm> for CreateCategoryForm {
    fn from(form: MultipartForm) -> Self {
        Self {
            name: form.text("name"),
            image: form.image,
        }
    }
}

impl From<MultipartForm> for CreateProductForm {
    fn from(form: MultipartForm) -> Self {
        Self {
            name: form.text("name"),
            description: form.text("description"),
            price: form
                .text("price")
                .and_then(|price| price.trim().parse::<i64>().ok()),
            category: form.text("category"),
            image: form.image,
        }
    }
}
