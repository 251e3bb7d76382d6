use utoipa::{OpenApi, openapi::OpenApi as OpenApiSpec};
use utoipa_scalar::{Scalar, Servable};

use crate::{
    dto::{
        categories::{CategoryList, CreateCategoryForm},
        orders::{CreateOrderRequest, OrderCreated, OrderList},
        products::{CreateProductForm, ProductList, ProductQuery},
        status::{SetStatusRequest, StatusResponse},
    },
    models::{Category, Order, Product},
    response::{Ack, CreateResponse, ErrorBody},
    routes::{categories, health, orders, products, status},
};

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        categories::list_categories,
        categories::create_category,
        categories::delete_category,
        categories::delete_category_by_name,
        products::list_products,
        products::create_product,
        products::delete_product,
        products::delete_product_by_name,
        orders::list_orders,
        orders::create_order,
        status::get_leave_status,
        status::set_leave_status
    ),
    components(
        schemas(
            Category,
            Product,
            Order,
            CategoryList,
            ProductList,
            OrderList,
            CreateCategoryForm,
            CreateProductForm,
            ProductQuery,
            CreateOrderRequest,
            OrderCreated,
            SetStatusRequest,
            StatusResponse,
            health::HealthData,
            Ack,
            CreateResponse,
            ErrorBody
        )
    ),
    tags(
        (name = "Health", description = "Health check endpoint"),
        (name = "Categories", description = "Category endpoints"),
        (name = "Products", description = "Product endpoints"),
        (name = "Orders", description = "Order endpoints"),
        (name = "Status", description = "Leave status flag"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
