pub mod category_service;
pub mod order_service;
pub mod product_service;
pub mod status_service;
