//! Product command and query handlers.

mod create_product;
mod delete_product;
mod product_queries;
mod update_product;

pub use create_product::{CreateProductCommand, CreateProductHandler, ImageUpload};
pub use delete_product::{DeleteProductCommand, DeleteProductHandler};
pub use product_queries::{
    GetProductHandler, GetProductQuery, ListProductsHandler, RecentProductsHandler,
    RecentProductsQuery, DEFAULT_RECENT_LIMIT,
};
pub use update_product::{UpdateProductCommand, UpdateProductHandler};
