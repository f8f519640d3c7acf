//! HTTP adapter for product endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{ProductForm, ProductListPayload, ProductPayload, ProductResponse, RecentProductsParams};
pub use routes::product_router;
