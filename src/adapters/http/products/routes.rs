//! Route configuration for product endpoints.

use axum::routing::get;
use axum::Router;

use super::handlers::{
    create_product, delete_product, get_product, list_products, product_report, recent_products,
    update_product,
};
use crate::adapters::http::AppState;

/// Creates the product router.
///
/// Routes:
/// - `GET /api/produtos` - List products
/// - `POST /api/produtos` - Create a product (multipart)
/// - `GET /api/produtos/recentes` - Most recently created products
/// - `GET /api/produtos/relatorio` - Download the product report
/// - `GET /api/produtos/:id` - Get one product
/// - `PUT /api/produtos/:id` - Update a product (multipart)
/// - `DELETE /api/produtos/:id` - Delete a product
pub fn product_router() -> Router<AppState> {
    Router::new()
        .route("/api/produtos", get(list_products).post(create_product))
        .route("/api/produtos/recentes", get(recent_products))
        .route("/api/produtos/relatorio", get(product_report))
        .route(
            "/api/produtos/:id",
            get(get_product).put(update_product).delete(delete_product),
        )
}
