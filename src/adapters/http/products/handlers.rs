//! HTTP handlers for product endpoints.

use axum::{
    extract::{Multipart, Path, Query, State},
    http::StatusCode,
    response::Response,
};

use super::dto::{ProductForm, ProductListPayload, ProductPayload, RecentProductsParams};
use crate::adapters::http::envelope::{invalid_id, Envelope, ErrorResponse};
use crate::adapters::http::questions::handle_catalog_error;
use crate::adapters::http::report_attachment;
use crate::adapters::http::AppState;
use crate::application::{
    CreateProductCommand, DeleteProductCommand, GetProductQuery, RecentProductsQuery,
    UpdateProductCommand,
};
use crate::domain::foundation::ProductId;

fn bad_form(reason: String) -> Response {
    ErrorResponse::bad_request(format!("Formulário inválido: {}", reason))
        .into_response_with(StatusCode::BAD_REQUEST)
}

/// GET /api/produtos
pub async fn list_products(State(state): State<AppState>) -> Response {
    match state.list_products_handler().handle().await {
        Ok(products) => {
            Envelope::ok(ProductListPayload::from(products)).into_response_with(StatusCode::OK)
        }
        Err(e) => handle_catalog_error(e),
    }
}

/// GET /api/produtos/recentes?limite=N - Newest first
pub async fn recent_products(
    State(state): State<AppState>,
    Query(params): Query<RecentProductsParams>,
) -> Response {
    let query = params
        .limite
        .map(|limit| RecentProductsQuery { limit })
        .unwrap_or_default();

    match state.recent_products_handler().handle(query).await {
        Ok(products) => {
            Envelope::ok(ProductListPayload::from(products)).into_response_with(StatusCode::OK)
        }
        Err(e) => handle_catalog_error(e),
    }
}

/// GET /api/produtos/:id
pub async fn get_product(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let Ok(id) = id.parse::<ProductId>() else {
        return invalid_id("product");
    };

    match state.get_product_handler().handle(GetProductQuery { id }).await {
        Ok(product) => {
            Envelope::ok(ProductPayload::from(&product)).into_response_with(StatusCode::OK)
        }
        Err(e) => handle_catalog_error(e),
    }
}

/// POST /api/produtos - multipart `nome`, `descricao`, optional file `imagem`
pub async fn create_product(State(state): State<AppState>, multipart: Multipart) -> Response {
    let form = match ProductForm::read(multipart).await {
        Ok(form) => form,
        Err(reason) => return bad_form(reason),
    };

    let cmd = CreateProductCommand {
        name: form.nome.unwrap_or_default(),
        description: form.descricao.unwrap_or_default(),
        image: form.imagem,
    };

    match state.create_product_handler().handle(cmd).await {
        Ok(product) => Envelope::ok(ProductPayload::from(&product))
            .with_message("Produto cadastrado com sucesso!")
            .into_response_with(StatusCode::CREATED),
        Err(e) => handle_catalog_error(e),
    }
}

/// PUT /api/produtos/:id - blank fields keep their current value
pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
    multipart: Multipart,
) -> Response {
    let Ok(id) = id.parse::<ProductId>() else {
        return invalid_id("product");
    };
    let form = match ProductForm::read(multipart).await {
        Ok(form) => form,
        Err(reason) => return bad_form(reason),
    };

    let cmd = UpdateProductCommand {
        id,
        name: form.nome,
        description: form.descricao,
        image: form.imagem,
    };

    match state.update_product_handler().handle(cmd).await {
        Ok(product) => Envelope::ok(ProductPayload::from(&product))
            .with_message("Produto atualizado com sucesso!")
            .into_response_with(StatusCode::OK),
        Err(e) => handle_catalog_error(e),
    }
}

/// DELETE /api/produtos/:id
pub async fn delete_product(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let Ok(id) = id.parse::<ProductId>() else {
        return invalid_id("product");
    };

    match state
        .delete_product_handler()
        .handle(DeleteProductCommand { id })
        .await
    {
        Ok(product) => Envelope::ok(ProductPayload::from(&product))
            .with_message("Produto excluído com sucesso!")
            .into_response_with(StatusCode::OK),
        Err(e) => handle_catalog_error(e),
    }
}

/// GET /api/produtos/relatorio - Plain-text report download
pub async fn product_report(State(state): State<AppState>) -> Response {
    match state.product_report_handler().handle().await {
        Ok(report) => report_attachment(report),
        Err(e) => handle_catalog_error(e),
    }
}
