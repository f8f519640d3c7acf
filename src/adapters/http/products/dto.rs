//! Wire types for the product endpoints.

use axum::extract::Multipart;
use serde::{Deserialize, Serialize};

use crate::application::ImageUpload;
use crate::domain::catalog::Product;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductResponse {
    pub id: u64,
    pub nome: String,
    pub descricao: String,
    pub imagem: Option<String>,
    pub data_cadastro: String,
}

impl From<&Product> for ProductResponse {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id().value(),
            nome: product.name().to_string(),
            descricao: product.description().to_string(),
            imagem: product.image_ref().map(str::to_string),
            data_cadastro: product.created_at().to_rfc3339(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ProductListPayload {
    pub total: usize,
    pub produtos: Vec<ProductResponse>,
}

impl From<Vec<Product>> for ProductListPayload {
    fn from(products: Vec<Product>) -> Self {
        let produtos: Vec<ProductResponse> = products.iter().map(Into::into).collect();
        Self {
            total: produtos.len(),
            produtos,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ProductPayload {
    pub produto: ProductResponse,
}

impl From<&Product> for ProductPayload {
    fn from(product: &Product) -> Self {
        Self {
            produto: product.into(),
        }
    }
}

/// Query string of `GET /api/produtos/recentes`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RecentProductsParams {
    pub limite: Option<usize>,
}

/// Fields of the multipart product form.
///
/// An `imagem` part without a file name or without content counts as no
/// image.
#[derive(Debug, Default)]
pub struct ProductForm {
    pub nome: Option<String>,
    pub descricao: Option<String>,
    pub imagem: Option<ImageUpload>,
}

impl ProductForm {
    pub async fn read(mut multipart: Multipart) -> Result<Self, String> {
        let mut form = ProductForm::default();

        while let Some(field) = multipart.next_field().await.map_err(|e| e.body_text())? {
            let name = field.name().unwrap_or_default().to_string();
            match name.as_str() {
                "nome" => form.nome = Some(field.text().await.map_err(|e| e.body_text())?),
                "descricao" => {
                    form.descricao = Some(field.text().await.map_err(|e| e.body_text())?)
                }
                "imagem" => {
                    let file_name = field.file_name().unwrap_or_default().to_string();
                    let bytes = field.bytes().await.map_err(|e| e.body_text())?;
                    if !file_name.is_empty() && !bytes.is_empty() {
                        form.imagem = Some(ImageUpload {
                            file_name,
                            bytes: bytes.to_vec(),
                        });
                    }
                }
                other => tracing::debug!(field = other, "ignoring unknown form field"),
            }
        }

        Ok(form)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{ProductId, Timestamp};

    #[test]
    fn response_uses_wire_names() {
        let product = Product::new(
            ProductId::new(2),
            "Cafeteira",
            "Prepara 12 xícaras",
            Some("/uploads/1-a.png".to_string()),
            Timestamp::now(),
        )
        .unwrap();

        let value = serde_json::to_value(ProductResponse::from(&product)).unwrap();
        assert_eq!(value["id"], 2);
        assert_eq!(value["nome"], "Cafeteira");
        assert_eq!(value["descricao"], "Prepara 12 xícaras");
        assert_eq!(value["imagem"], "/uploads/1-a.png");
        assert!(value["dataCadastro"].is_string());
    }

    #[test]
    fn list_payload_counts_products() {
        let product =
            Product::new(ProductId::new(1), "A", "", None, Timestamp::now()).unwrap();
        let payload = ProductListPayload::from(vec![product]);
        assert_eq!(payload.total, 1);
        assert!(payload.produtos[0].imagem.is_none());
    }
}
