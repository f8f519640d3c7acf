//! Whole-collection mutations.
//!
//! Repositories hold their records as one list and apply these under a
//! single lock, so id assignment and order checks see a consistent view.

use super::{
    find_order_conflict, next_product_id, next_question_id, CatalogError, Product, ProductUpdate,
    Question, ValidDraft,
};
use crate::domain::foundation::{ProductId, QuestionId, Timestamp};

fn check_order(
    questions: &[Question],
    order: u32,
    excluding: Option<QuestionId>,
) -> Result<(), CatalogError> {
    match find_order_conflict(questions, order, excluding) {
        Some(existing) => Err(CatalogError::DuplicateOrder {
            order,
            existing_id: existing.id(),
            existing_text: existing.text().to_string(),
        }),
        None => Ok(()),
    }
}

/// Appends a new question with the next id.
pub fn insert_question(
    questions: &mut Vec<Question>,
    draft: ValidDraft,
    created_at: Timestamp,
) -> Result<Question, CatalogError> {
    check_order(questions, draft.order(), None)?;
    let question = Question::new(next_question_id(questions), draft, created_at);
    questions.push(question.clone());
    Ok(question)
}

/// Replaces the editable fields of question `id`.
pub fn update_question(
    questions: &mut [Question],
    id: QuestionId,
    draft: ValidDraft,
) -> Result<Question, CatalogError> {
    check_order(questions, draft.order(), Some(id))?;
    let question = questions
        .iter_mut()
        .find(|q| q.id() == id)
        .ok_or(CatalogError::QuestionNotFound(id))?;
    question.apply(draft);
    Ok(question.clone())
}

pub fn remove_question(questions: &mut Vec<Question>, id: QuestionId) -> Result<Question, CatalogError> {
    let index = questions
        .iter()
        .position(|q| q.id() == id)
        .ok_or(CatalogError::QuestionNotFound(id))?;
    Ok(questions.remove(index))
}

/// Appends a new product with the next id.
pub fn insert_product(
    products: &mut Vec<Product>,
    name: &str,
    description: &str,
    image_ref: Option<String>,
    created_at: Timestamp,
) -> Result<Product, CatalogError> {
    let product = Product::new(next_product_id(products), name, description, image_ref, created_at)?;
    products.push(product.clone());
    Ok(product)
}

pub fn update_product(
    products: &mut [Product],
    id: ProductId,
    update: ProductUpdate,
) -> Result<Product, CatalogError> {
    let product = products
        .iter_mut()
        .find(|p| p.id() == id)
        .ok_or(CatalogError::ProductNotFound(id))?;
    product.apply(update);
    Ok(product.clone())
}

pub fn remove_product(products: &mut Vec<Product>, id: ProductId) -> Result<Product, CatalogError> {
    let index = products
        .iter()
        .position(|p| p.id() == id)
        .ok_or(CatalogError::ProductNotFound(id))?;
    Ok(products.remove(index))
}
