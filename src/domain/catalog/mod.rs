//! Catalog domain module.
//!
//! Questions of the recommendation chat and the products they can lead to.
//! Both are plain entities; persistence lives behind the repository ports.

mod collection;
mod errors;
mod ordering;
mod product;
mod question;

pub use collection::{
    insert_product, insert_question, remove_product, remove_question, update_product,
    update_question,
};
pub use errors::CatalogError;
pub use ordering::{find_order_conflict, next_free_order, next_question_id, sort_by_order};
pub use product::{find_by_fuzzy_name, fold_for_match, next_product_id, Product, ProductUpdate};
pub use question::{Question, QuestionDraft, QuestionKind, ValidDraft, MAX_TEXT_LENGTH};
