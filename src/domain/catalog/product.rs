//! Catalog product entity and the fuzzy name lookup used by recommendations.

use serde::{Deserialize, Serialize};
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use crate::domain::foundation::{ProductId, Timestamp, ValidationError};

/// A product registered by an administrator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    id: ProductId,
    name: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    image_ref: Option<String>,
    created_at: Timestamp,
}

/// Partial update; `None` or blank values keep the current field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub image_ref: Option<String>,
}

impl Product {
    /// Creates a product.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if the name is blank
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        description: impl Into<String>,
        image_ref: Option<String>,
        created_at: Timestamp,
    ) -> Result<Self, ValidationError> {
        let name = name.into().trim().to_string();
        if name.is_empty() {
            return Err(ValidationError::empty_field("nome"));
        }
        Ok(Self {
            id,
            name,
            description: description.into(),
            image_ref: image_ref.filter(|r| !r.trim().is_empty()),
            created_at,
        })
    }

    /// Applies a partial update. Blank strings never clear a field.
    pub fn apply(&mut self, update: ProductUpdate) {
        if let Some(name) = non_blank(update.name) {
            self.name = name.trim().to_string();
        }
        if let Some(description) = non_blank(update.description) {
            self.description = description;
        }
        if let Some(image_ref) = non_blank(update.image_ref) {
            self.image_ref = Some(image_ref);
        }
    }

    pub fn id(&self) -> ProductId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn image_ref(&self) -> Option<&str> {
        self.image_ref.as_deref()
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    /// Description prepared for display: escaped `\n` sequences become real
    /// line breaks, blank-line runs collapse to one break, edges are trimmed.
    pub fn display_description(&self) -> String {
        let unescaped = self.description.replace("\\n", "\n");
        let mut out = String::with_capacity(unescaped.len());
        let mut previous_newline = false;
        for c in unescaped.chars() {
            if c == '\n' {
                if previous_newline {
                    continue;
                }
                previous_newline = true;
            } else {
                previous_newline = false;
            }
            out.push(c);
        }
        out.trim().to_string()
    }

    /// Case- and accent-insensitive containment in either direction.
    pub fn matches_name(&self, candidate: &str) -> bool {
        let mine = fold_for_match(&self.name);
        let theirs = fold_for_match(candidate);
        if mine.is_empty() || theirs.is_empty() {
            return false;
        }
        mine.contains(&theirs) || theirs.contains(&mine)
    }
}

/// Folds text for fuzzy comparison: NFD, combining marks stripped, lowercased.
pub fn fold_for_match(input: &str) -> String {
    input
        .trim()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
}

/// First product whose name fuzzily matches `recommended`.
pub fn find_by_fuzzy_name<'a>(products: &'a [Product], recommended: &str) -> Option<&'a Product> {
    products.iter().find(|p| p.matches_name(recommended))
}

/// Next id to assign: one past the highest stored id.
pub fn next_product_id(products: &[Product]) -> ProductId {
    products
        .iter()
        .map(Product::id)
        .max()
        .map(|id| id.next())
        .unwrap_or_else(|| ProductId::new(1))
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
