use bigdecimal::BigDecimal;
use serde_json::Value;

use super::errors::ProductError;
use super::validation::parse_product;
use super::value_objects::ProductId;

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: BigDecimal,
    pub stock: i32,
}

impl Product {
    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(id: ProductId, name: String, price: BigDecimal, stock: i32) -> Self {
        Self {
            id,
            name,
            price,
            stock,
        }
    }
}

/// Raw product fields exactly as they arrived in a request body.
///
/// Values stay untyped until a use case turns them into a [`ProductDraft`]
/// right before writing to the store.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductInput {
    pub name: Option<Value>,
    pub price: Option<Value>,
    pub stock: Option<Value>,
}

/// Validated and coerced product fields, ready to be inserted or applied.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductDraft {
    pub name: String,
    pub price: BigDecimal,
    pub stock: i32,
}

impl ProductDraft {
    /// Validates every field and coerces it: trimmed name, price rounded to
    /// two fraction digits, integer stock. All failures are reported together.
    pub fn parse(input: &ProductInput) -> Result<Self, ProductError> {
        parse_product(
            input.name.as_ref(),
            input.price.as_ref(),
            input.stock.as_ref(),
        )
        .map(|(name, price, stock)| Self { name, price, stock })
        .map_err(ProductError::Validation)
    }
}
