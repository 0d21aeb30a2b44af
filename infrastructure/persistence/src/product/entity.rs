use bigdecimal::BigDecimal;
use sqlx::FromRow;

use business::domain::product::model::Product;
use business::domain::product::value_objects::ProductId;

/// Row of the `PRODUCTS` table. Queries alias the upper-case columns to
/// these field names.
#[derive(Debug, FromRow)]
pub struct ProductEntity {
    pub id: i32,
    pub name: String,
    pub price: BigDecimal,
    pub stock: i32,
}

impl ProductEntity {
    pub fn into_domain(self) -> Product {
        Product::from_repository(
            ProductId::from_repository(self.id),
            self.name,
            self.price,
            self.stock,
        )
    }
}
