use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::{Product, ProductDraft};
use super::value_objects::ProductId;

#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// All products, newest id first.
    async fn get_all(&self) -> Result<Vec<Product>, RepositoryError>;
    async fn get_by_id(&self, id: ProductId) -> Result<Product, RepositoryError>;
    async fn exists(&self, id: ProductId) -> Result<bool, RepositoryError>;
    /// Inserts the draft and returns the stored row, including its new id.
    async fn insert(&self, draft: &ProductDraft) -> Result<Product, RepositoryError>;
    /// Overwrites name, price and stock. `RepositoryError::NotFound` when no
    /// row was touched.
    async fn update(&self, id: ProductId, draft: &ProductDraft)
    -> Result<Product, RepositoryError>;
    /// `RepositoryError::NotFound` when no row was removed.
    async fn delete(&self, id: ProductId) -> Result<(), RepositoryError>;
}
