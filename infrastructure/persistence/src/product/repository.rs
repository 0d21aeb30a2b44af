use std::sync::Arc;

use async_trait::async_trait;
use sqlx::PgPool;

use business::domain::errors::RepositoryError;
use business::domain::product::model::{Product, ProductDraft};
use business::domain::product::repository::ProductRepository;
use business::domain::product::value_objects::ProductId;

use super::entity::ProductEntity;
use crate::db::ConnectionManager;

pub struct ProductRepositoryPostgres {
    connections: Arc<ConnectionManager>,
}

impl ProductRepositoryPostgres {
    pub fn new(connections: Arc<ConnectionManager>) -> Self {
        Self { connections }
    }

    fn pool(&self) -> Result<&PgPool, RepositoryError> {
        self.connections
            .pool()
            .map_err(|err| RepositoryError::database_error(err.to_string()))
    }
}

fn database_error(err: sqlx::Error) -> RepositoryError {
    RepositoryError::database_error(err.to_string())
}

#[async_trait]
impl ProductRepository for ProductRepositoryPostgres {
    async fn get_all(&self) -> Result<Vec<Product>, RepositoryError> {
        let entities = sqlx::query_as::<_, ProductEntity>(
            "SELECT PRODUCTID AS id, PRODUCTNAME AS name, PRICE AS price, STOCK AS stock FROM PRODUCTS ORDER BY PRODUCTID DESC",
        )
        .fetch_all(self.pool()?)
        .await
        .map_err(database_error)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn get_by_id(&self, id: ProductId) -> Result<Product, RepositoryError> {
        let entity = sqlx::query_as::<_, ProductEntity>(
            "SELECT PRODUCTID AS id, PRODUCTNAME AS name, PRICE AS price, STOCK AS stock FROM PRODUCTS WHERE PRODUCTID = $1",
        )
        .bind(id.value())
        .fetch_optional(self.pool()?)
        .await
        .map_err(database_error)?
        .ok_or(RepositoryError::NotFound)?;

        Ok(entity.into_domain())
    }

    async fn exists(&self, id: ProductId) -> Result<bool, RepositoryError> {
        let found = sqlx::query_scalar::<_, i32>("SELECT PRODUCTID FROM PRODUCTS WHERE PRODUCTID = $1")
            .bind(id.value())
            .fetch_optional(self.pool()?)
            .await
            .map_err(database_error)?;

        Ok(found.is_some())
    }

    async fn insert(&self, draft: &ProductDraft) -> Result<Product, RepositoryError> {
        let entity = sqlx::query_as::<_, ProductEntity>(
            r#"INSERT INTO PRODUCTS (PRODUCTNAME, PRICE, STOCK)
            VALUES ($1, $2, $3)
            RETURNING PRODUCTID AS id, PRODUCTNAME AS name, PRICE AS price, STOCK AS stock"#,
        )
        .bind(&draft.name)
        .bind(&draft.price)
        .bind(draft.stock)
        .fetch_one(self.pool()?)
        .await
        .map_err(database_error)?;

        Ok(entity.into_domain())
    }

    async fn update(
        &self,
        id: ProductId,
        draft: &ProductDraft,
    ) -> Result<Product, RepositoryError> {
        let entity = sqlx::query_as::<_, ProductEntity>(
            r#"UPDATE PRODUCTS
            SET PRODUCTNAME = $2, PRICE = $3, STOCK = $4
            WHERE PRODUCTID = $1
            RETURNING PRODUCTID AS id, PRODUCTNAME AS name, PRICE AS price, STOCK AS stock"#,
        )
        .bind(id.value())
        .bind(&draft.name)
        .bind(&draft.price)
        .bind(draft.stock)
        .fetch_optional(self.pool()?)
        .await
        .map_err(database_error)?
        .ok_or(RepositoryError::NotFound)?;

        Ok(entity.into_domain())
    }

    async fn delete(&self, id: ProductId) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM PRODUCTS WHERE PRODUCTID = $1")
            .bind(id.value())
            .execute(self.pool()?)
            .await
            .map_err(database_error)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
