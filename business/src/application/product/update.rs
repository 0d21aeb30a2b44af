use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::{Product, ProductDraft};
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};

pub struct UpdateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateProductUseCase for UpdateProductUseCaseImpl {
    async fn execute(&self, params: UpdateProductParams) -> Result<Product, ProductError> {
        let draft = ProductDraft::parse(&params.input).inspect_err(|err| {
            self.logger
                .warn(&format!("Rejected update for product {}: {}", params.id, err));
        })?;

        self.logger
            .info(&format!("Updating product: {}", params.id));

        // Verify product exists
        if !self.repository.exists(params.id).await? {
            return Err(ProductError::NotFound);
        }

        // A concurrent delete between the check and the update still yields NotFound.
        let product = self
            .repository
            .update(params.id, &draft)
            .await
            .map_err(ProductError::from_lookup)?;

        self.logger
            .info(&format!("Product updated: {}", params.id));
        Ok(product)
    }
}
