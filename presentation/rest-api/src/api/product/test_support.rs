use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use mockall::mock;
use poem::middleware::Cors;
use poem::test::TestClient;
use poem::{Endpoint, Response};

use business::domain::errors::RepositoryError;
use business::domain::product::errors::ProductError;
use business::domain::product::model::{Product, ProductDraft};
use business::domain::product::repository::ProductRepository;
use business::domain::product::use_cases::create::{CreateProductParams, CreateProductUseCase};
use business::domain::product::use_cases::delete::{DeleteProductParams, DeleteProductUseCase};
use business::domain::product::use_cases::get_all::GetAllProductsUseCase;
use business::domain::product::use_cases::get_by_id::{
    GetProductByIdParams, GetProductByIdUseCase,
};
use business::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};
use business::domain::product::value_objects::ProductId;

use crate::api::health::routes::Api as HealthApi;
use crate::api::product::routes::ProductApi;
use crate::config::environment::AppEnvironment;
use crate::setup::dependency_injection::DependencyContainer;
use crate::setup::server::Server;

mock! {
    pub CreateUseCase {}

    #[async_trait]
    impl CreateProductUseCase for CreateUseCase {
        async fn execute(&self, params: CreateProductParams) -> Result<Product, ProductError>;
    }
}

mock! {
    pub GetAllUseCase {}

    #[async_trait]
    impl GetAllProductsUseCase for GetAllUseCase {
        async fn execute(&self) -> Result<Vec<Product>, ProductError>;
    }
}

mock! {
    pub GetByIdUseCase {}

    #[async_trait]
    impl GetProductByIdUseCase for GetByIdUseCase {
        async fn execute(&self, params: GetProductByIdParams) -> Result<Product, ProductError>;
    }
}

mock! {
    pub UpdateUseCase {}

    #[async_trait]
    impl UpdateProductUseCase for UpdateUseCase {
        async fn execute(&self, params: UpdateProductParams) -> Result<Product, ProductError>;
    }
}

mock! {
    pub DeleteUseCase {}

    #[async_trait]
    impl DeleteProductUseCase for DeleteUseCase {
        async fn execute(&self, params: DeleteProductParams) -> Result<Product, ProductError>;
    }
}

/// Use case mocks with no expectations: any call they receive fails the test.
#[derive(Default)]
pub struct UseCaseMocks {
    pub create: MockCreateUseCase,
    pub get_all: MockGetAllUseCase,
    pub get_by_id: MockGetByIdUseCase,
    pub update: MockUpdateUseCase,
    pub delete: MockDeleteUseCase,
}

impl UseCaseMocks {
    pub fn into_api(self, environment: AppEnvironment) -> ProductApi {
        ProductApi::new(
            Arc::new(self.create),
            Arc::new(self.get_all),
            Arc::new(self.get_by_id),
            Arc::new(self.update),
            Arc::new(self.delete),
            environment,
        )
    }

    /// Full application, middleware and error mapping included.
    pub fn into_client(
        self,
        environment: AppEnvironment,
    ) -> TestClient<impl Endpoint<Output = Response>> {
        TestClient::new(Server::endpoint(
            HealthApi::new(),
            self.into_api(environment),
            Cors::new(),
            environment,
            "http://localhost:3000",
        ))
    }
}

/// Table kept in memory, ids handed out like an identity column.
#[derive(Default)]
pub struct InMemoryProductRepository {
    rows: Mutex<(i32, BTreeMap<i32, Product>)>,
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn get_all(&self) -> Result<Vec<Product>, RepositoryError> {
        let rows = self.rows.lock().unwrap();
        Ok(rows.1.values().rev().cloned().collect())
    }

    async fn get_by_id(&self, id: ProductId) -> Result<Product, RepositoryError> {
        let rows = self.rows.lock().unwrap();
        rows.1.get(&id.value()).cloned().ok_or(RepositoryError::NotFound)
    }

    async fn exists(&self, id: ProductId) -> Result<bool, RepositoryError> {
        Ok(self.rows.lock().unwrap().1.contains_key(&id.value()))
    }

    async fn insert(&self, draft: &ProductDraft) -> Result<Product, RepositoryError> {
        let mut rows = self.rows.lock().unwrap();
        rows.0 += 1;
        let id = rows.0;
        let product = Product::from_repository(
            ProductId::from_repository(id),
            draft.name.clone(),
            draft.price.clone(),
            draft.stock,
        );
        rows.1.insert(id, product.clone());
        Ok(product)
    }

    async fn update(
        &self,
        id: ProductId,
        draft: &ProductDraft,
    ) -> Result<Product, RepositoryError> {
        let mut rows = self.rows.lock().unwrap();
        let row = rows.1.get_mut(&id.value()).ok_or(RepositoryError::NotFound)?;
        row.name = draft.name.clone();
        row.price = draft.price.clone();
        row.stock = draft.stock;
        Ok(row.clone())
    }

    async fn delete(&self, id: ProductId) -> Result<(), RepositoryError> {
        let mut rows = self.rows.lock().unwrap();
        rows.1
            .remove(&id.value())
            .map(|_| ())
            .ok_or(RepositoryError::NotFound)
    }
}

/// Full application over the real use cases and an in-memory table.
pub fn in_memory_client(environment: AppEnvironment) -> TestClient<impl Endpoint<Output = Response>> {
    TestClient::new(Server::endpoint(
        HealthApi::new(),
        DependencyContainer::product_api(
            Arc::new(InMemoryProductRepository::default()),
            environment,
        ),
        Cors::new(),
        environment,
        "http://localhost:3000",
    ))
}
