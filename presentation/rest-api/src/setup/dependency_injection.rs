use std::sync::Arc;

use logger::TracingLogger;
use persistence::db::ConnectionManager;
use persistence::product::repository::ProductRepositoryPostgres;

use business::application::product::create::CreateProductUseCaseImpl;
use business::application::product::delete::DeleteProductUseCaseImpl;
use business::application::product::get_all::GetAllProductsUseCaseImpl;
use business::application::product::get_by_id::GetProductByIdUseCaseImpl;
use business::application::product::update::UpdateProductUseCaseImpl;
use business::domain::product::repository::ProductRepository;

use crate::api::health::routes::Api as HealthApi;
use crate::api::product::routes::ProductApi;
use crate::config::environment::AppEnvironment;

pub struct DependencyContainer {
    pub health_api: HealthApi,
    pub product_api: ProductApi,
    pub connections: Arc<ConnectionManager>,
}

impl DependencyContainer {
    pub fn new(connections: Arc<ConnectionManager>, environment: AppEnvironment) -> Self {
        // Infrastructure adapters
        let product_repository = Arc::new(ProductRepositoryPostgres::new(connections.clone()));

        Self {
            health_api: HealthApi::new(),
            product_api: Self::product_api(product_repository, environment),
            connections,
        }
    }

    /// Wires the product use cases around any repository implementation.
    pub fn product_api(
        product_repository: Arc<dyn ProductRepository>,
        environment: AppEnvironment,
    ) -> ProductApi {
        let logger = Arc::new(TracingLogger);

        let create_use_case = Arc::new(CreateProductUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let get_all_use_case = Arc::new(GetAllProductsUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let get_by_id_use_case = Arc::new(GetProductByIdUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let update_use_case = Arc::new(UpdateProductUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let delete_use_case = Arc::new(DeleteProductUseCaseImpl {
            repository: product_repository,
            logger,
        });

        ProductApi::new(
            create_use_case,
            get_all_use_case,
            get_by_id_use_case,
            update_use_case,
            delete_use_case,
            environment,
        )
    }
}
