use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};

use business::domain::product::use_cases::create::{CreateProductParams, CreateProductUseCase};
use business::domain::product::use_cases::delete::{DeleteProductParams, DeleteProductUseCase};
use business::domain::product::use_cases::get_all::GetAllProductsUseCase;
use business::domain::product::use_cases::get_by_id::{
    GetProductByIdParams, GetProductByIdUseCase,
};
use business::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};
use business::domain::product::value_objects::ProductId;

use crate::api::error::{ErrorEnvelope, IntoErrorResponse};
use crate::api::product::dto::{ProductBody, ProductEnvelope, ProductListEnvelope};
use crate::api::tags::ApiTags;
use crate::config::environment::AppEnvironment;

pub struct ProductApi {
    create_use_case: Arc<dyn CreateProductUseCase>,
    get_all_use_case: Arc<dyn GetAllProductsUseCase>,
    get_by_id_use_case: Arc<dyn GetProductByIdUseCase>,
    update_use_case: Arc<dyn UpdateProductUseCase>,
    delete_use_case: Arc<dyn DeleteProductUseCase>,
    environment: AppEnvironment,
}

impl ProductApi {
    pub fn new(
        create_use_case: Arc<dyn CreateProductUseCase>,
        get_all_use_case: Arc<dyn GetAllProductsUseCase>,
        get_by_id_use_case: Arc<dyn GetProductByIdUseCase>,
        update_use_case: Arc<dyn UpdateProductUseCase>,
        delete_use_case: Arc<dyn DeleteProductUseCase>,
        environment: AppEnvironment,
    ) -> Self {
        Self {
            create_use_case,
            get_all_use_case,
            get_by_id_use_case,
            update_use_case,
            delete_use_case,
            environment,
        }
    }

    fn parse_id(&self, raw: &str) -> Result<ProductId, Json<ErrorEnvelope>> {
        raw.parse::<ProductId>().map_err(|err| {
            let (_, json) = err.into_error_response(self.environment);
            json
        })
    }
}

/// Product management API
///
/// Endpoints for creating, reading, updating, and deleting products.
#[OpenApi]
impl ProductApi {
    /// List all products
    ///
    /// Returns every product, newest id first.
    #[oai(path = "/products", method = "get", tag = "ApiTags::Products")]
    async fn get_all_products(&self) -> GetAllProductsResponse {
        match self.get_all_use_case.execute().await {
            Ok(products) => GetAllProductsResponse::Ok(Json(ProductListEnvelope::new(
                products,
                "Products retrieved successfully",
            ))),
            Err(err) => {
                let (_status, json) = err.into_error_response(self.environment);
                GetAllProductsResponse::InternalError(json)
            }
        }
    }

    /// Get a product by ID
    #[oai(path = "/products/:id", method = "get", tag = "ApiTags::Products")]
    async fn get_product_by_id(&self, id: Path<String>) -> GetProductByIdResponse {
        let id = match self.parse_id(&id.0) {
            Ok(id) => id,
            Err(json) => return GetProductByIdResponse::BadRequest(json),
        };

        match self
            .get_by_id_use_case
            .execute(GetProductByIdParams { id })
            .await
        {
            Ok(product) => GetProductByIdResponse::Ok(Json(ProductEnvelope::new(
                product,
                "Product retrieved successfully",
            ))),
            Err(err) => {
                let (status, json) = err.into_error_response(self.environment);
                match status.as_u16() {
                    404 => GetProductByIdResponse::NotFound(json),
                    _ => GetProductByIdResponse::InternalError(json),
                }
            }
        }
    }

    /// Create a new product
    ///
    /// Accepts a JSON or url-encoded body with `productName`, `price` and
    /// `stock`. Responds with the stored row, including its new id.
    #[oai(path = "/products", method = "post", tag = "ApiTags::Products")]
    async fn create_product(&self, body: ProductBody) -> poem::Result<CreateProductResponse> {
        let params = CreateProductParams {
            input: body.into_input()?,
        };

        Ok(match self.create_use_case.execute(params).await {
            Ok(product) => CreateProductResponse::Created(Json(ProductEnvelope::new(
                product,
                "Product created successfully",
            ))),
            Err(err) => {
                let (status, json) = err.into_error_response(self.environment);
                match status.as_u16() {
                    400 => CreateProductResponse::BadRequest(json),
                    _ => CreateProductResponse::InternalError(json),
                }
            }
        })
    }

    /// Update a product
    ///
    /// Replaces name, price and stock of an existing product.
    #[oai(path = "/products/:id", method = "put", tag = "ApiTags::Products")]
    async fn update_product(
        &self,
        id: Path<String>,
        body: ProductBody,
    ) -> poem::Result<UpdateProductResponse> {
        let id = match self.parse_id(&id.0) {
            Ok(id) => id,
            Err(json) => return Ok(UpdateProductResponse::BadRequest(json)),
        };

        let params = UpdateProductParams {
            id,
            input: body.into_input()?,
        };

        Ok(match self.update_use_case.execute(params).await {
            Ok(product) => UpdateProductResponse::Ok(Json(ProductEnvelope::new(
                product,
                "Product updated successfully",
            ))),
            Err(err) => {
                let (status, json) = err.into_error_response(self.environment);
                match status.as_u16() {
                    400 => UpdateProductResponse::BadRequest(json),
                    404 => UpdateProductResponse::NotFound(json),
                    _ => UpdateProductResponse::InternalError(json),
                }
            }
        })
    }

    /// Delete a product
    ///
    /// Permanently removes a product and returns it as it was before removal.
    #[oai(path = "/products/:id", method = "delete", tag = "ApiTags::Products")]
    async fn delete_product(&self, id: Path<String>) -> DeleteProductResponse {
        let id = match self.parse_id(&id.0) {
            Ok(id) => id,
            Err(json) => return DeleteProductResponse::BadRequest(json),
        };

        match self
            .delete_use_case
            .execute(DeleteProductParams { id })
            .await
        {
            Ok(product) => DeleteProductResponse::Ok(Json(ProductEnvelope::new(
                product,
                "Product deleted successfully",
            ))),
            Err(err) => {
                let (status, json) = err.into_error_response(self.environment);
                match status.as_u16() {
                    404 => DeleteProductResponse::NotFound(json),
                    _ => DeleteProductResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetAllProductsResponse {
    #[oai(status = 200)]
    Ok(Json<ProductListEnvelope>),
    #[oai(status = 500)]
    InternalError(Json<ErrorEnvelope>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetProductByIdResponse {
    #[oai(status = 200)]
    Ok(Json<ProductEnvelope>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorEnvelope>),
    #[oai(status = 404)]
    NotFound(Json<ErrorEnvelope>),
    #[oai(status = 500)]
    InternalError(Json<ErrorEnvelope>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum CreateProductResponse {
    #[oai(status = 201)]
    Created(Json<ProductEnvelope>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorEnvelope>),
    #[oai(status = 500)]
    InternalError(Json<ErrorEnvelope>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum UpdateProductResponse {
    #[oai(status = 200)]
    Ok(Json<ProductEnvelope>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorEnvelope>),
    #[oai(status = 404)]
    NotFound(Json<ErrorEnvelope>),
    #[oai(status = 500)]
    InternalError(Json<ErrorEnvelope>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum DeleteProductResponse {
    #[oai(status = 200)]
    Ok(Json<ProductEnvelope>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorEnvelope>),
    #[oai(status = 404)]
    NotFound(Json<ErrorEnvelope>),
    #[oai(status = 500)]
    InternalError(Json<ErrorEnvelope>),
}
