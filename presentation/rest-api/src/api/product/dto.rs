use bigdecimal::ToPrimitive;
use poem::{Request, RequestBody};
use poem_openapi::registry::{MetaRequest, Registry};
use poem_openapi::{
    ApiExtractor, ApiExtractorType, ApiRequest, ExtractParamOptions, Object, payload::Form,
    payload::Json,
};
use serde::Deserialize;
use serde_json::Value;

use business::domain::product::model::{Product, ProductInput};

/// Body of create and update requests.
///
/// Fields are kept untyped so that wrong types come back as itemized
/// validation errors instead of a generic parse failure.
#[derive(Debug, Clone, Default, Object, Deserialize)]
pub struct ProductRequest {
    /// Product name (1 to 100 characters after trimming)
    #[oai(rename = "productName")]
    #[serde(rename = "productName")]
    pub product_name: Option<Value>,
    /// Unit price, strictly positive, rounded to 2 decimals
    pub price: Option<Value>,
    /// Units in stock, non-negative integer
    pub stock: Option<Value>,
}

impl From<ProductRequest> for ProductInput {
    fn from(request: ProductRequest) -> Self {
        Self {
            name: request.product_name,
            price: request.price,
            stock: request.stock,
        }
    }
}

#[derive(Debug, ApiRequest)]
pub enum ProductPayload {
    Json(Json<ProductRequest>),
    Form(Form<ProductRequest>),
}

impl From<ProductPayload> for ProductInput {
    fn from(payload: ProductPayload) -> Self {
        match payload {
            ProductPayload::Json(body) => body.0.into(),
            ProductPayload::Form(body) => body.0.into(),
        }
    }
}

/// Body of create and update, parsed before the handler runs but reported
/// only when the handler asks for it, so path checks come first.
///
/// A request without a content type carries no fields at all.
pub struct ProductBody(poem::Result<ProductInput>);

impl ProductBody {
    pub fn into_input(self) -> poem::Result<ProductInput> {
        self.0
    }
}

impl<'a> ApiExtractor<'a> for ProductBody {
    const TYPES: &'static [ApiExtractorType] = &[ApiExtractorType::RequestObject];

    type ParamType = ();
    type ParamRawType = ();

    fn register(registry: &mut Registry) {
        <ProductPayload as ApiExtractor>::register(registry);
    }

    fn request_meta() -> Option<MetaRequest> {
        <ProductPayload as ApiExtractor>::request_meta().map(|meta| MetaRequest {
            required: false,
            ..meta
        })
    }

    async fn from_request(
        request: &'a Request,
        body: &mut RequestBody,
        _param_opts: ExtractParamOptions<Self::ParamType>,
    ) -> poem::Result<Self> {
        if request.content_type().is_none() {
            return Ok(Self(Ok(ProductInput::default())));
        }
        let parsed = <ProductPayload as ApiExtractor>::from_request(
            request,
            body,
            ExtractParamOptions::default(),
        )
        .await;
        Ok(Self(parsed.map(ProductInput::from)))
    }
}

/// A stored product, keyed by the table's column names.
#[derive(Debug, Clone, Object)]
pub struct ProductResponse {
    #[oai(rename = "PRODUCTID")]
    pub id: i32,
    #[oai(rename = "PRODUCTNAME")]
    pub name: String,
    #[oai(rename = "PRICE")]
    pub price: f64,
    #[oai(rename = "STOCK")]
    pub stock: i32,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id.value(),
            name: product.name,
            price: product.price.to_f64().unwrap_or_default(),
            stock: product.stock,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct ProductEnvelope {
    pub success: bool,
    pub data: ProductResponse,
    pub message: String,
}

impl ProductEnvelope {
    pub fn new(product: Product, message: &str) -> Self {
        Self {
            success: true,
            data: product.into(),
            message: message.to_string(),
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct ProductListEnvelope {
    pub success: bool,
    pub data: Vec<ProductResponse>,
    pub message: String,
}

impl ProductListEnvelope {
    pub fn new(products: Vec<Product>, message: &str) -> Self {
        Self {
            success: true,
            data: products.into_iter().map(|p| p.into()).collect(),
            message: message.to_string(),
        }
    }
}
