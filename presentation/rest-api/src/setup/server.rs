use std::time::Duration;

use poem::{
    Endpoint, EndpointExt, Response, Route, Server as PoemServer, listener::TcpListener,
    middleware::{Cors, Tracing},
};
use poem_openapi::OpenApiService;
use tracing::{error, info};

use crate::api::error::error_response;
use crate::api::health::routes::Api as HealthApi;
use crate::api::product::routes::ProductApi;
use crate::config::{app_config::AppConfig, environment::AppEnvironment};
use crate::setup::dependency_injection::DependencyContainer;

pub struct Server;

impl Server {
    /// Assembles the HTTP application.
    ///
    /// Middleware runs CORS first, then request tracing, then dispatch.
    /// Anything dispatch cannot answer (unknown route, unreadable body,
    /// unexpected failure) goes through `error_response`.
    pub fn endpoint(
        health_api: HealthApi,
        product_api: ProductApi,
        cors: Cors,
        environment: AppEnvironment,
        server_url: &str,
    ) -> impl Endpoint<Output = Response> + use<> {
        let api_service = OpenApiService::new(
            (health_api, product_api),
            "Product CRUD API",
            env!("CARGO_PKG_VERSION"),
        )
        .server(server_url);
        let ui = api_service.swagger_ui();
        let spec = api_service.spec_endpoint();

        Route::new()
            .nest("/", api_service)
            .nest("/docs", ui)
            .nest("/openapi.json", spec)
            .catch_all_error(move |err| async move { error_response(err, environment) })
            .with(Tracing)
            .with(cors)
    }

    pub async fn run(config: AppConfig, container: DependencyContainer) -> anyhow::Result<()> {
        let addr = config.server.bind_address();
        let app = Self::endpoint(
            container.health_api,
            container.product_api,
            config.cors,
            config.environment,
            &format!("http://{}", addr),
        );

        info!("Server is running at http://{}", addr);
        info!("Available endpoints:");
        info!("  GET    /products     - Get all products");
        info!("  GET    /products/:id - Get product by ID");
        info!("  POST   /products     - Create new product");
        info!("  PUT    /products/:id - Update product by ID");
        info!("  DELETE /products/:id - Delete product by ID");
        info!("Swagger UI at http://{}/docs", addr);

        // In-flight requests are not drained on shutdown.
        let served = PoemServer::new(TcpListener::bind(&addr))
            .run_with_graceful_shutdown(app, shutdown_signal(), Some(Duration::ZERO))
            .await;

        container.connections.close().await;
        served?;
        Ok(())
    }
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutting down server..."),
        Err(err) => {
            error!(error = %err, "Unable to listen for shutdown signal");
            std::future::pending::<()>().await;
        }
    }
}

#[cfg(test)]
mod tests {
    use poem::http::StatusCode;

    use poem::middleware::Cors;

    use super::Server;
    use crate::api::health::routes::Api as HealthApi;
    use crate::api::product::test_support::UseCaseMocks;
    use crate::config::environment::AppEnvironment;

    fn assert_static<T: 'static>(_: &T) {}

    #[test]
    fn should_not_borrow_server_url() {
        let endpoint = Server::endpoint(
            HealthApi::new(),
            UseCaseMocks::default().into_api(AppEnvironment::Production),
            Cors::new(),
            AppEnvironment::Production,
            &format!("http://{}:{}", "127.0.0.1", 3000),
        );

        assert_static(&endpoint);
    }

    #[tokio::test]
    async fn should_report_health_on_root() {
        let client = UseCaseMocks::default().into_client(AppEnvironment::Production);

        let resp = client.get("/").send().await;

        resp.assert_status_is_ok();
        let json = resp.json().await;
        let body = json.value().object();
        body.get("success").assert_bool(true);
        body.get("message").assert_string("Product CRUD API is running");
    }

    #[tokio::test]
    async fn should_answer_unknown_routes_with_not_found_envelope() {
        let client = UseCaseMocks::default().into_client(AppEnvironment::Production);

        let resp = client.get("/does-not-exist").send().await;

        resp.assert_status(StatusCode::NOT_FOUND);
        let json = resp.json().await;
        let body = json.value().object();
        body.get("success").assert_bool(false);
        body.get("message").assert_string("Route not found");
    }

    #[tokio::test]
    async fn should_treat_unsupported_method_as_unknown_route() {
        let client = UseCaseMocks::default().into_client(AppEnvironment::Production);

        let resp = client.patch("/products").send().await;

        resp.assert_status(StatusCode::NOT_FOUND);
        let json = resp.json().await;
        json.value()
            .object()
            .get("message")
            .assert_string("Route not found");
    }

    #[tokio::test]
    async fn should_reject_malformed_json_body() {
        let client = UseCaseMocks::default().into_client(AppEnvironment::Production);

        let resp = client
            .post("/products")
            .content_type("application/json")
            .body("{\"productName\": ")
            .send()
            .await;

        resp.assert_status(StatusCode::BAD_REQUEST);
        let json = resp.json().await;
        let body = json.value().object();
        body.get("success").assert_bool(false);
        body.get("message").assert_string("Invalid request body");
    }
}
