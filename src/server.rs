//! # Server Configuration
//!
//! This module contains the server setup and configuration for the Employee API.

use axum::{
    Router,
    extract::Request,
    http::HeaderValue,
    middleware::{self, Next},
    response::Response,
    routing::get,
};
use migration::{Migrator, MigratorTrait};
use sea_orm::DatabaseConnection;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::config::AppConfig;
use crate::db;
use crate::handlers;
use crate::repositories::EmployeeRepository;
use crate::services::EmployeeService;
use crate::telemetry::{self, TraceContext};

/// Application state containing shared resources
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub employees: EmployeeService,
}

impl AppState {
    /// Build the state for a connected pool, constructing the service once.
    pub fn new(db: DatabaseConnection) -> Self {
        let employees = EmployeeService::new(EmployeeRepository::new(db.clone()));
        Self { db, employees }
    }
}

/// Creates and configures the Axum application router
pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/healthz", get(handlers::health))
        .route(
            "/api/emp",
            get(handlers::employees::list_employees).post(handlers::employees::create_employee),
        )
        .route(
            "/api/emp/{id}",
            get(handlers::employees::get_employee)
                .put(handlers::employees::update_employee)
                .delete(handlers::employees::delete_employee),
        )
        .with_state(state)
        .merge(SwaggerUi::new("/docs").url("/openapi.json", ApiDoc::openapi()))
        .layer(middleware::from_fn(trace_context_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

/// Runs each request inside a fresh trace context and reflects the
/// correlation ID back to the client.
async fn trace_context_middleware(request: Request, next: Next) -> Response {
    let trace_id = format!("req-{}", &uuid::Uuid::new_v4().to_string()[..8]);

    let mut response = telemetry::with_trace_context(
        TraceContext {
            trace_id: trace_id.clone(),
        },
        next.run(request),
    )
    .await;

    if let Ok(value) = HeaderValue::from_str(&trace_id) {
        response.headers_mut().insert("x-trace-id", value);
    }

    response
}

/// Starts the server with the given configuration
pub async fn run_server(config: AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    let db = db::init_pool(&config).await?;
    Migrator::up(&db, None).await?;

    let state = AppState::new(db);
    let app = create_app(state);

    let addr = config
        .bind_addr()
        .map_err(|e| format!("Invalid server address: {}", e))?;

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Server listening on: {}", addr);
    tracing::info!("Running in profile: {}", config.profile);

    axum::serve(listener, app).await?;

    Ok(())
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::root,
        crate::handlers::health,
        crate::handlers::employees::create_employee,
        crate::handlers::employees::update_employee,
        crate::handlers::employees::get_employee,
        crate::handlers::employees::list_employees,
        crate::handlers::employees::delete_employee,
    ),
    components(
        schemas(
            crate::models::ServiceInfo,
            crate::handlers::employees::EmployeeRequestDto,
            crate::handlers::employees::EmployeeResponseDto,
            crate::error::ApiError,
        )
    ),
    info(
        title = "Employee API",
        description = "CRUD API for the Employee resource",
        version = env!("CARGO_PKG_VERSION"),
    )
)]
pub struct ApiDoc;
