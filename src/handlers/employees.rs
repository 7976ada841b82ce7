//! # Employee API Handlers
//!
//! This module contains handlers for the five employee CRUD endpoints under
//! `/api/emp`. Handlers only marshal: deserialize, delegate to the service,
//! convert the entity to the response DTO.

use axum::{
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::Json,
};
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::ApiError;
use crate::models::employee::Model as EmployeeModel;
use crate::server::AppState;
use crate::services::EmployeeInput;

/// Request payload for creating or updating an employee.
///
/// Every field is optional on the wire; the business fields fall back to
/// their documented defaults, so `{}` is a valid body.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeRequestDto {
    /// Identifier, honored by create's insert-or-overwrite semantics and
    /// ignored by update
    #[serde(default)]
    pub id: Option<i64>,
    /// Creation timestamp; assigned by the server when absent
    #[serde(default)]
    pub created_at: Option<DateTime<FixedOffset>>,
    /// Employee display name
    #[serde(default = "default_field_text")]
    #[schema(example = "Alice")]
    pub emp_name: String,
    /// Department the employee belongs to
    #[serde(default = "default_field_text")]
    #[schema(example = "Eng")]
    pub emp_dept: String,
    /// Salary figure
    #[serde(default)]
    #[schema(example = 90000.0)]
    pub emp_salary: f64,
    /// Whether the employee is currently active
    #[serde(default)]
    pub emp_active: bool,
}

fn default_field_text() -> String {
    "NA".to_string()
}

impl From<EmployeeRequestDto> for EmployeeInput {
    fn from(dto: EmployeeRequestDto) -> Self {
        Self {
            id: dto.id,
            created_at: dto.created_at,
            emp_name: dto.emp_name,
            emp_dept: dto.emp_dept,
            emp_salary: dto.emp_salary,
            emp_active: dto.emp_active,
        }
    }
}

/// Response payload representing a persisted employee
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeResponseDto {
    /// Server-assigned identifier
    #[schema(example = 1)]
    pub id: i64,
    /// Creation timestamp (RFC 3339)
    #[schema(example = "2024-01-15T10:30:00+00:00")]
    pub created_at: String,
    pub emp_name: String,
    pub emp_dept: String,
    pub emp_salary: f64,
    pub emp_active: bool,
}

impl From<EmployeeModel> for EmployeeResponseDto {
    fn from(model: EmployeeModel) -> Self {
        Self {
            id: model.id,
            created_at: model.created_at.to_rfc3339(),
            emp_name: model.emp_name,
            emp_dept: model.emp_dept,
            emp_salary: model.emp_salary,
            emp_active: model.emp_active,
        }
    }
}

/// Create a new employee
#[utoipa::path(
    post,
    path = "/api/emp",
    request_body = EmployeeRequestDto,
    responses(
        (status = 200, description = "Employee created", body = EmployeeResponseDto),
        (status = 400, description = "Malformed request body", body = ApiError),
        (status = 500, description = "Service failure", body = ApiError)
    ),
    tag = "employees"
)]
pub async fn create_employee(
    State(state): State<AppState>,
    payload: Result<Json<EmployeeRequestDto>, JsonRejection>,
) -> Result<Json<EmployeeResponseDto>, ApiError> {
    let Json(request) = payload?;

    let employee = state.employees.create(request.into()).await?;

    Ok(Json(employee.into()))
}

/// Update an existing employee
#[utoipa::path(
    put,
    path = "/api/emp/{id}",
    params(
        ("id" = i64, Path, description = "Employee identifier")
    ),
    request_body = EmployeeRequestDto,
    responses(
        (status = 200, description = "Employee updated", body = EmployeeResponseDto),
        (status = 400, description = "Malformed request body", body = ApiError),
        (status = 500, description = "Service failure (including a wrapped missing id)", body = ApiError)
    ),
    tag = "employees"
)]
pub async fn update_employee(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    payload: Result<Json<EmployeeRequestDto>, JsonRejection>,
) -> Result<Json<EmployeeResponseDto>, ApiError> {
    let Json(request) = payload?;

    let employee = state.employees.update(id, request.into()).await?;

    Ok(Json(employee.into()))
}

/// Retrieve an employee by id
#[utoipa::path(
    get,
    path = "/api/emp/{id}",
    params(
        ("id" = i64, Path, description = "Employee identifier")
    ),
    responses(
        (status = 200, description = "Employee found", body = EmployeeResponseDto),
        (status = 404, description = "No employee with this id", body = ApiError)
    ),
    tag = "employees"
)]
pub async fn get_employee(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<EmployeeResponseDto>, ApiError> {
    let employee = state.employees.find_by_id(id).await?;

    Ok(Json(employee.into()))
}

/// List all employees
#[utoipa::path(
    get,
    path = "/api/emp",
    responses(
        (status = 200, description = "Every stored employee", body = [EmployeeResponseDto]),
        (status = 500, description = "Service failure", body = ApiError)
    ),
    tag = "employees"
)]
pub async fn list_employees(
    State(state): State<AppState>,
) -> Result<Json<Vec<EmployeeResponseDto>>, ApiError> {
    let employees = state.employees.find_all().await?;

    Ok(Json(employees.into_iter().map(Into::into).collect()))
}

/// Delete an employee by id
#[utoipa::path(
    delete,
    path = "/api/emp/{id}",
    params(
        ("id" = i64, Path, description = "Employee identifier")
    ),
    responses(
        (status = 200, description = "Employee deleted"),
        (status = 404, description = "No employee with this id", body = ApiError)
    ),
    tag = "employees"
)]
pub async fn delete_employee(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    state.employees.delete_by_id(id).await?;

    Ok(StatusCode::OK)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use migration::{Migrator, MigratorTrait};
    use sea_orm::Database;
    use serde_json::json;
    use tower::ServiceExt;

    async fn setup_test_app() -> axum::Router {
        let db = Database::connect("sqlite::memory:").await.unwrap();
        Migrator::up(&db, None).await.unwrap();
        crate::server::create_app(crate::server::AppState::new(db))
    }

    fn json_request(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn response_json(response: axum::response::Response) -> serde_json::Value {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn test_create_employee_applies_defaults() {
        let app = setup_test_app().await;

        let response = app
            .oneshot(json_request("POST", "/api/emp", json!({})))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = response_json(response).await;
        assert_eq!(body["id"], 1);
        assert_eq!(body["empName"], "NA");
        assert_eq!(body["empDept"], "NA");
        assert_eq!(body["empSalary"], 0.0);
        assert_eq!(body["empActive"], false);
        assert!(body["createdAt"].as_str().is_some_and(|s| !s.is_empty()));
    }

    #[tokio::test]
    async fn test_create_employee_echoes_fields() {
        let app = setup_test_app().await;

        let response = app
            .oneshot(json_request(
                "POST",
                "/api/emp",
                json!({
                    "empName": "Alice",
                    "empDept": "Eng",
                    "empSalary": 90000.0,
                    "empActive": true
                }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = response_json(response).await;
        assert_eq!(body["empName"], "Alice");
        assert_eq!(body["empDept"], "Eng");
        assert_eq!(body["empSalary"], 90000.0);
        assert_eq!(body["empActive"], true);
    }

    #[tokio::test]
    async fn test_create_employee_malformed_body() {
        let app = setup_test_app().await;

        let request = Request::builder()
            .method("POST")
            .uri("/api/emp")
            .header("Content-Type", "application/json")
            .body(Body::from("{not json"))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = response_json(response).await;
        assert_eq!(body["code"], "VALIDATION_FAILED");
    }

    #[tokio::test]
    async fn test_get_employee_not_found() {
        let app = setup_test_app().await;

        let request = Request::builder()
            .method("GET")
            .uri("/api/emp/42")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = response_json(response).await;
        assert_eq!(body["code"], "NOT_FOUND");
        assert_eq!(body["message"], "There is no employee found with id: 42");
    }

    #[tokio::test]
    async fn test_update_missing_id_is_wrapped_service_failure() {
        let app = setup_test_app().await;

        let response = app
            .oneshot(json_request(
                "PUT",
                "/api/emp/41",
                json!({"empName": "Ghost"}),
            ))
            .await
            .unwrap();

        // The service wraps its internal not-found, so the surface sees a
        // generic failure with the message text preserved.
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = response_json(response).await;
        assert_eq!(body["code"], "INTERNAL_SERVER_ERROR");
        assert!(
            body["message"]
                .as_str()
                .unwrap()
                .contains("There is no employee found with id: 41")
        );
    }

    #[tokio::test]
    async fn test_list_employees_empty() {
        let app = setup_test_app().await;

        let request = Request::builder()
            .method("GET")
            .uri("/api/emp")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response_json(response).await, json!([]));
    }

    #[tokio::test]
    async fn test_delete_employee_not_found() {
        let app = setup_test_app().await;

        let request = Request::builder()
            .method("DELETE")
            .uri("/api/emp/9")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_responses_carry_trace_header() {
        let app = setup_test_app().await;

        let request = Request::builder()
            .method("GET")
            .uri("/api/emp")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        let trace = response.headers().get("x-trace-id").unwrap();
        assert!(trace.to_str().unwrap().starts_with("req-"));
    }
}
