//! # Employee Service
//!
//! The five business operations over the employee repository. Reads surface
//! absence as [`ServiceError::NotFound`]; create, update, and find-all wrap
//! unexpected storage failures as generic service failures carrying the
//! original cause. Update additionally wraps its own internal not-found,
//! preserving the message but erasing the kind, and delete swallows
//! referential-integrity violations after logging them. Both behaviors are
//! part of the documented contract (see DESIGN.md).

use sea_orm::{ActiveValue::NotSet, ActiveValue::Set, IntoActiveModel};
use sea_orm::prelude::DateTimeWithTimeZone;

use crate::error::{ServiceError, is_foreign_key_violation};
use crate::models::employee::{ActiveModel as EmployeeActiveModel, Model as EmployeeModel};
use crate::repositories::EmployeeRepository;

/// Incoming employee data, decoupled from the wire DTOs.
///
/// `id` and `created_at` are optional: creates honor a caller-supplied value
/// (`save` stamps `created_at` itself when absent), updates ignore both.
#[derive(Debug, Clone)]
pub struct EmployeeInput {
    pub id: Option<i64>,
    pub created_at: Option<DateTimeWithTimeZone>,
    pub emp_name: String,
    pub emp_dept: String,
    pub emp_salary: f64,
    pub emp_active: bool,
}

impl EmployeeInput {
    fn into_active_model(self) -> EmployeeActiveModel {
        EmployeeActiveModel {
            id: self.id.map_or(NotSet, Set),
            created_at: self.created_at.map_or(NotSet, Set),
            emp_name: Set(self.emp_name),
            emp_dept: Set(self.emp_dept),
            emp_salary: Set(self.emp_salary),
            emp_active: Set(self.emp_active),
        }
    }
}

/// Service for employee business operations
#[derive(Clone)]
pub struct EmployeeService {
    repository: EmployeeRepository,
}

impl EmployeeService {
    /// Create a new EmployeeService over the given repository
    pub fn new(repository: EmployeeRepository) -> Self {
        Self { repository }
    }

    /// Persist a new employee. Storage failures are logged and re-signaled
    /// as a generic service failure; no retry.
    pub async fn create(&self, input: EmployeeInput) -> Result<EmployeeModel, ServiceError> {
        self.repository
            .save(input.into_active_model())
            .await
            .map_err(|e| {
                tracing::error!("Error persisting a new employee: {}", e);
                ServiceError::failure("Error persisting a new employee", e)
            })
    }

    /// Replace the four mutable fields of an existing employee, preserving
    /// `id` and `created_at`. Every error in the sequence, the internal
    /// not-found included, comes back as a generic service failure whose
    /// message preserves the original text.
    pub async fn update(
        &self,
        id: i64,
        input: EmployeeInput,
    ) -> Result<EmployeeModel, ServiceError> {
        self.try_update(id, input).await.map_err(|e| {
            tracing::error!("Error updating an employee: {}", e);
            ServiceError::failure_boxed("Error updating an employee", e)
        })
    }

    async fn try_update(
        &self,
        id: i64,
        input: EmployeeInput,
    ) -> Result<EmployeeModel, Box<dyn std::error::Error + Send + Sync>> {
        let persisted = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(ServiceError::NotFound { id })?;

        let mut active = persisted.into_active_model();
        active.emp_name = Set(input.emp_name);
        active.emp_dept = Set(input.emp_dept);
        active.emp_active = Set(input.emp_active);
        active.emp_salary = Set(input.emp_salary);
        // Guards against a payload id mismatch.
        active.id = Set(id);

        Ok(self.repository.save(active).await?)
    }

    /// Fetch one employee; absence surfaces directly as `NotFound`.
    pub async fn find_by_id(&self, id: i64) -> Result<EmployeeModel, ServiceError> {
        self.repository
            .find_by_id(id)
            .await
            .map_err(|e| ServiceError::failure("Error retrieving an employee", e))?
            .ok_or(ServiceError::NotFound { id })
    }

    /// Fetch every employee; storage failures are logged and wrapped.
    pub async fn find_all(&self) -> Result<Vec<EmployeeModel>, ServiceError> {
        self.repository.find_all().await.map_err(|e| {
            tracing::error!("Error retrieving all existing employees: {}", e);
            ServiceError::failure("Error retrieving all existing employees", e)
        })
    }

    /// Delete an employee after an existence pre-check; `NotFound` from the
    /// pre-check propagates unwrapped. A referential-integrity violation
    /// during deletion is logged and swallowed, so the operation reports
    /// success even though the row may still exist.
    pub async fn delete_by_id(&self, id: i64) -> Result<(), ServiceError> {
        self.repository
            .find_by_id(id)
            .await
            .map_err(|e| ServiceError::failure("Error deleting an employee", e))?
            .ok_or(ServiceError::NotFound { id })?;

        match self.repository.delete_by_id(id).await {
            Ok(()) => Ok(()),
            Err(e) if is_foreign_key_violation(&e) => {
                tracing::error!("Error deleting employee with id: {} - {}", id, e);
                Ok(())
            }
            Err(e) => {
                tracing::error!("Error deleting an employee: {}", e);
                Err(ServiceError::failure("Error deleting an employee", e))
            }
        }
    }
}
