//! # Employee Repository
//!
//! This module provides repository operations for the employee table,
//! encapsulating SeaORM operations behind an id-keyed persistence contract.
//! Absence is structural (`Option`); failure translation is the service
//! layer's job, so every method surfaces the raw [`DbErr`].

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, TryIntoModel};

use crate::models::employee::{
    ActiveModel as EmployeeActiveModel, Entity as Employee, Model as EmployeeModel,
};

/// Repository for employee database operations
#[derive(Clone)]
pub struct EmployeeRepository {
    db: DatabaseConnection,
}

impl EmployeeRepository {
    /// Create a new EmployeeRepository with the given database connection
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Insert when the primary key is unset, update the matching row
    /// otherwise. On insert, `created_at` is stamped with the current time
    /// unless the caller already provided one; it is never touched again.
    pub async fn save(&self, mut employee: EmployeeActiveModel) -> Result<EmployeeModel, DbErr> {
        if employee.id.is_not_set() && employee.created_at.is_not_set() {
            employee.created_at = ActiveValue::Set(Utc::now().into());
        }

        employee.save(&self.db).await?.try_into_model()
    }

    /// Look up an employee by id; `None` when no row matches.
    pub async fn find_by_id(&self, id: i64) -> Result<Option<EmployeeModel>, DbErr> {
        Employee::find_by_id(id).one(&self.db).await
    }

    /// Every stored employee, in natural storage order.
    pub async fn find_all(&self) -> Result<Vec<EmployeeModel>, DbErr> {
        Employee::find().all(&self.db).await
    }

    /// Remove the row with the given id. Callers are responsible for the
    /// existence pre-check; deleting a missing id is a no-op here.
    pub async fn delete_by_id(&self, id: i64) -> Result<(), DbErr> {
        Employee::delete_by_id(id).exec(&self.db).await.map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ActiveValue::Set, Database};

    async fn setup_test_db() -> DatabaseConnection {
        let db = Database::connect("sqlite::memory:").await.unwrap();
        Migrator::up(&db, None).await.unwrap();
        db
    }

    fn new_active(name: &str) -> EmployeeActiveModel {
        EmployeeActiveModel {
            emp_name: Set(name.to_string()),
            emp_dept: Set("Eng".to_string()),
            emp_salary: Set(1000.0),
            emp_active: Set(true),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_save_assigns_id_and_created_at() {
        let repo = EmployeeRepository::new(setup_test_db().await);

        let saved = repo.save(new_active("Ada")).await.unwrap();

        assert_eq!(saved.id, 1);
        assert!(saved.created_at.timestamp() > 0);
        assert_eq!(saved.emp_name, "Ada");
    }

    #[tokio::test]
    async fn test_save_keeps_caller_supplied_created_at() {
        let repo = EmployeeRepository::new(setup_test_db().await);

        let supplied = chrono::DateTime::parse_from_rfc3339("2020-05-01T12:00:00Z").unwrap();
        let mut active = new_active("Ada");
        active.created_at = Set(supplied);

        let saved = repo.save(active).await.unwrap();

        assert_eq!(saved.created_at, supplied);
    }

    #[tokio::test]
    async fn test_save_with_id_overwrites_existing_row() {
        let repo = EmployeeRepository::new(setup_test_db().await);

        let first = repo.save(new_active("Ada")).await.unwrap();

        let mut overwrite = new_active("Grace");
        overwrite.id = Set(first.id);
        let saved = repo.save(overwrite).await.unwrap();

        assert_eq!(saved.id, first.id);
        assert_eq!(saved.emp_name, "Grace");
        assert_eq!(repo.find_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_ids_are_not_reused_after_delete() {
        let repo = EmployeeRepository::new(setup_test_db().await);

        let first = repo.save(new_active("Ada")).await.unwrap();
        repo.delete_by_id(first.id).await.unwrap();

        let second = repo.save(new_active("Grace")).await.unwrap();

        assert!(second.id > first.id);
    }

    #[tokio::test]
    async fn test_find_by_id_absence_is_none() {
        let repo = EmployeeRepository::new(setup_test_db().await);

        assert!(repo.find_by_id(12345).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_find_all_empty_store() {
        let repo = EmployeeRepository::new(setup_test_db().await);

        assert!(repo.find_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_missing_id_is_silent() {
        let repo = EmployeeRepository::new(setup_test_db().await);

        assert!(repo.delete_by_id(99).await.is_ok());
    }
}
