//! Employee entity model
//!
//! This module contains the SeaORM entity model for the employee table,
//! the single resource exposed by this service.

use sea_orm::ActiveModelBehavior;
use sea_orm::entity::prelude::*;
use sea_orm::prelude::DateTimeWithTimeZone;

/// Employee entity representing one row of the employee table
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "employee")]
pub struct Model {
    /// Unique identifier assigned by the database on first insert (primary key)
    #[sea_orm(primary_key)]
    pub id: i64,

    /// Timestamp set on first persistence, immutable afterwards
    pub created_at: DateTimeWithTimeZone,

    /// Employee display name
    pub emp_name: String,

    /// Department the employee belongs to
    pub emp_dept: String,

    /// Salary figure
    pub emp_salary: f64,

    /// Whether the employee is currently active
    pub emp_active: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
