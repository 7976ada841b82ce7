//! Migration to create the employee table.
//!
//! This migration creates the baseline employee table with an auto-increment
//! primary key, a creation timestamp, and the four business columns.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Employee::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Employee::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Employee::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(ColumnDef::new(Employee::EmpName).text().not_null())
                    .col(ColumnDef::new(Employee::EmpDept).text().not_null())
                    .col(ColumnDef::new(Employee::EmpSalary).double().not_null())
                    .col(ColumnDef::new(Employee::EmpActive).boolean().not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Employee::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Employee {
    Table,
    Id,
    CreatedAt,
    EmpName,
    EmpDept,
    EmpSalary,
    EmpActive,
}
