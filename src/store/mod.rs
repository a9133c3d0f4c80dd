//! Entity store contracts. Services depend on these traits only; the
//! Postgres implementation backs the running server and the in-memory
//! implementation backs the tests.

pub mod memory;
pub mod postgres;

use async_trait::async_trait;

use crate::errors::AppError;
use crate::models::{Department, Employee};

#[async_trait]
pub trait EmployeeStore: Send + Sync {
    /// Upsert. Inserting assigns the id; the persisted entity is returned.
    async fn save(&self, employee: Employee) -> Result<Employee, AppError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<Employee>, AppError>;
    /// All employees, order unspecified.
    async fn find_all(&self) -> Result<Vec<Employee>, AppError>;
    async fn delete(&self, employee: &Employee) -> Result<(), AppError>;
    /// Exact lastname match, zero or more rows.
    async fn find_by_lastname(&self, lastname: &str) -> Result<Vec<Employee>, AppError>;
    async fn find_by_department(&self, department: &Department)
        -> Result<Vec<Employee>, AppError>;
}

#[async_trait]
pub trait DepartmentStore: Send + Sync {
    async fn save(&self, department: Department) -> Result<Department, AppError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<Department>, AppError>;
    /// All departments, order unspecified.
    async fn find_all(&self) -> Result<Vec<Department>, AppError>;
    async fn delete(&self, department: &Department) -> Result<(), AppError>;
    /// Exact description match. Descriptions are not unique; the store
    /// returns whichever matching row it sees first.
    async fn find_by_description(&self, description: &str)
        -> Result<Option<Department>, AppError>;
}
