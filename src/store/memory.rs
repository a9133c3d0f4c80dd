//! In-memory stores. Same contracts as the Postgres stores, backing the
//! unit and route tests without a database.

use async_trait::async_trait;
use std::sync::Mutex;

use crate::errors::AppError;
use crate::models::{Department, Employee};
use crate::store::{DepartmentStore, EmployeeStore};

struct Table<T> {
    rows: Vec<T>,
    next_id: i32,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Table {
            rows: Vec::new(),
            next_id: 0,
        }
    }
}

impl<T> Table<T> {
    fn assign_id(&mut self) -> i32 {
        self.next_id += 1;
        self.next_id
    }
}

#[derive(Default)]
pub struct InMemoryEmployeeStore {
    table: Mutex<Table<Employee>>,
}

impl InMemoryEmployeeStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl EmployeeStore for InMemoryEmployeeStore {
    async fn save(&self, mut employee: Employee) -> Result<Employee, AppError> {
        let mut table = self.table.lock().unwrap();
        match employee.id {
            Some(id) => {
                if let Some(row) = table.rows.iter_mut().find(|e| e.id == Some(id)) {
                    *row = employee.clone();
                } else {
                    table.rows.push(employee.clone());
                }
            }
            None => {
                employee.id = Some(table.assign_id());
                table.rows.push(employee.clone());
            }
        }
        Ok(employee)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Employee>, AppError> {
        let table = self.table.lock().unwrap();
        Ok(table.rows.iter().find(|e| e.id == Some(id)).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Employee>, AppError> {
        let table = self.table.lock().unwrap();
        Ok(table.rows.clone())
    }

    async fn delete(&self, employee: &Employee) -> Result<(), AppError> {
        if let Some(id) = employee.id {
            let mut table = self.table.lock().unwrap();
            table.rows.retain(|e| e.id != Some(id));
        }
        Ok(())
    }

    async fn find_by_lastname(&self, lastname: &str) -> Result<Vec<Employee>, AppError> {
        let table = self.table.lock().unwrap();
        Ok(table
            .rows
            .iter()
            .filter(|e| e.lastname == lastname)
            .cloned()
            .collect())
    }

    async fn find_by_department(
        &self,
        department: &Department,
    ) -> Result<Vec<Employee>, AppError> {
        let Some(department_id) = department.id else {
            return Ok(Vec::new());
        };
        let table = self.table.lock().unwrap();
        Ok(table
            .rows
            .iter()
            .filter(|e| e.department.as_ref().and_then(|d| d.id) == Some(department_id))
            .cloned()
            .collect())
    }
}

#[derive(Default)]
pub struct InMemoryDepartmentStore {
    table: Mutex<Table<Department>>,
}

impl InMemoryDepartmentStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DepartmentStore for InMemoryDepartmentStore {
    async fn save(&self, mut department: Department) -> Result<Department, AppError> {
        let mut table = self.table.lock().unwrap();
        match department.id {
            Some(id) => {
                if let Some(row) = table.rows.iter_mut().find(|d| d.id == Some(id)) {
                    *row = department.clone();
                } else {
                    table.rows.push(department.clone());
                }
            }
            None => {
                department.id = Some(table.assign_id());
                table.rows.push(department.clone());
            }
        }
        Ok(department)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Department>, AppError> {
        let table = self.table.lock().unwrap();
        Ok(table.rows.iter().find(|d| d.id == Some(id)).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Department>, AppError> {
        let table = self.table.lock().unwrap();
        Ok(table.rows.clone())
    }

    async fn delete(&self, department: &Department) -> Result<(), AppError> {
        if let Some(id) = department.id {
            let mut table = self.table.lock().unwrap();
            table.rows.retain(|d| d.id != Some(id));
        }
        Ok(())
    }

    async fn find_by_description(
        &self,
        description: &str,
    ) -> Result<Option<Department>, AppError> {
        let table = self.table.lock().unwrap();
        Ok(table
            .rows
            .iter()
            .find(|d| d.description == description)
            .cloned())
    }
}
