use async_trait::async_trait;
use sqlx::PgPool;

use crate::errors::AppError;
use crate::models::{Department, Employee};
use crate::store::{DepartmentStore, EmployeeStore};

const SELECT_EMPLOYEE: &str = "SELECT e.id, e.firstname, e.lastname, \
     d.id AS department_id, d.description AS department_description \
     FROM employee e LEFT JOIN department d ON d.id = e.department_id";

/// Flat row shape for the employee/department join.
#[derive(sqlx::FromRow)]
struct EmployeeRow {
    id: i32,
    firstname: String,
    lastname: String,
    department_id: Option<i32>,
    department_description: Option<String>,
}

impl From<EmployeeRow> for Employee {
    fn from(row: EmployeeRow) -> Self {
        let department = match (row.department_id, row.department_description) {
            (Some(id), Some(description)) => Some(Department {
                id: Some(id),
                description,
            }),
            _ => None,
        };
        Employee {
            id: Some(row.id),
            firstname: row.firstname,
            lastname: row.lastname,
            department,
        }
    }
}

pub struct PgEmployeeStore {
    pool: PgPool,
}

impl PgEmployeeStore {
    pub fn new(pool: PgPool) -> Self {
        PgEmployeeStore { pool }
    }
}

#[async_trait]
impl EmployeeStore for PgEmployeeStore {
    async fn save(&self, employee: Employee) -> Result<Employee, AppError> {
        let department_id = employee.department.as_ref().and_then(|d| d.id);
        match employee.id {
            Some(id) => {
                sqlx::query(
                    "UPDATE employee SET firstname = $1, lastname = $2, department_id = $3 \
                     WHERE id = $4",
                )
                .bind(&employee.firstname)
                .bind(&employee.lastname)
                .bind(department_id)
                .bind(id)
                .execute(&self.pool)
                .await?;
                Ok(employee)
            }
            None => {
                let id: i32 = sqlx::query_scalar(
                    "INSERT INTO employee (firstname, lastname, department_id) \
                     VALUES ($1, $2, $3) RETURNING id",
                )
                .bind(&employee.firstname)
                .bind(&employee.lastname)
                .bind(department_id)
                .fetch_one(&self.pool)
                .await?;
                Ok(Employee {
                    id: Some(id),
                    ..employee
                })
            }
        }
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Employee>, AppError> {
        let row = sqlx::query_as::<_, EmployeeRow>(&format!("{} WHERE e.id = $1", SELECT_EMPLOYEE))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(Employee::from))
    }

    async fn find_all(&self) -> Result<Vec<Employee>, AppError> {
        let rows = sqlx::query_as::<_, EmployeeRow>(SELECT_EMPLOYEE)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.into_iter().map(Employee::from).collect())
    }

    async fn delete(&self, employee: &Employee) -> Result<(), AppError> {
        if let Some(id) = employee.id {
            sqlx::query("DELETE FROM employee WHERE id = $1")
                .bind(id)
                .execute(&self.pool)
                .await?;
        }
        Ok(())
    }

    async fn find_by_lastname(&self, lastname: &str) -> Result<Vec<Employee>, AppError> {
        let rows = sqlx::query_as::<_, EmployeeRow>(&format!(
            "{} WHERE e.lastname = $1",
            SELECT_EMPLOYEE
        ))
        .bind(lastname)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.into_iter().map(Employee::from).collect())
    }

    async fn find_by_department(
        &self,
        department: &Department,
    ) -> Result<Vec<Employee>, AppError> {
        let Some(department_id) = department.id else {
            return Ok(Vec::new());
        };
        let rows = sqlx::query_as::<_, EmployeeRow>(&format!(
            "{} WHERE e.department_id = $1",
            SELECT_EMPLOYEE
        ))
        .bind(department_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.into_iter().map(Employee::from).collect())
    }
}

pub struct PgDepartmentStore {
    pool: PgPool,
}

impl PgDepartmentStore {
    pub fn new(pool: PgPool) -> Self {
        PgDepartmentStore { pool }
    }
}

#[derive(sqlx::FromRow)]
struct DepartmentRow {
    id: i32,
    description: String,
}

impl From<DepartmentRow> for Department {
    fn from(row: DepartmentRow) -> Self {
        Department {
            id: Some(row.id),
            description: row.description,
        }
    }
}

#[async_trait]
impl DepartmentStore for PgDepartmentStore {
    async fn save(&self, department: Department) -> Result<Department, AppError> {
        match department.id {
            Some(id) => {
                sqlx::query("UPDATE department SET description = $1 WHERE id = $2")
                    .bind(&department.description)
                    .bind(id)
                    .execute(&self.pool)
                    .await?;
                Ok(department)
            }
            None => {
                let id: i32 = sqlx::query_scalar(
                    "INSERT INTO department (description) VALUES ($1) RETURNING id",
                )
                .bind(&department.description)
                .fetch_one(&self.pool)
                .await?;
                Ok(Department {
                    id: Some(id),
                    ..department
                })
            }
        }
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Department>, AppError> {
        let row = sqlx::query_as::<_, DepartmentRow>(
            "SELECT id, description FROM department WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.map(Department::from))
    }

    async fn find_all(&self) -> Result<Vec<Department>, AppError> {
        let rows = sqlx::query_as::<_, DepartmentRow>("SELECT id, description FROM department")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.into_iter().map(Department::from).collect())
    }

    async fn delete(&self, department: &Department) -> Result<(), AppError> {
        if let Some(id) = department.id {
            sqlx::query("DELETE FROM department WHERE id = $1")
                .bind(id)
                .execute(&self.pool)
                .await?;
        }
        Ok(())
    }

    async fn find_by_description(
        &self,
        description: &str,
    ) -> Result<Option<Department>, AppError> {
        let row = sqlx::query_as::<_, DepartmentRow>(
            "SELECT id, description FROM department WHERE description = $1 LIMIT 1",
        )
        .bind(description)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.map(Department::from))
    }
}
