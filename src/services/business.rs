use log::{error, info, warn};
use std::sync::Arc;

use crate::errors::AppError;
use crate::models::Employee;
use crate::services::EmployeeService;
use crate::store::DepartmentStore;

/// Multi-step use cases composed from the directory service and
/// department lookups.
#[derive(Clone)]
pub struct BusinessService {
    employees: EmployeeService,
    departments: Arc<dyn DepartmentStore>,
}

impl BusinessService {
    pub fn new(employees: EmployeeService, departments: Arc<dyn DepartmentStore>) -> Self {
        BusinessService {
            employees,
            departments,
        }
    }

    /// Create a new employee and assign it to the department with the given
    /// description. Fails with a not-found error naming the description when
    /// no such department exists.
    pub async fn create_employee_with_department(
        &self,
        firstname: &str,
        lastname: &str,
        department_description: &str,
    ) -> Result<Employee, AppError> {
        info!(
            "create_employee_with_department: {} {} into {}",
            firstname, lastname, department_description
        );
        match self
            .departments
            .find_by_description(department_description)
            .await?
        {
            Some(department) => {
                self.employees
                    .save_employee(Employee::new(firstname, lastname).with_department(department))
                    .await
            }
            None => {
                warn!(
                    "create_employee_with_department: department not found: {}",
                    department_description
                );
                Err(AppError::NotFound(format!(
                    "Department with name {} not found.",
                    department_description
                )))
            }
        }
    }

    /// All employees of the department with the given description; an
    /// unknown description yields an empty list, not an error.
    pub async fn find_employees_by_department_description(
        &self,
        department_description: &str,
    ) -> Result<Vec<Employee>, AppError> {
        info!(
            "find_employees_by_department_description: {}",
            department_description
        );
        match self
            .departments
            .find_by_description(department_description)
            .await?
        {
            Some(department) => self.employees.find_employees_by_department(&department).await,
            None => {
                warn!(
                    "find_employees_by_department_description: department not found: {}",
                    department_description
                );
                Ok(Vec::new())
            }
        }
    }

    /// Move an employee to another department. True iff both the employee
    /// and the department exist; otherwise false with no partial mutation.
    pub async fn transfer_employee_to_department(
        &self,
        employee_id: i32,
        new_department_description: &str,
    ) -> Result<bool, AppError> {
        info!(
            "transfer_employee_to_department: {} to {}",
            employee_id, new_department_description
        );
        let employee = self.employees.get_employee_by_id(employee_id).await?;
        let department = self
            .departments
            .find_by_description(new_department_description)
            .await?;

        match (employee, department) {
            (Some(mut employee), Some(department)) => {
                employee.department = Some(department);
                self.employees.save_employee(employee).await?;
                Ok(true)
            }
            _ => {
                error!(
                    "transfer_employee_to_department: transfer fails for {} to {}",
                    employee_id, new_department_description
                );
                Ok(false)
            }
        }
    }
}
