use log::info;
use std::sync::Arc;
use validator::Validate;

use crate::errors::AppError;
use crate::models::{Department, Employee};
use crate::store::{DepartmentStore, EmployeeStore};

/// CRUD-style operations over employees. Update and delete tolerate zero
/// matches and hand back the full (resp. remaining) employee list; callers
/// infer absence from the result set.
#[derive(Clone)]
pub struct EmployeeService {
    employees: Arc<dyn EmployeeStore>,
    departments: Arc<dyn DepartmentStore>,
}

impl EmployeeService {
    pub fn new(employees: Arc<dyn EmployeeStore>, departments: Arc<dyn DepartmentStore>) -> Self {
        EmployeeService {
            employees,
            departments,
        }
    }

    pub async fn find_all_employees(&self) -> Result<Vec<Employee>, AppError> {
        self.employees.find_all().await
    }

    pub async fn add_employee(
        &self,
        firstname: &str,
        lastname: &str,
    ) -> Result<Vec<Employee>, AppError> {
        info!("add_employee: {} {}", firstname, lastname);
        self.save_employee(Employee::new(firstname, lastname))
            .await?;
        self.employees.find_all().await
    }

    pub async fn add_employee_to_first_department(
        &self,
        firstname: &str,
        lastname: &str,
    ) -> Result<Vec<Employee>, AppError> {
        info!("add_employee_to_first_department: {} {}", firstname, lastname);
        let department = self
            .departments
            .find_all()
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| AppError::NotFound("No department available.".to_string()))?;
        self.save_employee(Employee::new(firstname, lastname).with_department(department))
            .await?;
        self.employees.find_all().await
    }

    pub async fn get_employee_by_id(&self, id: i32) -> Result<Option<Employee>, AppError> {
        info!("get_employee_by_id: {}", id);
        self.employees.find_by_id(id).await
    }

    pub async fn get_employee_by_name(
        &self,
        lastname: &str,
    ) -> Result<Option<Employee>, AppError> {
        info!("get_employee_by_name: {}", lastname);
        let matches = self.employees.find_by_lastname(lastname).await?;
        Ok(matches.into_iter().next())
    }

    pub async fn update_employee_lastname(
        &self,
        oldlastname: &str,
        newlastname: &str,
    ) -> Result<Vec<Employee>, AppError> {
        info!("update_employee_lastname: {} -> {}", oldlastname, newlastname);
        // First match only; row order is unspecified when lastnames collide.
        let matches = self.employees.find_by_lastname(oldlastname).await?;
        if let Some(mut employee) = matches.into_iter().next() {
            employee.lastname = newlastname.to_string();
            self.save_employee(employee).await?;
        }
        self.employees.find_all().await
    }

    pub async fn delete_employee_by_lastname(
        &self,
        lastname: &str,
    ) -> Result<Vec<Employee>, AppError> {
        info!("delete_employee_by_lastname: {}", lastname);
        // First match only; row order is unspecified when lastnames collide.
        let matches = self.employees.find_by_lastname(lastname).await?;
        if let Some(employee) = matches.into_iter().next() {
            self.employees.delete(&employee).await?;
        }
        self.employees.find_all().await
    }

    /// Raw upsert and the entity boundary: field presence and lengths are
    /// checked here before anything is persisted.
    pub async fn save_employee(&self, employee: Employee) -> Result<Employee, AppError> {
        employee.validate()?;
        self.employees.save(employee).await
    }

    pub async fn find_employees_by_department(
        &self,
        department: &Department,
    ) -> Result<Vec<Employee>, AppError> {
        info!("find_employees_by_department: {}", department.description);
        self.employees.find_by_department(department).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::{InMemoryDepartmentStore, InMemoryEmployeeStore};

    struct Fixture {
        service: EmployeeService,
        departments: Arc<InMemoryDepartmentStore>,
    }

    fn fixture() -> Fixture {
        let employees = Arc::new(InMemoryEmployeeStore::new());
        let departments = Arc::new(InMemoryDepartmentStore::new());
        let service = EmployeeService::new(employees, departments.clone());
        Fixture {
            service,
            departments,
        }
    }

    async fn seed_department(fx: &Fixture, description: &str) -> Department {
        fx.departments
            .save(Department::new(description))
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn find_all_returns_every_employee() {
        let fx = fixture();
        fx.service.add_employee("Max", "Mustermann").await.unwrap();
        let all = fx.service.add_employee("Anna", "Schmidt").await.unwrap();

        assert_eq!(all.len(), 2);
        assert_eq!(fx.service.find_all_employees().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn add_employee_creates_department_less_employee() {
        let fx = fixture();
        let all = fx.service.add_employee("Max", "Mustermann").await.unwrap();

        assert_eq!(all.len(), 1);
        assert_eq!(all[0].firstname, "Max");
        assert!(all[0].department.is_none());
        assert!(all[0].id.is_some());
    }

    #[tokio::test]
    async fn add_employee_to_first_department_assigns_department() {
        let fx = fixture();
        seed_department(&fx, "IT").await;

        let all = fx
            .service
            .add_employee_to_first_department("Max", "Mustermann")
            .await
            .unwrap();

        assert_eq!(all.len(), 1);
        assert_eq!(
            all[0].department.as_ref().unwrap().description,
            "IT"
        );
    }

    #[tokio::test]
    async fn add_employee_to_first_department_fails_without_departments() {
        let fx = fixture();
        let result = fx
            .service
            .add_employee_to_first_department("Max", "Mustermann")
            .await;

        assert!(matches!(result, Err(AppError::NotFound(_))));
        assert!(fx.service.find_all_employees().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn get_employee_by_id_round_trips_all_fields() {
        let fx = fixture();
        let it = seed_department(&fx, "IT").await;
        let saved = fx
            .service
            .save_employee(Employee::new("Max", "Mustermann").with_department(it))
            .await
            .unwrap();

        let found = fx
            .service
            .get_employee_by_id(saved.id.unwrap())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(found, saved);
    }

    #[tokio::test]
    async fn get_employee_by_id_absent_is_none() {
        let fx = fixture();
        assert!(fx.service.get_employee_by_id(999).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn get_employee_by_name_returns_first_match() {
        let fx = fixture();
        fx.service.add_employee("Max", "Mustermann").await.unwrap();

        let found = fx
            .service
            .get_employee_by_name("Mustermann")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(found.firstname, "Max");
        assert!(fx
            .service
            .get_employee_by_name("Unknown")
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn update_employee_lastname_renames_and_persists() {
        let fx = fixture();
        fx.service.add_employee("Max", "Mustermann").await.unwrap();

        let all = fx
            .service
            .update_employee_lastname("Mustermann", "Neumann")
            .await
            .unwrap();

        assert_eq!(all.len(), 1);
        assert_eq!(all[0].lastname, "Neumann");
        assert!(fx
            .service
            .get_employee_by_name("Neumann")
            .await
            .unwrap()
            .is_some());
    }

    #[tokio::test]
    async fn update_employee_lastname_without_match_changes_nothing() {
        let fx = fixture();
        let before = fx.service.add_employee("Max", "Mustermann").await.unwrap();

        let after = fx
            .service
            .update_employee_lastname("Unknown", "Neumann")
            .await
            .unwrap();

        assert_eq!(after, before);
    }

    #[tokio::test]
    async fn delete_employee_by_lastname_removes_at_most_one() {
        let fx = fixture();
        fx.service.add_employee("Max", "Schmidt").await.unwrap();
        fx.service.add_employee("Anna", "Schmidt").await.unwrap();

        let remaining = fx
            .service
            .delete_employee_by_lastname("Schmidt")
            .await
            .unwrap();

        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].lastname, "Schmidt");
    }

    #[tokio::test]
    async fn delete_employee_by_lastname_without_match_is_a_noop() {
        let fx = fixture();
        let before = fx.service.add_employee("Max", "Mustermann").await.unwrap();

        let after = fx
            .service
            .delete_employee_by_lastname("Unknown")
            .await
            .unwrap();

        assert_eq!(after, before);
    }

    #[tokio::test]
    async fn save_employee_rejects_oversized_lastname() {
        let fx = fixture();
        let result = fx
            .service
            .save_employee(Employee::new("Max", "x".repeat(51)))
            .await;

        assert!(matches!(result, Err(AppError::Validation(_))));
        assert!(fx.service.find_all_employees().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn save_employee_rejects_empty_firstname() {
        let fx = fixture();
        let result = fx.service.save_employee(Employee::new("", "Mustermann")).await;

        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn find_employees_by_department_filters_exactly() {
        let fx = fixture();
        let it = seed_department(&fx, "IT").await;
        let hr = seed_department(&fx, "HR").await;
        fx.service
            .save_employee(Employee::new("Max", "Mustermann").with_department(it.clone()))
            .await
            .unwrap();
        fx.service
            .save_employee(Employee::new("Anna", "Schmidt").with_department(hr))
            .await
            .unwrap();

        let in_it = fx.service.find_employees_by_department(&it).await.unwrap();
        assert_eq!(in_it.len(), 1);
        assert_eq!(in_it[0].lastname, "Mustermann");
    }
}
