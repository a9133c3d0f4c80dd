use actix_web::http::header::{self, ContentType};
use actix_web::{web, HttpResponse};
use log::info;
use serde::Deserialize;

use crate::errors::AppError;
use crate::handlers::AppState;
use crate::views::{self, Information};

#[derive(Deserialize)]
pub struct ReadByIdParams {
    id: i32,
}

#[derive(Deserialize)]
pub struct ReadByNameParams {
    lastname: String,
}

#[derive(Deserialize)]
pub struct UpdateParams {
    oldlastname: String,
    newlastname: String,
}

#[derive(Deserialize)]
pub struct DeleteParams {
    lastname: String,
}

#[derive(Deserialize)]
pub struct CreateWithDepartmentParams {
    firstname: String,
    lastname: String,
    #[serde(rename = "departmentName")]
    department_name: String,
}

#[derive(Deserialize)]
pub struct FindByDepartmentParams {
    #[serde(rename = "departmentDescription")]
    department_description: String,
}

#[derive(Deserialize)]
pub struct TransferParams {
    #[serde(rename = "employeeId")]
    employee_id: i32,
    #[serde(rename = "newDepartmentDescription")]
    new_department_description: String,
}

fn page(information: Option<Information>, error: Option<String>) -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(views::index(information.as_ref(), error.as_deref()))
}

pub async fn home() -> HttpResponse {
    info!("home");
    HttpResponse::Found()
        .append_header((header::LOCATION, "/findAll"))
        .finish()
}

pub async fn find_all(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    info!("find_all");
    let employees = state.employees.find_all_employees().await?;
    Ok(page(Some(Information::List(employees)), None))
}

pub async fn read_by_id(
    state: web::Data<AppState>,
    params: web::Query<ReadByIdParams>,
) -> Result<HttpResponse, AppError> {
    info!("read_by_id with id: {}", params.id);
    match state.employees.get_employee_by_id(params.id).await? {
        Some(employee) => Ok(page(Some(Information::Employee(employee)), None)),
        None => Ok(page(
            None,
            Some(format!("Employee with ID {} not found.", params.id)),
        )),
    }
}

pub async fn read_by_name(
    state: web::Data<AppState>,
    params: web::Query<ReadByNameParams>,
) -> Result<HttpResponse, AppError> {
    info!("read_by_name with lastname: {}", params.lastname);
    match state.employees.get_employee_by_name(&params.lastname).await? {
        Some(employee) => Ok(page(Some(Information::Employee(employee)), None)),
        None => Ok(page(
            None,
            Some(format!(
                "Employee with lastname {} not found.",
                params.lastname
            )),
        )),
    }
}

pub async fn update(
    state: web::Data<AppState>,
    params: web::Query<UpdateParams>,
) -> Result<HttpResponse, AppError> {
    info!("update from {} to {}", params.oldlastname, params.newlastname);
    let employees = state
        .employees
        .update_employee_lastname(&params.oldlastname, &params.newlastname)
        .await?;
    // The service cannot signal "nothing matched"; only an empty list reads
    // as the error case here.
    if employees.is_empty() {
        Ok(page(
            None,
            Some(format!(
                "No employee with lastname {} found.",
                params.oldlastname
            )),
        ))
    } else {
        Ok(page(Some(Information::List(employees)), None))
    }
}

pub async fn delete(
    state: web::Data<AppState>,
    params: web::Query<DeleteParams>,
) -> Result<HttpResponse, AppError> {
    info!("delete with lastname: {}", params.lastname);
    let employees = state
        .employees
        .delete_employee_by_lastname(&params.lastname)
        .await?;
    if employees.is_empty() {
        Ok(page(
            None,
            Some(format!(
                "No employee with lastname {} found.",
                params.lastname
            )),
        ))
    } else {
        Ok(page(Some(Information::List(employees)), None))
    }
}

pub async fn create_employee_with_department(
    state: web::Data<AppState>,
    params: web::Query<CreateWithDepartmentParams>,
) -> Result<HttpResponse, AppError> {
    info!("create_employee_with_department");
    match state
        .business
        .create_employee_with_department(
            &params.firstname,
            &params.lastname,
            &params.department_name,
        )
        .await
    {
        Ok(employee) => Ok(page(Some(Information::Employee(employee)), None)),
        Err(AppError::NotFound(message)) => Ok(page(None, Some(message))),
        Err(err) => Err(err),
    }
}

pub async fn find_employees_by_department(
    state: web::Data<AppState>,
    params: web::Query<FindByDepartmentParams>,
) -> Result<HttpResponse, AppError> {
    info!(
        "find_employees_by_department with departmentDescription: {}",
        params.department_description
    );
    let employees = state
        .business
        .find_employees_by_department_description(&params.department_description)
        .await?;
    if employees.is_empty() {
        Ok(page(
            None,
            Some(format!(
                "No employees found for department {}.",
                params.department_description
            )),
        ))
    } else {
        Ok(page(Some(Information::List(employees)), None))
    }
}

pub async fn transfer_employee(
    state: web::Data<AppState>,
    params: web::Query<TransferParams>,
) -> Result<HttpResponse, AppError> {
    info!(
        "transfer_employee with employeeId: {} to newDepartmentDescription: {}",
        params.employee_id, params.new_department_description
    );
    let transferred = state
        .business
        .transfer_employee_to_department(params.employee_id, &params.new_department_description)
        .await?;
    if transferred {
        Ok(page(
            Some(Information::Message(
                "Employee transferred successfully.".to_string(),
            )),
            None,
        ))
    } else {
        Ok(page(
            None,
            Some(
                "Transfer failed. Check if the employee ID and department name are correct."
                    .to_string(),
            ),
        ))
    }
}
