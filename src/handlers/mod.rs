pub mod view;

use actix_web::web;

use crate::services::{BusinessService, EmployeeService};

/// Shared handler state, built once in `main` (or a test) and cloned into
/// each worker. Services are injected by constructor; there is no global
/// registry.
#[derive(Clone)]
pub struct AppState {
    pub employees: EmployeeService,
    pub business: BusinessService,
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/").route(web::get().to(view::home)))
        .service(web::resource("/findAll").route(web::get().to(view::find_all)))
        .service(web::resource("/readById").route(web::get().to(view::read_by_id)))
        .service(web::resource("/readByName").route(web::get().to(view::read_by_name)))
        .service(web::resource("/update").route(web::get().to(view::update)))
        .service(web::resource("/delete").route(web::get().to(view::delete)))
        .service(
            web::resource("/createEmployeeWithDepartment")
                .route(web::get().to(view::create_employee_with_department)),
        )
        .service(
            web::resource("/findEmployeesByDepartment")
                .route(web::get().to(view::find_employees_by_department)),
        )
        .service(web::resource("/transferEmployee").route(web::get().to(view::transfer_employee)));
}
