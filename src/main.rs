use actix_web::{web, App, HttpServer};
use dotenv::dotenv;
use log::info;
use std::env;
use std::sync::Arc;

use employee_directory::db;
use employee_directory::handlers::{self, AppState};
use employee_directory::services::{BusinessService, EmployeeService};
use employee_directory::store::postgres::{PgDepartmentStore, PgEmployeeStore};
use employee_directory::store::{DepartmentStore, EmployeeStore};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init();

    let pool = db::create_pool().await;
    db::run_migrations(&pool).await;

    let employee_store: Arc<dyn EmployeeStore> = Arc::new(PgEmployeeStore::new(pool.clone()));
    let department_store: Arc<dyn DepartmentStore> = Arc::new(PgDepartmentStore::new(pool));
    let employees = EmployeeService::new(employee_store, department_store.clone());
    let business = BusinessService::new(employees.clone(), department_store);
    let state = AppState {
        employees,
        business,
    };

    let bind_address = env::var("BIND_ADDRESS").unwrap_or_else(|_| "127.0.0.1:8080".to_string());
    info!("Starting server at {}", bind_address);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .configure(handlers::configure)
    })
    .bind(bind_address)?
    .run()
    .await
}
