pub mod business;
pub mod employee;

pub use business::BusinessService;
pub use employee::EmployeeService;
