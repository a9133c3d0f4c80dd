use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::department::Department;

/// An employee row, optionally belonging to one department.
/// `id` is `None` until the store has assigned one.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Validate)]
pub struct Employee {
    pub id: Option<i32>,
    #[validate(length(min = 1, max = 50))]
    pub firstname: String,
    #[validate(length(min = 1, max = 50))]
    pub lastname: String,
    pub department: Option<Department>,
}

impl Employee {
    pub fn new(firstname: impl Into<String>, lastname: impl Into<String>) -> Self {
        Employee {
            id: None,
            firstname: firstname.into(),
            lastname: lastname.into(),
            department: None,
        }
    }

    pub fn with_department(mut self, department: Department) -> Self {
        self.department = Some(department);
        self
    }
}
