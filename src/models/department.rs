use serde::{Deserialize, Serialize};
use validator::Validate;

/// A department row. `id` is `None` until the store has assigned one.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Validate)]
pub struct Department {
    pub id: Option<i32>,
    #[validate(length(min = 1, max = 255))]
    pub description: String,
}

impl Department {
    pub fn new(description: impl Into<String>) -> Self {
        Department {
            id: None,
            description: description.into(),
        }
    }
}
