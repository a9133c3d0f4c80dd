//! The two HTML documents every route renders: the shared index view with
//! its `information`/`error` bindings, and the error view for failures
//! nothing upstream handled.

use crate::models::Employee;

/// What a route binds on success.
pub enum Information {
    Employee(Employee),
    List(Vec<Employee>),
    Message(String),
}

pub fn index(information: Option<&Information>, error: Option<&str>) -> String {
    let mut body = String::new();
    if let Some(error) = error {
        body.push_str(&format!(
            "<p class=\"error\">{}</p>",
            escape(error)
        ));
    }
    if let Some(information) = information {
        body.push_str(&match information {
            Information::Employee(employee) => {
                employee_table(std::slice::from_ref(employee))
            }
            Information::List(employees) => employee_table(employees),
            Information::Message(message) => {
                format!("<p class=\"information\">{}</p>", escape(message))
            }
        });
    }

    format!(
        "<!doctype html><html><head><meta charset=\"utf-8\">\
<title>Employee Directory</title></head><body>\
<h1>Employee Directory</h1>\
<p><a href=\"/findAll\">All employees</a></p>\
{}\
</body></html>",
        body
    )
}

pub fn error_page(message: &str) -> String {
    format!(
        "<!doctype html><html><head><meta charset=\"utf-8\">\
<title>Error</title></head><body>\
<h1>Error</h1>\
<p class=\"error\">An error occurred: {}</p>\
<p><a href=\"/findAll\">Back to all employees</a></p>\
</body></html>",
        escape(message)
    )
}

fn employee_table(employees: &[Employee]) -> String {
    let mut rows = String::new();
    for employee in employees {
        let department = employee
            .department
            .as_ref()
            .map(|d| d.description.as_str())
            .unwrap_or("-");
        rows.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
            employee.id.map(|id| id.to_string()).unwrap_or_default(),
            escape(&employee.firstname),
            escape(&employee.lastname),
            escape(department)
        ));
    }
    format!(
        "<table><thead><tr><th>Id</th><th>Firstname</th><th>Lastname</th>\
<th>Department</th></tr></thead><tbody>{}</tbody></table>",
        rows
    )
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Department;

    #[test]
    fn index_renders_employee_rows() {
        let employee = Employee {
            id: Some(1),
            firstname: "Max".to_string(),
            lastname: "Mustermann".to_string(),
            department: Some(Department {
                id: Some(1),
                description: "IT".to_string(),
            }),
        };
        let html = index(Some(&Information::List(vec![employee])), None);

        assert!(html.contains("<td>Max</td>"));
        assert!(html.contains("<td>Mustermann</td>"));
        assert!(html.contains("<td>IT</td>"));
    }

    #[test]
    fn index_renders_dash_for_missing_department() {
        let html = index(
            Some(&Information::Employee(Employee::new("Max", "Mustermann"))),
            None,
        );
        assert!(html.contains("<td>-</td>"));
    }

    #[test]
    fn index_renders_bound_error() {
        let html = index(None, Some("Employee with ID 7 not found."));
        assert!(html.contains("Employee with ID 7 not found."));
    }

    #[test]
    fn interpolated_text_is_escaped() {
        let html = index(
            Some(&Information::Message("<script>alert(1)</script>".to_string())),
            None,
        );
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn error_page_wraps_the_message() {
        let html = error_page("Database Error: connection refused");
        assert!(html.contains("An error occurred: Database Error: connection refused"));
    }
}
