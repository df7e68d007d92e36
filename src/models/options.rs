use serde::Serialize;

use crate::models::course::CourseType;
use crate::models::employee::Employee;

/// An entry of a selection input. Clients send back `id`; the label is display only.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct SelectOption {
    pub id: i64,
    pub label: String,
}

impl From<&Employee> for SelectOption {
    fn from(employee: &Employee) -> Self {
        SelectOption {
            id: employee.id,
            label: format!("{} - {}", employee.id, employee.full_name()),
        }
    }
}

impl From<&CourseType> for SelectOption {
    fn from(course: &CourseType) -> Self {
        SelectOption {
            id: course.id,
            label: format!("{} - {}", course.id, course.name),
        }
    }
}
