use serde_json::{json, Value};

use crate::models::course::CourseType;
use crate::models::employee::Employee;
use crate::reports::DisplayTable;

pub const EMPLOYEE_TABLE_COLUMNS: [&str; 6] = [
    "Employee ID",
    "First Name",
    "Last Name",
    "Hire Date",
    "Termination Date",
    "Status",
];

pub const COURSE_TABLE_COLUMNS: [&str; 3] = ["Course ID", "Training Code", "Course Name"];

pub fn employees_table(employees: &[Employee]) -> DisplayTable {
    let mut table = DisplayTable::new(&EMPLOYEE_TABLE_COLUMNS);
    for employee in employees {
        table.add_row(vec![
            json!(employee.id),
            json!(employee.first_name),
            json!(employee.last_name),
            employee
                .hire_date
                .map_or(Value::Null, |d| json!(d.format("%Y-%m-%d").to_string())),
            employee.termination_date.clone().map_or(Value::Null, Value::String),
            json!(employee.status.as_str()),
        ]);
    }
    table
}

pub fn courses_table(courses: &[CourseType]) -> DisplayTable {
    let mut table = DisplayTable::new(&COURSE_TABLE_COLUMNS);
    for course in courses {
        table.add_row(vec![json!(course.id), json!(course.training_label()), json!(course.name)]);
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn training_codes_show_as_labels() {
        let courses = vec![
            CourseType { id: 1, training_code: Some(1), name: "Fall Protection".into() },
            CourseType { id: 2, training_code: Some(2), name: "PLC Basics".into() },
        ];
        let table = courses_table(&courses);
        assert_eq!(table.rows[0][1], json!("OSHA"));
        assert_eq!(table.rows[1][1], json!("Technical"));
    }
}
