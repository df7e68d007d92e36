use serde_json::{json, Value};

use crate::models::activity::ActivityRecord;
use crate::models::course::CourseType;
use crate::reports::history::{course_names, totals};
use crate::reports::{DisplayTable, Report};

pub const ATTENDANCE_COLUMNS: [&str; 7] = [
    "Employee ID",
    "First Name",
    "Last Name",
    "Course",
    "Date",
    "Hours",
    "Comments",
];

/// Attendance rows in the order given, closed by a totals row labelled for the filter.
pub fn build_attendance_report(label: &str, records: &[ActivityRecord], courses: &[CourseType]) -> Report {
    let names = course_names(courses);
    let mut table = DisplayTable::new(&ATTENDANCE_COLUMNS);
    for record in records {
        table.add_row(vec![
            json!(record.employee_id),
            json!(record.first_name),
            json!(record.last_name),
            names.get(&record.course_id).map_or(Value::Null, |name| json!(name)),
            json!(record.date.format("%Y-%m-%d").to_string()),
            json!(record.hours),
            record.comments.clone().map_or(Value::Null, Value::String),
        ]);
    }

    let totals = totals(records);
    table.add_row(vec![
        json!(label),
        json!(""),
        json!(""),
        json!(format!("Attendees: {}", totals.count)),
        json!("Total Hours -->"),
        json!(totals.hours),
        json!(""),
    ]);

    Report {
        title: label.to_string(),
        table,
        totals,
    }
}
