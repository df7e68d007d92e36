use std::collections::HashMap;

use serde_json::{json, Value};

use crate::models::activity::ActivityRecord;
use crate::models::course::CourseType;
use crate::reports::{DisplayTable, Report, Totals};

pub const HISTORY_COLUMNS: [&str; 7] = [
    "Employee ID",
    "First Name",
    "Last Name",
    "Course",
    "Activity Date",
    "Activity Hours",
    "Comments",
];

pub fn course_names(courses: &[CourseType]) -> HashMap<i64, &str> {
    courses.iter().map(|c| (c.id, c.name.as_str())).collect()
}

pub fn totals(records: &[ActivityRecord]) -> Totals {
    Totals {
        count: records.len(),
        hours: records.iter().map(|r| r.hours).sum(),
    }
}

/// Course history of one employee with a trailing "Total Classes" row.
pub fn build_history_report(title: &str, records: &[ActivityRecord], courses: &[CourseType]) -> Report {
    let names = course_names(courses);
    let mut table = DisplayTable::new(&HISTORY_COLUMNS);
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
        json!(""),
        json!(""),
        json!(""),
        json!(format!("Total Classes: {}", totals.count)),
        json!("Total Hours -->"),
        json!(totals.hours),
        json!(""),
    ]);

    Report {
        title: title.to_string(),
        table,
        totals,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record(course_id: i64, day: u32, hours: f64) -> ActivityRecord {
        ActivityRecord {
            employee_id: 100,
            first_name: "Jane".into(),
            last_name: "Doe".into(),
            course_id,
            date: NaiveDate::from_ymd_opt(2024, 2, day).unwrap(),
            hours,
            comments: None,
        }
    }

    #[test]
    fn totals_row_counts_and_sums() {
        let courses = vec![CourseType { id: 1, training_code: Some(1), name: "Forklift".into() }];
        let records = vec![record(1, 3, 1.5), record(1, 9, 2.0), record(5, 12, 0.5)];
        let report = build_history_report("Jane Doe", &records, &courses);

        assert_eq!(report.table.rows.len(), 4);
        let last = report.table.rows.last().unwrap();
        assert_eq!(last[3], json!("Total Classes: 3"));
        assert_eq!(last[4], json!("Total Hours -->"));
        assert_eq!(last[5], json!(4.0));
        assert_eq!(report.totals, Totals { count: 3, hours: 4.0 });
    }

    #[test]
    fn missing_course_leaves_cell_empty() {
        let report = build_history_report("x", &[record(9, 1, 1.0)], &[]);
        assert_eq!(report.table.rows[0][3], Value::Null);
    }
}
