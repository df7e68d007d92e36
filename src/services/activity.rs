use chrono::NaiveDate;

use crate::db::{decode_rows, encode_row, select_all_pages, Query, TableClient};
use crate::errors::QueryError;
use crate::models::activity::{columns, ActivityRecord, ACTIVITY_TABLE};
use crate::models::employee::Employee;

const ACTIVITY_COLUMNS: [&str; 7] = [
    columns::EMPLOYEE_ID,
    columns::FIRST_NAME,
    columns::LAST_NAME,
    columns::COURSE_ID,
    columns::DATE,
    columns::HOURS,
    columns::COMMENTS,
];

/// Inclusive date bounds; either side may be open.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DateRange {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl DateRange {
    pub fn is_inverted(&self) -> bool {
        matches!((self.start, self.end), (Some(start), Some(end)) if start > end)
    }

    fn apply(&self, mut query: Query) -> Query {
        if let Some(start) = self.start {
            query = query.gte(columns::DATE, start.format("%Y-%m-%d").to_string());
        }
        if let Some(end) = self.end {
            query = query.lte(columns::DATE, end.format("%Y-%m-%d").to_string());
        }
        query
    }
}

/// Orders by every selected column so rows that tie on date, course and
/// employee still sort the same way in every batch. Rows equal on all of
/// them are interchangeable.
fn in_page_order(query: Query, newest_first: bool) -> Query {
    query
        .order_by(columns::DATE, newest_first)
        .order_by(columns::COURSE_ID, false)
        .order_by(columns::EMPLOYEE_ID, false)
        .order_by(columns::HOURS, false)
        .order_by(columns::COMMENTS, false)
        .order_by(columns::FIRST_NAME, false)
        .order_by(columns::LAST_NAME, false)
}

fn history_query(employee_id: i64, range: DateRange) -> Query {
    range.apply(in_page_order(
        Query::table(ACTIVITY_TABLE)
            .select(&ACTIVITY_COLUMNS)
            .eq(columns::EMPLOYEE_ID, employee_id),
        false,
    ))
}

fn attendance_query(course_ids: &[i64], range: DateRange) -> Query {
    range.apply(in_page_order(
        Query::table(ACTIVITY_TABLE)
            .select(&ACTIVITY_COLUMNS)
            .in_list(columns::COURSE_ID, course_ids.iter().copied()),
        true,
    ))
}

#[derive(Debug, Clone, PartialEq)]
pub struct SignInDetails {
    pub date: NaiveDate,
    pub hours: f64,
    pub comments: Option<String>,
}

/// Writes one activity record per employee, copying their current names.
///
/// Not transactional: when an insert fails, the records written before it stay.
pub async fn record_sign_ins(
    client: &dyn TableClient,
    course_id: i64,
    employees: &[Employee],
    details: &SignInDetails,
) -> Result<usize, QueryError> {
    for (inserted, employee) in employees.iter().enumerate() {
        let record = ActivityRecord {
            employee_id: employee.id,
            first_name: employee.first_name.clone(),
            last_name: employee.last_name.clone(),
            course_id,
            date: details.date,
            hours: details.hours,
            comments: details.comments.clone(),
        };
        if let Err(err) = client.insert(ACTIVITY_TABLE, encode_row(&record)?).await {
            log::error!(
                "Sign-in into course {} stopped after {} of {} record(s)",
                course_id,
                inserted,
                employees.len()
            );
            return Err(err);
        }
    }
    log::info!("Signed {} employee(s) into course {}", employees.len(), course_id);
    Ok(employees.len())
}

/// Activity of one employee, oldest first.
pub async fn employee_history(
    client: &dyn TableClient,
    employee_id: i64,
    range: DateRange,
    page_size: i64,
) -> Result<Vec<ActivityRecord>, QueryError> {
    let query = history_query(employee_id, range);
    let mut records: Vec<ActivityRecord> = decode_rows(select_all_pages(client, &query, page_size).await?)?;
    records.sort_by(|a, b| a.date.cmp(&b.date));
    Ok(records)
}

/// Attendance across `course_ids`, newest first, read in `page_size` batches.
pub async fn course_attendance(
    client: &dyn TableClient,
    course_ids: &[i64],
    range: DateRange,
    page_size: i64,
) -> Result<Vec<ActivityRecord>, QueryError> {
    if course_ids.is_empty() {
        return Ok(Vec::new());
    }
    let query = attendance_query(course_ids, range);
    let mut records: Vec<ActivityRecord> = decode_rows(select_all_pages(client, &query, page_size).await?)?;
    sort_newest_first(&mut records);
    Ok(records)
}

pub fn sort_newest_first(records: &mut [ActivityRecord]) {
    records.sort_by(|a, b| {
        b.date
            .cmp(&a.date)
            .then(a.course_id.cmp(&b.course_id))
            .then(a.employee_id.cmp(&b.employee_id))
    });
}
