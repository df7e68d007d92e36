mod common;

use chrono::NaiveDate;
use common::{activity as activity_row, seeded_store};
use serde_json::json;
use training_tracker::forms::attendance::{resolve_scope, AttendanceRequest};
use training_tracker::models::course::TrainingCategory;
use training_tracker::reports::attendance::build_attendance_report;
use training_tracker::reports::history::build_history_report;
use training_tracker::services::activity::{self, sort_newest_first, DateRange};
use training_tracker::services::catalog;

fn seed_activity(store: &training_tracker::db::MemoryTableClient) {
    for (employee, course, date, hours) in [
        (100, 1, "2024-01-15", 2.0),
        (100, 2, "2024-02-10", 1.5),
        (100, 3, "2024-03-05", 4.0),
        (100, 1, "2024-05-20", 0.5),
        (102, 1, "2024-02-10", 2.0),
        (102, 3, "2024-03-05", 4.0),
        (101, 3, "2023-12-01", 3.0),
    ] {
        store.seed("EmployeeActivity", activity_row(employee, course, date, hours));
    }
}

#[tokio::test]
async fn history_totals_match_rows_in_range() {
    let store = seeded_store();
    seed_activity(&store);
    let client = store.as_ref();
    let range = DateRange {
        start: NaiveDate::from_ymd_opt(2024, 2, 1),
        end: NaiveDate::from_ymd_opt(2024, 3, 31),
    };

    let records = activity::employee_history(client, 100, range, 1000).await.unwrap();
    let courses = catalog::list_courses(client).await.unwrap();
    let report = build_history_report("100 - Jane Doe", &records, &courses);

    let hours_col = report.table.column_index("Activity Hours").unwrap();
    let (body, totals) = report.table.rows.split_at(report.table.rows.len() - 1);
    let body_sum: f64 = body.iter().map(|r| r[hours_col].as_f64().unwrap()).sum();
    assert_eq!(body.len(), 2);
    assert_eq!(totals[0][hours_col].as_f64().unwrap(), body_sum);
    assert_eq!(body_sum, 5.5);
    assert_eq!(totals[0][3], json!("Total Classes: 2"));
    // Oldest first, course names joined in.
    assert_eq!(body[0][3], json!("PLC Basics"));
    assert_eq!(body[1][3], json!("Forklift"));
}

#[tokio::test]
async fn all_courses_in_category_equals_merged_per_course_results() {
    let store = seeded_store();
    seed_activity(&store);
    let client = store.as_ref();
    let courses = catalog::list_courses(client).await.unwrap();

    let scope = resolve_scope(
        &AttendanceRequest {
            category: Some(TrainingCategory::Osha),
            ..Default::default()
        },
        &courses,
    )
    .unwrap();
    assert_eq!(scope.course_ids, vec![1, 3]);
    let all = activity::course_attendance(client, &scope.course_ids, DateRange::default(), 2)
        .await
        .unwrap();

    let mut merged = Vec::new();
    for course_id in &scope.course_ids {
        merged.extend(
            activity::course_attendance(client, &[*course_id], DateRange::default(), 1000)
                .await
                .unwrap(),
        );
    }
    sort_newest_first(&mut merged);

    assert_eq!(all.len(), 6);
    assert_eq!(all, merged);
    assert!(all.windows(2).all(|w| w[0].date >= w[1].date));
}

#[tokio::test]
async fn attendance_reads_in_batches_until_an_empty_page() {
    let store = seeded_store();
    seed_activity(&store);
    let before = store.select_count();

    let records = activity::course_attendance(store.as_ref(), &[3], DateRange::default(), 1)
        .await
        .unwrap();
    assert_eq!(records.len(), 3);
    // three single-row pages, then the empty one
    assert_eq!(store.select_count() - before, 4);
}

#[tokio::test]
async fn attendance_totals_row_is_labelled_for_the_filter() {
    let store = seeded_store();
    seed_activity(&store);
    let client = store.as_ref();
    let courses = catalog::list_courses(client).await.unwrap();
    let scope = resolve_scope(
        &AttendanceRequest {
            course_id: Some(3),
            ..Default::default()
        },
        &courses,
    )
    .unwrap();

    let records = activity::course_attendance(client, &scope.course_ids, DateRange::default(), 1000)
        .await
        .unwrap();
    let report = build_attendance_report(&scope.label, &records, &courses);

    let last = report.table.rows.last().unwrap();
    assert_eq!(last[0], json!("Total for Forklift"));
    assert_eq!(last[3], json!("Attendees: 3"));
    assert_eq!(last[5], json!(11.0));
    assert_eq!(report.table.rows[0][4], json!("2024-03-05"));
}

#[tokio::test]
async fn repeated_sign_ins_on_one_day_survive_batching() {
    let store = seeded_store();
    store.seed("EmployeeActivity", activity_row(100, 1, "2024-04-02", 2.0));
    store.seed("EmployeeActivity", activity_row(100, 1, "2024-04-02", 1.0));
    store.seed("EmployeeActivity", activity_row(100, 1, "2024-04-01", 3.0));

    let records = activity::course_attendance(store.as_ref(), &[1], DateRange::default(), 1)
        .await
        .unwrap();
    let hours: Vec<f64> = records.iter().map(|r| r.hours).collect();
    assert_eq!(hours, vec![1.0, 2.0, 3.0]);

    let history = activity::employee_history(store.as_ref(), 100, DateRange::default(), 1)
        .await
        .unwrap();
    assert_eq!(history.iter().map(|r| r.hours).sum::<f64>(), 6.0);
}
