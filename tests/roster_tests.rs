mod common;

use chrono::NaiveDate;
use common::seeded_store;
use serde_json::json;
use training_tracker::forms::employee_edit::{EmployeeEditForm, EmployeeEditSubmission};
use training_tracker::models::employee::{EmployeeStatus, NewEmployee, ACTIVE_TERM_DATE};
use training_tracker::services::roster;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[tokio::test]
async fn added_employee_is_active_with_sentinel_date() {
    let store = training_tracker::db::MemoryTableClient::new();
    roster::add_employee(
        &store,
        NewEmployee {
            id: 100,
            first_name: "Jane".into(),
            last_name: "Doe".into(),
            hire_date: date(2024, 1, 10),
        },
    )
    .await
    .unwrap();

    let rows = store.rows("Employees");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["EE_TermDate"], json!("9999-12-31"));
    assert_eq!(rows[0]["EE_StatusCode"], json!("Active"));
    assert_eq!(rows[0]["EE_HireDate"], json!("2024-01-10"));
}

#[tokio::test]
async fn empty_names_are_accepted() {
    let store = training_tracker::db::MemoryTableClient::new();
    let employee = roster::add_employee(
        &store,
        NewEmployee {
            id: 7,
            first_name: String::new(),
            last_name: String::new(),
            hire_date: date(2024, 1, 10),
        },
    )
    .await
    .unwrap();
    assert_eq!(employee.full_name(), " ");
    assert_eq!(roster::list_employees(&store).await.unwrap().len(), 1);
}

#[tokio::test]
async fn reactivation_resets_termination_date() {
    let store = seeded_store();
    let client = store.as_ref();
    let john = roster::find_employee(client, 101).await.unwrap().unwrap();
    assert_eq!(john.status, EmployeeStatus::Terminated);

    let changes = EmployeeEditForm::prefill(&john, date(2026, 10, 19)).submit(EmployeeEditSubmission {
        first_name: john.first_name.clone(),
        last_name: john.last_name.clone(),
        status: EmployeeStatus::Active,
        termination_date: None,
    });
    assert_eq!(roster::update_employee(client, 101, &changes).await.unwrap(), 1);

    let john = roster::find_employee(client, 101).await.unwrap().unwrap();
    assert_eq!(john.status, EmployeeStatus::Active);
    assert_eq!(john.termination_date.as_deref(), Some("9999-12-31"));
    assert_eq!(changes.termination_date, ACTIVE_TERM_DATE);
}

#[tokio::test]
async fn termination_stores_the_chosen_date() {
    let store = seeded_store();
    let client = store.as_ref();
    let jane = roster::find_employee(client, 100).await.unwrap().unwrap();

    let form = EmployeeEditForm::prefill(&jane, date(2026, 10, 19)).with_status(EmployeeStatus::Terminated);
    assert_eq!(form.termination_date_default, date(2026, 10, 19));
    let changes = form.submit(EmployeeEditSubmission {
        first_name: "Jane".into(),
        last_name: "Doe".into(),
        status: EmployeeStatus::Terminated,
        termination_date: Some(date(2026, 9, 30)),
    });
    roster::update_employee(client, 100, &changes).await.unwrap();

    let jane = roster::find_employee(client, 100).await.unwrap().unwrap();
    assert_eq!(jane.status, EmployeeStatus::Terminated);
    assert_eq!(jane.recorded_termination_date(), Some(date(2026, 9, 30)));
}

#[tokio::test]
async fn options_can_hide_terminated_staff() {
    let store = seeded_store();
    let employees = roster::list_employees(store.as_ref()).await.unwrap();
    let all = roster::employee_options(&employees, false);
    let active = roster::employee_options(&employees, true);
    assert_eq!(all.len(), 3);
    assert_eq!(active.iter().map(|o| o.label.as_str()).collect::<Vec<_>>(), vec!["100 - Jane Doe", "102 - Mary Major"]);
}
