#![allow(dead_code)]
use std::sync::Arc;

use serde_json::{json, Value};
use training_tracker::config::{Backend, Config};
use training_tracker::db::{MemoryTableClient, Row, TableClient};
use training_tracker::state::AppState;
use training_tracker::utils::password::legacy_digest;

pub const JWT_SECRET: &str = "test-secret";

pub fn row(value: Value) -> Row {
    match value {
        Value::Object(map) => map,
        other => panic!("expected an object, got {}", other),
    }
}

pub fn test_config(page_size: i64) -> Config {
    Config {
        backend: Backend::Memory,
        jwt_secret: JWT_SECRET.to_string(),
        bind_addr: "127.0.0.1:0".to_string(),
        page_size,
        session_ttl_hours: 1,
    }
}

pub fn app_state(store: Arc<MemoryTableClient>, page_size: i64) -> AppState {
    let client: Arc<dyn TableClient> = store;
    AppState::new(client, test_config(page_size))
}

/// Three employees (one terminated), three courses over both categories, one user.
pub fn seeded_store() -> Arc<MemoryTableClient> {
    let store = MemoryTableClient::new();
    for (id, first, last, status, term) in [
        (100, "Jane", "Doe", "Active", "9999-12-31"),
        (101, "John", "Smith", "Terminated", "2024-06-30"),
        (102, "Mary", "Major", "Active", "9999-12-31"),
    ] {
        store.seed(
            "Employees",
            row(json!({
                "Adm_num": id,
                "EE_NameF": first,
                "EE_NameL": last,
                "EE_HireDate": "2023-01-02",
                "EE_TermDate": term,
                "EE_StatusCode": status,
            })),
        );
    }
    for (id, code, name) in [(1, 1, "Fall Protection"), (2, 2, "PLC Basics"), (3, 1, "Forklift")] {
        store.seed(
            "EmployeeActivityType",
            row(json!({"ID": id, "EAT_TrainingCode": code, "EAT_ActivityType": name})),
        );
    }
    store.seed(
        "Users",
        row(json!({"username": "admin", "password": legacy_digest("letmein")})),
    );
    Arc::new(store)
}

pub fn activity(employee_id: i64, course_id: i64, date: &str, hours: f64) -> Row {
    row(json!({
        "EA_Adm_num": employee_id,
        "EA_NameF": "First",
        "EA_NameL": "Last",
        "EA_Activity": course_id,
        "EA_ActivityDate": date,
        "EA_ActivityHours": hours,
        "EA_Comments": null,
    }))
}
