mod common;

use common::{row, seeded_store};
use serde_json::json;
use training_tracker::services::auth::authenticate;
use training_tracker::utils::password::hash_password;

#[tokio::test]
async fn login_requires_an_exact_pair() {
    let store = seeded_store();
    let client = store.as_ref();
    assert!(authenticate(client, "admin", "letmein").await.unwrap());
    assert!(!authenticate(client, "admin", "LETMEIN").await.unwrap());
    assert!(!authenticate(client, "Admin", "letmein").await.unwrap());
    assert!(!authenticate(client, "nobody", "letmein").await.unwrap());
    assert!(!authenticate(client, "admin", "").await.unwrap());
}

#[tokio::test]
async fn argon2_accounts_can_log_in() {
    let store = seeded_store();
    store.seed(
        "Users",
        row(json!({"username": "trainer", "password": hash_password("pa55word").unwrap()})),
    );
    assert!(authenticate(store.as_ref(), "trainer", "pa55word").await.unwrap());
    assert!(!authenticate(store.as_ref(), "trainer", "letmein").await.unwrap());
}
