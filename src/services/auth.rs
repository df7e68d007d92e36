use crate::db::{decode_rows, Query, TableClient};
use crate::errors::QueryError;
use crate::models::user::{User, USERS_TABLE};
use crate::utils::password::verify_password;

/// True iff some stored (username, hash) pair matches. Unknown users and wrong
/// passwords are indistinguishable to the caller.
pub async fn authenticate(client: &dyn TableClient, username: &str, password: &str) -> Result<bool, QueryError> {
    let rows = client
        .select(
            &Query::table(USERS_TABLE)
                .select(&["username", "password"])
                .eq("username", username),
        )
        .await?;
    let users: Vec<User> = decode_rows(rows)?;
    let matched = users
        .iter()
        .any(|user| user.username == username && verify_password(password, &user.password));
    log::debug!("Login attempt for {}: {}", username, if matched { "accepted" } else { "rejected" });
    Ok(matched)
}
