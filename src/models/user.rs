use serde::{Deserialize, Serialize};
use validator::Validate;

pub const USERS_TABLE: &str = "Users";

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct User {
    pub username: String,
    /// SHA-256 hex digest, or an argon2 PHC string.
    pub password: String,
}

#[derive(Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1))]
    pub username: String,
    pub password: String,
}
