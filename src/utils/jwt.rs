use jsonwebtoken::errors::{Error, ErrorKind};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use time::{Duration, OffsetDateTime};

use crate::config::MAX_SESSION_TTL_HOURS;
use crate::session::{Screen, Session};

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String, // Username
    pub screen: Screen,
    pub exp: usize, // Expiration timestamp
}

/// Signs an authenticated session. Anonymous sessions have no token.
pub fn generate_token(username: &str, screen: Screen, secret: &str, ttl_hours: i64) -> Result<String, Error> {
    let expires = (1..=MAX_SESSION_TTL_HOURS)
        .contains(&ttl_hours)
        .then(|| Duration::hours(ttl_hours))
        .and_then(|ttl| OffsetDateTime::now_utc().checked_add(ttl))
        .ok_or_else(|| Error::from(ErrorKind::MissingRequiredClaim("exp".to_string())))?;

    let claims = Claims {
        sub: username.to_string(),
        screen,
        exp: expires.unix_timestamp() as usize,
    };

    encode(&Header::default(), &claims, &EncodingKey::from_secret(secret.as_bytes()))
}

pub fn validate_token(token: &str, secret: &str) -> Result<Session, Error> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::new(jsonwebtoken::Algorithm::HS256),
    )
    .map(|data| Session::authenticated(&data.claims.sub, data.claims.screen))
}
