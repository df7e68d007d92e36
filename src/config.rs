use std::env;

use crate::errors::AppError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Backend {
    Postgres(String),
    Memory,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub backend: Backend,
    pub jwt_secret: String,
    pub bind_addr: String,
    /// Batch size for paginated report reads.
    pub page_size: i64,
    pub session_ttl_hours: i64,
}

pub const DEFAULT_PAGE_SIZE: i64 = 1000;
/// One year; longer lifetimes are refused at startup.
pub const MAX_SESSION_TTL_HOURS: i64 = 24 * 365;

impl Config {
    pub fn from_env() -> Result<Config, AppError> {
        Config::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Config, AppError> {
        let jwt_secret = lookup("JWT_SECRET")
            .ok_or_else(|| AppError::Config("JWT_SECRET must be set".to_string()))?;
        if jwt_secret.is_empty() {
            return Err(AppError::Config("JWT_SECRET cannot be empty".to_string()));
        }

        let backend = match lookup("TABLE_BACKEND").as_deref().unwrap_or("postgres") {
            "memory" => Backend::Memory,
            "postgres" => match lookup("DATABASE_URL") {
                Some(url) if !url.is_empty() => Backend::Postgres(url),
                _ => {
                    log::warn!("DATABASE_URL not set, falling back to the in-memory table store");
                    Backend::Memory
                }
            },
            other => return Err(AppError::Config(format!("unknown TABLE_BACKEND '{}'", other))),
        };

        let page_size = parse_positive(&lookup, "PAGE_SIZE", DEFAULT_PAGE_SIZE)?;
        let session_ttl_hours = parse_positive(&lookup, "SESSION_TTL_HOURS", 12)?;
        if session_ttl_hours > MAX_SESSION_TTL_HOURS {
            return Err(AppError::Config(format!(
                "SESSION_TTL_HOURS cannot exceed {}, got {}",
                MAX_SESSION_TTL_HOURS, session_ttl_hours
            )));
        }

        Ok(Config {
            backend,
            jwt_secret,
            bind_addr: lookup("BIND_ADDR").unwrap_or_else(|| "127.0.0.1:8080".to_string()),
            page_size,
            session_ttl_hours,
        })
    }
}

fn parse_positive(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: i64) -> Result<i64, AppError> {
    match lookup(key) {
        None => Ok(default),
        Some(raw) => match raw.trim().parse::<i64>() {
            Ok(value) if value > 0 => Ok(value),
            _ => Err(AppError::Config(format!("{} must be a positive integer, got '{}'", key, raw))),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Result<Config, AppError> {
        let vars: HashMap<String, String> = vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_apply() {
        let config = config(&[("JWT_SECRET", "s"), ("DATABASE_URL", "postgres://localhost/training")]).unwrap();
        assert_eq!(config.backend, Backend::Postgres("postgres://localhost/training".into()));
        assert_eq!(config.page_size, 1000);
        assert_eq!(config.bind_addr, "127.0.0.1:8080");
    }

    #[test]
    fn missing_database_url_uses_memory() {
        let config = config(&[("JWT_SECRET", "s")]).unwrap();
        assert_eq!(config.backend, Backend::Memory);
    }

    #[test]
    fn secret_is_required() {
        assert!(matches!(config(&[]), Err(AppError::Config(_))));
        assert!(matches!(config(&[("JWT_SECRET", "")]), Err(AppError::Config(_))));
    }

    #[test]
    fn page_size_must_be_positive() {
        assert!(config(&[("JWT_SECRET", "s"), ("PAGE_SIZE", "0")]).is_err());
        assert!(config(&[("JWT_SECRET", "s"), ("PAGE_SIZE", "many")]).is_err());
        assert_eq!(config(&[("JWT_SECRET", "s"), ("PAGE_SIZE", "50")]).unwrap().page_size, 50);
    }

    #[test]
    fn session_ttl_is_bounded() {
        assert!(config(&[("JWT_SECRET", "s"), ("SESSION_TTL_HOURS", "100000000")]).is_err());
        assert!(config(&[("JWT_SECRET", "s"), ("SESSION_TTL_HOURS", "8761")]).is_err());
        assert_eq!(
            config(&[("JWT_SECRET", "s"), ("SESSION_TTL_HOURS", "8760")]).unwrap().session_ttl_hours,
            8760
        );
    }
}
