use argon2::{
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use sha2::{Digest, Sha256};

/// Unsalted SHA-256 hex digest, the format of legacy `Users.password` values.
pub fn legacy_digest(password: &str) -> String {
    hex::encode(Sha256::digest(password.as_bytes()))
}

/// Salted argon2 PHC string for newly provisioned accounts.
pub fn hash_password(password: &str) -> Result<String, argon2::password_hash::Error> {
    let salt = SaltString::generate(&mut rand::thread_rng());
    Ok(Argon2::default()
        .hash_password(password.as_bytes(), &salt)?
        .to_string())
}

/// True when `stored` is either the exact legacy digest of `password` or an argon2 hash of it.
pub fn verify_password(password: &str, stored: &str) -> bool {
    if stored.starts_with("$argon2") {
        return PasswordHash::new(stored)
            .map(|parsed| Argon2::default().verify_password(password.as_bytes(), &parsed).is_ok())
            .unwrap_or(false);
    }
    stored == legacy_digest(password)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn legacy_digest_is_sha256_hex() {
        assert_eq!(
            legacy_digest("password"),
            "5e884898da28047151d0e56f8dc6292773603d0d6aabbdd62a11ef721d1542d8"
        );
    }

    #[test]
    fn legacy_comparison_is_exact() {
        let stored = legacy_digest("s3cret");
        assert!(verify_password("s3cret", &stored));
        assert!(!verify_password("S3cret", &stored));
        assert!(!verify_password("s3cret", &stored.to_uppercase()));
    }

    #[test]
    fn argon2_hashes_verify() {
        let stored = hash_password("s3cret").unwrap();
        assert!(stored.starts_with("$argon2"));
        assert!(verify_password("s3cret", &stored));
        assert!(!verify_password("wrong", &stored));
    }
}
