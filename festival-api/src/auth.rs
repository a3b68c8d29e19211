//! Password hashing for admin accounts
//!
//! Argon2id with per-hash random salt, stored as a PHC string. Verification
//! goes through `PasswordVerifier`, which compares in constant time. The raw
//! password never reaches storage or logs.

use argon2::password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;

use crate::{ApiError, ApiResult};

/// Hash a password into an Argon2id PHC string
pub fn hash_password(password: &str) -> ApiResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| ApiError::Internal(format!("Password hashing failed: {}", e)))?;

    Ok(hash.to_string())
}

/// Verify a password against a stored PHC string
///
/// An unparseable stored hash counts as a failed verification rather than
/// an internal error: login must never succeed on corrupt data.
pub fn verify_password(password: &str, stored_hash: &str) -> bool {
    match PasswordHash::new(stored_hash) {
        Ok(parsed) => Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok(),
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_then_verify_roundtrip() {
        let hash = hash_password("s3cret").unwrap();
        assert!(verify_password("s3cret", &hash));
    }

    #[test]
    fn test_verify_rejects_wrong_password() {
        let hash = hash_password("s3cret").unwrap();
        assert!(!verify_password("not-the-password", &hash));
    }

    #[test]
    fn test_hash_is_salted_phc_string() {
        let hash_a = hash_password("s3cret").unwrap();
        let hash_b = hash_password("s3cret").unwrap();

        // PHC format, random salt per hash
        assert!(hash_a.starts_with("$argon2"));
        assert_ne!(hash_a, hash_b);

        // The raw password must not appear in the stored form
        assert!(!hash_a.contains("s3cret"));
    }

    #[test]
    fn test_verify_rejects_corrupt_hash() {
        assert!(!verify_password("s3cret", "not-a-phc-string"));
    }
}
