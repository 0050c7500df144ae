//! Argon2id password hashing.
//!
//! Hashes are stored as PHC strings (`$argon2id$v=19$m=19456,t=2,p=1$...`).
//! Both operations are CPU bound and run on the blocking pool so they do not
//! hold up other requests on the runtime.

use crate::error::HubError;
use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};

/// Hash a plaintext password with a random salt.
pub async fn hash_password(password: &str) -> Result<String, HubError> {
    let password = password.to_owned();
    tokio::task::spawn_blocking(move || hash_password_blocking(&password)).await?
}

/// Check `password` against a stored PHC hash. `Ok(false)` on mismatch,
/// `Err` if the stored hash cannot be parsed.
pub async fn verify_password(password: &str, hash: &str) -> Result<bool, HubError> {
    let password = password.to_owned();
    let hash = hash.to_owned();
    tokio::task::spawn_blocking(move || verify_password_blocking(&password, &hash)).await?
}

fn hash_password_blocking(password: &str) -> Result<String, HubError> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| HubError::PasswordHash(format!("failed to hash password: {e}")))?;
    Ok(hash.to_string())
}

fn verify_password_blocking(password: &str, hash: &str) -> Result<bool, HubError> {
    let parsed = PasswordHash::new(hash)
        .map_err(|e| HubError::PasswordHash(format!("invalid password hash: {e}")))?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn hash_is_salted_and_verifies() {
        let a = hash_password("hunter2").await.unwrap();
        let b = hash_password("hunter2").await.unwrap();
        assert!(a.starts_with("$argon2id$"));
        assert_ne!(a, b);
        assert!(!a.contains("hunter2"));

        assert!(verify_password("hunter2", &a).await.unwrap());
        assert!(!verify_password("hunter3", &a).await.unwrap());
    }

    #[tokio::test]
    async fn malformed_hash_is_an_error() {
        let err = verify_password("pw", "not-a-phc-string").await.unwrap_err();
        assert!(matches!(err, HubError::PasswordHash(_)));
    }
}
