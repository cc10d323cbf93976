//! Password hashing with Argon2id.
//!
//! Stored passwords are PHC strings produced by `Argon2::default()` with a random
//! 16 byte salt, so verification needs no separate salt column.

use argon2::{
    password_hash::{self, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use rand::Rng;

/// Hashes a plain password into a PHC string.
///
/// # Arguments
/// - `password` - Plain password as submitted by the user
///
/// # Returns
/// - `Ok(String)` - PHC encoded Argon2id hash including its salt
/// - `Err(password_hash::Error)` - Salt encoding or hashing failed
pub fn hash_password(password: &str) -> Result<String, password_hash::Error> {
    let mut salt_bytes = [0u8; 16];
    rand::rng().fill(&mut salt_bytes);
    let salt = SaltString::encode_b64(&salt_bytes)?;

    let hash = Argon2::default().hash_password(password.as_bytes(), &salt)?;

    Ok(hash.to_string())
}

/// Checks a plain password against a stored PHC string.
///
/// # Returns
/// - `Ok(true)` - Password matches
/// - `Ok(false)` - Password does not match
/// - `Err(password_hash::Error)` - Stored hash is not a valid PHC string
pub fn verify_password(password: &str, hash: &str) -> Result<bool, password_hash::Error> {
    let parsed = PasswordHash::new(hash)?;

    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}
