//! Password hashing collaborator.
//!
//! Credentials are stored only as bcrypt digests; the service layer never
//! persists or returns a plaintext password.

/// Derive a one-way digest from a plaintext password.
///
/// # Errors
///
/// Returns an error if the underlying bcrypt computation fails.
pub fn hash(plain: &str) -> Result<String, bcrypt::BcryptError> {
    bcrypt::hash(plain, bcrypt::DEFAULT_COST)
}

/// Check a plaintext password against a stored digest.
///
/// # Errors
///
/// Returns an error if the stored digest is malformed.
pub fn verify(plain: &str, hashed: &str) -> Result<bool, bcrypt::BcryptError> {
    bcrypt::verify(plain, hashed)
}

#[cfg(test)]
#[path = "password_test.rs"]
mod tests;
