use async_trait::async_trait;

use crate::account::application::ports::outgoing::{HashError, PasswordHasher};

const PREFIX: &str = "fake$";

/// Reversible stand-in for a real hasher; keeps service tests fast.
#[derive(Debug, Clone, Copy, Default)]
pub struct FakeHasher;

#[async_trait]
impl PasswordHasher for FakeHasher {
    async fn hash_password(&self, password: &str) -> Result<String, HashError> {
        Ok(format!("{PREFIX}{password}"))
    }

    async fn verify_password(&self, password: &str, hash: &str) -> Result<bool, HashError> {
        let stored = hash.strip_prefix(PREFIX).ok_or(HashError::VerifyFailed)?;
        Ok(stored == password)
    }
}
