use async_trait::async_trait;
use bcrypt::{hash, verify, DEFAULT_COST};

use super::run_blocking;
use crate::account::application::ports::outgoing::{HashError, PasswordHasher};

const MIN_COST: u32 = 4;
const MAX_COST: u32 = 31;

#[derive(Clone, Copy, Debug)]
pub struct BcryptHasher {
    cost: u32,
}

impl BcryptHasher {
    pub fn new() -> Self {
        Self { cost: DEFAULT_COST }
    }

    pub fn with_cost(cost: u32) -> Result<Self, HashError> {
        if !(MIN_COST..=MAX_COST).contains(&cost) {
            return Err(HashError::InvalidParams(format!(
                "bcrypt cost must be between {MIN_COST} and {MAX_COST}, got {cost}"
            )));
        }
        Ok(Self { cost })
    }
}

impl Default for BcryptHasher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PasswordHasher for BcryptHasher {
    async fn hash_password(&self, password: &str) -> Result<String, HashError> {
        let password = password.to_owned();
        let cost = self.cost;

        run_blocking(move || hash(password, cost).map_err(|_| HashError::HashFailed)).await
    }

    async fn verify_password(&self, password: &str, hashed: &str) -> Result<bool, HashError> {
        let password = password.to_owned();
        let hashed = hashed.to_owned();

        run_blocking(move || verify(password, &hashed).map_err(|_| HashError::VerifyFailed)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_bcrypt_hash_and_verify_password() {
        let hasher = BcryptHasher::with_cost(MIN_COST).unwrap();
        let password = "SecurePassword123";

        let hashed_password = hasher.hash_password(password).await.unwrap();
        assert!(hashed_password.starts_with("$2"));

        let verify_correct = hasher.verify_password(password, &hashed_password).await;
        assert!(verify_correct.unwrap());

        let verify_wrong = hasher.verify_password("WrongPassword", &hashed_password).await;
        assert!(!verify_wrong.unwrap());

        let verify_invalid_hash = hasher.verify_password(password, "invalid-hash").await;
        assert!(matches!(verify_invalid_hash, Err(HashError::VerifyFailed)));
    }

    #[test]
    fn cost_out_of_range_is_rejected() {
        assert!(matches!(BcryptHasher::with_cost(3), Err(HashError::InvalidParams(_))));
        assert!(matches!(BcryptHasher::with_cost(32), Err(HashError::InvalidParams(_))));
        assert_eq!(BcryptHasher::new().cost, DEFAULT_COST);
    }
}
