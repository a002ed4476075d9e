use argon2::{
    password_hash::{
        Error as PasswordHashError, PasswordHash, PasswordHasher as _, PasswordVerifier, SaltString,
    },
    Algorithm, Argon2, Params, Version,
};
use async_trait::async_trait;
use rand_core::OsRng;

use super::run_blocking;
use crate::account::application::ports::outgoing::{HashError, PasswordHasher};

pub const DEFAULT_MEMORY_KIB: u32 = 19 * 1024;
pub const DEFAULT_ITERATIONS: u32 = 2;
pub const DEFAULT_PARALLELISM: u32 = 1;

/// Argon2id hasher producing PHC strings. Work happens on the blocking pool.
#[derive(Clone)]
pub struct Argon2Hasher {
    params: Params,
    #[cfg(test)]
    salt_override: Option<SaltString>,
}

impl Argon2Hasher {
    pub fn new() -> Self {
        Self {
            params: Params::default(),
            #[cfg(test)]
            salt_override: None,
        }
    }

    pub fn with_params(
        memory_kib: u32,
        iterations: u32,
        parallelism: u32,
    ) -> Result<Self, HashError> {
        let params = Params::new(memory_kib, iterations, parallelism, None)
            .map_err(|e| HashError::InvalidParams(e.to_string()))?;

        Ok(Self {
            params,
            #[cfg(test)]
            salt_override: None,
        })
    }

    #[cfg(test)]
    fn fast() -> Self {
        Self::with_params(1024, 1, 1).expect("valid test params")
    }

    #[cfg(test)]
    fn with_fixed_salt(salt: &str) -> Self {
        Self {
            salt_override: Some(SaltString::from_b64(salt).expect("Invalid salt")),
            ..Self::fast()
        }
    }
}

impl Default for Argon2Hasher {
    fn default() -> Self {
        Self::new()
    }
}

impl Argon2Hasher {
    fn argon2(&self) -> Argon2<'static> {
        Argon2::new(Algorithm::Argon2id, Version::V0x13, self.params.clone())
    }

    #[cfg(not(test))]
    fn salt(&self) -> SaltString {
        SaltString::generate(&mut OsRng)
    }

    #[cfg(test)]
    fn salt(&self) -> SaltString {
        self.salt_override
            .clone()
            .unwrap_or_else(|| SaltString::generate(&mut OsRng))
    }
}

// Cost parameters come from the stored hash, not from the hasher.
fn check_password(password: &[u8], hash: &str) -> Result<bool, HashError> {
    let parsed = PasswordHash::new(hash).map_err(|_| HashError::VerifyFailed)?;

    match Argon2::default().verify_password(password, &parsed) {
        Ok(()) => Ok(true),
        Err(PasswordHashError::Password) => Ok(false),
        Err(_) => Err(HashError::VerifyFailed),
    }
}

#[async_trait]
impl PasswordHasher for Argon2Hasher {
    async fn hash_password(&self, password: &str) -> Result<String, HashError> {
        let argon2 = self.argon2();
        let salt = self.salt();
        let password = password.to_owned();

        run_blocking(move || {
            argon2
                .hash_password(password.as_bytes(), &salt)
                .map(|phc| phc.to_string())
                .map_err(|_| HashError::HashFailed)
        })
        .await
    }

    async fn verify_password(&self, password: &str, hash: &str) -> Result<bool, HashError> {
        let password = password.to_owned();
        let hash = hash.to_owned();

        run_blocking(move || check_password(password.as_bytes(), &hash)).await
    }
}
