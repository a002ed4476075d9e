use async_trait::async_trait;
use chrono::NaiveDate;
use serde::Deserialize;
use std::fmt;
use uuid::Uuid;

use crate::account::application::domain::entities::Account;
use crate::shared::error::ServiceError;

#[derive(Clone, Default, Deserialize)]
pub struct CreateUserRequest {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub gender: Option<i16>,
    #[serde(default)]
    pub birth_day: Option<NaiveDate>,
    #[serde(default)]
    pub phone_number: Option<String>,
}

// Keeps the plaintext password out of `{:?}` output.
impl fmt::Debug for CreateUserRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CreateUserRequest")
            .field("username", &self.username)
            .field("email", &self.email)
            .field("password", &"[redacted]")
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("gender", &self.gender)
            .field("birth_day", &self.birth_day)
            .field("phone_number", &self.phone_number)
            .finish()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateUserInfoRequest {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub gender: Option<i16>,
    #[serde(default)]
    pub birth_day: Option<NaiveDate>,
    #[serde(default)]
    pub phone_number: Option<String>,
}

/// Account lifecycle operations.
///
/// Only active accounts are visible to lookups, updates and password
/// verification. A soft-deleted account can be recovered or removed for
/// good; a removed account is gone.
#[async_trait]
pub trait AccountService: Send + Sync {
    async fn create_user(&self, request: CreateUserRequest) -> Result<Account, ServiceError>;

    async fn get_user_by_id(&self, id: Uuid) -> Result<Account, ServiceError>;
    async fn get_user_by_email(&self, email: &str) -> Result<Account, ServiceError>;
    async fn get_user_by_username(&self, username: &str) -> Result<Account, ServiceError>;

    async fn update_user_email(&self, id: Uuid, email: &str) -> Result<Account, ServiceError>;
    async fn update_user_username(&self, id: Uuid, username: &str)
        -> Result<Account, ServiceError>;
    /// An empty or missing number clears the stored one.
    async fn update_user_phone_number(
        &self,
        id: Uuid,
        phone_number: Option<&str>,
    ) -> Result<Account, ServiceError>;
    async fn update_user_password(&self, id: Uuid, password: &str)
        -> Result<Account, ServiceError>;
    async fn update_user_info(
        &self,
        id: Uuid,
        request: UpdateUserInfoRequest,
    ) -> Result<Account, ServiceError>;

    async fn delete_user_soft(&self, id: Uuid) -> Result<(), ServiceError>;
    async fn recover_user(&self, id: Uuid) -> Result<Account, ServiceError>;
    async fn delete_user_permanent(&self, id: Uuid) -> Result<(), ServiceError>;

    /// `Ok(())` on a match, [`ServiceError::WrongPassword`] otherwise.
    async fn verify_password(&self, id: Uuid, password: &str) -> Result<(), ServiceError>;
}
