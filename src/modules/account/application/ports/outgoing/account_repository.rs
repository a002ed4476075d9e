use async_trait::async_trait;
use chrono::NaiveDate;
use uuid::Uuid;

use crate::account::application::domain::entities::{Account, AccountInfo};
use crate::shared::error::StoreError;

/// Partial unique index on `accounts.email` over active rows.
pub const ACCOUNT_EMAIL_UNIQUE: &str = "idx_accounts_email_active";
/// Partial unique index on `accounts.username` over active rows.
pub const ACCOUNT_USERNAME_UNIQUE: &str = "idx_accounts_username_active";
/// Foreign key from `accounts.gender_id` to `genders.id`.
pub const ACCOUNT_GENDER_FK: &str = "fk_accounts_gender_id";

// Input DTO for creating an account
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAccount {
    pub username: Option<String>,
    pub email: String,
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
    pub gender: Option<i16>,
    pub birth_day: Option<NaiveDate>,
    pub phone_number: Option<String>,
}

/// Persistence boundary for accounts.
///
/// Lookups and updates only see active rows (`deleted_at IS NULL`).
/// `recover` only sees soft-deleted rows and `delete_permanent` sees both.
/// Anything that matches no row reports [`StoreError::NoRows`].
#[async_trait]
pub trait AccountRepository: Send + Sync {
    async fn create_account(&self, data: NewAccount) -> Result<Account, StoreError>;

    async fn get_account_by_id(&self, id: Uuid) -> Result<Account, StoreError>;
    async fn get_account_by_email(&self, email: &str) -> Result<Account, StoreError>;
    async fn get_account_by_username(&self, username: &str) -> Result<Account, StoreError>;

    async fn update_email(&self, id: Uuid, email: String) -> Result<Account, StoreError>;
    async fn update_username(&self, id: Uuid, username: String) -> Result<Account, StoreError>;
    async fn update_phone_number(
        &self,
        id: Uuid,
        phone_number: Option<String>,
    ) -> Result<Account, StoreError>;
    async fn update_password(&self, id: Uuid, password_hash: String)
        -> Result<Account, StoreError>;
    async fn update_info(&self, id: Uuid, info: AccountInfo) -> Result<Account, StoreError>;

    async fn soft_delete(&self, id: Uuid) -> Result<(), StoreError>;
    async fn recover(&self, id: Uuid) -> Result<Account, StoreError>;
    async fn delete_permanent(&self, id: Uuid) -> Result<(), StoreError>;

    async fn get_password_hash(&self, id: Uuid) -> Result<String, StoreError>;
}
