use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::account::application::{
    domain::entities::{Account, AccountInfo},
    ports::{
        incoming::{AccountService, CreateUserRequest, UpdateUserInfoRequest},
        outgoing::{
            AccountRepository, HashError, NewAccount, PasswordHasher, ACCOUNT_EMAIL_UNIQUE,
            ACCOUNT_GENDER_FK, ACCOUNT_USERNAME_UNIQUE,
        },
    },
};
use crate::shared::error::{ServiceError, StoreError};
use crate::shared::validation::{optional, required, required_id, required_secret};

/// Business rules of the account lifecycle.
///
/// Inputs are validated before the hasher or the repository is touched.
/// Passwords are hashed before the repository call and verified after it
/// returned, so no store connection is held while hashing.
#[derive(Clone)]
pub struct AccountLifecycleService<R>
where
    R: AccountRepository,
{
    repository: R,
    hasher: Arc<dyn PasswordHasher>,
}

impl<R> AccountLifecycleService<R>
where
    R: AccountRepository,
{
    pub fn new(repository: R, hasher: Arc<dyn PasswordHasher>) -> Self {
        Self { repository, hasher }
    }

    async fn hash(&self, password: &str) -> Result<String, ServiceError> {
        self.hasher
            .hash_password(password)
            .await
            .map_err(|e| hash_error("could not hash password", e))
    }
}

#[async_trait]
impl<R> AccountService for AccountLifecycleService<R>
where
    R: AccountRepository,
{
    async fn create_user(&self, request: CreateUserRequest) -> Result<Account, ServiceError> {
        let email = required("email", &request.email)?;
        let password = required_secret("password", &request.password)?;
        let first_name = required("first_name", &request.first_name)?;
        let last_name = required("last_name", &request.last_name)?;

        let password_hash = self.hash(password).await?;

        let data = NewAccount {
            username: optional(request.username.as_deref()),
            email,
            password_hash,
            first_name,
            last_name,
            gender: request.gender,
            birth_day: request.birth_day,
            phone_number: optional(request.phone_number.as_deref()),
        };

        self.repository
            .create_account(data)
            .await
            .map_err(|e| store_error("could not create account", e))
    }

    async fn get_user_by_id(&self, id: Uuid) -> Result<Account, ServiceError> {
        let id = required_id("id", id)?;

        self.repository
            .get_account_by_id(id)
            .await
            .map_err(|e| store_error("could not load account", e))
    }

    async fn get_user_by_email(&self, email: &str) -> Result<Account, ServiceError> {
        let email = required("email", email)?;

        self.repository
            .get_account_by_email(&email)
            .await
            .map_err(|e| store_error("could not load account", e))
    }

    async fn get_user_by_username(&self, username: &str) -> Result<Account, ServiceError> {
        let username = required("username", username)?;

        self.repository
            .get_account_by_username(&username)
            .await
            .map_err(|e| store_error("could not load account", e))
    }

    async fn update_user_email(&self, id: Uuid, email: &str) -> Result<Account, ServiceError> {
        let id = required_id("id", id)?;
        let email = required("email", email)?;

        self.repository
            .update_email(id, email)
            .await
            .map_err(|e| store_error("could not update email", e))
    }

    async fn update_user_username(
        &self,
        id: Uuid,
        username: &str,
    ) -> Result<Account, ServiceError> {
        let id = required_id("id", id)?;
        let username = required("username", username)?;

        self.repository
            .update_username(id, username)
            .await
            .map_err(|e| store_error("could not update username", e))
    }

    async fn update_user_phone_number(
        &self,
        id: Uuid,
        phone_number: Option<&str>,
    ) -> Result<Account, ServiceError> {
        let id = required_id("id", id)?;

        self.repository
            .update_phone_number(id, optional(phone_number))
            .await
            .map_err(|e| store_error("could not update phone number", e))
    }

    async fn update_user_password(
        &self,
        id: Uuid,
        password: &str,
    ) -> Result<Account, ServiceError> {
        let id = required_id("id", id)?;
        let password = required_secret("password", password)?;

        let password_hash = self.hash(password).await?;

        self.repository
            .update_password(id, password_hash)
            .await
            .map_err(|e| store_error("could not update password", e))
    }

    async fn update_user_info(
        &self,
        id: Uuid,
        request: UpdateUserInfoRequest,
    ) -> Result<Account, ServiceError> {
        let id = required_id("id", id)?;
        let info = AccountInfo {
            first_name: required("first_name", &request.first_name)?,
            last_name: required("last_name", &request.last_name)?,
            gender: request.gender,
            birth_day: request.birth_day,
            phone_number: optional(request.phone_number.as_deref()),
        };

        self.repository
            .update_info(id, info)
            .await
            .map_err(|e| store_error("could not update account info", e))
    }

    async fn delete_user_soft(&self, id: Uuid) -> Result<(), ServiceError> {
        let id = required_id("id", id)?;

        self.repository
            .soft_delete(id)
            .await
            .map_err(|e| store_error("could not delete account", e))
    }

    async fn recover_user(&self, id: Uuid) -> Result<Account, ServiceError> {
        let id = required_id("id", id)?;

        self.repository
            .recover(id)
            .await
            .map_err(|e| store_error("could not recover account", e))
    }

    async fn delete_user_permanent(&self, id: Uuid) -> Result<(), ServiceError> {
        let id = required_id("id", id)?;

        self.repository
            .delete_permanent(id)
            .await
            .map_err(|e| store_error("could not remove account", e))
    }

    async fn verify_password(&self, id: Uuid, password: &str) -> Result<(), ServiceError> {
        let id = required_id("id", id)?;
        let password = required_secret("password", password)?;

        let hash = self
            .repository
            .get_password_hash(id)
            .await
            .map_err(|e| store_error("could not load credentials", e))?;

        let matches = self
            .hasher
            .verify_password(password, &hash)
            .await
            .map_err(|e| hash_error("could not verify password", e))?;

        if matches {
            Ok(())
        } else {
            Err(ServiceError::WrongPassword)
        }
    }
}

// Constraint names are the only thing that decides which field clashed.
fn store_error(context: &'static str, err: StoreError) -> ServiceError {
    match err {
        StoreError::NoRows => ServiceError::NotFound("account"),
        StoreError::UniqueViolation { ref constraint }
            if constraint.as_str() == ACCOUNT_EMAIL_UNIQUE =>
        {
            ServiceError::DuplicateValue("email")
        }
        StoreError::UniqueViolation { ref constraint }
            if constraint.as_str() == ACCOUNT_USERNAME_UNIQUE =>
        {
            ServiceError::DuplicateValue("username")
        }
        StoreError::ForeignKeyViolation { ref constraint }
            if constraint.as_str() == ACCOUNT_GENDER_FK =>
        {
            ServiceError::ReferenceViolation("gender")
        }
        other => ServiceError::internal(context, other),
    }
}

fn hash_error(context: &'static str, err: HashError) -> ServiceError {
    ServiceError::internal(context, err)
}
