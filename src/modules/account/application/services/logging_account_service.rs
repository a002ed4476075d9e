use std::time::Instant;

use async_trait::async_trait;
use uuid::Uuid;

use crate::account::application::{
    domain::entities::Account,
    ports::incoming::{AccountService, CreateUserRequest, UpdateUserInfoRequest},
};
use crate::shared::error::ServiceError;
use crate::shared::logging::log_outcome;

const SERVICE: &str = "account";

/// Wraps an [`AccountService`] and logs every call with its duration and
/// outcome. Only ids are logged; passwords, hashes and profile data are not.
#[derive(Clone)]
pub struct LoggingAccountService<S>
where
    S: AccountService,
{
    inner: S,
}

impl<S> LoggingAccountService<S>
where
    S: AccountService,
{
    pub fn new(inner: S) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl<S> AccountService for LoggingAccountService<S>
where
    S: AccountService,
{
    async fn create_user(&self, request: CreateUserRequest) -> Result<Account, ServiceError> {
        let started = Instant::now();
        let result = self.inner.create_user(request).await;
        if let Ok(account) = &result {
            tracing::debug!(account_id = %account.id, "account created");
        }
        log_outcome(SERVICE, "create_user", started, &result);
        result
    }

    async fn get_user_by_id(&self, id: Uuid) -> Result<Account, ServiceError> {
        let started = Instant::now();
        let result = self.inner.get_user_by_id(id).await;
        log_outcome(SERVICE, "get_user_by_id", started, &result);
        result
    }

    async fn get_user_by_email(&self, email: &str) -> Result<Account, ServiceError> {
        let started = Instant::now();
        let result = self.inner.get_user_by_email(email).await;
        log_outcome(SERVICE, "get_user_by_email", started, &result);
        result
    }

    async fn get_user_by_username(&self, username: &str) -> Result<Account, ServiceError> {
        let started = Instant::now();
        let result = self.inner.get_user_by_username(username).await;
        log_outcome(SERVICE, "get_user_by_username", started, &result);
        result
    }

    async fn update_user_email(&self, id: Uuid, email: &str) -> Result<Account, ServiceError> {
        let started = Instant::now();
        let result = self.inner.update_user_email(id, email).await;
        log_outcome(SERVICE, "update_user_email", started, &result);
        result
    }

    async fn update_user_username(
        &self,
        id: Uuid,
        username: &str,
    ) -> Result<Account, ServiceError> {
        let started = Instant::now();
        let result = self.inner.update_user_username(id, username).await;
        log_outcome(SERVICE, "update_user_username", started, &result);
        result
    }

    async fn update_user_phone_number(
        &self,
        id: Uuid,
        phone_number: Option<&str>,
    ) -> Result<Account, ServiceError> {
        let started = Instant::now();
        let result = self.inner.update_user_phone_number(id, phone_number).await;
        log_outcome(SERVICE, "update_user_phone_number", started, &result);
        result
    }

    async fn update_user_password(
        &self,
        id: Uuid,
        password: &str,
    ) -> Result<Account, ServiceError> {
        let started = Instant::now();
        let result = self.inner.update_user_password(id, password).await;
        log_outcome(SERVICE, "update_user_password", started, &result);
        result
    }

    async fn update_user_info(
        &self,
        id: Uuid,
        request: UpdateUserInfoRequest,
    ) -> Result<Account, ServiceError> {
        let started = Instant::now();
        let result = self.inner.update_user_info(id, request).await;
        log_outcome(SERVICE, "update_user_info", started, &result);
        result
    }

    async fn delete_user_soft(&self, id: Uuid) -> Result<(), ServiceError> {
        let started = Instant::now();
        let result = self.inner.delete_user_soft(id).await;
        log_outcome(SERVICE, "delete_user_soft", started, &result);
        result
    }

    async fn recover_user(&self, id: Uuid) -> Result<Account, ServiceError> {
        let started = Instant::now();
        let result = self.inner.recover_user(id).await;
        log_outcome(SERVICE, "recover_user", started, &result);
        result
    }

    async fn delete_user_permanent(&self, id: Uuid) -> Result<(), ServiceError> {
        let started = Instant::now();
        let result = self.inner.delete_user_permanent(id).await;
        log_outcome(SERVICE, "delete_user_permanent", started, &result);
        result
    }

    async fn verify_password(&self, id: Uuid, password: &str) -> Result<(), ServiceError> {
        let started = Instant::now();
        let result = self.inner.verify_password(id, password).await;
        log_outcome(SERVICE, "verify_password", started, &result);
        result
    }
}
