use std::time::Instant;

use async_trait::async_trait;

use crate::gender::application::{domain::entities::Gender, ports::incoming::GenderService};
use crate::shared::error::ServiceError;
use crate::shared::logging::log_outcome;

const SERVICE: &str = "gender";

#[derive(Clone)]
pub struct LoggingGenderService<S>
where
    S: GenderService,
{
    inner: S,
}

impl<S> LoggingGenderService<S>
where
    S: GenderService,
{
    pub fn new(inner: S) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl<S> GenderService for LoggingGenderService<S>
where
    S: GenderService,
{
    async fn add_gender(&self, title: &str) -> Result<Gender, ServiceError> {
        let started = Instant::now();
        let result = self.inner.add_gender(title).await;
        log_outcome(SERVICE, "add_gender", started, &result);
        result
    }

    async fn get_gender(&self, id: i16) -> Result<Gender, ServiceError> {
        let started = Instant::now();
        let result = self.inner.get_gender(id).await;
        log_outcome(SERVICE, "get_gender", started, &result);
        result
    }

    async fn list_genders(&self) -> Result<Vec<Gender>, ServiceError> {
        let started = Instant::now();
        let result = self.inner.list_genders().await;
        log_outcome(SERVICE, "list_genders", started, &result);
        result
    }

    async fn remove_gender(&self, id: i16) -> Result<(), ServiceError> {
        let started = Instant::now();
        let result = self.inner.remove_gender(id).await;
        log_outcome(SERVICE, "remove_gender", started, &result);
        result
    }
}
