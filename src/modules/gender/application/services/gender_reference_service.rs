use async_trait::async_trait;

use crate::gender::application::{
    domain::entities::Gender,
    ports::{
        incoming::GenderService,
        outgoing::{GenderRepository, GENDER_IN_USE_FK, GENDER_TITLE_UNIQUE},
    },
};
use crate::shared::error::{ServiceError, StoreError};
use crate::shared::validation::required;

#[derive(Debug, Clone)]
pub struct GenderReferenceService<R>
where
    R: GenderRepository,
{
    repository: R,
}

impl<R> GenderReferenceService<R>
where
    R: GenderRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

fn required_gender_id(id: i16) -> Result<i16, ServiceError> {
    if id == 0 {
        return Err(ServiceError::MissingField("id"));
    }
    Ok(id)
}

#[async_trait]
impl<R> GenderService for GenderReferenceService<R>
where
    R: GenderRepository,
{
    async fn add_gender(&self, title: &str) -> Result<Gender, ServiceError> {
        let title = required("title", title)?;

        self.repository
            .create_gender(title)
            .await
            .map_err(|e| store_error("could not create gender", e))
    }

    async fn get_gender(&self, id: i16) -> Result<Gender, ServiceError> {
        let id = required_gender_id(id)?;

        self.repository
            .get_gender(id)
            .await
            .map_err(|e| store_error("could not load gender", e))
    }

    async fn list_genders(&self) -> Result<Vec<Gender>, ServiceError> {
        self.repository
            .list_genders()
            .await
            .map_err(|e| store_error("could not list genders", e))
    }

    async fn remove_gender(&self, id: i16) -> Result<(), ServiceError> {
        let id = required_gender_id(id)?;

        self.repository
            .delete_gender(id)
            .await
            .map_err(|e| store_error("could not remove gender", e))
    }
}

fn store_error(context: &'static str, err: StoreError) -> ServiceError {
    match err {
        StoreError::NoRows => ServiceError::NotFound("gender"),
        StoreError::UniqueViolation { ref constraint }
            if constraint.as_str() == GENDER_TITLE_UNIQUE =>
        {
            ServiceError::DuplicateValue("title")
        }
        StoreError::ForeignKeyViolation { ref constraint }
            if constraint.as_str() == GENDER_IN_USE_FK =>
        {
            ServiceError::ReferenceViolation("gender")
        }
        other => ServiceError::internal(context, other),
    }
}
