use async_trait::async_trait;

use crate::gender::application::domain::entities::Gender;
use crate::shared::error::ServiceError;

/// Maintenance of the gender lookup table referenced by accounts.
#[async_trait]
pub trait GenderService: Send + Sync {
    async fn add_gender(&self, title: &str) -> Result<Gender, ServiceError>;
    async fn get_gender(&self, id: i16) -> Result<Gender, ServiceError>;
    /// All genders ordered by id.
    async fn list_genders(&self) -> Result<Vec<Gender>, ServiceError>;
    /// Fails with `ReferenceViolation` while any account still points at it.
    async fn remove_gender(&self, id: i16) -> Result<(), ServiceError>;
}
