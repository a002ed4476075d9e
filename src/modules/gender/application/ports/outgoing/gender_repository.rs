use async_trait::async_trait;

use crate::gender::application::domain::entities::Gender;
use crate::shared::error::StoreError;

pub const GENDER_TITLE_UNIQUE: &str = "idx_genders_title_unique";
/// Raised when a gender is removed while accounts still reference it.
pub const GENDER_IN_USE_FK: &str = "fk_accounts_gender_id";

#[async_trait]
pub trait GenderRepository: Send + Sync {
    async fn create_gender(&self, title: String) -> Result<Gender, StoreError>;
    async fn get_gender(&self, id: i16) -> Result<Gender, StoreError>;
    async fn list_genders(&self) -> Result<Vec<Gender>, StoreError>;
    async fn delete_gender(&self, id: i16) -> Result<(), StoreError>;
}
