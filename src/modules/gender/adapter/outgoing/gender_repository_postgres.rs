use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, NotSet, QueryFilter, QueryOrder,
    Set,
};
use std::sync::Arc;

use crate::gender::application::domain::entities::Gender;
use crate::gender::application::ports::outgoing::GenderRepository;
use crate::shared::error::StoreError;
use crate::shared::persistence::classify_db_error;

use super::sea_orm_entity::{
    ActiveModel as GenderActiveModel, Column, Entity as GenderEntity, Model as GenderModel,
};

#[derive(Clone, Debug)]
pub struct GenderRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl GenderRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl GenderRepository for GenderRepositoryPostgres {
    async fn create_gender(&self, title: String) -> Result<Gender, StoreError> {
        let active = GenderActiveModel {
            id: NotSet,
            title: Set(title),
        };

        let inserted: GenderModel = active.insert(&*self.db).await.map_err(classify_db_error)?;

        Ok(inserted.to_gender())
    }

    async fn get_gender(&self, id: i16) -> Result<Gender, StoreError> {
        GenderEntity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(classify_db_error)?
            .map(|model| model.to_gender())
            .ok_or(StoreError::NoRows)
    }

    async fn list_genders(&self) -> Result<Vec<Gender>, StoreError> {
        let models = GenderEntity::find()
            .order_by_asc(Column::Id)
            .all(&*self.db)
            .await
            .map_err(classify_db_error)?;

        Ok(models.iter().map(GenderModel::to_gender).collect())
    }

    // Accounts referencing the row make Postgres reject the delete with a
    // foreign key violation.
    async fn delete_gender(&self, id: i16) -> Result<(), StoreError> {
        let res = GenderEntity::delete_many()
            .filter(Column::Id.eq(id))
            .exec(&*self.db)
            .await
            .map_err(classify_db_error)?;

        if res.rows_affected == 0 {
            return Err(StoreError::NoRows);
        }

        Ok(())
    }
}
