use sea_orm::entity::prelude::*;
use uuid::Uuid;

use crate::account::application::domain::entities::Account;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "accounts")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    pub username: Option<String>,

    pub email: String,

    pub password_hash: String,

    pub first_name: String,

    pub last_name: String,

    pub gender_id: Option<i16>,

    pub birth_day: Option<Date>,

    pub phone_number: Option<String>,

    pub created_at: DateTimeWithTimeZone,

    pub updated_at: DateTimeWithTimeZone,

    pub deleted_at: Option<DateTimeWithTimeZone>,
}

impl Model {
    pub fn to_account(&self) -> Account {
        Account {
            id: self.id,
            username: self.username.clone(),
            email: self.email.clone(),
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            gender: self.gender_id,
            birth_day: self.birth_day,
            phone_number: self.phone_number.clone(),
            created_at: self.created_at.into(),
            updated_at: self.updated_at.into(),
            deleted_at: self.deleted_at.map(Into::into),
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "crate::modules::gender::adapter::outgoing::sea_orm_entity::Entity",
        from = "Column::GenderId",
        to = "crate::modules::gender::adapter::outgoing::sea_orm_entity::Column::Id"
    )]
    Gender,
}

impl Related<crate::modules::gender::adapter::outgoing::sea_orm_entity::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Gender.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
