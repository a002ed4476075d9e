use sea_orm::entity::prelude::*;

use crate::gender::application::domain::entities::Gender;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "genders")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i16,

    pub title: String,
}

impl Model {
    pub fn to_gender(&self) -> Gender {
        Gender {
            id: self.id,
            title: self.title.clone(),
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "crate::modules::account::adapter::outgoing::sea_orm_entity::accounts::Entity")]
    Accounts,
}

impl Related<crate::modules::account::adapter::outgoing::sea_orm_entity::accounts::Entity>
    for Entity
{
    fn to() -> RelationDef {
        Relation::Accounts.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
