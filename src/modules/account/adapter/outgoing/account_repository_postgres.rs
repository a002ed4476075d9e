use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    prelude::DateTimeWithTimeZone,
    sea_query::{Expr, IntoCondition},
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set, Value,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::account::application::domain::entities::{Account, AccountInfo};
use crate::account::application::ports::outgoing::{AccountRepository, NewAccount};
use crate::shared::error::StoreError;
use crate::shared::persistence::classify_db_error;

use super::sea_orm_entity::accounts::{
    ActiveModel as AccountActiveModel, Column, Entity as AccountEntity, Model as AccountModel,
};

/// Postgres-backed [`AccountRepository`].
///
/// Every state transition is one conditional statement, so concurrent
/// callers serialize on the row and the loser sees zero rows.
#[derive(Clone, Debug)]
pub struct AccountRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl AccountRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn find_active(&self, filter: impl IntoCondition) -> Result<AccountModel, StoreError> {
        AccountEntity::find()
            .filter(filter)
            .filter(Column::DeletedAt.is_null())
            .one(&*self.db)
            .await
            .map_err(classify_db_error)?
            .ok_or(StoreError::NoRows)
    }

    /// Runs `UPDATE accounts SET <values>, updated_at = now()
    /// WHERE id = $1 AND deleted_at IS NULL RETURNING *`.
    async fn update_active(
        &self,
        id: Uuid,
        values: Vec<(Column, Value)>,
    ) -> Result<Account, StoreError> {
        let mut update = AccountEntity::update_many()
            .col_expr(Column::UpdatedAt, Expr::value(now()))
            .filter(Column::Id.eq(id))
            .filter(Column::DeletedAt.is_null());

        for (column, value) in values {
            update = update.col_expr(column, Expr::value(value));
        }

        let rows = update
            .exec_with_returning(&*self.db)
            .await
            .map_err(classify_db_error)?;

        first_account(rows)
    }
}

fn now() -> DateTimeWithTimeZone {
    Utc::now().fixed_offset()
}

fn first_account(rows: Vec<AccountModel>) -> Result<Account, StoreError> {
    rows.into_iter()
        .next()
        .map(|model| model.to_account())
        .ok_or(StoreError::NoRows)
}

#[async_trait]
impl AccountRepository for AccountRepositoryPostgres {
    async fn create_account(&self, data: NewAccount) -> Result<Account, StoreError> {
        let now = now();
        let active = AccountActiveModel {
            id: Set(Uuid::new_v4()),
            username: Set(data.username),
            email: Set(data.email),
            password_hash: Set(data.password_hash),
            first_name: Set(data.first_name),
            last_name: Set(data.last_name),
            gender_id: Set(data.gender),
            birth_day: Set(data.birth_day),
            phone_number: Set(data.phone_number),
            created_at: Set(now),
            updated_at: Set(now),
            deleted_at: Set(None),
        };

        let inserted: AccountModel = active.insert(&*self.db).await.map_err(classify_db_error)?;

        Ok(inserted.to_account())
    }

    async fn get_account_by_id(&self, id: Uuid) -> Result<Account, StoreError> {
        self.find_active(Column::Id.eq(id))
            .await
            .map(|model| model.to_account())
    }

    async fn get_account_by_email(&self, email: &str) -> Result<Account, StoreError> {
        self.find_active(Column::Email.eq(email))
            .await
            .map(|model| model.to_account())
    }

    async fn get_account_by_username(&self, username: &str) -> Result<Account, StoreError> {
        self.find_active(Column::Username.eq(username))
            .await
            .map(|model| model.to_account())
    }

    async fn update_email(&self, id: Uuid, email: String) -> Result<Account, StoreError> {
        self.update_active(id, vec![(Column::Email, email.into())])
            .await
    }

    async fn update_username(&self, id: Uuid, username: String) -> Result<Account, StoreError> {
        self.update_active(id, vec![(Column::Username, Some(username).into())])
            .await
    }

    async fn update_phone_number(
        &self,
        id: Uuid,
        phone_number: Option<String>,
    ) -> Result<Account, StoreError> {
        self.update_active(id, vec![(Column::PhoneNumber, phone_number.into())])
            .await
    }

    async fn update_password(
        &self,
        id: Uuid,
        password_hash: String,
    ) -> Result<Account, StoreError> {
        self.update_active(id, vec![(Column::PasswordHash, password_hash.into())])
            .await
    }

    async fn update_info(&self, id: Uuid, info: AccountInfo) -> Result<Account, StoreError> {
        self.update_active(
            id,
            vec![
                (Column::FirstName, info.first_name.into()),
                (Column::LastName, info.last_name.into()),
                (Column::GenderId, info.gender.into()),
                (Column::BirthDay, info.birth_day.into()),
                (Column::PhoneNumber, info.phone_number.into()),
            ],
        )
        .await
    }

    async fn soft_delete(&self, id: Uuid) -> Result<(), StoreError> {
        let now = now();
        let res = AccountEntity::update_many()
            .col_expr(Column::DeletedAt, Expr::value(now))
            .col_expr(Column::UpdatedAt, Expr::value(now))
            .filter(Column::Id.eq(id))
            .filter(Column::DeletedAt.is_null())
            .exec(&*self.db)
            .await
            .map_err(classify_db_error)?;

        if res.rows_affected == 0 {
            return Err(StoreError::NoRows);
        }

        Ok(())
    }

    async fn recover(&self, id: Uuid) -> Result<Account, StoreError> {
        let rows = AccountEntity::update_many()
            .col_expr(
                Column::DeletedAt,
                Expr::value(Option::<DateTimeWithTimeZone>::None),
            )
            .col_expr(Column::UpdatedAt, Expr::value(now()))
            .filter(Column::Id.eq(id))
            .filter(Column::DeletedAt.is_not_null())
            .exec_with_returning(&*self.db)
            .await
            .map_err(classify_db_error)?;

        first_account(rows)
    }

    async fn delete_permanent(&self, id: Uuid) -> Result<(), StoreError> {
        let res = AccountEntity::delete_many()
            .filter(Column::Id.eq(id))
            .exec(&*self.db)
            .await
            .map_err(classify_db_error)?;

        if res.rows_affected == 0 {
            return Err(StoreError::NoRows);
        }

        Ok(())
    }

    async fn get_password_hash(&self, id: Uuid) -> Result<String, StoreError> {
        self.find_active(Column::Id.eq(id))
            .await
            .map(|model| model.password_hash)
    }
}
