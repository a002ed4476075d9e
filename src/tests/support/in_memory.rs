//! In-memory store enforcing the same constraints as the Postgres schema:
//! partial unique indexes on active accounts, the unique gender title and
//! the restricting foreign key from accounts to genders. Every operation
//! runs under a single lock so checks and writes are atomic.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

use crate::account::application::domain::entities::{Account, AccountInfo};
use crate::account::application::ports::outgoing::{
    AccountRepository, NewAccount, ACCOUNT_EMAIL_UNIQUE, ACCOUNT_GENDER_FK,
    ACCOUNT_USERNAME_UNIQUE,
};
use crate::gender::application::domain::entities::Gender;
use crate::gender::application::ports::outgoing::{
    GenderRepository, GENDER_IN_USE_FK, GENDER_TITLE_UNIQUE,
};
use crate::shared::error::StoreError;

struct AccountRow {
    account: Account,
    password_hash: String,
}

#[derive(Default)]
struct Tables {
    accounts: Vec<AccountRow>,
    genders: BTreeMap<i16, String>,
    next_gender_id: i16,
}

#[derive(Clone, Default)]
pub struct InMemoryStore {
    tables: Arc<Mutex<Tables>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Tables> {
        self.tables.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Tables {
    fn active(&self, id: Uuid) -> Option<usize> {
        self.accounts
            .iter()
            .position(|r| r.account.id == id && r.account.deleted_at.is_none())
    }

    /// Rejects `email`/`username` when another active row (not `skip`) holds it.
    fn check_unique(
        &self,
        skip: Option<Uuid>,
        email: &str,
        username: Option<&str>,
    ) -> Result<(), StoreError> {
        for row in &self.accounts {
            let a = &row.account;
            if a.deleted_at.is_some() || Some(a.id) == skip {
                continue;
            }
            if a.email == email {
                return Err(unique(ACCOUNT_EMAIL_UNIQUE));
            }
            if username.is_some() && a.username.as_deref() == username {
                return Err(unique(ACCOUNT_USERNAME_UNIQUE));
            }
        }
        Ok(())
    }

    fn check_gender(&self, gender: Option<i16>) -> Result<(), StoreError> {
        match gender {
            Some(id) if !self.genders.contains_key(&id) => Err(StoreError::ForeignKeyViolation {
                constraint: ACCOUNT_GENDER_FK.to_string(),
            }),
            _ => Ok(()),
        }
    }

    /// Applies `change` to the active row and bumps `updated_at`.
    fn update_active(
        &mut self,
        id: Uuid,
        change: impl FnOnce(&mut AccountRow),
    ) -> Result<Account, StoreError> {
        let idx = self.active(id).ok_or(StoreError::NoRows)?;
        let row = &mut self.accounts[idx];
        change(row);
        row.account.updated_at = later_than(row.account.updated_at);
        Ok(row.account.clone())
    }
}

fn unique(constraint: &str) -> StoreError {
    StoreError::UniqueViolation {
        constraint: constraint.to_string(),
    }
}

// Keeps timestamps strictly increasing even when the clock does not tick.
fn later_than(previous: DateTime<Utc>) -> DateTime<Utc> {
    let now = Utc::now();
    if now > previous {
        now
    } else {
        previous + Duration::microseconds(1)
    }
}

#[async_trait]
impl AccountRepository for InMemoryStore {
    async fn create_account(&self, data: NewAccount) -> Result<Account, StoreError> {
        let mut tables = self.lock();
        tables.check_gender(data.gender)?;
        tables.check_unique(None, &data.email, data.username.as_deref())?;

        let now = Utc::now();
        let account = Account {
            id: Uuid::new_v4(),
            username: data.username,
            email: data.email,
            first_name: data.first_name,
            last_name: data.last_name,
            gender: data.gender,
            birth_day: data.birth_day,
            phone_number: data.phone_number,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        };
        tables.accounts.push(AccountRow {
            account: account.clone(),
            password_hash: data.password_hash,
        });
        Ok(account)
    }

    async fn get_account_by_id(&self, id: Uuid) -> Result<Account, StoreError> {
        let tables = self.lock();
        let idx = tables.active(id).ok_or(StoreError::NoRows)?;
        Ok(tables.accounts[idx].account.clone())
    }

    async fn get_account_by_email(&self, email: &str) -> Result<Account, StoreError> {
        self.lock()
            .accounts
            .iter()
            .map(|r| &r.account)
            .find(|a| a.deleted_at.is_none() && a.email == email)
            .cloned()
            .ok_or(StoreError::NoRows)
    }

    async fn get_account_by_username(&self, username: &str) -> Result<Account, StoreError> {
        self.lock()
            .accounts
            .iter()
            .map(|r| &r.account)
            .find(|a| a.deleted_at.is_none() && a.username.as_deref() == Some(username))
            .cloned()
            .ok_or(StoreError::NoRows)
    }

    async fn update_email(&self, id: Uuid, email: String) -> Result<Account, StoreError> {
        let mut tables = self.lock();
        tables.active(id).ok_or(StoreError::NoRows)?;
        tables.check_unique(Some(id), &email, None)?;
        tables.update_active(id, |row| row.account.email = email)
    }

    async fn update_username(&self, id: Uuid, username: String) -> Result<Account, StoreError> {
        let mut tables = self.lock();
        let idx = tables.active(id).ok_or(StoreError::NoRows)?;
        let email = tables.accounts[idx].account.email.clone();
        tables.check_unique(Some(id), &email, Some(&username))?;
        tables.update_active(id, |row| row.account.username = Some(username))
    }

    async fn update_phone_number(
        &self,
        id: Uuid,
        phone_number: Option<String>,
    ) -> Result<Account, StoreError> {
        self.lock()
            .update_active(id, |row| row.account.phone_number = phone_number)
    }

    async fn update_password(
        &self,
        id: Uuid,
        password_hash: String,
    ) -> Result<Account, StoreError> {
        self.lock()
            .update_active(id, |row| row.password_hash = password_hash)
    }

    async fn update_info(&self, id: Uuid, info: AccountInfo) -> Result<Account, StoreError> {
        let mut tables = self.lock();
        tables.active(id).ok_or(StoreError::NoRows)?;
        tables.check_gender(info.gender)?;
        tables.update_active(id, |row| {
            row.account.first_name = info.first_name;
            row.account.last_name = info.last_name;
            row.account.gender = info.gender;
            row.account.birth_day = info.birth_day;
            row.account.phone_number = info.phone_number;
        })
    }

    async fn soft_delete(&self, id: Uuid) -> Result<(), StoreError> {
        let mut tables = self.lock();
        let idx = tables.active(id).ok_or(StoreError::NoRows)?;
        let account = &mut tables.accounts[idx].account;
        let now = later_than(account.updated_at);
        account.deleted_at = Some(now);
        account.updated_at = now;
        Ok(())
    }

    async fn recover(&self, id: Uuid) -> Result<Account, StoreError> {
        let mut tables = self.lock();
        let idx = tables
            .accounts
            .iter()
            .position(|r| r.account.id == id && r.account.deleted_at.is_some())
            .ok_or(StoreError::NoRows)?;

        let (email, username) = {
            let a = &tables.accounts[idx].account;
            (a.email.clone(), a.username.clone())
        };
        tables.check_unique(Some(id), &email, username.as_deref())?;

        let account = &mut tables.accounts[idx].account;
        account.deleted_at = None;
        account.updated_at = later_than(account.updated_at);
        Ok(account.clone())
    }

    async fn delete_permanent(&self, id: Uuid) -> Result<(), StoreError> {
        let mut tables = self.lock();
        let before = tables.accounts.len();
        tables.accounts.retain(|r| r.account.id != id);
        if tables.accounts.len() == before {
            return Err(StoreError::NoRows);
        }
        Ok(())
    }

    async fn get_password_hash(&self, id: Uuid) -> Result<String, StoreError> {
        let tables = self.lock();
        let idx = tables.active(id).ok_or(StoreError::NoRows)?;
        Ok(tables.accounts[idx].password_hash.clone())
    }
}

#[async_trait]
impl GenderRepository for InMemoryStore {
    async fn create_gender(&self, title: String) -> Result<Gender, StoreError> {
        let mut tables = self.lock();
        if tables.genders.values().any(|t| *t == title) {
            return Err(unique(GENDER_TITLE_UNIQUE));
        }
        tables.next_gender_id += 1;
        let id = tables.next_gender_id;
        tables.genders.insert(id, title.clone());
        Ok(Gender { id, title })
    }

    async fn get_gender(&self, id: i16) -> Result<Gender, StoreError> {
        self.lock()
            .genders
            .get(&id)
            .map(|title| Gender {
                id,
                title: title.clone(),
            })
            .ok_or(StoreError::NoRows)
    }

    async fn list_genders(&self) -> Result<Vec<Gender>, StoreError> {
        Ok(self
            .lock()
            .genders
            .iter()
            .map(|(id, title)| Gender {
                id: *id,
                title: title.clone(),
            })
            .collect())
    }

    async fn delete_gender(&self, id: i16) -> Result<(), StoreError> {
        let mut tables = self.lock();
        if !tables.genders.contains_key(&id) {
            return Err(StoreError::NoRows);
        }
        if tables.accounts.iter().any(|r| r.account.gender == Some(id)) {
            return Err(StoreError::ForeignKeyViolation {
                constraint: GENDER_IN_USE_FK.to_string(),
            });
        }
        tables.genders.remove(&id);
        Ok(())
    }
}
