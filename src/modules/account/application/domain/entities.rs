use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use uuid::Uuid;

/// A user account as seen by callers. The password hash never leaves the
/// repository through this type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Account {
    pub id: Uuid,
    pub username: Option<String>,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub gender: Option<i16>,
    pub birth_day: Option<NaiveDate>,
    pub phone_number: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Account {
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }
}

/// Profile fields changed together by an info update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountInfo {
    pub first_name: String,
    pub last_name: String,
    pub gender: Option<i16>,
    pub birth_day: Option<NaiveDate>,
    pub phone_number: Option<String>,
}
