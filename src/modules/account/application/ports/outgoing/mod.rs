mod account_repository;
mod password_hasher;

pub use account_repository::{
    AccountRepository, NewAccount, ACCOUNT_EMAIL_UNIQUE, ACCOUNT_GENDER_FK,
    ACCOUNT_USERNAME_UNIQUE,
};
pub use password_hasher::{HashError, PasswordHasher};
