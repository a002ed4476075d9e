pub mod account;
pub mod gender;
