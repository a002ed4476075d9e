mod gender_repository;

pub use gender_repository::{GenderRepository, GENDER_IN_USE_FK, GENDER_TITLE_UNIQUE};
