mod gender_repository_postgres;
pub mod sea_orm_entity;

pub use gender_repository_postgres::GenderRepositoryPostgres;
