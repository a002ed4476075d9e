mod gender_service;

pub use gender_service::GenderService;
