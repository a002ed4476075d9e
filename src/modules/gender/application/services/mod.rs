mod gender_reference_service;
mod logging_gender_service;

pub use gender_reference_service::GenderReferenceService;
pub use logging_gender_service::LoggingGenderService;
