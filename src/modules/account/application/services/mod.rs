mod account_lifecycle_service;
mod logging_account_service;

pub use account_lifecycle_service::AccountLifecycleService;
pub use logging_account_service::LoggingAccountService;
