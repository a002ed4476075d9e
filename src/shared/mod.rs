pub mod api;
pub mod error;
pub mod persistence;
pub mod validation;
pub mod logging;
