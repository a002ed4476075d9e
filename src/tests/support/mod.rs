pub mod app_state_builder;
pub mod db_errors;
pub mod fake_hasher;
pub mod in_memory;
