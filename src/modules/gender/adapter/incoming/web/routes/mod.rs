mod create_gender;
mod delete_gender;
mod get_genders;

pub use create_gender::create_gender_handler;
pub use delete_gender::delete_gender_handler;
pub use get_genders::{get_gender_handler, list_genders_handler};
