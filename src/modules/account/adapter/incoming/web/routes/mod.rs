mod create_account;
mod delete_account;
mod get_account;
mod update_account;
mod verify_password;

pub use create_account::create_account_handler;
pub use delete_account::{
    delete_account_permanent_handler, delete_account_soft_handler, recover_account_handler,
};
pub use get_account::{find_account_handler, get_account_handler};
pub use update_account::{
    update_email_handler, update_info_handler, update_password_handler,
    update_phone_number_handler, update_username_handler,
};
pub use verify_password::verify_password_handler;
