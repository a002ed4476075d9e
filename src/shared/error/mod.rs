mod service_error;
mod store_error;

pub use service_error::{ErrorKind, ServiceError};
pub use store_error::StoreError;
