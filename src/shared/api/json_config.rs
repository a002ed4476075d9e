use actix_web::web::{JsonConfig, PathConfig, QueryConfig};
use actix_web::{error::InternalError, Error};

use crate::shared::api::ApiResponse;

fn rejected<E>(err: E) -> Error
where
    E: std::fmt::Debug + std::fmt::Display + 'static,
{
    let message = err.to_string();
    InternalError::from_response(err, ApiResponse::bad_request("VALIDATION_ERROR", &message)).into()
}

/// Malformed JSON bodies become a 400 in the usual envelope.
pub fn custom_json_config() -> JsonConfig {
    JsonConfig::default().error_handler(|err, _req| rejected(err))
}

/// Path segments that fail to parse (e.g. a non-UUID account id).
pub fn custom_path_config() -> PathConfig {
    PathConfig::default().error_handler(|err, _req| rejected(err))
}

pub fn custom_query_config() -> QueryConfig {
    QueryConfig::default().error_handler(|err, _req| rejected(err))
}
