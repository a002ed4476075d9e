use uuid::Uuid;

use crate::shared::error::ServiceError;

/// Returns the trimmed value, or `MissingField` when nothing is left.
pub fn required(field: &'static str, value: &str) -> Result<String, ServiceError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ServiceError::MissingField(field));
    }
    Ok(value.to_string())
}

/// Like [`required`] but without trimming; whitespace is significant in
/// passwords.
pub fn required_secret<'a>(field: &'static str, value: &'a str) -> Result<&'a str, ServiceError> {
    if value.is_empty() {
        return Err(ServiceError::MissingField(field));
    }
    Ok(value)
}

pub fn required_id(field: &'static str, id: Uuid) -> Result<Uuid, ServiceError> {
    if id.is_nil() {
        return Err(ServiceError::MissingField(field));
    }
    Ok(id)
}

/// Empty optional values are stored as NULL.
pub fn optional(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}
