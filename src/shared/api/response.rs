use actix_web::{http::StatusCode, HttpResponse};
use serde::Serialize;
use tracing::error;

use crate::shared::error::{ErrorKind, ServiceError};

#[derive(Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ApiError>,
}

#[derive(Serialize, Clone, Debug)]
pub struct ApiError {
    pub code: String,
    pub message: String,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(data: T) -> HttpResponse {
        HttpResponse::Ok().json(ApiResponse {
            success: true,
            data: Some(data),
            error: None,
        })
    }

    pub fn created(data: T) -> HttpResponse {
        HttpResponse::Created().json(ApiResponse {
            success: true,
            data: Some(data),
            error: None,
        })
    }
}

impl ApiResponse<()> {
    pub fn no_content() -> HttpResponse {
        HttpResponse::NoContent().finish()
    }

    pub fn error(status: StatusCode, code: &str, message: &str) -> HttpResponse {
        HttpResponse::build(status).json(ApiResponse::<()> {
            success: false,
            data: None,
            error: Some(ApiError {
                code: code.to_string(),
                message: message.to_string(),
            }),
        })
    }

    pub fn bad_request(code: &str, message: &str) -> HttpResponse {
        Self::error(StatusCode::BAD_REQUEST, code, message)
    }

    pub fn internal_error() -> HttpResponse {
        Self::error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "INTERNAL_ERROR",
            "An unexpected error occurred",
        )
    }

    /// Maps a [`ServiceError`] onto the HTTP envelope. Internal causes are
    /// logged here and never reach the client.
    pub fn from_service_error(err: &ServiceError) -> HttpResponse {
        let kind = err.kind();

        if kind == ErrorKind::Internal {
            let cause = std::error::Error::source(err)
                .map(ToString::to_string)
                .unwrap_or_default();
            error!(error = %err, cause = %cause, "request failed");
            return Self::internal_error();
        }

        let status = match kind {
            ErrorKind::MissingField => StatusCode::BAD_REQUEST,
            ErrorKind::DuplicateValue => StatusCode::CONFLICT,
            ErrorKind::NotFound => StatusCode::NOT_FOUND,
            ErrorKind::WrongPassword => StatusCode::UNAUTHORIZED,
            ErrorKind::ReferenceViolation => StatusCode::CONFLICT,
            ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        };

        Self::error(status, kind.code(), &err.to_string())
    }
}
