use actix_web::{post, web, Responder};
use serde::Deserialize;
use std::fmt;
use uuid::Uuid;

use crate::{shared::api::ApiResponse, AppState};

#[derive(Deserialize)]
pub struct VerifyPasswordRequest {
    #[serde(default)]
    password: String,
}

impl fmt::Debug for VerifyPasswordRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VerifyPasswordRequest")
            .field("password", &"[redacted]")
            .finish()
    }
}

/// 204 when the password matches the active account, 401 otherwise.
#[post("/api/accounts/{id}/verify-password")]
pub async fn verify_password_handler(
    data: web::Data<AppState>,
    path: web::Path<Uuid>,
    payload: web::Json<VerifyPasswordRequest>,
) -> impl Responder {
    let result = data
        .account_service
        .verify_password(path.into_inner(), &payload.password)
        .await;

    match result {
        Ok(()) => ApiResponse::no_content(),
        Err(err) => ApiResponse::from_service_error(&err),
    }
}
