use actix_web::{delete, post, web, Responder};
use uuid::Uuid;

use crate::{shared::api::ApiResponse, AppState};

/// Soft delete: the account disappears from lookups but can be recovered.
#[delete("/api/accounts/{id}")]
pub async fn delete_account_soft_handler(
    data: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> impl Responder {
    match data.account_service.delete_user_soft(path.into_inner()).await {
        Ok(()) => ApiResponse::no_content(),
        Err(err) => ApiResponse::from_service_error(&err),
    }
}

#[post("/api/accounts/{id}/recover")]
pub async fn recover_account_handler(
    data: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> impl Responder {
    match data.account_service.recover_user(path.into_inner()).await {
        Ok(account) => ApiResponse::success(account),
        Err(err) => ApiResponse::from_service_error(&err),
    }
}

#[delete("/api/accounts/{id}/permanent")]
pub async fn delete_account_permanent_handler(
    data: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> impl Responder {
    match data
        .account_service
        .delete_user_permanent(path.into_inner())
        .await
    {
        Ok(()) => ApiResponse::no_content(),
        Err(err) => ApiResponse::from_service_error(&err),
    }
}
