use actix_web::{get, web, Responder};
use serde::Deserialize;
use uuid::Uuid;

use crate::{shared::api::ApiResponse, AppState};

#[derive(Debug, Deserialize)]
pub struct AccountLookup {
    email: Option<String>,
    username: Option<String>,
}

#[get("/api/accounts/{id}")]
pub async fn get_account_handler(
    data: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> impl Responder {
    match data.account_service.get_user_by_id(path.into_inner()).await {
        Ok(account) => ApiResponse::success(account),
        Err(err) => ApiResponse::from_service_error(&err),
    }
}

/// `GET /api/accounts?email=...` or `?username=...`; email wins when both
/// are given.
#[get("/api/accounts")]
pub async fn find_account_handler(
    data: web::Data<AppState>,
    query: web::Query<AccountLookup>,
) -> impl Responder {
    let lookup = query.into_inner();

    let result = match (lookup.email, lookup.username) {
        (Some(email), _) => data.account_service.get_user_by_email(&email).await,
        (None, Some(username)) => data.account_service.get_user_by_username(&username).await,
        (None, None) => data.account_service.get_user_by_email("").await,
    };

    match result {
        Ok(account) => ApiResponse::success(account),
        Err(err) => ApiResponse::from_service_error(&err),
    }
}
