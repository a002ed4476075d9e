use actix_web::{post, web, Responder};

use crate::{
    account::application::ports::incoming::CreateUserRequest, shared::api::ApiResponse, AppState,
};

#[post("/api/accounts")]
pub async fn create_account_handler(
    data: web::Data<AppState>,
    payload: web::Json<CreateUserRequest>,
) -> impl Responder {
    match data.account_service.create_user(payload.into_inner()).await {
        Ok(account) => ApiResponse::created(account),
        Err(err) => ApiResponse::from_service_error(&err),
    }
}
