use actix_web::{get, web, Responder};

use crate::{shared::api::ApiResponse, AppState};

#[get("/api/genders")]
pub async fn list_genders_handler(data: web::Data<AppState>) -> impl Responder {
    match data.gender_service.list_genders().await {
        Ok(genders) => ApiResponse::success(genders),
        Err(err) => ApiResponse::from_service_error(&err),
    }
}

#[get("/api/genders/{id}")]
pub async fn get_gender_handler(data: web::Data<AppState>, path: web::Path<i16>) -> impl Responder {
    match data.gender_service.get_gender(path.into_inner()).await {
        Ok(gender) => ApiResponse::success(gender),
        Err(err) => ApiResponse::from_service_error(&err),
    }
}
