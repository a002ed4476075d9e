use actix_web::{post, web, Responder};
use serde::Deserialize;

use crate::{shared::api::ApiResponse, AppState};

#[derive(Debug, Deserialize)]
pub struct CreateGenderRequest {
    #[serde(default)]
    title: String,
}

#[post("/api/genders")]
pub async fn create_gender_handler(
    data: web::Data<AppState>,
    payload: web::Json<CreateGenderRequest>,
) -> impl Responder {
    match data.gender_service.add_gender(&payload.title).await {
        Ok(gender) => ApiResponse::created(gender),
        Err(err) => ApiResponse::from_service_error(&err),
    }
}
