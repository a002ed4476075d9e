use actix_web::{delete, web, Responder};

use crate::{shared::api::ApiResponse, AppState};

/// 409 `REFERENCE_VIOLATION` while any account still uses the gender.
#[delete("/api/genders/{id}")]
pub async fn delete_gender_handler(
    data: web::Data<AppState>,
    path: web::Path<i16>,
) -> impl Responder {
    match data.gender_service.remove_gender(path.into_inner()).await {
        Ok(()) => ApiResponse::no_content(),
        Err(err) => ApiResponse::from_service_error(&err),
    }
}
