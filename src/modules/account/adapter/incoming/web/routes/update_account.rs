use actix_web::{put, web, Responder};
use serde::Deserialize;
use std::fmt;
use uuid::Uuid;

use crate::{
    account::application::ports::incoming::UpdateUserInfoRequest, shared::api::ApiResponse,
    AppState,
};

//
// ──────────────────────────────────────────────────────────
// Request DTOs
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Deserialize)]
pub struct UpdateEmailRequest {
    #[serde(default)]
    email: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateUsernameRequest {
    #[serde(default)]
    username: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdatePhoneNumberRequest {
    #[serde(default)]
    phone_number: Option<String>,
}

#[derive(Deserialize)]
pub struct UpdatePasswordRequest {
    #[serde(default)]
    password: String,
}

impl fmt::Debug for UpdatePasswordRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UpdatePasswordRequest")
            .field("password", &"[redacted]")
            .finish()
    }
}

//
// ──────────────────────────────────────────────────────────
// Routes
// ──────────────────────────────────────────────────────────
//

#[put("/api/accounts/{id}/email")]
pub async fn update_email_handler(
    data: web::Data<AppState>,
    path: web::Path<Uuid>,
    payload: web::Json<UpdateEmailRequest>,
) -> impl Responder {
    let result = data
        .account_service
        .update_user_email(path.into_inner(), &payload.email)
        .await;

    match result {
        Ok(account) => ApiResponse::success(account),
        Err(err) => ApiResponse::from_service_error(&err),
    }
}

#[put("/api/accounts/{id}/username")]
pub async fn update_username_handler(
    data: web::Data<AppState>,
    path: web::Path<Uuid>,
    payload: web::Json<UpdateUsernameRequest>,
) -> impl Responder {
    let result = data
        .account_service
        .update_user_username(path.into_inner(), &payload.username)
        .await;

    match result {
        Ok(account) => ApiResponse::success(account),
        Err(err) => ApiResponse::from_service_error(&err),
    }
}

#[put("/api/accounts/{id}/phone-number")]
pub async fn update_phone_number_handler(
    data: web::Data<AppState>,
    path: web::Path<Uuid>,
    payload: web::Json<UpdatePhoneNumberRequest>,
) -> impl Responder {
    let result = data
        .account_service
        .update_user_phone_number(path.into_inner(), payload.phone_number.as_deref())
        .await;

    match result {
        Ok(account) => ApiResponse::success(account),
        Err(err) => ApiResponse::from_service_error(&err),
    }
}

#[put("/api/accounts/{id}/password")]
pub async fn update_password_handler(
    data: web::Data<AppState>,
    path: web::Path<Uuid>,
    payload: web::Json<UpdatePasswordRequest>,
) -> impl Responder {
    let result = data
        .account_service
        .update_user_password(path.into_inner(), &payload.password)
        .await;

    match result {
        Ok(account) => ApiResponse::success(account),
        Err(err) => ApiResponse::from_service_error(&err),
    }
}

#[put("/api/accounts/{id}/info")]
pub async fn update_info_handler(
    data: web::Data<AppState>,
    path: web::Path<Uuid>,
    payload: web::Json<UpdateUserInfoRequest>,
) -> impl Responder {
    let result = data
        .account_service
        .update_user_info(path.into_inner(), payload.into_inner())
        .await;

    match result {
        Ok(account) => ApiResponse::success(account),
        Err(err) => ApiResponse::from_service_error(&err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};

    use crate::account::application::ports::incoming::CreateUserRequest;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;

    #[core::prelude::v1::test]
    fn password_is_redacted_in_debug() {
        let request: UpdatePasswordRequest =
            serde_json::from_str(r#"{"password":"hunter2-secret"}"#).unwrap();

        let printed = format!("{request:?}");

        assert!(!printed.contains("hunter2-secret"));
        assert!(printed.contains("[redacted]"));
    }

    async fn read_json(resp: actix_web::dev::ServiceResponse) -> serde_json::Value {
        let body = test::read_body(resp).await;
        serde_json::from_slice(&body).unwrap()
    }

    fn create_request(email: &str) -> CreateUserRequest {
        CreateUserRequest {
            email: email.into(),
            password: "pw".into(),
            first_name: "Ann".into(),
            last_name: "Lee".into(),
            ..Default::default()
        }
    }

    #[actix_web::test]
    async fn updates_apply_and_return_account() {
        let state = TestAppStateBuilder::default().build();
        let created = state
            .account_service
            .create_user(create_request("a@x.com"))
            .await
            .unwrap();

        let app = test::init_service(
            App::new()
                .app_data(state.clone())
                .service(update_email_handler)
                .service(update_username_handler)
                .service(update_phone_number_handler)
                .service(update_password_handler)
                .service(update_info_handler),
        )
        .await;

        let cases = [
            ("email", serde_json::json!({ "email": "b@x.com" }), "email", "b@x.com"),
            ("username", serde_json::json!({ "username": "ann" }), "username", "ann"),
            (
                "phone-number",
                serde_json::json!({ "phone_number": "555-0100" }),
                "phone_number",
                "555-0100",
            ),
            (
                "info",
                serde_json::json!({ "first_name": "Anna", "last_name": "Lee" }),
                "first_name",
                "Anna",
            ),
        ];

        for (segment, body, field, expected) in cases {
            let req = test::TestRequest::put()
                .uri(&format!("/api/accounts/{}/{segment}", created.id))
                .set_json(body)
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::OK, "{segment}");
            assert_eq!(read_json(resp).await["data"][field], expected);
        }

        let req = test::TestRequest::put()
            .uri(&format!("/api/accounts/{}/password", created.id))
            .set_json(serde_json::json!({ "password": "new-pw" }))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);
        state
            .account_service
            .verify_password(created.id, "new-pw")
            .await
            .unwrap();
    }

    #[actix_web::test]
    async fn email_taken_by_other_account_is_conflict() {
        let state = TestAppStateBuilder::default().build();
        state
            .account_service
            .create_user(create_request("a@x.com"))
            .await
            .unwrap();
        let bob = state
            .account_service
            .create_user(create_request("b@x.com"))
            .await
            .unwrap();

        let app = test::init_service(App::new().app_data(state).service(update_email_handler)).await;

        let req = test::TestRequest::put()
            .uri(&format!("/api/accounts/{}/email", bob.id))
            .set_json(serde_json::json!({ "email": "a@x.com" }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::CONFLICT);
        assert_eq!(read_json(resp).await["error"]["code"], "DUPLICATE_VALUE");
    }

    #[actix_web::test]
    async fn unknown_gender_is_conflict() {
        let state = TestAppStateBuilder::default().build();
        let created = state
            .account_service
            .create_user(create_request("a@x.com"))
            .await
            .unwrap();

        let app = test::init_service(App::new().app_data(state).service(update_info_handler)).await;

        let req = test::TestRequest::put()
            .uri(&format!("/api/accounts/{}/info", created.id))
            .set_json(serde_json::json!({ "first_name": "A", "last_name": "B", "gender": 7 }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::CONFLICT);
        assert_eq!(read_json(resp).await["error"]["code"], "REFERENCE_VIOLATION");
    }

    #[actix_web::test]
    async fn empty_password_is_bad_request() {
        let app = test::init_service(
            App::new()
                .app_data(TestAppStateBuilder::default().build())
                .service(update_password_handler),
        )
        .await;

        let req = test::TestRequest::put()
            .uri(&format!("/api/accounts/{}/password", Uuid::new_v4()))
            .set_json(serde_json::json!({}))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
