use actix_web::{post, web, HttpResponse};
use validator::Validate;

use super::types::{RegisterUserReq, RegisterUserResp};
use super::RegistrationService;
use crate::utils::error::Error;

#[utoipa::path(
    post,
    path = "/cadastrar",
    tag = "registration",
    request_body = RegisterUserReq,
    responses(
        (status = 200, description = "Usuário cadastrado com sucesso", body = RegisterUserResp),
        (status = 400, description = "Termos de uso não aceitos"),
        (status = 409, description = "Email já cadastrado"),
        (status = 422, description = "Campo inválido (nome, email, telefone, data ou idade)"),
    )
)]
#[post("/cadastrar")]
pub async fn register(
    payload: web::Json<RegisterUserReq>,
    registration_service: web::Data<RegistrationService>,
) -> Result<HttpResponse, Error> {
    if let Err(errors) = payload.validate() {
        return Ok(HttpResponse::UnprocessableEntity().json(errors));
    }

    let registered = registration_service.register(payload.into_inner()).await?;

    Ok(HttpResponse::Ok().json(RegisterUserResp {
        id: registered.id,
        message: "Usuário cadastrado com sucesso.".into(),
        zodiac_sign: registered.zodiac_sign.to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::http::StatusCode;
    use actix_web::{test, App};
    use async_trait::async_trait;
    use serde_json::json;

    use super::*;
    use crate::features::clients::{RegistrationNotifier, RegistrationSummary};
    use crate::features::users::testing::InMemoryUserRepository;
    use crate::utils::error::Result;

    struct NullNotifier;

    #[async_trait]
    impl RegistrationNotifier for NullNotifier {
        async fn notify(&self, _summary: &RegistrationSummary) -> Result<()> {
            Ok(())
        }
    }

    fn registration_service() -> RegistrationService {
        RegistrationService::new(
            Arc::new(InMemoryUserRepository::new()),
            Arc::new(NullNotifier),
        )
    }

    fn valid_body() -> serde_json::Value {
        json!({
            "full_name": "Maria Silva",
            "birth_date": "25/12/1990",
            "email": "maria@example.com",
            "phone": "11999990000",
            "accept_terms": true,
        })
    }

    #[actix_web::test]
    async fn registers_a_valid_user() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(registration_service()))
                .service(register),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/cadastrar")
            .set_json(valid_body())
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["message"], "Usuário cadastrado com sucesso.");
        assert_eq!(body["zodiac_sign"], "Capricorn");
        assert_eq!(body["id"].as_str().unwrap().len(), 24);
    }

    #[actix_web::test]
    async fn rejects_unaccepted_terms_with_400() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(registration_service()))
                .service(register),
        )
        .await;

        let mut body = valid_body();
        body["accept_terms"] = json!(false);
        let req = test::TestRequest::post()
            .uri("/cadastrar")
            .set_json(body)
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn rejects_a_second_registration_with_409() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(registration_service()))
                .service(register),
        )
        .await;

        let first = test::TestRequest::post()
            .uri("/cadastrar")
            .set_json(valid_body())
            .to_request();
        assert_eq!(test::call_service(&app, first).await.status(), StatusCode::OK);

        let second = test::TestRequest::post()
            .uri("/cadastrar")
            .set_json(valid_body())
            .to_request();
        assert_eq!(
            test::call_service(&app, second).await.status(),
            StatusCode::CONFLICT
        );
    }

    #[actix_web::test]
    async fn rejects_a_malformed_birth_date_with_422() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(registration_service()))
                .service(register),
        )
        .await;

        let mut body = valid_body();
        body["birth_date"] = json!("1990-12-25");
        let req = test::TestRequest::post()
            .uri("/cadastrar")
            .set_json(body)
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
