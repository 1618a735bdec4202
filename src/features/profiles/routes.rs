use actix_web::{get, patch, web, HttpResponse};
use validator::Validate;

use super::types::{LookupQuery, MessageResp, UpdateChatIdReq};
use super::ProfileService;
use crate::features::users::UserProfileDto;
use crate::utils::error::Error;

#[utoipa::path(
    patch,
    path = "/atualizar_chat_id",
    tag = "profiles",
    request_body = UpdateChatIdReq,
    responses(
        (status = 200, description = "Chat ID atualizado", body = MessageResp),
        (status = 400, description = "Atualização não aplicada"),
        (status = 404, description = "Email não cadastrado"),
    )
)]
#[patch("/atualizar_chat_id")]
pub async fn update_chat_id(
    payload: web::Json<UpdateChatIdReq>,
    profile_service: web::Data<ProfileService>,
) -> Result<HttpResponse, Error> {
    if let Err(errors) = payload.validate() {
        return Ok(HttpResponse::UnprocessableEntity().json(errors));
    }

    profile_service
        .update_chat_id(&payload.email, payload.chat_id)
        .await?;

    Ok(HttpResponse::Ok().json(MessageResp {
        message: "Chat ID atualizado com sucesso.".into(),
    }))
}

#[utoipa::path(
    get,
    path = "/buscar_usuario",
    tag = "profiles",
    params(LookupQuery),
    responses(
        (status = 200, description = "Perfil armazenado", body = UserProfileDto),
        (status = 404, description = "Email não cadastrado"),
    )
)]
#[get("/buscar_usuario")]
pub async fn lookup_user(
    query: web::Query<LookupQuery>,
    profile_service: web::Data<ProfileService>,
) -> Result<HttpResponse, Error> {
    let profile = profile_service.lookup(&query.email).await?;

    Ok(HttpResponse::Ok().json(profile))
}
