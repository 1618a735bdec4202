use utoipa::OpenApi;

use crate::features::profiles::{__path_lookup_user, __path_update_chat_id};
use crate::features::registration::__path_register;
use crate::features::system::__path_health;

#[derive(OpenApi)]
#[openapi(
    tags(
        (name = "registration", description = "Cadastro de usuários"),
        (name = "profiles", description = "Consulta e atualização de perfis"),
        (name = "system", description = "Health checks")
    ),
    paths(
        health,
        register,
        update_chat_id,
        lookup_user,
    )
)]
pub struct ApiDoc;
