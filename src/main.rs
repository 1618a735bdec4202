mod config;
mod features;
mod infrastructure;
mod swagger;
mod utils;

use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use config::traits::Env;
use features::clients::{RegistrationNotifier, WebhookClient};
use features::profiles::ProfileService;
use features::registration::RegistrationService;
use features::users::{MongoUserRepository, UserRepository};
use infrastructure::persistence::db;
use swagger::ApiDoc;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_target(true)
        .with_line_number(true)
        .init();

    // region settings
    let db_settings = config::DbSettings::from_env().expect("Failed to load settings");
    let webhook_settings = config::WebhookSettings::from_env().expect("Failed to load settings");
    // endregion settings

    // region persistence
    let mongo_client = db::create_client(&db_settings.mongo_url)
        .await
        .expect("Failed to connect to MongoDB");
    let users_db = db::users_database(&mongo_client);
    // endregion persistence

    // region services
    let user_repo: Arc<dyn UserRepository> = Arc::new(MongoUserRepository::new(&users_db));
    let notifier: Arc<dyn RegistrationNotifier> = Arc::new(
        WebhookClient::new(&webhook_settings.webhook_url).expect("webhook client config"),
    );

    let registration_service = RegistrationService::new(user_repo.clone(), notifier.clone());
    let profile_service = ProfileService::new(user_repo.clone());
    // endregion services

    let openapi = ApiDoc::openapi();

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(registration_service.clone()))
            .app_data(web::Data::new(profile_service.clone()))
            .wrap(Logger::default())
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allowed_methods(vec!["GET", "POST", "PATCH", "OPTIONS"])
                    .allow_any_header(),
            ) // should be changed for production!!!
            .service(
                SwaggerUi::new("/swagger/{_:.*}").url("/api-docs/openapi.json", openapi.clone()),
            )
            .service(
                web::scope("")
                    .service(features::system::health)
                    .service(features::registration::register)
                    .service(features::profiles::update_chat_id)
                    .service(features::profiles::lookup_user),
            )
    })
    .bind(("0.0.0.0", 8080))?
    .run()
    .await
}
