use crate::config::EnvConfig;
use crate::db::store_service::StoreService;
use crate::utils::webutils::{form_error_handler, query_error_handler};
use actix_cors::Cors;
use actix_files::Files;
use actix_web::body::MessageBody;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{middleware::Logger, web, App};
use std::sync::Arc;

pub mod exercise;
pub mod health;
pub mod index;
pub mod user;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::FormConfig::default().error_handler(form_error_handler));
    cfg.app_data(web::QueryConfig::default().error_handler(query_error_handler));

    cfg.service(index::index);
    cfg.service(
        web::scope("/health").service(health::health)
    );
    cfg.service(
        web::scope("/api/users")
            .service(user::create::create)
            .service(user::list::list)
            .service(exercise::create::create)
            .service(exercise::logs::logs)
    );
}

/// The whole application: middleware, shared state, API routes, then static files
/// for anything the routes don't match.
pub fn build_app(
    store: Arc<StoreService>,
    config: EnvConfig,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let static_dir = config.static_dir.clone();

    App::new()
        .wrap(Logger::default())
        .wrap(Cors::permissive())
        .app_data(web::Data::new(store))
        .app_data(web::Data::new(config))
        .configure(configure_routes)
        .service(Files::new("/", static_dir))
}
