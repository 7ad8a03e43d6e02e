use actix_web::HttpServer;
use env_logger::Env;
use exercise_tracker::config::EnvConfig;
use exercise_tracker::db::store_service::StoreService;
use exercise_tracker::routes::build_app;
use std::io;
use std::sync::Arc;
use tracing::{error, info};

#[actix_web::main]
async fn main() -> io::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let config = EnvConfig::from_env()
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
    let addr = config.bind_addr();

    let store_service = StoreService::new(&config.db_url)
        .await
        .map_err(io::Error::other)?;
    let shared_store = Arc::new(store_service.clone());

    info!("Starting server on {}", addr);

    let served = match HttpServer::new(move || build_app(Arc::clone(&shared_store), config.clone()))
        .bind(addr)
    {
        Ok(server) => server.run().await,
        Err(e) => Err(e),
    };

    // Clones share one pool, so closing this handle closes it for every worker.
    if let Err(e) = store_service.close().await {
        error!("Failed to close store connection: {e}");
    }

    served
}
