use actix_files::NamedFile;
use actix_web::{get, web};
use std::io;
use tracing::warn;

use crate::config::EnvConfig;
use crate::types::error::AppError;

#[get("/")]
async fn index(config: web::Data<EnvConfig>) -> Result<NamedFile, AppError> {
    let path = config.views_dir.join("index.html");
    NamedFile::open_async(&path).await.map_err(|e| {
        warn!("landing page {} unavailable: {e}", path.display());
        match e.kind() {
            io::ErrorKind::NotFound => AppError::NotFound,
            _ => AppError::Internal(e.to_string()),
        }
    })
}
