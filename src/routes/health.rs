use actix_web::{get, web};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::db::store_service::StoreService;
use crate::types::response::{ApiResponse, ApiResult};

#[derive(Serialize, Deserialize)]
pub struct Response {}

#[get("")]
async fn health(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<StoreService>>,
) -> ApiResult<Response> {
    db.ping().await?;

    Ok(ApiResponse::EmptyOk)
}
