use crate::db::store_service::StoreService;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::UserRes;
use actix_web::{get, web};
use std::sync::Arc;

#[get("")]
async fn list(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<StoreService>>,
) -> ApiResult<Vec<UserRes>> {
    let users = db.list_users().await?;

    Ok(ApiResponse::Ok(users.into_iter().map(UserRes::from).collect()))
}
