use crate::db::store_service::StoreService;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::{RUserCreate, UserCreateRes};
use crate::utils::webutils::required_field;
use actix_web::{post, web};
use std::sync::Arc;
use tracing::info;

#[post("")]
async fn create(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<StoreService>>,
    body: web::Form<RUserCreate>,
) -> ApiResult<UserCreateRes> {
    let username = required_field(&body.username, "username")?;

    let user = db.create_user(username.to_string()).await?;
    info!(user_id = %user.id, "user {} created", user.username);

    Ok(ApiResponse::Ok(UserCreateRes {
        username: user.username,
        id: user.id.to_string(),
    }))
}
