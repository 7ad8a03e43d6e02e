use crate::db::store_service::StoreService;
use crate::types::exercise::{ExerciseRes, LogRes, RLogQuery};
use crate::types::response::{ApiResponse, ApiResult};
use crate::utils::ids::parse_id;
use crate::utils::log_filter::LogFilter;
use actix_web::{get, web};
use std::sync::Arc;

#[get("/{_id}/logs")]
async fn logs(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<StoreService>>,
    path: web::Path<String>,
    query: web::Query<RLogQuery>,
) -> ApiResult<LogRes> {
    let user_id = parse_id(&path)?;
    let filter = LogFilter::from_query(&query)?;

    let user = db.get_user_by_id(&user_id).await?;
    let log: Vec<ExerciseRes> = filter.apply(user.log.entries()).map(ExerciseRes::from).collect();

    Ok(ApiResponse::Ok(LogRes {
        id: user.id.to_string(),
        username: user.username,
        count: log.len(),
        log,
    }))
}
