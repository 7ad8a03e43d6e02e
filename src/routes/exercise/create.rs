use crate::db::store_service::StoreService;
use crate::types::error::AppError;
use crate::types::exercise::{ExerciseCreateRes, RExerciseCreate};
use crate::types::response::{ApiResponse, ApiResult};
use crate::utils::date::{format_date, parse_date, today};
use crate::utils::ids::parse_id;
use crate::utils::webutils::{optional_field, required_field};
use actix_web::{post, web};
use entity::exercise::Exercise;
use std::sync::Arc;
use tracing::info;

#[post("/{_id}/exercises")]
async fn create(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<StoreService>>,
    path: web::Path<String>,
    body: web::Form<RExerciseCreate>,
) -> ApiResult<ExerciseCreateRes> {
    let user_id = parse_id(&path)?;

    let description = required_field(&body.description, "description")?.to_string();
    let raw_duration = required_field(&body.duration, "duration")?;
    let duration = raw_duration
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|minutes| minutes.is_finite())
        .ok_or_else(|| AppError::Validation(format!("duration must be a number of minutes: {raw_duration}")))?;
    let date = match optional_field(&body.date) {
        Some(raw) => parse_date(raw)
            .ok_or_else(|| AppError::Validation(format!("date is not a valid date: {raw}")))?,
        None => today(),
    };

    let user = db
        .append_exercise(&user_id, Exercise { description: description.clone(), duration, date })
        .await?;
    info!(user_id = %user.id, "logged {duration} minutes of {description}");

    Ok(ApiResponse::Ok(ExerciseCreateRes {
        id: user.id.to_string(),
        username: user.username,
        date: format_date(date),
        duration,
        description,
    }))
}
