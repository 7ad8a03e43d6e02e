use actix_web::{error::{QueryPayloadError, UrlencodedError}, HttpRequest};

use crate::types::error::AppError;

/// A submitted value exactly as sent, or `None` when it was left out or blank.
pub fn optional_field(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}

pub fn required_field<'a>(value: &'a Option<String>, name: &str) -> Result<&'a str, AppError> {
    optional_field(value).ok_or_else(|| AppError::Validation(format!("{name} is required")))
}

pub fn form_error_handler(err: UrlencodedError, _req: &HttpRequest) -> actix_web::Error {
    AppError::BadRequest(err.to_string()).into()
}

pub fn query_error_handler(err: QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    AppError::BadRequest(err.to_string()).into()
}
