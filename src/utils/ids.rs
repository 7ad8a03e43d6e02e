use uuid::Uuid;

use crate::types::error::AppError;

pub fn new_id() -> Uuid {
    Uuid::new_v4()
}

/// Ids are opaque to clients, so one that is not even a UUID names no user.
pub fn parse_id(raw: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(raw.trim()).map_err(|_| AppError::NotFound)
}
