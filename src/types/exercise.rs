use entity::exercise::Exercise;
use serde::{Deserialize, Serialize, Serializer};

use crate::utils::date::format_date;

/// Largest magnitude at which every whole `f64` is exactly an `i64`.
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Writes whole minutes as an integer (`30`, not `30.0`) and anything else as a float.
pub fn serialize_minutes<S: Serializer>(minutes: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if minutes.fract() == 0.0 && minutes.abs() <= MAX_EXACT_INTEGER {
        serializer.serialize_i64(*minutes as i64)
    } else {
        serializer.serialize_f64(*minutes)
    }
}

/// Form body of `POST /api/users/{_id}/exercises`.
#[derive(Serialize, Deserialize, Debug, Default)]
pub struct RExerciseCreate {
    pub description: Option<String>,
    pub duration: Option<String>,
    pub date: Option<String>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct ExerciseCreateRes {
    #[serde(rename = "_id")]
    pub id: String,
    pub username: String,
    pub date: String,
    #[serde(serialize_with = "serialize_minutes")]
    pub duration: f64,
    pub description: String,
}

/// A log entry as clients see it, with the date in display form.
#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct ExerciseRes {
    pub description: String,
    #[serde(serialize_with = "serialize_minutes")]
    pub duration: f64,
    pub date: String,
}

impl From<&Exercise> for ExerciseRes {
    fn from(exercise: &Exercise) -> Self {
        ExerciseRes {
            description: exercise.description.clone(),
            duration: exercise.duration,
            date: format_date(exercise.date),
        }
    }
}

/// Query string of `GET /api/users/{_id}/logs`.
#[derive(Serialize, Deserialize, Debug, Default)]
pub struct RLogQuery {
    pub from: Option<String>,
    pub to: Option<String>,
    pub limit: Option<String>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct LogRes {
    #[serde(rename = "_id")]
    pub id: String,
    pub username: String,
    pub count: usize,
    pub log: Vec<ExerciseRes>,
}
