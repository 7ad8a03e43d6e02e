use chrono::NaiveDate;
use sea_orm::FromJsonQueryResult;
use serde::{Deserialize, Serialize};

/// One entry of a user's exercise log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exercise {
    pub description: String,
    /// Minutes. Any number, fractions included.
    pub duration: f64,
    pub date: NaiveDate,
}

/// The embedded log, stored as a single JSON column in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FromJsonQueryResult)]
#[serde(transparent)]
pub struct ExerciseLog(pub Vec<Exercise>);

impl ExerciseLog {
    pub fn push(&mut self, exercise: Exercise) {
        self.0.push(exercise);
    }

    pub fn entries(&self) -> &[Exercise] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
