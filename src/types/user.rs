use entity::user::Model as UserModel;
use serde::{Deserialize, Serialize};

use crate::types::exercise::ExerciseRes;

/// Form body of `POST /api/users`.
#[derive(Serialize, Deserialize, Debug, Default)]
pub struct RUserCreate {
    pub username: Option<String>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct UserCreateRes {
    pub username: String,
    #[serde(rename = "_id")]
    pub id: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct UserRes {
    #[serde(rename = "_id")]
    pub id: String,
    pub username: String,
    pub log: Vec<ExerciseRes>,
}

impl From<UserModel> for UserRes {
    fn from(user: UserModel) -> Self {
        UserRes {
            id: user.id.to_string(),
            log: user.log.entries().iter().map(ExerciseRes::from).collect(),
            username: user.username,
        }
    }
}
