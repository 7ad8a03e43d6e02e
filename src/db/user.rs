use crate::db::store_service::StoreService;
use crate::{types::error::AppError, utils::ids};
use chrono::Utc;
use entity::exercise::{Exercise, ExerciseLog};
use entity::user::{ActiveModel as UserActive, Column, Entity as User, Model as UserModel};
use sea_orm::{ActiveModelTrait, DbErr, EntityTrait, QueryOrder, Set};
use tracing::debug;
use uuid::Uuid;

impl StoreService {
    pub async fn get_user_by_id(&self, id: &Uuid) -> Result<UserModel, AppError> {
        Ok(User::find_by_id(*id)
            .one(&self.database_connection)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("User does not exist".into()))?)
    }

    /// Every user, oldest first.
    pub async fn list_users(&self) -> Result<Vec<UserModel>, AppError> {
        Ok(User::find()
            .order_by_asc(Column::CreatedAt)
            .order_by_asc(Column::Id)
            .all(&self.database_connection)
            .await?)
    }

    /// Creates a user with an empty log. Usernames are not unique.
    pub async fn create_user(&self, username: String) -> Result<UserModel, AppError> {
        let now = Utc::now();

        let user = UserActive {
            id: Set(ids::new_id()),
            username: Set(username),
            log: Set(ExerciseLog::default()),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(&self.database_connection)
        .await?;

        debug!(user_id = %user.id, "created user");
        Ok(user)
    }

    /// Appends to the end of the user's log and writes the whole document back.
    /// Two concurrent appends to the same user can lose one of the entries.
    pub async fn append_exercise(&self, user_id: &Uuid, exercise: Exercise) -> Result<UserModel, AppError> {
        let user = self.get_user_by_id(user_id).await?;
        let mut log = user.log.clone();
        log.push(exercise);

        let mut am: UserActive = user.into();
        am.log = Set(log);
        am.updated_at = Set(Utc::now());
        let user = am.update(&self.database_connection).await?;

        debug!(user_id = %user.id, entries = user.log.len(), "appended exercise");
        Ok(user)
    }
}
