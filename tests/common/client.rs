use actix_web::body::MessageBody;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::App;
use std::sync::Arc;
use exercise_tracker::{
    db::store_service::StoreService,
    routes::build_app,
    types::error::AppError,
    utils::date::parse_date,
};
use entity::exercise::Exercise;
use uuid::Uuid;

use super::get_test_config;

pub struct TestClient {
    pub db: Arc<StoreService>,
}

impl TestClient {
    pub fn new(db: Arc<StoreService>) -> Self {
        TestClient { db }
    }

    /// The same app `main` serves, over the test store.
    pub fn create_app(&self) -> App<
        impl ServiceFactory<
            ServiceRequest,
            Config = (),
            Response = ServiceResponse<impl MessageBody>,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        build_app(Arc::clone(&self.db), get_test_config())
    }

    #[allow(dead_code)]
    pub async fn create_test_user(&self, username: &str) -> Result<Uuid, AppError> {
        let user = self.db.create_user(username.to_string()).await?;
        Ok(user.id)
    }

    #[allow(dead_code)]
    pub async fn add_test_exercise(
        &self,
        user_id: Uuid,
        description: &str,
        duration: f64,
        date: &str,
    ) -> Result<(), AppError> {
        let date = parse_date(date).expect("test date must parse");
        self.db
            .append_exercise(&user_id, Exercise { description: description.to_string(), duration, date })
            .await?;
        Ok(())
    }
}
