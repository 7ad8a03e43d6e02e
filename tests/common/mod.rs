use std::path::PathBuf;
use std::sync::Arc;
use exercise_tracker::config::EnvConfig;
use exercise_tracker::db::store_service::StoreService;
use sea_orm::ConnectOptions;

pub mod client;

pub struct TestContext {
    pub db: Arc<StoreService>,
}

impl TestContext {
    /// A fresh in-memory store per test.
    pub async fn new() -> TestContext {
        let mut options = ConnectOptions::new("sqlite::memory:");
        options
            .max_connections(1)
            .min_connections(1)
            .sqlx_logging(false);

        let db = Arc::new(
            StoreService::connect(options)
                .await
                .expect("Failed to initialize StoreService")
        );

        TestContext { db }
    }
}

pub fn get_test_config() -> EnvConfig {
    let root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    EnvConfig {
        host: "127.0.0.1".to_string(),
        port: 3000,
        db_url: "sqlite::memory:".to_string(), // Not used in tests
        static_dir: root.join("public"),
        views_dir: root.join("views"),
    }
}

// Test data helpers
#[allow(dead_code)]
pub mod test_data {
    pub fn exercise_form<'a>(
        description: &'a str,
        duration: &'a str,
        date: Option<&'a str>,
    ) -> Vec<(&'static str, &'a str)> {
        let mut form = vec![("description", description), ("duration", duration)];
        if let Some(date) = date {
            form.push(("date", date));
        }
        form
    }
}
