use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use tracing::info;

/// Process-wide handle on the user document store.
#[derive(Clone)]
pub struct StoreService {
    pub(crate) database_connection: DatabaseConnection,
}

impl StoreService {
    pub async fn new(uri: &str) -> Result<Self, DbErr> {
        Self::connect(ConnectOptions::new(uri)).await
    }

    pub async fn connect(options: ConnectOptions) -> Result<Self, DbErr> {
        info!("Connecting to the store...");
        let database_connection = Database::connect(options).await?;
        info!("Running migrations...");
        Migrator::up(&database_connection, None).await?;
        info!("Store ready.");
        Ok(Self { database_connection })
    }

    pub async fn ping(&self) -> Result<(), DbErr> {
        self.database_connection.ping().await
    }

    pub async fn close(self) -> Result<(), DbErr> {
        info!("Closing store connection.");
        self.database_connection.close().await
    }
}
