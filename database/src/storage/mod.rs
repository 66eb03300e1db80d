pub mod analysis_database;

use analysis_database::AnalysisDatabase;
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

pub use analysis_database::AnalysisStore;

#[derive(Clone)]
pub struct Context {
    connection: Arc<DatabaseConnection>,
}

impl Context {
    pub async fn new(db_url: &str) -> Result<Self, DbErr> {
        let mut opt = ConnectOptions::new(db_url.to_owned());
        opt.max_connections(16)
            .min_connections(1)
            .connect_timeout(Duration::from_secs(10))
            .sqlx_logging(false);

        let connection = Database::connect(opt).await?;
        Ok(Context {
            connection: Arc::new(connection),
        })
    }

    /// 执行尚未应用的迁移
    pub async fn migrate(&self) -> Result<(), DbErr> {
        Migrator::up(self.connection.as_ref(), None).await?;
        info!("database migrations applied");
        Ok(())
    }

    pub fn analysis_stg(&self) -> AnalysisDatabase {
        AnalysisDatabase::new(self.connection.clone())
    }
}
