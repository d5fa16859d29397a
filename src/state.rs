use crate::{
    config::RuntimeConfiguration,
    error::{CoursebookResult, GetDatabaseConnectionSnafu, MigrateSnafu, OpenDatabaseSnafu},
};
use snafu::ResultExt;
use sqlx::{Pool, Sqlite, Transaction, pool::PoolConnection, sqlite::SqlitePoolOptions};
use std::ops::Deref;

#[derive(Clone, Debug)]
pub struct AppState {
    pool: Pool<Sqlite>,
}

impl AppState {
    pub async fn new(options: SqlitePoolOptions, config: RuntimeConfiguration) -> CoursebookResult<Self> {
        let pool = options
            .connect(&config.db_config().get_db_path())
            .await
            .context(OpenDatabaseSnafu)?;

        sqlx::migrate!().run(&pool).await.context(MigrateSnafu)?;

        Ok(Self { pool })
    }

    pub async fn get_connection(&self) -> CoursebookResult<PoolConnection<Sqlite>> {
        self.pool
            .acquire()
            .await
            .context(GetDatabaseConnectionSnafu)
    }

    pub async fn get_transaction(&self) -> CoursebookResult<Transaction<'_, Sqlite>> {
        self.pool.begin().await.context(GetDatabaseConnectionSnafu)
    }

    pub async fn sensible_shutdown(&self) {
        self.pool.close().await;
    }
}

impl Deref for AppState {
    type Target = Pool<Sqlite>;

    fn deref(&self) -> &Self::Target {
        &self.pool
    }
}
