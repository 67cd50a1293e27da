use sqlx::{
    Sqlite,
    pool::PoolConnection,
    sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions, SqliteSynchronous},
};
use tracing::debug;

use std::path::{Path, PathBuf};

use crate::core::db::{DbError, DbResult};

pub(super) struct DbState {
    db_file: PathBuf,
    pool: SqlitePool,
}

impl std::fmt::Debug for DbState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DbState")
            .field("db_file", &self.db_file)
            .field("closed", &self.pool.is_closed())
            .finish()
    }
}

impl DbState {
    pub(super) async fn new<P: AsRef<Path>>(db_file: P) -> DbResult<Self> {
        let db_file = db_file.as_ref().to_path_buf();

        // sqlite would create the file but not a missing directory
        let parent_ok = match db_file.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.is_dir(),
            _ => true,
        };
        if !parent_ok {
            return Err(DbError::Sqlx(sqlx::Error::Configuration(
                format!("database directory does not exist: {:?}", db_file).into(),
            )));
        }

        let connect_opts = SqliteConnectOptions::new()
            .filename(&db_file)
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(connect_opts)
            .await?;
        sqlx::migrate!("./migrations").run(&pool).await?;
        debug!(path = ?db_file, "database ready");

        Ok(Self { db_file, pool })
    }

    pub(super) async fn conn(&self) -> DbResult<PoolConnection<Sqlite>> {
        Ok(self.pool.acquire().await?)
    }

    pub(super) async fn close(&self) {
        self.pool.close().await;
    }
}
