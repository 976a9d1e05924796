//! `SQLite` store implementation for todo persistence.

use super::{
    models::{NewTodoRow, ReplaceTodoRow, TodoChanges, TodoRow},
    schema::todos,
};
use crate::todo::{
    adapters::live::{ChangeNotifier, live_query},
    ports::{TodoRecord, TodoRecordStream, TodoStore, TodoStoreError, TodoStoreResult},
};
use async_trait::async_trait;
use diesel::connection::SimpleConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, CustomizeConnection, Pool};
use diesel::sqlite::SqliteConnection;
use std::sync::Arc;
use tracing::{debug, info};

/// `SQLite` connection pool type used by todo adapters.
pub type TodoSqlitePool = Pool<ConnectionManager<SqliteConnection>>;

/// Schema bootstrap applied to every freshly opened database.
const CREATE_TODOS_SQL: &str =
    include_str!("../../../../migrations/2026-10-19-000000_create_todos/up.sql");

/// Milliseconds a connection waits on a locked database before failing.
const BUSY_TIMEOUT_MS: u32 = 5_000;

/// `SQLite`-backed todo store.
#[derive(Debug, Clone)]
pub struct SqliteTodoStore {
    pool: TodoSqlitePool,
    changes: Arc<ChangeNotifier>,
}

impl SqliteTodoStore {
    /// Creates a store over an existing pool whose schema is in place.
    #[must_use]
    pub fn new(pool: TodoSqlitePool) -> Self {
        Self {
            pool,
            changes: Arc::new(ChangeNotifier::new()),
        }
    }

    /// Opens `database_url`, applies the schema and returns a store.
    ///
    /// `:memory:` databases are pinned to a single connection that the pool
    /// never recycles, since every `SQLite` connection to `:memory:` opens a
    /// separate database.
    ///
    /// # Errors
    ///
    /// Returns [`TodoStoreError::Persistence`] when the pool cannot be built
    /// or the schema cannot be applied.
    pub fn connect(database_url: &str, max_size: u32) -> TodoStoreResult<Self> {
        let pool = build_pool(database_url, max_size)?;
        apply_schema(&pool)?;
        info!(database_url, "todo database ready");
        Ok(Self::new(pool))
    }
}

fn is_memory_url(database_url: &str) -> bool {
    database_url == ":memory:" || database_url.starts_with("file::memory:")
}

fn build_pool(database_url: &str, max_size: u32) -> TodoStoreResult<TodoSqlitePool> {
    let manager = ConnectionManager::<SqliteConnection>::new(database_url);
    let builder = Pool::builder().connection_customizer(Box::new(SqlitePragmas));
    let builder = if is_memory_url(database_url) {
        builder.max_size(1).idle_timeout(None).max_lifetime(None)
    } else {
        builder.max_size(max_size.max(1))
    };
    builder.build(manager).map_err(TodoStoreError::persistence)
}

fn apply_schema(pool: &TodoSqlitePool) -> TodoStoreResult<()> {
    let mut connection = pool.get().map_err(TodoStoreError::persistence)?;
    connection
        .batch_execute(CREATE_TODOS_SQL)
        .map_err(TodoStoreError::persistence)
}

/// Per-connection settings applied when the pool opens a connection.
#[derive(Debug, Clone, Copy)]
struct SqlitePragmas;

impl CustomizeConnection<SqliteConnection, diesel::r2d2::Error> for SqlitePragmas {
    fn on_acquire(&self, connection: &mut SqliteConnection) -> Result<(), diesel::r2d2::Error> {
        connection
            .batch_execute(&format!("PRAGMA busy_timeout = {BUSY_TIMEOUT_MS};"))
            .map_err(diesel::r2d2::Error::QueryError)
    }
}

async fn run_blocking<F, T>(pool: TodoSqlitePool, f: F) -> TodoStoreResult<T>
where
    F: FnOnce(&mut SqliteConnection) -> TodoStoreResult<T> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(move || {
        let mut connection = pool.get().map_err(TodoStoreError::persistence)?;
        f(&mut connection)
    })
    .await
    .map_err(TodoStoreError::persistence)?
}

fn load_all(connection: &mut SqliteConnection) -> TodoStoreResult<Vec<TodoRecord>> {
    let rows = todos::table
        .order((todos::created_at.desc(), todos::id.desc()))
        .select(TodoRow::as_select())
        .load::<TodoRow>(connection)
        .map_err(TodoStoreError::persistence)?;
    Ok(rows.into_iter().map(TodoRecord::from).collect())
}

#[async_trait]
impl TodoStore for SqliteTodoStore {
    fn observe_all(&self) -> TodoRecordStream {
        let pool = self.pool.clone();
        live_query(Arc::clone(&self.changes), move || {
            run_blocking(pool.clone(), load_all)
        })
    }

    async fn get_by_id(&self, id: i64) -> TodoStoreResult<Option<TodoRecord>> {
        run_blocking(self.pool.clone(), move |connection| {
            let row = todos::table
                .find(id)
                .select(TodoRow::as_select())
                .first::<TodoRow>(connection)
                .optional()
                .map_err(TodoStoreError::persistence)?;
            Ok(row.map(TodoRecord::from))
        })
        .await
    }

    async fn insert(&self, record: &TodoRecord) -> TodoStoreResult<i64> {
        let record = record.clone();
        let id = run_blocking(self.pool.clone(), move |connection| {
            if record.id > 0 {
                diesel::replace_into(todos::table)
                    .values(ReplaceTodoRow::from(&record))
                    .execute(connection)
                    .map_err(TodoStoreError::persistence)?;
                return Ok(record.id);
            }
            diesel::insert_into(todos::table)
                .values(NewTodoRow::from(&record))
                .returning(todos::id)
                .get_result::<i64>(connection)
                .map_err(TodoStoreError::persistence)
        })
        .await?;

        debug!(id, "inserted todo");
        self.changes.notify();
        Ok(id)
    }

    async fn update(&self, record: &TodoRecord) -> TodoStoreResult<()> {
        let record = record.clone();
        let id = record.id;
        let affected = run_blocking(self.pool.clone(), move |connection| {
            diesel::update(todos::table.find(record.id))
                .set(TodoChanges::from(&record))
                .execute(connection)
                .map_err(TodoStoreError::persistence)
        })
        .await?;

        if affected > 0 {
            debug!(id, "updated todo");
            self.changes.notify();
        }
        Ok(())
    }

    async fn delete_by_id(&self, id: i64) -> TodoStoreResult<()> {
        let affected = run_blocking(self.pool.clone(), move |connection| {
            diesel::delete(todos::table.find(id))
                .execute(connection)
                .map_err(TodoStoreError::persistence)
        })
        .await?;

        if affected > 0 {
            debug!(id, "deleted todo");
            self.changes.notify();
        }
        Ok(())
    }
}
