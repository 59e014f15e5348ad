//! `sqlx`-backed introspection for PostgreSQL, MySQL and SQLite

use super::{ColumnDescriptor, SchemaIntrospector};
use crate::error::{GeneratorError, Result};
use sqlx::mysql::{MySqlPool, MySqlPoolOptions};
use sqlx::postgres::{PgPool, PgPoolOptions};
use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};
use tokio::runtime::Runtime;

const POSTGRES_EXISTS: &str = r"
    SELECT EXISTS (
        SELECT 1 FROM information_schema.tables
        WHERE table_schema = current_schema() AND table_name = $1
    )
";

const POSTGRES_COLUMNS: &str = r"
    SELECT column_name::text, data_type::text
    FROM information_schema.columns
    WHERE table_schema = current_schema() AND table_name = $1
    ORDER BY ordinal_position
";

const MYSQL_EXISTS: &str = r"
    SELECT COUNT(*) FROM information_schema.tables
    WHERE table_schema = DATABASE() AND table_name = ?
";

// COLUMN_TYPE keeps the display width, so `tinyint(1)` stays recognizable.
const MYSQL_COLUMNS: &str = r"
    SELECT CAST(column_name AS CHAR), CAST(column_type AS CHAR)
    FROM information_schema.columns
    WHERE table_schema = DATABASE() AND table_name = ?
    ORDER BY ordinal_position
";

const SQLITE_EXISTS: &str = r"
    SELECT COUNT(*) FROM sqlite_master
    WHERE type IN ('table', 'view') AND name = ?1
";

const SQLITE_COLUMNS: &str = r"
    SELECT name, type FROM pragma_table_info(?1) ORDER BY cid
";

/// Connection pool for one of the supported backends
#[derive(Debug)]
enum DatabasePool {
    Postgres(PgPool),
    MySql(MySqlPool),
    Sqlite(SqlitePool),
}

/// Introspector backed by a live database connection
///
/// The generator is synchronous, so the introspector owns a current-thread
/// runtime and blocks on each query.
#[derive(Debug)]
pub struct SqlxIntrospector {
    pool: DatabasePool,
    runtime: Runtime,
}

impl SqlxIntrospector {
    /// Connect to the database named by `url`
    ///
    /// The backend is chosen from the URL scheme: `postgres://` /
    /// `postgresql://`, `mysql://` / `mariadb://`, or `sqlite:`.
    ///
    /// # Errors
    ///
    /// Returns an error if the scheme is unsupported, the runtime cannot be
    /// started, or the connection fails.
    pub fn connect(url: &str) -> Result<Self> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| GeneratorError::Schema(format!("failed to start runtime: {e}")))?;

        let pool = if url.starts_with("postgres://") || url.starts_with("postgresql://") {
            DatabasePool::Postgres(runtime.block_on(
                PgPoolOptions::new().max_connections(1).connect(url),
            )?)
        } else if url.starts_with("mysql://") || url.starts_with("mariadb://") {
            DatabasePool::MySql(runtime.block_on(
                MySqlPoolOptions::new().max_connections(1).connect(url),
            )?)
        } else if url.starts_with("sqlite:") {
            // A single long-lived connection keeps `sqlite::memory:` databases alive.
            DatabasePool::Sqlite(runtime.block_on(
                SqlitePoolOptions::new()
                    .max_connections(1)
                    .idle_timeout(None)
                    .max_lifetime(None)
                    .connect(url),
            )?)
        } else {
            return Err(GeneratorError::UnsupportedDatabase {
                url: url.to_string(),
            });
        };

        tracing::debug!(backend = pool.backend(), "connected to database");
        Ok(Self { pool, runtime })
    }

    #[cfg(test)]
    fn execute(&self, sql: &str) -> Result<()> {
        match &self.pool {
            DatabasePool::Sqlite(pool) => {
                self.runtime.block_on(sqlx::query(sql).execute(pool))?;
            }
            DatabasePool::Postgres(pool) => {
                self.runtime.block_on(sqlx::query(sql).execute(pool))?;
            }
            DatabasePool::MySql(pool) => {
                self.runtime.block_on(sqlx::query(sql).execute(pool))?;
            }
        }
        Ok(())
    }
}

impl DatabasePool {
    const fn backend(&self) -> &'static str {
        match self {
            Self::Postgres(_) => "postgres",
            Self::MySql(_) => "mysql",
            Self::Sqlite(_) => "sqlite",
        }
    }
}

impl SchemaIntrospector for SqlxIntrospector {
    fn exists(&self, table: &str) -> Result<bool> {
        let exists = match &self.pool {
            DatabasePool::Postgres(pool) => self.runtime.block_on(
                sqlx::query_scalar::<_, bool>(POSTGRES_EXISTS)
                    .bind(table)
                    .fetch_one(pool),
            )?,
            DatabasePool::MySql(pool) => {
                self.runtime.block_on(
                    sqlx::query_scalar::<_, i64>(MYSQL_EXISTS)
                        .bind(table)
                        .fetch_one(pool),
                )? > 0
            }
            DatabasePool::Sqlite(pool) => {
                self.runtime.block_on(
                    sqlx::query_scalar::<_, i64>(SQLITE_EXISTS)
                        .bind(table)
                        .fetch_one(pool),
                )? > 0
            }
        };

        tracing::debug!(table, exists, "checked table existence");
        Ok(exists)
    }

    fn columns(&self, table: &str) -> Result<Vec<ColumnDescriptor>> {
        let rows: Vec<(String, String)> = match &self.pool {
            DatabasePool::Postgres(pool) => self.runtime.block_on(
                sqlx::query_as::<_, (String, String)>(POSTGRES_COLUMNS).bind(table).fetch_all(pool),
            ),
            DatabasePool::MySql(pool) => self.runtime.block_on(
                sqlx::query_as::<_, (String, String)>(MYSQL_COLUMNS).bind(table).fetch_all(pool),
            ),
            DatabasePool::Sqlite(pool) => self.runtime.block_on(
                sqlx::query_as::<_, (String, String)>(SQLITE_COLUMNS).bind(table).fetch_all(pool),
            ),
        }
        .map_err(|e| GeneratorError::Schema(format!("failed to read columns of `{table}`: {e}")))?;

        if rows.is_empty() {
            return Err(GeneratorError::Schema(format!(
                "table `{table}` has no columns or does not exist"
            )));
        }

        tracing::debug!(table, count = rows.len(), "introspected columns");
        Ok(rows
            .into_iter()
            .map(|(name, declared_type)| ColumnDescriptor::new(name, declared_type))
            .collect())
    }
}
