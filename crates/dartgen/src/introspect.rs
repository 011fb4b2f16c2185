//! Live-database schema source.
//!
//! The metadata contract covers exactly what generation needs: table
//! names, column names, one column's native type, one column's
//! nullability. [`SqliteMetadata`] answers it from SQLite's
//! `pragma_table_info`; [`introspect_schema`] assembles the same
//! [`SchemaState`] the migration path produces, degrading per item on
//! failure instead of aborting.

use async_trait::async_trait;
use sqlx::sqlite::SqlitePool;
use tracing::{debug, warn};

use dartgen_core::schema::{ColumnDefinition, TableDefinition};
use dartgen_core::state::SchemaState;
use dartgen_core::typemap;

use crate::error::{GenerateError, Result};

/// Read-only database metadata.
#[async_trait]
pub trait SchemaMetadata {
    /// Lists user table names.
    async fn table_names(&self) -> Result<Vec<String>>;

    /// Lists one table's column names in declaration order.
    async fn column_names(&self, table: &str) -> Result<Vec<String>>;

    /// The declared native type of one column.
    async fn column_type(&self, table: &str, column: &str) -> Result<String>;

    /// Whether one column accepts NULL.
    async fn column_nullable(&self, table: &str, column: &str) -> Result<bool>;
}

/// SQLite implementation of the metadata contract.
pub struct SqliteMetadata {
    pool: SqlitePool,
}

impl SqliteMetadata {
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SchemaMetadata for SqliteMetadata {
    async fn table_names(&self) -> Result<Vec<String>> {
        let rows: Vec<(String,)> = sqlx::query_as(
            "SELECT name FROM sqlite_master \
             WHERE type = 'table' AND name NOT LIKE 'sqlite_%' ORDER BY name",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.into_iter().map(|(name,)| name).collect())
    }

    async fn column_names(&self, table: &str) -> Result<Vec<String>> {
        let rows: Vec<(String,)> =
            sqlx::query_as("SELECT name FROM pragma_table_info(?) ORDER BY cid")
                .bind(table)
                .fetch_all(&self.pool)
                .await?;
        Ok(rows.into_iter().map(|(name,)| name).collect())
    }

    async fn column_type(&self, table: &str, column: &str) -> Result<String> {
        let row: Option<(String,)> =
            sqlx::query_as("SELECT \"type\" FROM pragma_table_info(?) WHERE name = ?")
                .bind(table)
                .bind(column)
                .fetch_optional(&self.pool)
                .await?;
        row.map(|(declared,)| declared)
            .ok_or_else(|| GenerateError::UnknownColumn {
                table: table.to_string(),
                column: column.to_string(),
            })
    }

    async fn column_nullable(&self, table: &str, column: &str) -> Result<bool> {
        let row: Option<(i64,)> =
            sqlx::query_as("SELECT \"notnull\" FROM pragma_table_info(?) WHERE name = ?")
                .bind(table)
                .bind(column)
                .fetch_optional(&self.pool)
                .await?;
        row.map(|(notnull,)| notnull == 0)
            .ok_or_else(|| GenerateError::UnknownColumn {
                table: table.to_string(),
                column: column.to_string(),
            })
    }
}

/// Builds the schema from live metadata.
///
/// Failures degrade per item: no table list means an empty schema, a
/// table whose columns cannot be listed becomes an empty table, and a
/// column whose type or nullability cannot be fetched is dropped.
/// Each failure is reported and the run continues.
pub async fn introspect_schema<M: SchemaMetadata>(metadata: &M) -> SchemaState {
    let mut state = SchemaState::new();

    let tables = match metadata.table_names().await {
        Ok(tables) => tables,
        Err(err) => {
            warn!("cannot list tables: {}", err);
            return state;
        }
    };

    for table in tables {
        let columns = match metadata.column_names(&table).await {
            Ok(columns) => columns,
            Err(err) => {
                warn!("cannot list columns of {}: {}", table, err);
                Vec::new()
            }
        };

        let mut definition = TableDefinition::new();
        for column in columns {
            let native = match metadata.column_type(&table, &column).await {
                Ok(native) => native,
                Err(err) => {
                    warn!("cannot read type of {}.{}: {}", table, column, err);
                    continue;
                }
            };
            let nullable = match metadata.column_nullable(&table, &column).await {
                Ok(nullable) => nullable,
                Err(err) => {
                    warn!("cannot read nullability of {}.{}: {}", table, column, err);
                    continue;
                }
            };

            let canonical = typemap::to_canonical(base_type(&native));
            debug!("{}.{}: {} -> {}", table, column, native, canonical);
            let mut definition_column = ColumnDefinition::new(column, canonical);
            definition_column.nullable = nullable;
            definition.upsert(definition_column);
        }
        state.insert_table(table, definition);
    }
    state
}

/// Strips a length suffix from a declared type: `VARCHAR(255)` →
/// `VARCHAR`.
fn base_type(declared: &str) -> &str {
    match declared.split_once('(') {
        Some((base, _)) => base.trim(),
        None => declared.trim(),
    }
}
