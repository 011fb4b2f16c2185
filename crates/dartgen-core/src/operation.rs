//! Schema-change operations.
//!
//! One [`Operation`] corresponds to one recognized top-level schema
//! call in a migration file. Replaying a sequence of operations in
//! order through [`crate::state::SchemaState`] reconstructs the final
//! schema.

use serde::{Deserialize, Serialize};

use crate::schema::ColumnDefinition;

/// A single alteration inside a `Schema::table` body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AlterAction {
    /// Add a column, or replace it if it already exists.
    Add(ColumnDefinition),
    /// Rename a column, keeping its type and nullability.
    Rename { from: String, to: String },
    /// Remove a column.
    Drop(String),
}

impl AlterAction {
    pub fn add(column: ColumnDefinition) -> Self {
        Self::Add(column)
    }

    pub fn rename(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self::Rename {
            from: from.into(),
            to: to.into(),
        }
    }

    pub fn drop(name: impl Into<String>) -> Self {
        Self::Drop(name.into())
    }
}

/// A top-level schema-change operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Operation {
    /// Define a table from scratch, replacing any previous definition.
    CreateTable {
        table: String,
        columns: Vec<ColumnDefinition>,
    },
    /// Mutate an existing table (created on the fly when unknown).
    AlterTable {
        table: String,
        actions: Vec<AlterAction>,
    },
    /// Remove a table. Unknown tables are ignored.
    DropTable { table: String },
}

impl Operation {
    pub fn create_table(table: impl Into<String>, columns: Vec<ColumnDefinition>) -> Self {
        Self::CreateTable {
            table: table.into(),
            columns,
        }
    }

    pub fn alter_table(table: impl Into<String>, actions: Vec<AlterAction>) -> Self {
        Self::AlterTable {
            table: table.into(),
            actions,
        }
    }

    pub fn drop_table(table: impl Into<String>) -> Self {
        Self::DropTable {
            table: table.into(),
        }
    }

    /// The table this operation targets.
    #[must_use]
    pub fn table(&self) -> &str {
        match self {
            Self::CreateTable { table, .. }
            | Self::AlterTable { table, .. }
            | Self::DropTable { table } => table,
        }
    }

    /// One-line description for progress output.
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Self::CreateTable { table, columns } => {
                format!("create table {} ({} columns)", table, columns.len())
            }
            Self::AlterTable { table, actions } => {
                format!("alter table {} ({} changes)", table, actions.len())
            }
            Self::DropTable { table } => format!("drop table {}", table),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn operations_expose_their_target_table() {
        let create = Operation::create_table("users", vec![]);
        let alter = Operation::alter_table("users", vec![AlterAction::drop("age")]);
        let drop = Operation::drop_table("users");

        assert_eq!(create.table(), "users");
        assert_eq!(alter.table(), "users");
        assert_eq!(drop.table(), "users");
    }

    #[test]
    fn describe_summarizes_the_operation() {
        let op = Operation::create_table(
            "posts",
            vec![
                ColumnDefinition::new("id", "increments"),
                ColumnDefinition::new("title", "string"),
            ],
        );

        assert_eq!(op.describe(), "create table posts (2 columns)");
    }
}
