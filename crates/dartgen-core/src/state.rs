//! Schema state reconstruction.
//!
//! [`SchemaState`] is the running result of replaying operations in
//! order: an insertion-ordered map from table name to its column set.
//! It is a plain value threaded through the run: built once by the
//! replay (or by introspection), then read once to drive emission.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::operation::{AlterAction, Operation};
use crate::schema::TableDefinition;

/// The reconstructed schema: table name → ordered column set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaState {
    tables: IndexMap<String, TableDefinition>,
}

impl SchemaState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replays a sequence of operations over an empty state.
    #[must_use]
    pub fn from_operations<'a, I>(operations: I) -> Self
    where
        I: IntoIterator<Item = &'a Operation>,
    {
        let mut state = Self::new();
        for operation in operations {
            state.apply(operation);
        }
        state
    }

    /// Applies one operation.
    ///
    /// `create` replaces any existing definition for the table;
    /// `alter` mutates in place, starting from an empty definition
    /// when the table is unknown; `drop` removes the entry, silently
    /// when absent.
    pub fn apply(&mut self, operation: &Operation) {
        debug!("applying: {}", operation.describe());
        match operation {
            Operation::CreateTable { table, columns } => {
                let mut definition = TableDefinition::new();
                for column in columns {
                    definition.upsert(column.clone());
                }
                self.tables.insert(table.clone(), definition);
            }
            Operation::AlterTable { table, actions } => {
                let definition = self.tables.entry(table.clone()).or_default();
                for action in actions {
                    match action {
                        AlterAction::Add(column) => definition.upsert(column.clone()),
                        AlterAction::Rename { from, to } => definition.rename_column(from, to),
                        AlterAction::Drop(name) => {
                            definition.drop_column(name);
                        }
                    }
                }
            }
            Operation::DropTable { table } => {
                self.tables.shift_remove(table);
            }
        }
    }

    /// Inserts a fully-built table definition, replacing any previous
    /// one. Used by the introspection path, which bypasses replay.
    pub fn insert_table(&mut self, name: impl Into<String>, definition: TableDefinition) {
        self.tables.insert(name.into(), definition);
    }

    #[must_use]
    pub fn table(&self, name: &str) -> Option<&TableDefinition> {
        self.tables.get(name)
    }

    /// Tables in definition order.
    pub fn tables(&self) -> impl Iterator<Item = (&str, &TableDefinition)> {
        self.tables.iter().map(|(name, def)| (name.as_str(), def))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}
